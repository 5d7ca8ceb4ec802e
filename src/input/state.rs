//! Sampled input state snapshots.
//!
//! Both snapshots are plain value types: the handler owns the live copies and
//! the accessors hand out `Copy` duplicates, so a snapshot taken by a caller
//! never changes under it when sampling continues.

/// State of the five-way joystick at the last sample.
///
/// A direction is `true` while its pin reads low, i.e. while the stick is
/// pushed against the pull-up bias. Defaults to all directions idle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JoystickState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub center: bool,
}

/// State of the standalone buttons at the last sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub menu: bool,
}
