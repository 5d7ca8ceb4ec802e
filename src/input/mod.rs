//! Joystick and button input over pull-up GPIO pins
//!
//! One handler, one capability seam:
//!
//! 1. [`backend`] - digital input capability, real or simulated
//! 2. [`handler`] - pin configuration, sampling, state accessors, cleanup
//! 3. [`state`] - the sampled snapshots callers receive
//!
//! # Architecture
//!
//! ```text
//! Pins ──► DigitalInput ──► InputHandler ──► JoystickState / ButtonState
//!          (GPIO or mock)   (sample())       (copied snapshots)
//! ```
//!
//! Pins are pulled high, so the handler inverts every reading: a grounded
//! (pressed) pin is reported as active.

pub mod backend;
pub mod error;
pub mod handler;
pub mod state;

pub use backend::{detect, DigitalInput, GpioInput, MockInput};
pub use error::InputError;
pub use handler::InputHandler;
pub use state::{ButtonState, JoystickState};

#[cfg(test)]
mod tests;
