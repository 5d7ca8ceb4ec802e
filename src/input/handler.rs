//! The input handler: owns the pin configuration, the digital input backend
//! and the most recent state snapshots.

use rppal::gpio::Level;
use tracing::{debug, info};

use super::backend::{self, DigitalInput};
use super::error::InputError;
use super::state::{ButtonState, JoystickState};
use crate::config::PinConfig;

/// Samples a five-way joystick and a menu button wired to pull-up GPIO pins.
///
/// The handler is synchronous and single-owner: one caller drives
/// construction, [`sample`](Self::sample), the state accessors and
/// [`cleanup`](Self::cleanup) in sequence. It holds no locks; callers that
/// share it across threads bring their own mutual exclusion.
///
/// State is only ever written by `sample`. The accessors return copies of the
/// latest snapshots and never touch the pins, so a caller that wants fresh
/// data samples first and reads second.
#[derive(Debug)]
pub struct InputHandler {
    config: PinConfig,
    backend: Box<dyn DigitalInput>,
    joystick: JoystickState,
    buttons: ButtonState,
}

impl InputHandler {
    /// Creates a handler for the current host.
    ///
    /// Detects the digital input capability (real GPIO on a Pi, simulated
    /// pins elsewhere) and configures all six pins from `config` as pull-up
    /// inputs. Capability unavailability is not an error; failing to acquire
    /// a pin on real hardware is, and propagates.
    pub fn new(config: PinConfig) -> Result<Self, InputError> {
        Self::with_backend(config, backend::detect())
    }

    /// Creates a handler on an explicitly supplied backend.
    ///
    /// This is the injection seam [`new`](Self::new) goes through; tests use
    /// it to substitute a scripted capability.
    pub fn with_backend(
        config: PinConfig,
        mut backend: Box<dyn DigitalInput>,
    ) -> Result<Self, InputError> {
        for pin in config.pins() {
            backend.configure_pullup(pin)?;
        }
        info!(
            "Input handler ready: {} pins configured, simulated: {}",
            config.pins().len(),
            backend.is_simulated()
        );
        Ok(Self {
            config,
            backend,
            joystick: JoystickState::default(),
            buttons: ButtonState::default(),
        })
    }

    /// Samples all six pins and replaces both snapshots wholesale.
    ///
    /// A grounded pin reads low and is stored as active (pull-up convention).
    /// On a simulated backend every pin reads idle, so the stored state stays
    /// all-false. A backend error propagates and leaves both snapshots
    /// unchanged.
    pub fn sample(&mut self) -> Result<(), InputError> {
        let joystick = JoystickState {
            up: self.read_active(self.config.up)?,
            down: self.read_active(self.config.down)?,
            left: self.read_active(self.config.left)?,
            right: self.read_active(self.config.right)?,
            center: self.read_active(self.config.center)?,
        };
        let buttons = ButtonState {
            menu: self.read_active(self.config.menu)?,
        };

        debug!(
            "Sampled inputs: joystick={:?} buttons={:?}",
            joystick, buttons
        );
        self.joystick = joystick;
        self.buttons = buttons;
        Ok(())
    }

    fn read_active(&self, pin: u8) -> Result<bool, InputError> {
        Ok(self.backend.level(pin)? == Level::Low)
    }

    /// Returns a copy of the joystick snapshot from the last `sample` call.
    pub fn joystick_state(&self) -> JoystickState {
        self.joystick
    }

    /// Returns a copy of the button snapshot from the last `sample` call.
    pub fn button_state(&self) -> ButtonState {
        self.buttons
    }

    /// True when the handler runs on simulated pins instead of real GPIO.
    pub fn is_degraded(&self) -> bool {
        self.backend.is_simulated()
    }

    /// Consumes the handler and releases all configured pins.
    ///
    /// On real hardware the pins are reset to their previous mode so other
    /// processes may reuse them; on simulated pins this is a no-op. Taking
    /// the handler by value makes a second cleanup, or sampling after
    /// cleanup, impossible.
    pub fn cleanup(mut self) {
        info!("Releasing input pins");
        self.backend.release();
    }
}
