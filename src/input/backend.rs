//! Platform capability boundary for digital pin input.
//!
//! The handler never talks to the GPIO peripheral directly; it goes through
//! the [`DigitalInput`] trait, for which two implementations exist:
//!
//! 1. [`GpioInput`] - real pins via the Raspberry Pi GPIO peripheral
//! 2. [`MockInput`] - no-op stand-in for hosts without one
//!
//! [`detect`] picks between them once, at construction time. Call sites are
//! identical for both, so nothing downstream ever inspects which one it got.

use std::collections::{HashMap, HashSet};
use std::fmt;

use rppal::gpio::{Gpio, InputPin, Level};
use tracing::{debug, info, trace, warn};

use super::error::InputError;

/// Digital-I/O collaborator the input handler samples through.
///
/// Pins are addressed by BCM number throughout. A pin must be configured
/// before its level can be read; reading an unconfigured pin is a lookup
/// error on every implementation.
pub trait DigitalInput: fmt::Debug + Send {
    /// Configures `pin` as an input with pull-up biasing enabled.
    fn configure_pullup(&mut self, pin: u8) -> Result<(), InputError>;

    /// Reads the instantaneous logic level of a configured pin.
    fn level(&self, pin: u8) -> Result<Level, InputError>;

    /// Undoes all pin configuration so other processes may reuse the pins.
    fn release(&mut self);

    /// True for stand-ins that have no real hardware behind them.
    fn is_simulated(&self) -> bool;
}

/// Selects the digital input capability for the current host.
///
/// A usable GPIO peripheral yields [`GpioInput`]; anything else (non-Pi
/// hardware, missing `/dev/gpiomem`, permissions) yields [`MockInput`].
/// Unavailability is never an error, it is logged once and degraded mode is
/// adopted.
pub fn detect() -> Box<dyn DigitalInput> {
    match Gpio::new() {
        Ok(gpio) => {
            info!("GPIO peripheral available, using hardware pins");
            Box::new(GpioInput::new(gpio))
        }
        Err(e) => {
            warn!("No usable GPIO peripheral ({}), using simulated pins", e);
            Box::new(MockInput::new())
        }
    }
}

/// Pin input backed by the Raspberry Pi GPIO peripheral.
///
/// Holds every configured pin for its whole lifetime. Released pins are reset
/// to their previous mode, which also happens implicitly on drop.
#[derive(Debug)]
pub struct GpioInput {
    gpio: Gpio,
    pins: HashMap<u8, InputPin>,
}

impl GpioInput {
    pub fn new(gpio: Gpio) -> Self {
        Self {
            gpio,
            pins: HashMap::new(),
        }
    }
}

impl DigitalInput for GpioInput {
    fn configure_pullup(&mut self, pin: u8) -> Result<(), InputError> {
        let input = self.gpio.get(pin)?.into_input_pullup();
        debug!("Configured BCM pin {} as pull-up input", pin);
        self.pins.insert(pin, input);
        Ok(())
    }

    fn level(&self, pin: u8) -> Result<Level, InputError> {
        let input = self
            .pins
            .get(&pin)
            .ok_or(InputError::PinNotConfigured { pin })?;
        Ok(input.read())
    }

    fn release(&mut self) {
        debug!("Releasing {} GPIO pins", self.pins.len());
        self.pins.clear();
    }

    fn is_simulated(&self) -> bool {
        false
    }
}

/// No-op stand-in used when no GPIO peripheral is available, typically during
/// development off the Pi.
///
/// Configured pins always read [`Level::High`], the idle level of a pull-up
/// input, so state sampled through this backend stays at its all-false
/// default.
#[derive(Debug, Default)]
pub struct MockInput {
    pins: HashSet<u8>,
}

impl MockInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DigitalInput for MockInput {
    fn configure_pullup(&mut self, pin: u8) -> Result<(), InputError> {
        debug!("Simulated pull-up configuration of BCM pin {}", pin);
        self.pins.insert(pin);
        Ok(())
    }

    fn level(&self, pin: u8) -> Result<Level, InputError> {
        if !self.pins.contains(&pin) {
            return Err(InputError::PinNotConfigured { pin });
        }
        trace!("Simulated read of BCM pin {}: reporting idle level", pin);
        Ok(Level::High)
    }

    fn release(&mut self) {
        self.pins.clear();
    }

    fn is_simulated(&self) -> bool {
        true
    }
}
