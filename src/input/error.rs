//! Error definitions for the input module.

use thiserror::Error;

/// Errors raised by the input handler and its pin backends.
#[derive(Debug, Error)]
pub enum InputError {
    /// Failure reported by the GPIO peripheral (pin acquisition, permissions,
    /// I/O faults). Propagated as-is, nothing in this crate retries.
    #[error("GPIO error: {0}")]
    Gpio(#[from] rppal::gpio::Error),

    /// A level read referenced a pin that was never configured as an input.
    #[error("BCM pin {pin} is not configured as an input")]
    PinNotConfigured { pin: u8 },
}
