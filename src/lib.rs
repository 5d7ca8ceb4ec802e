//! gpiopad - joystick and button input over Raspberry Pi GPIO.
//!
//! Reads a five-way joystick and a menu button wired to pull-up pins,
//! substituting a simulated backend on hosts without a GPIO peripheral so
//! the same code runs on and off the Pi. Sampling is explicit and
//! synchronous: call [`InputHandler::sample`], then read the snapshots.

pub mod config;
pub mod input;

// Re-exports for easier access
pub use config::{ConfigError, PinConfig};
pub use input::{ButtonState, DigitalInput, InputError, InputHandler, JoystickState};
