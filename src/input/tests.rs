use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::{Arc, Mutex};

use rppal::gpio::Level;

use super::backend::{DigitalInput, MockInput};
use super::error::InputError;
use super::handler::InputHandler;
use super::state::{ButtonState, JoystickState};
use crate::config::PinConfig;

/// Control surface of the scripted backend.
///
/// Shared with the test body so pin levels and faults can be changed while
/// the handler owns the backend.
#[derive(Debug, Clone, Default)]
struct PinScript {
    levels: Arc<Mutex<HashMap<u8, Level>>>,
    failing: Arc<Mutex<HashSet<u8>>>,
    released: Arc<Mutex<bool>>,
}

impl PinScript {
    fn set_level(&self, pin: u8, level: Level) {
        self.levels.lock().unwrap().insert(pin, level);
    }

    fn fail_pin(&self, pin: u8) {
        self.failing.lock().unwrap().insert(pin);
    }

    fn released(&self) -> bool {
        *self.released.lock().unwrap()
    }
}

/// Scripted digital input capability. Unscripted pins read the pull-up idle
/// level; pins marked failing error on configuration and on every read.
#[derive(Debug)]
struct ScriptedInput {
    script: PinScript,
    configured: HashSet<u8>,
}

impl DigitalInput for ScriptedInput {
    fn configure_pullup(&mut self, pin: u8) -> Result<(), InputError> {
        if self.script.failing.lock().unwrap().contains(&pin) {
            return Err(InputError::Gpio(rppal::gpio::Error::Io(io::Error::new(
                io::ErrorKind::Other,
                "injected configure fault",
            ))));
        }
        self.configured.insert(pin);
        Ok(())
    }

    fn level(&self, pin: u8) -> Result<Level, InputError> {
        if !self.configured.contains(&pin) {
            return Err(InputError::PinNotConfigured { pin });
        }
        if self.script.failing.lock().unwrap().contains(&pin) {
            return Err(InputError::Gpio(rppal::gpio::Error::Io(io::Error::new(
                io::ErrorKind::Other,
                "injected read fault",
            ))));
        }
        Ok(*self
            .script
            .levels
            .lock()
            .unwrap()
            .get(&pin)
            .unwrap_or(&Level::High))
    }

    fn release(&mut self) {
        *self.script.released.lock().unwrap() = true;
        self.configured.clear();
    }

    fn is_simulated(&self) -> bool {
        false
    }
}

fn scripted() -> (PinScript, Box<dyn DigitalInput>) {
    let script = PinScript::default();
    let backend = ScriptedInput {
        script: script.clone(),
        configured: HashSet::new(),
    };
    (script, Box::new(backend))
}

fn scripted_handler() -> (PinScript, InputHandler) {
    let (script, backend) = scripted();
    let handler = InputHandler::with_backend(PinConfig::default(), backend).unwrap();
    (script, handler)
}

fn degraded_handler() -> InputHandler {
    InputHandler::with_backend(PinConfig::default(), Box::new(MockInput::new())).unwrap()
}

#[test]
fn fresh_handler_reports_all_inputs_idle() {
    let (_script, handler) = scripted_handler();

    assert_eq!(handler.joystick_state(), JoystickState::default());
    assert_eq!(handler.button_state(), ButtonState::default());
}

#[test]
fn degraded_sampling_never_changes_state() {
    let mut handler = degraded_handler();
    assert!(handler.is_degraded());

    for _ in 0..3 {
        handler.sample().unwrap();
    }

    assert_eq!(handler.joystick_state(), JoystickState::default());
    assert_eq!(handler.button_state(), ButtonState::default());
}

#[test]
fn accessors_never_sample_or_mutate() {
    let (script, mut handler) = scripted_handler();
    let config = PinConfig::default();

    // The stick is already pushed up, but nothing has sampled it yet.
    script.set_level(config.up, Level::Low);
    assert_eq!(handler.joystick_state(), JoystickState::default());
    assert_eq!(handler.joystick_state(), JoystickState::default());

    handler.sample().unwrap();

    let first = handler.joystick_state();
    let second = handler.joystick_state();
    assert!(first.up);
    assert_eq!(first, second);
}

#[test]
fn grounded_direction_reads_active_after_sample() {
    let (script, mut handler) = scripted_handler();
    let config = PinConfig::default();

    script.set_level(config.up, Level::Low);
    handler.sample().unwrap();

    let joystick = handler.joystick_state();
    assert!(joystick.up);
    assert!(!joystick.down);
    assert!(!joystick.left);
    assert!(!joystick.right);
    assert!(!joystick.center);
    assert!(!handler.button_state().menu);
}

#[test]
fn released_direction_reads_idle_again() {
    let (script, mut handler) = scripted_handler();
    let config = PinConfig::default();

    script.set_level(config.up, Level::Low);
    handler.sample().unwrap();
    assert!(handler.joystick_state().up);

    script.set_level(config.up, Level::High);
    handler.sample().unwrap();
    assert!(!handler.joystick_state().up);
}

#[test]
fn menu_button_follows_active_low_convention() {
    let (script, mut handler) = scripted_handler();
    let config = PinConfig::default();

    script.set_level(config.menu, Level::Low);
    handler.sample().unwrap();
    assert!(handler.button_state().menu);

    script.set_level(config.menu, Level::High);
    handler.sample().unwrap();
    assert!(!handler.button_state().menu);
}

#[test]
fn center_press_and_menu_press_are_partitioned() {
    let (script, mut handler) = scripted_handler();
    let config = PinConfig::default();

    script.set_level(config.center, Level::Low);
    script.set_level(config.menu, Level::Low);
    handler.sample().unwrap();

    assert!(handler.joystick_state().center);
    assert!(handler.button_state().menu);
    assert!(!handler.joystick_state().up);
}

#[test]
fn read_fault_propagates_and_leaves_snapshots_unchanged() {
    let (script, mut handler) = scripted_handler();
    let config = PinConfig::default();

    script.set_level(config.up, Level::Low);
    handler.sample().unwrap();
    assert!(handler.joystick_state().up);

    // The stick springs back, but the menu pin starts failing before the
    // next sample completes.
    script.set_level(config.up, Level::High);
    script.fail_pin(config.menu);

    let result = handler.sample();
    assert!(matches!(result, Err(InputError::Gpio(_))));
    assert!(handler.joystick_state().up);
    assert!(!handler.button_state().menu);
}

#[test]
fn construction_fails_when_a_pin_cannot_be_configured() {
    let (script, backend) = scripted();
    script.fail_pin(PinConfig::default().menu);

    let result = InputHandler::with_backend(PinConfig::default(), backend);

    assert!(matches!(result, Err(InputError::Gpio(_))));
}

#[test]
fn unconfigured_pin_read_is_a_lookup_error() {
    let mock = MockInput::new();

    let result = mock.level(99);

    assert!(matches!(
        result,
        Err(InputError::PinNotConfigured { pin: 99 })
    ));
}

#[test]
fn mock_configured_pins_read_the_idle_level() {
    let mut mock = MockInput::new();
    mock.configure_pullup(4).unwrap();

    assert_eq!(mock.level(4).unwrap(), Level::High);
}

#[test]
fn cleanup_releases_the_backend() {
    let (script, handler) = scripted_handler();

    handler.cleanup();

    assert!(script.released());
}

#[test]
fn cleanup_in_degraded_mode_is_quiet() {
    let mut handler = degraded_handler();
    handler.sample().unwrap();

    handler.cleanup();
}

#[test]
fn default_wiring_scenario_without_hardware() {
    let mut handler = degraded_handler();

    assert!(handler.is_degraded());
    handler.sample().unwrap();
    handler.sample().unwrap();

    let joystick = handler.joystick_state();
    assert!(!joystick.up && !joystick.down && !joystick.left && !joystick.right);
    assert!(!joystick.center);
    assert!(!handler.button_state().menu);
}
