use color_eyre::{eyre::eyre, Result};
use gpiopad::config::PinConfig;
use gpiopad::input::InputHandler;
use std::thread;
use std::time::Duration;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Poll cadence of the demonstration loop.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Sampling cycles shown before exiting when no hardware is present, since
/// simulated state can never change.
const DEGRADED_DEMO_CYCLES: u32 = 5;

fn main() -> Result<()> {
    setup()?;

    info!("Loading pin configuration");
    let config = PinConfig::load_or_default(&PinConfig::default_path())
        .map_err(|e| eyre!("Failed to load pin configuration: {}", e))?;
    info!("Pin configuration: {:?}", config);

    let mut handler =
        InputHandler::new(config).map_err(|e| eyre!("Failed to initialize input handler: {}", e))?;
    if handler.is_degraded() {
        warn!("Running without GPIO hardware, input state will stay idle");
    } else {
        info!("Sampling inputs, press the menu button to exit");
    }

    let mut last_joystick = handler.joystick_state();
    let mut last_buttons = handler.button_state();
    let mut cycles = 0u32;

    loop {
        handler.sample()?;

        let joystick = handler.joystick_state();
        let buttons = handler.button_state();
        if joystick != last_joystick || buttons != last_buttons {
            info!("Input change: joystick={:?} buttons={:?}", joystick, buttons);
            last_joystick = joystick;
            last_buttons = buttons;
        }

        if buttons.menu {
            info!("Menu button pressed, shutting down");
            break;
        }

        if handler.is_degraded() {
            cycles += 1;
            if cycles >= DEGRADED_DEMO_CYCLES {
                info!(
                    "Nothing to sample without hardware, stopping after {} cycles",
                    cycles
                );
                break;
            }
        }

        thread::sleep(POLL_INTERVAL);
    }

    handler.cleanup();
    Ok(())
}

fn setup() -> Result<()> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    setup_logging_env();
    Ok(())
}

fn setup_logging_env() {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .pretty()
        .init();
}
