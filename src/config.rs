//! Pin configuration: which BCM pin each logical input is wired to.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

const CONFIG_DIR: &str = ".config/gpiopad";
const PIN_CONFIG_FILE: &str = "pins.toml";

/// Errors raised while loading a pin configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read pin configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse pin configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Mapping from the six logical input names to BCM pin numbers.
///
/// Supplied once at handler construction and immutable afterwards. Every
/// field is required when deserializing, so a wiring file that omits an input
/// fails to parse instead of silently configuring fewer pins.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PinConfig {
    pub up: u8,
    pub down: u8,
    pub left: u8,
    pub right: u8,
    pub center: u8,
    pub menu: u8,
}

impl Default for PinConfig {
    /// The reference wiring of the joystick hat.
    fn default() -> Self {
        Self {
            up: 17,
            down: 22,
            left: 23,
            right: 27,
            center: 4,
            menu: 5,
        }
    }
}

impl PinConfig {
    /// All six BCM pin numbers, in a fixed order, for bulk configuration.
    pub fn pins(&self) -> [u8; 6] {
        [
            self.up,
            self.down,
            self.left,
            self.right,
            self.center,
            self.menu,
        ]
    }

    /// Default location of the pin configuration file.
    pub fn default_path() -> PathBuf {
        let mut path = get_home_dir();
        path.push(CONFIG_DIR);
        path.push(PIN_CONFIG_FILE);
        path
    }

    /// Loads a pin configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Loads the configuration at `path`, falling back to the default wiring
    /// when the file does not exist. A file that exists but cannot be read or
    /// parsed is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let config = Self::load(path)?;
            info!("Loaded pin configuration from {}", path.display());
            Ok(config)
        } else {
            warn!(
                "Pin configuration file {} does not exist, using default wiring",
                path.display()
            );
            Ok(Self::default())
        }
    }
}

fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| {
        warn!("Could not determine home directory, using current directory");
        PathBuf::from(".")
    })
}
