// Configuration management
//
// A small TOML-backed settings file for the core itself. The presentation
// layer's settings (video scale, audio volume, hotkeys) belong to whatever
// collaborator renders the framebuffer, not to this crate.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

const CONFIG_FILE: &str = "nescore_config.toml";

/// Configuration consumed by the core itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Emit a trace line (see [`crate::cpu::Cpu::trace`]) for every executed instruction.
    pub trace_enabled: bool,

    /// Upper bound on frames run by a headless caller (e.g. the smoke-test
    /// binary); `None` means run until the cartridge halts or the caller stops.
    pub max_frames: Option<u64>,

    /// `tracing_subscriber::EnvFilter` directive string, e.g. `"info"` or `"nescore=debug"`.
    pub log_filter: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        CoreConfig {
            trace_enabled: false,
            max_frames: None,
            log_filter: "info".to_string(),
        }
    }
}

impl CoreConfig {
    /// Load configuration from [`CONFIG_FILE`], or fall back to defaults and
    /// persist them so the file exists for the next run.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| {
            let config = Self::default();
            let _ = config.save();
            config
        })
    }

    pub fn load() -> Result<Self, io::Error> {
        let contents = fs::read_to_string(CONFIG_FILE)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save(&self) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(CONFIG_FILE, contents)
    }
}
