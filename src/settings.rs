//! Player preferences
//!
//! Persisted as JSON through an injected [`SettingsStore`] (LocalStorage in
//! the browser). Missing fields take defaults, out-of-range values are
//! clamped, and anything unreadable falls back to defaults. Loading never
//! fails.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::drill::{DrillConfig, InputMode, ModeSet};
use crate::error::DrillError;

/// Key/value persistence for the settings record
pub trait SettingsStore {
    /// Stored JSON, if any
    fn load_raw(&self) -> Option<String>;
    fn save_raw(&mut self, json: &str);
}

/// In-memory store (native runs and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(json: impl Into<String>) -> Self {
        Self {
            value: Some(json.into()),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load_raw(&self) -> Option<String> {
        self.value.clone()
    }

    fn save_raw(&mut self, json: &str) {
        self.value = Some(json.to_string());
    }
}

/// Drill settings, stored under the same field names the setup screen uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DrillSettings {
    /// Problems per session
    #[serde(rename = "count")]
    pub problem_count: u32,
    /// Allowed input modes (never empty)
    pub modes: ModeSet,
    /// Per-question countdown on/off
    pub countdown_enabled: bool,
    /// Countdown length in seconds
    pub countdown_seconds: u32,
}

impl Default for DrillSettings {
    fn default() -> Self {
        Self {
            problem_count: 20,
            modes: ModeSet::default(),
            countdown_enabled: false,
            countdown_seconds: 10,
        }
    }
}

impl DrillSettings {
    /// LocalStorage key
    pub const STORAGE_KEY: &'static str = "math_game_settings";

    /// Parse a stored record, recovering from anything malformed
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<DrillSettings>(json) {
            Ok(mut settings) => {
                settings.sanitize();
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Load from a store; absent or corrupt data yields defaults
    pub fn load<S: SettingsStore + ?Sized>(store: &S) -> Self {
        match store.load_raw() {
            Some(json) => {
                let settings = Self::from_json(&json);
                log::info!("Loaded settings: {} problems", settings.problem_count);
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save<S: SettingsStore + ?Sized>(&self, store: &mut S) {
        match serde_json::to_string(self) {
            Ok(json) => {
                store.save_raw(&json);
                log::info!("Settings saved");
            }
            Err(e) => log::warn!("Failed to serialize settings: {e}"),
        }
    }

    /// Clamp every field into its allowed range
    pub fn sanitize(&mut self) {
        self.problem_count = self.problem_count.clamp(MIN_PROBLEM_COUNT, MAX_PROBLEM_COUNT);
        self.countdown_seconds = self
            .countdown_seconds
            .clamp(MIN_COUNTDOWN_SECS, MAX_COUNTDOWN_SECS);
    }

    /// Step the problem count (setup screen +/- buttons)
    pub fn adjust_count(&mut self, delta: i32) {
        self.problem_count = step_clamped(self.problem_count, delta, MIN_PROBLEM_COUNT, MAX_PROBLEM_COUNT);
    }

    /// Step the countdown length
    pub fn adjust_countdown_seconds(&mut self, delta: i32) {
        self.countdown_seconds =
            step_clamped(self.countdown_seconds, delta, MIN_COUNTDOWN_SECS, MAX_COUNTDOWN_SECS);
    }

    /// Enable or disable a mode; the last enabled mode stays on
    pub fn toggle_mode(&mut self, mode: InputMode) -> bool {
        self.modes.toggle(mode)
    }

    pub fn toggle_countdown(&mut self) {
        self.countdown_enabled = !self.countdown_enabled;
    }

    /// Session configuration for these settings
    pub fn to_config(&self) -> Result<DrillConfig, DrillError> {
        DrillConfig::new(
            self.problem_count,
            self.modes.clone(),
            self.countdown_enabled.then_some(self.countdown_seconds),
        )
    }
}

fn step_clamped(value: u32, delta: i32, min: u32, max: u32) -> u32 {
    (i64::from(value) + i64::from(delta)).clamp(i64::from(min), i64::from(max)) as u32
}
