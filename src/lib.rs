//! Math Drill - arithmetic practice game for young learners
//!
//! Core modules:
//! - `drill`: Deterministic engine (problem generation, queue building, session state machine)
//! - `fx`: End-of-session particle effects (fireworks and rain)
//! - `settings`: Persisted player preferences with safe fallbacks
//! - `platform`: Browser bindings (canvas surface, LocalStorage)

pub mod drill;
pub mod error;
pub mod fx;
pub mod platform;
pub mod settings;

pub use drill::{Chapter, DrillConfig, Problem, Session};
pub use error::DrillError;
pub use settings::DrillSettings;

/// Engine configuration constants
pub mod consts {
    /// Allowed session lengths
    pub const MIN_PROBLEM_COUNT: u32 = 10;
    pub const MAX_PROBLEM_COUNT: u32 = 100;

    /// Allowed countdown durations (seconds)
    pub const MIN_COUNTDOWN_SECS: u32 = 5;
    pub const MAX_COUNTDOWN_SECS: u32 = 60;

    /// Block randomization run lengths for mixed input modes
    pub const MIN_MODE_BLOCK: u32 = 4;
    pub const MAX_MODE_BLOCK: u32 = 8;

    /// Number of options shown in multiple-choice mode
    pub const CHOICE_OPTION_COUNT: usize = 4;
    /// Keypad entry is capped at three digits (answers never exceed 100)
    pub const MAX_ENTRY_DIGITS: usize = 3;

    /// Feedback overlay stays up this long before advancing (seconds)
    pub const FEEDBACK_DELAY: f32 = 0.8;
    /// Pause between hiding feedback and presenting the next question (seconds)
    pub const TRANSITION_DELAY: f32 = 0.3;
    /// Countdown thresholds for the warning/danger bar colors (seconds)
    pub const COUNTDOWN_WARNING: f32 = 5.0;
    pub const COUNTDOWN_DANGER: f32 = 3.0;

    /// Fixed particle timestep (60 Hz, one animation frame)
    pub const FX_DT: f32 = 1.0 / 60.0;
    /// Maximum particle substeps per frame to prevent spiral of death
    pub const MAX_FX_SUBSTEPS: u32 = 8;
}
