//! Configuration errors for the drill engine.

use thiserror::Error;

/// Errors raised while constructing a drill (chapter lookup, queue building,
/// session configuration).
///
/// These are programming or configuration mistakes. The settings layer clamps
/// user-facing values before they get here, so none of them should ever reach
/// the player.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DrillError {
    #[error("unknown chapter id {0}")]
    UnknownChapter(i32),

    #[error("problem count {0} is outside {min}..={max}", min = crate::consts::MIN_PROBLEM_COUNT, max = crate::consts::MAX_PROBLEM_COUNT)]
    CountOutOfRange(u32),

    #[error("at least one input mode must be allowed")]
    EmptyModeSet,

    #[error("countdown of {0}s is outside {min}..={max}", min = crate::consts::MIN_COUNTDOWN_SECS, max = crate::consts::MAX_COUNTDOWN_SECS)]
    CountdownOutOfRange(u32),
}
