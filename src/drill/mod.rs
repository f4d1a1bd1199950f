//! Deterministic drill engine
//!
//! All game logic lives here. This module must stay pure:
//! - Randomness only through an injected `RandomSource`
//! - Timers advanced explicitly by `Session::tick`
//! - No rendering, audio or platform dependencies

pub mod chapter;
pub mod generator;
pub mod options;
pub mod outcome;
pub mod problem;
pub mod queue;
pub mod rng;
pub mod session;
pub mod view;

pub use chapter::Chapter;
pub use generator::{FRUITS, generate};
pub use options::{Key, choice_options, distractors, keypad};
pub use outcome::{EffectMode, Outcome, PerformanceTier};
pub use problem::{AnswerKind, InputMode, Problem, Relation, Solution};
pub use queue::{ModeBlock, ModeSet, assign_blocks, build};
pub use rng::{RandomSource, ScriptedRng, SeededRng};
pub use session::{DrillConfig, Phase, Session, Submission, normalize_answer};
pub use view::{
    AudioCue, CountdownLevel, CountdownView, CuePlayer, DrillEvent, FeedbackView, QuestionView,
    play_cues,
};
