//! What the presentation layer needs from a session
//!
//! The session never touches the page. It hands out [`QuestionView`]s and
//! [`DrillEvent`]s; a thin adapter turns those into DOM updates and sounds.

use serde::Serialize;

use super::options::Key;
use super::outcome::{Outcome, PerformanceTier};
use super::problem::{AnswerKind, InputMode};
use crate::consts::{COUNTDOWN_DANGER, COUNTDOWN_WARNING};

/// Countdown bar color band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CountdownLevel {
    Calm,
    Warning,
    Danger,
}

impl CountdownLevel {
    pub fn from_remaining(secs: f32) -> Self {
        if secs <= COUNTDOWN_DANGER {
            CountdownLevel::Danger
        } else if secs <= COUNTDOWN_WARNING {
            CountdownLevel::Warning
        } else {
            CountdownLevel::Calm
        }
    }
}

/// Countdown display state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CountdownView {
    pub remaining: f32,
    /// Fraction of the bar still filled (1.0 at question start)
    pub fraction: f32,
    pub level: CountdownLevel,
}

/// Everything needed to render the current question
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionView {
    pub index: usize,
    pub total: usize,
    /// `index / total`, for the progress bar
    pub progress: f32,
    pub text: String,
    pub rich_text: Option<String>,
    pub kind: AnswerKind,
    pub input_mode: InputMode,
    /// Choice mode only
    pub options: Vec<String>,
    /// Entry mode only
    pub keypad: Vec<String>,
    pub pending_input: String,
    pub countdown: Option<CountdownView>,
    /// Set once the question has been answered
    pub feedback: Option<FeedbackView>,
}

/// Feedback overlay content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackView {
    pub outcome: Outcome,
    pub title: &'static str,
    pub detail: String,
}

impl FeedbackView {
    pub fn new(outcome: Outcome, canonical_answer: &str) -> Self {
        Self {
            outcome,
            title: outcome.title(),
            detail: outcome.detail(canonical_answer),
        }
    }
}

pub(crate) fn keypad_labels(keys: &[Key]) -> Vec<String> {
    keys.iter().map(Key::label).collect()
}

/// Notifications emitted by the session state machine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrillEvent {
    QuestionPresented { index: usize, total: usize },
    Answered {
        index: usize,
        outcome: Outcome,
        canonical_answer: String,
    },
    SessionEnded {
        score: u32,
        total: u32,
        tier: PerformanceTier,
    },
}

impl DrillEvent {
    /// Sound to play for this event, if any
    pub fn cue(&self) -> Option<AudioCue> {
        match self {
            DrillEvent::QuestionPresented { .. } => None,
            DrillEvent::Answered { outcome, .. } => Some(if outcome.is_correct() {
                AudioCue::Correct
            } else {
                AudioCue::Wrong
            }),
            DrillEvent::SessionEnded { tier, .. } => Some(match tier {
                PerformanceTier::Perfect | PerformanceTier::Excellent => AudioCue::Complete,
                PerformanceTier::Good => AudioCue::Mid,
                PerformanceTier::KeepTrying => AudioCue::Failed,
            }),
        }
    }
}

/// Sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AudioCue {
    Correct,
    Wrong,
    Complete,
    Mid,
    Failed,
}

impl AudioCue {
    /// Id of the `<audio>` element that plays this cue
    pub fn element_id(&self) -> &'static str {
        match self {
            AudioCue::Correct => "audio-right",
            AudioCue::Wrong => "audio-wrong",
            AudioCue::Complete => "audio-complete",
            AudioCue::Mid => "audio-mid",
            AudioCue::Failed => "audio-failed",
        }
    }
}

/// Audio collaborator; playback is fire-and-forget
pub trait CuePlayer {
    fn play(&mut self, cue: AudioCue);
}

/// Play the cues for a batch of events, in order
pub fn play_cues<P: CuePlayer + ?Sized>(events: &[DrillEvent], player: &mut P) {
    for cue in events.iter().filter_map(DrillEvent::cue) {
        player.play(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<AudioCue>);

    impl CuePlayer for Recorder {
        fn play(&mut self, cue: AudioCue) {
            self.0.push(cue);
        }
    }

    #[test]
    fn test_countdown_levels() {
        assert_eq!(CountdownLevel::from_remaining(10.0), CountdownLevel::Calm);
        assert_eq!(CountdownLevel::from_remaining(5.0), CountdownLevel::Warning);
        assert_eq!(CountdownLevel::from_remaining(3.5), CountdownLevel::Warning);
        assert_eq!(CountdownLevel::from_remaining(3.0), CountdownLevel::Danger);
        assert_eq!(CountdownLevel::from_remaining(0.0), CountdownLevel::Danger);
    }

    #[test]
    fn test_cues_for_events() {
        let events = vec![
            DrillEvent::QuestionPresented { index: 0, total: 10 },
            DrillEvent::Answered {
                index: 0,
                outcome: Outcome::TimeUp,
                canonical_answer: "7".into(),
            },
            DrillEvent::Answered {
                index: 1,
                outcome: Outcome::Correct,
                canonical_answer: "3".into(),
            },
            DrillEvent::SessionEnded {
                score: 7,
                total: 10,
                tier: PerformanceTier::Good,
            },
        ];
        let mut recorder = Recorder::default();
        play_cues(&events, &mut recorder);
        assert_eq!(recorder.0, vec![AudioCue::Wrong, AudioCue::Correct, AudioCue::Mid]);
    }
}
