//! Session state machine
//!
//! Drives one drill from the first question to the result screen:
//!
//! ```text
//! Presenting(i) -> AwaitingAnswer(i) -> Locked(i) -> Feedback(i) -> Presenting(i+1) | Ended
//! ```
//!
//! Timers (countdown, feedback auto-advance, transition delay) are stored in
//! the phase that owns them. Replacing the phase drops its timer, so a stale
//! timer can never fire into a later question or a stopped session.

use super::chapter::Chapter;
use super::options::{Key, choice_options, keypad};
use super::outcome::{Outcome, PerformanceTier};
use super::problem::{InputMode, Problem, Relation, Solution};
use super::queue::{ModeSet, build, validate_count};
use super::rng::{RandomSource, SeededRng};
use super::view::{CountdownLevel, CountdownView, DrillEvent, FeedbackView, QuestionView, keypad_labels};
use crate::consts::*;
use crate::error::DrillError;

/// Validated session configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DrillConfig {
    /// Number of problems, within `MIN_PROBLEM_COUNT..=MAX_PROBLEM_COUNT`
    pub count: u32,
    pub modes: ModeSet,
    /// Per-question time limit in seconds, `None` for untimed
    pub countdown_secs: Option<u32>,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            count: 20,
            modes: ModeSet::default(),
            countdown_secs: None,
        }
    }
}

impl DrillConfig {
    pub fn new(count: u32, modes: ModeSet, countdown_secs: Option<u32>) -> Result<Self, DrillError> {
        validate_count(count)?;
        if let Some(secs) = countdown_secs
            && !(MIN_COUNTDOWN_SECS..=MAX_COUNTDOWN_SECS).contains(&secs)
        {
            return Err(DrillError::CountdownOutOfRange(secs));
        }
        Ok(Self {
            count,
            modes,
            countdown_secs,
        })
    }
}

/// A submitted answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Value(String),
    /// The countdown ran out; always scored incorrect
    Timeout,
}

/// Current state machine phase
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Waiting `delay` seconds before showing question `index`
    Presenting { index: usize, delay: f32 },
    /// Question shown, input accepted
    AwaitingAnswer { index: usize, countdown: Option<f32> },
    /// Answer received, being evaluated
    Locked { index: usize },
    /// Showing the result for `auto_advance` more seconds
    Feedback {
        index: usize,
        outcome: Outcome,
        auto_advance: f32,
    },
    /// All questions answered
    Ended { tier: PerformanceTier },
    /// Torn down before completion
    Stopped,
}

impl Phase {
    /// Question index this phase refers to
    pub fn index(&self) -> Option<usize> {
        match self {
            Phase::Presenting { index, .. }
            | Phase::AwaitingAnswer { index, .. }
            | Phase::Locked { index }
            | Phase::Feedback { index, .. } => Some(*index),
            Phase::Ended { .. } | Phase::Stopped => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Ended { .. } | Phase::Stopped)
    }
}

/// One drill session
#[derive(Debug, Clone)]
pub struct Session<R = SeededRng> {
    queue: Vec<Problem>,
    current_index: usize,
    score: u32,
    /// Guards against scoring the current question twice
    locked: bool,
    /// Keypad input for the current question
    pending_input: String,
    /// Choice-mode options for the current question
    options: Vec<String>,
    countdown_secs: Option<f32>,
    phase: Phase,
    events: Vec<DrillEvent>,
    rng: R,
}

impl<R: RandomSource> Session<R> {
    /// Build a queue for `chapter` and start a session over it
    pub fn start(chapter: Chapter, config: &DrillConfig, mut rng: R) -> Result<Self, DrillError> {
        let queue = build(chapter, config.count, &config.modes, &mut rng)?;
        log::info!(
            "Starting {} session: {} problems, countdown {:?}",
            chapter.title(),
            queue.len(),
            config.countdown_secs
        );
        Ok(Self::from_queue(queue, config.countdown_secs, rng))
    }

    /// Start a session over a prepared queue
    pub fn from_queue(queue: Vec<Problem>, countdown_secs: Option<u32>, rng: R) -> Self {
        Self {
            queue,
            current_index: 0,
            score: 0,
            locked: false,
            pending_input: String::new(),
            options: Vec::new(),
            countdown_secs: countdown_secs.map(|s| s as f32),
            phase: Phase::Presenting { index: 0, delay: 0.0 },
            events: Vec::new(),
            rng,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn queue(&self) -> &[Problem] {
        &self.queue
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> usize {
        self.queue.len()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn current_problem(&self) -> Option<&Problem> {
        self.queue.get(self.current_index)
    }

    /// Fraction of the session completed, for the progress bar
    pub fn progress(&self) -> f32 {
        if self.queue.is_empty() {
            return 1.0;
        }
        self.current_index as f32 / self.queue.len() as f32
    }

    /// Final tier once the session has ended
    pub fn tier(&self) -> Option<PerformanceTier> {
        match self.phase {
            Phase::Ended { tier } => Some(tier),
            _ => None,
        }
    }

    /// Take the events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<DrillEvent> {
        std::mem::take(&mut self.events)
    }

    /// Present the question at the cursor, or end the session past the last one
    ///
    /// Only acts while `Presenting`. Once a question is on screen it cannot be
    /// re-presented, so its lock never reopens.
    pub fn load_current(&mut self) -> bool {
        if !matches!(self.phase, Phase::Presenting { .. }) {
            return false;
        }
        if self.current_index >= self.queue.len() {
            self.finish();
            return true;
        }

        let index = self.current_index;
        self.locked = false;
        self.pending_input.clear();
        self.options = match self.queue[index].input_mode {
            InputMode::Choice => choice_options(&self.queue[index], &mut self.rng),
            InputMode::Entry => Vec::new(),
        };
        self.phase = Phase::AwaitingAnswer {
            index,
            countdown: self.countdown_secs,
        };
        log::debug!("Presenting question {}: {}", index, self.queue[index].text);
        self.events.push(DrillEvent::QuestionPresented {
            index,
            total: self.queue.len(),
        });
        true
    }

    /// Score an answer for the current question
    ///
    /// Ignored (returns `None`) unless a question is awaiting an answer and the
    /// lock is open, so late or repeated submissions never score twice.
    pub fn submit(&mut self, submission: Submission) -> Option<Outcome> {
        let Phase::AwaitingAnswer { index, .. } = self.phase else {
            return None;
        };
        if self.locked {
            return None;
        }
        self.locked = true;
        self.phase = Phase::Locked { index };

        let problem = &self.queue[index];
        let outcome = match &submission {
            Submission::Timeout => Outcome::TimeUp,
            Submission::Value(value) if problem.is_correct(value) => Outcome::Correct,
            Submission::Value(_) => Outcome::Wrong,
        };
        if outcome.is_correct() {
            self.score += 1;
        }
        log::debug!("Question {} answered: {:?} (score {})", index, outcome, self.score);

        self.events.push(DrillEvent::Answered {
            index,
            outcome,
            canonical_answer: problem.canonical_answer(),
        });
        self.phase = Phase::Feedback {
            index,
            outcome,
            auto_advance: FEEDBACK_DELAY,
        };
        Some(outcome)
    }

    /// Apply a keypad press to the pending input. Returns whether it changed.
    pub fn press_key(&mut self, key: Key) -> bool {
        if self.locked || !matches!(self.phase, Phase::AwaitingAnswer { .. }) {
            return false;
        }
        let Some(problem) = self.queue.get(self.current_index) else {
            return false;
        };
        if problem.input_mode != InputMode::Entry {
            return false;
        }
        match (key, &problem.solution) {
            (Key::Backspace, _) => self.pending_input.pop().is_some(),
            (Key::Digit(d), Solution::Number(_)) => {
                if d > 9 || self.pending_input.len() >= MAX_ENTRY_DIGITS {
                    return false;
                }
                self.pending_input.push(char::from(b'0' + d));
                true
            }
            (Key::Symbol(r), Solution::Relation(_)) => {
                self.pending_input = r.symbol().to_string();
                true
            }
            _ => false,
        }
    }

    /// Submit the pending keypad input; empty input is ignored
    pub fn submit_entry(&mut self) -> Option<Outcome> {
        if self.pending_input.is_empty() {
            return None;
        }
        let value = self.pending_input.clone();
        self.submit(Submission::Value(value))
    }

    /// Leave feedback and move to the next question
    pub fn advance(&mut self) -> bool {
        let Phase::Feedback { index, .. } = self.phase else {
            return false;
        };
        self.current_index = index + 1;
        self.phase = Phase::Presenting {
            index: self.current_index,
            delay: TRANSITION_DELAY,
        };
        true
    }

    /// External "continue" trigger: dismisses feedback early, or skips the
    /// transition delay before the next question
    pub fn skip(&mut self) -> bool {
        match self.phase {
            Phase::Feedback { .. } => self.advance(),
            _ => self.load_current(),
        }
    }

    /// Advance timers by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        let expired = match &mut self.phase {
            Phase::Presenting { delay, .. }
            | Phase::Feedback {
                auto_advance: delay, ..
            } => {
                *delay -= dt;
                *delay <= 0.0
            }
            Phase::AwaitingAnswer {
                countdown: Some(remaining),
                ..
            } => {
                *remaining = (*remaining - dt).max(0.0);
                *remaining <= 0.0
            }
            _ => false,
        };
        if !expired {
            return;
        }

        match self.phase {
            Phase::Presenting { .. } => {
                self.load_current();
            }
            Phase::AwaitingAnswer { .. } => {
                self.submit(Submission::Timeout);
            }
            Phase::Feedback { .. } => {
                self.advance();
            }
            _ => {}
        }
    }

    /// Tear the session down, cancelling every pending timer
    pub fn stop(&mut self) {
        if self.phase.is_terminal() {
            return;
        }
        log::info!("Session stopped at question {:?}", self.phase.index());
        self.locked = true;
        self.phase = Phase::Stopped;
    }

    fn finish(&mut self) {
        let total = self.queue.len() as u32;
        let tier = PerformanceTier::from_score(self.score, total);
        log::info!("Session ended: {}/{} ({:?})", self.score, total, tier);
        self.locked = true;
        self.phase = Phase::Ended { tier };
        self.events.push(DrillEvent::SessionEnded {
            score: self.score,
            total,
            tier,
        });
    }

    /// Render state for the current question, if one is on screen
    pub fn view(&self) -> Option<QuestionView> {
        let (index, countdown, feedback) = match &self.phase {
            Phase::AwaitingAnswer { index, countdown } => (*index, *countdown, None),
            Phase::Locked { index } => (*index, None, None),
            Phase::Feedback { index, outcome, .. } => (*index, None, Some(*outcome)),
            _ => return None,
        };
        let problem = self.queue.get(index)?;

        let countdown = match (countdown, self.countdown_secs) {
            (Some(remaining), Some(total)) if total > 0.0 => Some(CountdownView {
                remaining,
                fraction: remaining / total,
                level: CountdownLevel::from_remaining(remaining),
            }),
            _ => None,
        };
        let keypad = match problem.input_mode {
            InputMode::Entry => keypad_labels(&keypad(&problem.solution)),
            InputMode::Choice => Vec::new(),
        };

        Some(QuestionView {
            index,
            total: self.queue.len(),
            progress: self.progress(),
            text: problem.text.clone(),
            rich_text: problem.rich_text.clone(),
            kind: problem.kind(),
            input_mode: problem.input_mode,
            options: self.options.clone(),
            keypad,
            pending_input: self.pending_input.clone(),
            countdown,
            feedback: feedback.map(|o| FeedbackView::new(o, &problem.canonical_answer())),
        })
    }
}

/// Parse a free-form answer into canonical form (trims whitespace, strips
/// leading zeros, accepts relation symbols)
pub fn normalize_answer(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if let Some(r) = Relation::from_symbol(raw) {
        return Some(r.symbol().to_string());
    }
    raw.parse::<u32>().ok().map(|n| n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill::outcome::EffectMode;
    use crate::drill::rng::ScriptedRng;

    fn numeric_queue(answers: &[u32], mode: InputMode) -> Vec<Problem> {
        answers
            .iter()
            .map(|a| {
                let mut p = Problem::new(format!("{a} + 0 = ?"), Solution::Number(*a));
                p.input_mode = mode;
                p
            })
            .collect()
    }

    fn session(answers: &[u32], countdown: Option<u32>) -> Session<SeededRng> {
        Session::from_queue(numeric_queue(answers, InputMode::Entry), countdown, SeededRng::new(1))
    }

    #[test]
    fn test_initial_phase() {
        let mut s = session(&[1, 2], None);
        assert_eq!(s.phase(), &Phase::Presenting { index: 0, delay: 0.0 });
        s.load_current();
        assert_eq!(s.phase(), &Phase::AwaitingAnswer { index: 0, countdown: None });
        assert!(!s.is_locked());
    }

    #[test]
    fn test_first_tick_presents() {
        let mut s = session(&[1], None);
        s.tick(FX_DT);
        assert!(matches!(s.phase(), Phase::AwaitingAnswer { index: 0, .. }));
    }

    #[test]
    fn test_submit_correct_and_wrong() {
        let mut s = session(&[7, 3], None);
        s.load_current();
        assert_eq!(s.submit(Submission::Value("7".into())), Some(Outcome::Correct));
        assert_eq!(s.score(), 1);
        assert!(s.advance());
        s.load_current();
        assert_eq!(s.submit(Submission::Value("4".into())), Some(Outcome::Wrong));
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn test_submit_is_idempotent() {
        let mut s = session(&[7], None);
        s.load_current();
        assert_eq!(s.submit(Submission::Value("7".into())), Some(Outcome::Correct));
        assert_eq!(s.submit(Submission::Value("7".into())), None);
        assert_eq!(s.submit(Submission::Timeout), None);
        assert_eq!(s.score(), 1);
        assert!(s.is_locked());
    }

    #[test]
    fn test_reload_cannot_reopen_lock() {
        let mut s = session(&[7, 7], None);
        assert!(s.load_current());
        assert_eq!(s.submit(Submission::Value("7".into())), Some(Outcome::Correct));
        assert!(!s.load_current());
        assert_eq!(s.submit(Submission::Value("7".into())), None);
        assert_eq!(s.score(), 1);
        assert_eq!(s.current_index(), 0);
        assert!(s.is_locked());
    }

    #[test]
    fn test_reload_while_answering_keeps_question() {
        let queue = numeric_queue(&[5], InputMode::Choice);
        let mut s = Session::from_queue(queue, Some(10), SeededRng::new(4));
        s.load_current();
        s.tick(4.0);
        let options = s.options().to_vec();
        assert!(!s.load_current());
        assert!(!s.skip());
        assert_eq!(s.options(), options.as_slice());
        assert_eq!(
            s.phase(),
            &Phase::AwaitingAnswer {
                index: 0,
                countdown: Some(6.0)
            }
        );
        let presented = s
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, DrillEvent::QuestionPresented { .. }))
            .count();
        assert_eq!(presented, 1);
    }

    #[test]
    fn test_submit_before_presenting_is_ignored() {
        let mut s = session(&[7], None);
        assert_eq!(s.submit(Submission::Value("7".into())), None);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_advance_only_from_feedback() {
        let mut s = session(&[7, 8], None);
        assert!(!s.advance());
        s.load_current();
        assert!(!s.advance());
        s.submit(Submission::Value("7".into()));
        assert!(s.advance());
        assert_eq!(s.current_index(), 1);
        assert_eq!(
            s.phase(),
            &Phase::Presenting {
                index: 1,
                delay: TRANSITION_DELAY
            }
        );
    }

    #[test]
    fn test_feedback_auto_advances_then_presents() {
        let mut s = session(&[7, 8], None);
        s.load_current();
        s.submit(Submission::Value("7".into()));
        s.tick(FEEDBACK_DELAY + 0.01);
        assert!(matches!(s.phase(), Phase::Presenting { index: 1, .. }));
        s.tick(TRANSITION_DELAY + 0.01);
        assert!(matches!(s.phase(), Phase::AwaitingAnswer { index: 1, .. }));
        assert!(!s.is_locked());
    }

    #[test]
    fn test_countdown_times_out_once() {
        let mut s = session(&[7, 8], Some(5));
        s.load_current();
        for _ in 0..49 {
            s.tick(0.1);
        }
        assert!(matches!(s.phase(), Phase::AwaitingAnswer { .. }));
        s.tick(0.2);
        assert!(matches!(
            s.phase(),
            Phase::Feedback {
                outcome: Outcome::TimeUp,
                ..
            }
        ));
        // Late manual answer is ignored
        assert_eq!(s.submit(Submission::Value("7".into())), None);
        assert_eq!(s.score(), 0);
        let answered = s
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, DrillEvent::Answered { .. }))
            .count();
        assert_eq!(answered, 1);
    }

    #[test]
    fn test_timeout_matches_sentinel() {
        let mut timed = session(&[7], Some(5));
        timed.load_current();
        timed.tick(6.0);

        let mut manual = session(&[7], Some(5));
        manual.load_current();
        manual.submit(Submission::Timeout);

        assert_eq!(timed.phase(), manual.phase());
        assert_eq!(timed.score(), manual.score());
        let view = timed.view().unwrap();
        assert_eq!(view.feedback.unwrap().title, Outcome::TimeUp.title());
    }

    #[test]
    fn test_manual_answer_cancels_countdown() {
        let mut s = session(&[7, 8], Some(5));
        s.load_current();
        s.tick(4.9);
        assert_eq!(s.submit(Submission::Value("7".into())), Some(Outcome::Correct));
        // The old countdown would have expired here
        s.tick(0.5);
        assert_eq!(s.score(), 1);
        assert!(matches!(
            s.phase(),
            Phase::Feedback {
                outcome: Outcome::Correct,
                ..
            }
        ));
    }

    #[test]
    fn test_countdown_rearms_per_question() {
        let mut s = session(&[7, 8], Some(5));
        s.load_current();
        s.tick(3.0);
        s.submit(Submission::Value("7".into()));
        s.advance();
        s.load_current();
        assert_eq!(
            s.phase(),
            &Phase::AwaitingAnswer {
                index: 1,
                countdown: Some(5.0)
            }
        );
    }

    #[test]
    fn test_stop_cancels_timers() {
        let mut s = session(&[7, 8], Some(5));
        s.load_current();
        s.stop();
        s.tick(10.0);
        assert_eq!(s.phase(), &Phase::Stopped);
        assert_eq!(s.submit(Submission::Timeout), None);
        s.load_current();
        assert_eq!(s.phase(), &Phase::Stopped);
        assert!(s.drain_events().iter().all(|e| !matches!(e, DrillEvent::Answered { .. })));
    }

    #[test]
    fn test_keypad_entry() {
        let mut s = session(&[12], None);
        s.load_current();
        assert_eq!(s.submit_entry(), None);
        assert!(s.press_key(Key::Digit(1)));
        assert!(s.press_key(Key::Digit(3)));
        assert!(s.press_key(Key::Backspace));
        assert!(s.press_key(Key::Digit(2)));
        assert!(!s.press_key(Key::Symbol(Relation::Less)));
        assert_eq!(s.pending_input(), "12");
        assert_eq!(s.submit_entry(), Some(Outcome::Correct));
        assert!(!s.press_key(Key::Digit(4)));
    }

    #[test]
    fn test_keypad_rejects_invalid_digit() {
        let mut s = session(&[9], None);
        s.load_current();
        assert!(!s.press_key(Key::Digit(12)));
        assert_eq!(s.pending_input(), "");
        assert!(s.press_key(Key::Digit(9)));
        assert_eq!(s.pending_input(), "9");
    }

    #[test]
    fn test_keypad_ignored_in_choice_mode() {
        let queue = numeric_queue(&[5], InputMode::Choice);
        let mut s = Session::from_queue(queue, None, SeededRng::new(2));
        s.load_current();
        assert!(!s.press_key(Key::Digit(5)));
        assert!(!s.press_key(Key::Backspace));
        assert_eq!(s.pending_input(), "");
        assert_eq!(s.submit_entry(), None);
    }

    #[test]
    fn test_keypad_digit_cap() {
        let mut s = session(&[100], None);
        s.load_current();
        for d in [1, 0, 0, 0] {
            s.press_key(Key::Digit(d));
        }
        assert_eq!(s.pending_input(), "100");
    }

    #[test]
    fn test_keypad_comparison_replaces() {
        let mut p = Problem::new("3 ◯ 5", Solution::Relation(Relation::Less));
        p.input_mode = InputMode::Entry;
        let mut s = Session::from_queue(vec![p], None, SeededRng::new(1));
        s.load_current();
        assert!(!s.press_key(Key::Digit(3)));
        s.press_key(Key::Symbol(Relation::Greater));
        s.press_key(Key::Symbol(Relation::Less));
        assert_eq!(s.pending_input(), "<");
        assert_eq!(s.submit_entry(), Some(Outcome::Correct));
    }

    #[test]
    fn test_choice_options_prepared_on_load() {
        let queue = numeric_queue(&[5], InputMode::Choice);
        let mut s = Session::from_queue(queue, None, SeededRng::new(4));
        s.load_current();
        assert_eq!(s.options().len(), CHOICE_OPTION_COUNT);
        assert!(s.options().contains(&"5".to_string()));
        let view = s.view().unwrap();
        assert!(view.keypad.is_empty());
        assert_eq!(view.options, s.options());
    }

    #[test]
    fn test_view_progress_and_keypad() {
        let mut s = session(&[1, 2, 3, 4], Some(10));
        s.load_current();
        s.submit(Submission::Value("1".into()));
        s.advance();
        s.load_current();
        let view = s.view().unwrap();
        assert_eq!(view.index, 1);
        assert_eq!(view.progress, 0.25);
        assert_eq!(view.keypad.len(), 11);
        let countdown = view.countdown.unwrap();
        assert_eq!(countdown.fraction, 1.0);
        assert_eq!(countdown.level, CountdownLevel::Calm);
    }

    fn play_through(answers: &[u32], correct: usize) -> Session<SeededRng> {
        let mut s = session(answers, None);
        for (i, a) in answers.iter().enumerate() {
            s.load_current();
            let value = if i < correct { a.to_string() } else { (a + 1).to_string() };
            s.submit(Submission::Value(value));
            s.advance();
        }
        s.load_current();
        s
    }

    #[test]
    fn test_perfect_session_fireworks() {
        let s = play_through(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 10);
        assert_eq!(s.score(), 10);
        assert_eq!(s.tier(), Some(PerformanceTier::Perfect));
        assert_eq!(s.tier().and_then(|t| t.effect()), Some(EffectMode::Fireworks));
    }

    #[test]
    fn test_poor_session_rain() {
        let mut s = play_through(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 3);
        assert_eq!(s.score(), 3);
        assert_eq!(s.tier().and_then(|t| t.effect()), Some(EffectMode::Rain));
        let ended = s.drain_events().into_iter().last();
        assert_eq!(
            ended,
            Some(DrillEvent::SessionEnded {
                score: 3,
                total: 10,
                tier: PerformanceTier::KeepTrying
            })
        );
    }

    #[test]
    fn test_start_single_mode_queue() {
        let config = DrillConfig::new(10, ModeSet::single(InputMode::Choice), None).unwrap();
        let s = Session::start(Chapter::Add10, &config, ScriptedRng::new([3, 4])).unwrap();
        assert_eq!(s.total(), 10);
        assert!(s.queue().iter().all(|p| p.input_mode == InputMode::Choice));
        assert_eq!(s.queue()[0].text, "3 + 4 = ?");
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(
            DrillConfig::new(5, ModeSet::default(), None),
            Err(DrillError::CountOutOfRange(5))
        );
        assert_eq!(
            DrillConfig::new(20, ModeSet::default(), Some(61)),
            Err(DrillError::CountdownOutOfRange(61))
        );
        assert!(DrillConfig::new(20, ModeSet::both(), Some(5)).is_ok());
    }

    #[test]
    fn test_normalize_answer() {
        assert_eq!(normalize_answer(" 007 "), Some("7".to_string()));
        assert_eq!(normalize_answer(">"), Some(">".to_string()));
        assert_eq!(normalize_answer("abc"), None);
    }
}
