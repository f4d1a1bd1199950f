//! Per-question outcomes and end-of-session evaluation

use serde::{Deserialize, Serialize};

/// Result of one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Correct,
    Wrong,
    /// Countdown ran out before an answer was given
    TimeUp,
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Correct)
    }

    /// Feedback overlay title
    pub fn title(&self) -> &'static str {
        match self {
            Outcome::Correct => "太棒了！🎉",
            Outcome::Wrong => "答错了 😕",
            Outcome::TimeUp => "时间到！⏰",
        }
    }

    /// Feedback overlay detail line
    pub fn detail(&self, canonical_answer: &str) -> String {
        match self {
            Outcome::Correct => "回答正确".to_string(),
            Outcome::Wrong | Outcome::TimeUp => format!("正确答案是: {canonical_answer}"),
        }
    }
}

/// End-of-session particle effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectMode {
    Fireworks,
    Rain,
}

/// Performance bucket for the result screen
///
/// Thresholds: all correct is `Perfect`, at least 90% `Excellent`, at least
/// 60% `Good`, anything lower `KeepTrying`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceTier {
    Perfect,
    Excellent,
    Good,
    KeepTrying,
}

impl PerformanceTier {
    pub fn from_score(score: u32, total: u32) -> Self {
        if total == 0 {
            return PerformanceTier::KeepTrying;
        }
        // Integer comparisons avoid float rounding at the boundaries
        if score >= total {
            PerformanceTier::Perfect
        } else if score * 10 >= total * 9 {
            PerformanceTier::Excellent
        } else if score * 10 >= total * 6 {
            PerformanceTier::Good
        } else {
            PerformanceTier::KeepTrying
        }
    }

    /// Particle effect to run on the result screen, if any
    pub fn effect(&self) -> Option<EffectMode> {
        match self {
            PerformanceTier::Perfect | PerformanceTier::Excellent => Some(EffectMode::Fireworks),
            PerformanceTier::Good => None,
            PerformanceTier::KeepTrying => Some(EffectMode::Rain),
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            PerformanceTier::Perfect => "🏆",
            PerformanceTier::Excellent => "🎉",
            PerformanceTier::Good => "😃",
            PerformanceTier::KeepTrying => "🌧️",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PerformanceTier::Perfect => "完美通关！",
            PerformanceTier::Excellent => "表现优异！",
            PerformanceTier::Good => "还不错哦",
            PerformanceTier::KeepTrying => "继续加油...",
        }
    }
}
