//! Problem and answer types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which answer alphabet a problem uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerKind {
    /// Non-negative integer typed as decimal digits
    Numeric,
    /// One of `<`, `>`, `=`
    Comparison,
}

/// Relation between the two sides of a comparison problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    Less,
    Greater,
    Equal,
}

impl Relation {
    /// All relation symbols, in keypad order
    pub const ALL: [Relation; 3] = [Relation::Greater, Relation::Less, Relation::Equal];

    pub fn between(left: u32, right: u32) -> Self {
        match left.cmp(&right) {
            std::cmp::Ordering::Less => Relation::Less,
            std::cmp::Ordering::Greater => Relation::Greater,
            std::cmp::Ordering::Equal => Relation::Equal,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Relation::Less => "<",
            Relation::Greater => ">",
            Relation::Equal => "=",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "<" => Some(Relation::Less),
            ">" => Some(Relation::Greater),
            "=" => Some(Relation::Equal),
            _ => None,
        }
    }
}

/// The correct response to a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Solution {
    Number(u32),
    Relation(Relation),
}

impl Solution {
    pub fn kind(&self) -> AnswerKind {
        match self {
            Solution::Number(_) => AnswerKind::Numeric,
            Solution::Relation(_) => AnswerKind::Comparison,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Number(n) => write!(f, "{n}"),
            Solution::Relation(r) => f.write_str(r.symbol()),
        }
    }
}

/// How the player answers a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Pick one of four presented options
    Choice,
    /// Type the answer on a keypad
    #[serde(rename = "input")]
    Entry,
}

impl InputMode {
    pub const ALL: [InputMode; 2] = [InputMode::Choice, InputMode::Entry];

    /// Name used in stored settings and by the page
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Choice => "choice",
            InputMode::Entry => "input",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == name)
    }
}

/// A generated question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Plain rendering, e.g. `3 + 4 = ?`
    pub text: String,
    /// Markup variant for pictorial chapters
    pub rich_text: Option<String>,
    pub solution: Solution,
    /// Assigned by the queue builder; generated problems start as `Entry`
    pub input_mode: InputMode,
}

impl Problem {
    pub fn new(text: impl Into<String>, solution: Solution) -> Self {
        Self {
            text: text.into(),
            rich_text: None,
            solution,
            input_mode: InputMode::Entry,
        }
    }

    pub fn with_rich_text(mut self, rich: impl Into<String>) -> Self {
        self.rich_text = Some(rich.into());
        self
    }

    pub fn kind(&self) -> AnswerKind {
        self.solution.kind()
    }

    /// Normalized correct response, as the presentation layer would submit it
    pub fn canonical_answer(&self) -> String {
        self.solution.to_string()
    }

    /// Whether a submitted value matches the canonical answer
    pub fn is_correct(&self, value: &str) -> bool {
        value == self.canonical_answer()
    }
}
