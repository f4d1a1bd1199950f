//! Session queue building and block-randomized input modes
//!
//! Mixed-mode sessions are split into contiguous runs of 4-8 problems, each
//! run sharing one input mode, so the player never flips between tapping
//! options and typing on every question.

use serde::{Deserialize, Serialize};

use super::chapter::Chapter;
use super::generator::generate;
use super::problem::{InputMode, Problem};
use super::rng::RandomSource;
use crate::consts::*;
use crate::error::DrillError;

/// Non-empty, duplicate-free set of allowed input modes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<InputMode>", into = "Vec<InputMode>")]
pub struct ModeSet(Vec<InputMode>);

impl ModeSet {
    pub fn new(modes: impl IntoIterator<Item = InputMode>) -> Result<Self, DrillError> {
        let mut modes: Vec<InputMode> = modes.into_iter().collect();
        modes.sort();
        modes.dedup();
        if modes.is_empty() {
            return Err(DrillError::EmptyModeSet);
        }
        Ok(Self(modes))
    }

    pub fn single(mode: InputMode) -> Self {
        Self(vec![mode])
    }

    pub fn both() -> Self {
        Self(vec![InputMode::Choice, InputMode::Entry])
    }

    pub fn contains(&self, mode: InputMode) -> bool {
        self.0.contains(&mode)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[InputMode] {
        &self.0
    }

    /// Add or remove a mode. Removing the last remaining mode is refused.
    /// Returns whether the set changed.
    pub fn toggle(&mut self, mode: InputMode) -> bool {
        if let Some(i) = self.0.iter().position(|m| *m == mode) {
            if self.0.len() == 1 {
                return false;
            }
            self.0.remove(i);
        } else {
            self.0.push(mode);
            self.0.sort();
        }
        true
    }
}

impl Default for ModeSet {
    fn default() -> Self {
        Self::single(InputMode::Choice)
    }
}

impl TryFrom<Vec<InputMode>> for ModeSet {
    type Error = DrillError;

    fn try_from(modes: Vec<InputMode>) -> Result<Self, Self::Error> {
        Self::new(modes)
    }
}

impl From<ModeSet> for Vec<InputMode> {
    fn from(set: ModeSet) -> Self {
        set.0
    }
}

/// A contiguous run of problems sharing one input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeBlock {
    pub start: usize,
    pub len: usize,
    pub mode: InputMode,
}

/// Check a session length against the allowed range
pub fn validate_count(count: u32) -> Result<u32, DrillError> {
    if (MIN_PROBLEM_COUNT..=MAX_PROBLEM_COUNT).contains(&count) {
        Ok(count)
    } else {
        Err(DrillError::CountOutOfRange(count))
    }
}

/// Generate `count` problems for a chapter and assign their input modes
pub fn build<R: RandomSource>(
    chapter: Chapter,
    count: u32,
    modes: &ModeSet,
    rng: &mut R,
) -> Result<Vec<Problem>, DrillError> {
    let count = validate_count(count)? as usize;

    let mut queue: Vec<Problem> = (0..count).map(|_| generate(chapter, rng)).collect();
    for block in assign_blocks(count, modes, rng) {
        for problem in &mut queue[block.start..block.start + block.len] {
            problem.input_mode = block.mode;
        }
    }

    log::debug!(
        "Built queue: chapter {:?}, {} problems, modes {:?}",
        chapter,
        count,
        modes.as_slice()
    );
    Ok(queue)
}

/// Partition `0..count` into mode blocks
///
/// With a single allowed mode the whole range is one block. Otherwise block
/// lengths are uniform in 4..=8 (the last one truncated to fit) and each
/// block's mode is drawn uniformly from the set.
pub fn assign_blocks<R: RandomSource>(count: usize, modes: &ModeSet, rng: &mut R) -> Vec<ModeBlock> {
    if let [only] = modes.as_slice() {
        return vec![ModeBlock {
            start: 0,
            len: count,
            mode: *only,
        }];
    }

    let mut blocks = Vec::new();
    let mut assigned = 0;
    while assigned < count {
        let len = (rng.int_in(MIN_MODE_BLOCK, MAX_MODE_BLOCK) as usize).min(count - assigned);
        let mode = modes.as_slice()[rng.int_in(0, modes.len() as u32 - 1) as usize];
        blocks.push(ModeBlock {
            start: assigned,
            len,
            mode,
        });
        assigned += len;
    }
    blocks
}
