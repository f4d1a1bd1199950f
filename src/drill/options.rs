//! Answer options for multiple-choice mode and the free-entry keypad

use super::problem::{Problem, Relation, Solution};
use super::rng::RandomSource;
use crate::consts::CHOICE_OPTION_COUNT;

/// Perturbations tried first, in order of preference
const NEAR_DELTAS: [i64; 4] = [-2, -1, 1, 2];

/// Keypad key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Symbol(Relation),
    Backspace,
}

impl Key {
    pub fn label(&self) -> String {
        match self {
            Key::Digit(d) => d.to_string(),
            Key::Symbol(r) => r.symbol().to_string(),
            Key::Backspace => "←".to_string(),
        }
    }

    /// Parse a key label as produced by [`Key::label`]
    pub fn from_label(label: &str) -> Option<Self> {
        if label == "←" {
            return Some(Key::Backspace);
        }
        if let Some(r) = Relation::from_symbol(label) {
            return Some(Key::Symbol(r));
        }
        match label.as_bytes() {
            [d @ b'0'..=b'9'] => Some(Key::Digit(d - b'0')),
            _ => None,
        }
    }
}

/// Keys shown on the keypad for a problem
pub fn keypad(solution: &Solution) -> Vec<Key> {
    match solution {
        Solution::Relation(_) => {
            let mut keys: Vec<Key> = Relation::ALL.iter().copied().map(Key::Symbol).collect();
            keys.push(Key::Backspace);
            keys
        }
        Solution::Number(_) => {
            let mut keys: Vec<Key> = (1..=9).chain(std::iter::once(0)).map(Key::Digit).collect();
            keys.push(Key::Backspace);
            keys
        }
    }
}

/// Shuffled multiple-choice options containing the canonical answer
///
/// Numeric answers get three distractors near the answer; comparison problems
/// always offer the three relation symbols.
pub fn choice_options<R: RandomSource>(problem: &Problem, rng: &mut R) -> Vec<String> {
    let mut options: Vec<String> = match problem.solution {
        Solution::Relation(_) => Relation::ALL.iter().map(|r| r.symbol().to_string()).collect(),
        Solution::Number(answer) => {
            let mut options = vec![answer.to_string()];
            options.extend(distractors(answer, rng).into_iter().map(|d| d.to_string()));
            options
        }
    };
    rng.shuffle(&mut options);
    options
}

/// Three distinct non-negative values different from `answer`
///
/// Prefers values within two of the answer. Small answers (0 and 1) do not
/// have three such values, so the range widens upward until it does.
pub fn distractors<R: RandomSource>(answer: u32, rng: &mut R) -> Vec<u32> {
    let needed = CHOICE_OPTION_COUNT - 1;
    let answer = i64::from(answer);

    let mut near: Vec<u32> = NEAR_DELTAS
        .iter()
        .map(|d| answer + d)
        .filter(|v| *v >= 0)
        .map(|v| v as u32)
        .collect();
    rng.shuffle(&mut near);
    near.truncate(needed);

    let mut widen = NEAR_DELTAS[NEAR_DELTAS.len() - 1] + 1;
    while near.len() < needed {
        near.push((answer + widen) as u32);
        widen += 1;
    }
    near
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::drill::rng::SeededRng;

    #[test]
    fn test_distractors_for_every_answer_terminate() {
        let mut rng = SeededRng::new(11);
        for answer in 0..=100 {
            let d = distractors(answer, &mut rng);
            assert_eq!(d.len(), 3);
            let unique: HashSet<_> = d.iter().collect();
            assert_eq!(unique.len(), 3, "duplicate distractor for {answer}");
            assert!(!d.contains(&answer));
        }
    }

    #[test]
    fn test_distractors_small_answers_widen() {
        let mut rng = SeededRng::new(3);
        let mut zero = distractors(0, &mut rng);
        zero.sort();
        assert_eq!(zero, vec![1, 2, 3]);

        let mut one = distractors(1, &mut rng);
        one.sort();
        assert_eq!(one, vec![0, 2, 3]);
    }

    #[test]
    fn test_distractors_stay_near() {
        let mut rng = SeededRng::new(5);
        for _ in 0..100 {
            for d in distractors(50, &mut rng) {
                assert!((48..=52).contains(&d));
            }
        }
    }

    #[test]
    fn test_choice_options_contain_answer() {
        let mut rng = SeededRng::new(9);
        let p = Problem::new("3 + 4 = ?", Solution::Number(7));
        let options = choice_options(&p, &mut rng);
        assert_eq!(options.len(), 4);
        assert!(options.contains(&"7".to_string()));
        let unique: HashSet<_> = options.iter().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn test_choice_options_comparison() {
        let mut rng = SeededRng::new(9);
        let p = Problem::new("5 ◯ 5", Solution::Relation(Relation::Equal));
        let mut options = choice_options(&p, &mut rng);
        options.sort();
        assert_eq!(options, vec!["<", "=", ">"]);
    }

    #[test]
    fn test_keypad_layouts() {
        let numeric = keypad(&Solution::Number(3));
        assert_eq!(numeric.len(), 11);
        assert_eq!(numeric[9], Key::Digit(0));
        assert_eq!(numeric[10], Key::Backspace);

        let labels: Vec<String> = keypad(&Solution::Relation(Relation::Less))
            .iter()
            .map(Key::label)
            .collect();
        assert_eq!(labels, vec![">", "<", "=", "←"]);
    }

    #[test]
    fn test_key_labels_parse() {
        assert_eq!(Key::from_label("7"), Some(Key::Digit(7)));
        assert_eq!(Key::from_label("="), Some(Key::Symbol(Relation::Equal)));
        assert_eq!(Key::from_label("←"), Some(Key::Backspace));
        assert_eq!(Key::from_label("12"), None);
    }
}
