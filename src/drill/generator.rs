//! Procedural problem generation
//!
//! Every form draws the hidden value and the visible operands so that the
//! rendered equation holds by construction. Nothing is verified afterwards.

use super::chapter::Chapter;
use super::problem::{Problem, Relation, Solution};
use super::rng::RandomSource;

/// Fruit glyphs for the pictorial chapters
pub const FRUITS: [&str; 8] = ["🍎", "🍌", "🍇", "🍊", "🍓", "🍑", "🍒", "🥝"];

/// Placeholder shown where the answer goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Blank {
    /// `3 + 4 = ?`
    Question,
    /// `3 + 4 = ( )`
    Parens,
}

impl Blank {
    fn as_str(self) -> &'static str {
        match self {
            Blank::Question => "?",
            Blank::Parens => "( )",
        }
    }
}

/// Generate a fresh problem for a chapter
pub fn generate<R: RandomSource>(chapter: Chapter, rng: &mut R) -> Problem {
    use Blank::*;

    match chapter {
        Chapter::PictureCount => picture_count(rng),
        Chapter::PictureAddSub => picture_add_sub(rng),
        Chapter::Compare20 => {
            let a = rng.int_in(1, 20);
            let b = rng.int_in(1, 20);
            compare(a, b)
        }
        Chapter::Add10 => {
            let a = rng.int_in(0, 5);
            let b = rng.int_in(0, 5);
            sum(a, b, Question)
        }
        Chapter::Sub10 => {
            let a = rng.int_in(1, 10);
            let b = rng.int_in(0, a);
            difference(a, b, Question)
        }
        Chapter::Mixed10 => mixed_10(rng),
        Chapter::Add20 => {
            let a = rng.int_in(0, 10);
            let b = rng.int_in(0, 20 - a);
            sum(a, b, Question)
        }
        Chapter::Sub20 => {
            let a = rng.int_in(10, 20);
            let b = rng.int_in(0, a);
            difference(a, b, Question)
        }
        Chapter::Mixed20 => mixed_20(rng),
        Chapter::Add100 => {
            let a = rng.int_in(0, 50);
            let b = rng.int_in(0, 100 - a);
            sum(a, b, Question)
        }
        Chapter::Sub100 => {
            let a = rng.int_in(20, 100);
            let b = rng.int_in(0, a);
            difference(a, b, Question)
        }
        Chapter::Mixed100 => mixed_100(rng),
        Chapter::Mul10 => {
            let (a, b) = factors(rng, 10);
            product(a, b, Question)
        }
        Chapter::Div10 => {
            let divisor = rng.int_in(1, 10);
            let q = rng.int_in(1, 10);
            quotient(divisor, q, Question)
        }
        Chapter::MulDiv10 => mul_div(rng, 10),
        Chapter::Mul20 => {
            let (a, b) = factors(rng, 20);
            product(a, b, Question)
        }
        Chapter::Div20 => {
            let divisor = rng.int_in(1, 20);
            let q = rng.int_in(1, 100 / divisor);
            quotient(divisor, q, Question)
        }
        Chapter::MulDiv20 => mul_div(rng, 20),
    }
}

fn fruit<R: RandomSource>(rng: &mut R) -> &'static str {
    FRUITS[rng.int_in(0, FRUITS.len() as u32 - 1) as usize]
}

fn big_glyphs(inner: &str) -> String {
    format!(r#"<span style="font-size:1.5rem;">{inner}</span>"#)
}

fn picture_count<R: RandomSource>(rng: &mut R) -> Problem {
    let count = rng.int_in(3, 10);
    let mut plain = String::new();
    let mut rich = String::new();
    for _ in 0..count {
        let f = fruit(rng);
        plain.push_str(f);
        rich.push_str(&big_glyphs(f));
    }
    Problem::new(plain, Solution::Number(count)).with_rich_text(rich)
}

fn picture_add_sub<R: RandomSource>(rng: &mut R) -> Problem {
    let add = rng.int_in(1, 2) == 1;
    let f = fruit(rng);
    let (a, b, op, answer) = if add {
        let a = rng.int_in(1, 5);
        let b = rng.int_in(1, 5);
        (a, b, '+', a + b)
    } else {
        let a = rng.int_in(3, 8);
        let b = rng.int_in(1, a - 1);
        (a, b, '-', a - b)
    };
    let text = format!("{} {op} {} = ?", f.repeat(a as usize), f.repeat(b as usize));
    let rich = big_glyphs(&text);
    Problem::new(text, Solution::Number(answer)).with_rich_text(rich)
}

fn mixed_10<R: RandomSource>(rng: &mut R) -> Problem {
    match rng.int_in(1, 5) {
        1 => {
            let b = rng.int_in(1, 9);
            let c = rng.int_in(0, 9 - b);
            missing_minuend(b, c)
        }
        2 => {
            let a = rng.int_in(0, 5);
            let b = rng.int_in(0, 5);
            sum(a, b, Blank::Parens)
        }
        3 => {
            let a = rng.int_in(0, 4);
            let c = rng.int_in(a + 1, 10);
            missing_addend_right(a, c)
        }
        4 => {
            let a = rng.int_in(1, 10);
            let b = rng.int_in(0, a);
            let c = rng.int_in(0, 10);
            let d = rng.int_in(0, 10);
            compare_difference_sum(a, b, c, d)
        }
        _ => {
            let a = rng.int_in(0, 10);
            let b = rng.int_in(0, 10 - a);
            let c = rng.int_in(0, 10);
            compare_sum(a, b, c)
        }
    }
}

fn mixed_20<R: RandomSource>(rng: &mut R) -> Problem {
    match rng.int_in(1, 6) {
        1 => {
            let b = rng.int_in(1, 15);
            let c = rng.int_in(0, 20 - b);
            missing_minuend(b, c)
        }
        2 => {
            let a = rng.int_in(0, 10);
            let b = rng.int_in(0, 20 - a);
            sum(a, b, Blank::Parens)
        }
        3 => {
            let a = rng.int_in(0, 10);
            let c = rng.int_in(a, 20);
            missing_addend_right(a, c)
        }
        4 => {
            let a = rng.int_in(5, 20);
            let b = rng.int_in(0, a);
            let c = rng.int_in(0, 15);
            let d = rng.int_in(0, 20 - c);
            compare_difference_sum(a, b, c, d)
        }
        5 => {
            let a = rng.int_in(10, 20);
            let b = rng.int_in(0, a);
            difference(a, b, Blank::Parens)
        }
        _ => {
            let b = rng.int_in(0, 10);
            let c = rng.int_in(b, 20);
            missing_addend_left(b, c)
        }
    }
}

fn mixed_100<R: RandomSource>(rng: &mut R) -> Problem {
    match rng.int_in(1, 6) {
        1 => {
            let b = rng.int_in(1, 50);
            let c = rng.int_in(0, 100 - b);
            missing_minuend(b, c)
        }
        2 => {
            let a = rng.int_in(0, 50);
            let b = rng.int_in(0, 100 - a);
            sum(a, b, Blank::Parens)
        }
        3 => {
            let a = rng.int_in(20, 100);
            let b = rng.int_in(0, a);
            difference(a, b, Blank::Parens)
        }
        4 => {
            let a = rng.int_in(0, 50);
            let c = rng.int_in(a, 100);
            missing_addend_right(a, c)
        }
        5 => {
            let b = rng.int_in(0, 50);
            let c = rng.int_in(b, 100);
            missing_addend_left(b, c)
        }
        _ => {
            let a = rng.int_in(20, 100);
            let b = rng.int_in(0, a);
            let c = rng.int_in(0, 50);
            let d = rng.int_in(0, 100 - c);
            compare_difference_sum(a, b, c, d)
        }
    }
}

/// Two factors in `1..=limit` whose product stays within 100
fn factors<R: RandomSource>(rng: &mut R, limit: u32) -> (u32, u32) {
    let a = rng.int_in(1, limit);
    let b = rng.int_in(1, limit.min(100 / a));
    (a, b)
}

fn mul_div<R: RandomSource>(rng: &mut R, limit: u32) -> Problem {
    let (a, b) = factors(rng, limit);
    match rng.int_in(1, 6) {
        1 => product(a, b, Blank::Parens),
        2 => missing_factor_left(a, b),
        3 => missing_factor_right(a, b),
        // For the division forms `a` is the divisor and `b` the quotient
        4 => quotient(a, b, Blank::Parens),
        5 => missing_dividend(a, b),
        _ => missing_divisor(a, b),
    }
}

fn sum(a: u32, b: u32, blank: Blank) -> Problem {
    Problem::new(format!("{a} + {b} = {}", blank.as_str()), Solution::Number(a + b))
}

fn difference(a: u32, b: u32, blank: Blank) -> Problem {
    debug_assert!(b <= a);
    Problem::new(format!("{a} - {b} = {}", blank.as_str()), Solution::Number(a - b))
}

/// `( ) - b = c`
fn missing_minuend(b: u32, c: u32) -> Problem {
    Problem::new(format!("( ) - {b} = {c}"), Solution::Number(b + c))
}

/// `a + ( ) = c`
fn missing_addend_right(a: u32, c: u32) -> Problem {
    debug_assert!(a <= c);
    Problem::new(format!("{a} + ( ) = {c}"), Solution::Number(c - a))
}

/// `( ) + b = c`
fn missing_addend_left(b: u32, c: u32) -> Problem {
    debug_assert!(b <= c);
    Problem::new(format!("( ) + {b} = {c}"), Solution::Number(c - b))
}

fn compare(a: u32, b: u32) -> Problem {
    Problem::new(format!("{a} ◯ {b}"), Solution::Relation(Relation::between(a, b)))
}

/// `a - b ◯ c + d`
fn compare_difference_sum(a: u32, b: u32, c: u32, d: u32) -> Problem {
    debug_assert!(b <= a);
    Problem::new(
        format!("{a} - {b} ◯ {c} + {d}"),
        Solution::Relation(Relation::between(a - b, c + d)),
    )
}

/// `a + b ◯ c`
fn compare_sum(a: u32, b: u32, c: u32) -> Problem {
    Problem::new(
        format!("{a} + {b} ◯ {c}"),
        Solution::Relation(Relation::between(a + b, c)),
    )
}

fn product(a: u32, b: u32, blank: Blank) -> Problem {
    Problem::new(format!("{a} × {b} = {}", blank.as_str()), Solution::Number(a * b))
}

/// `( ) × b = c`
fn missing_factor_left(a: u32, b: u32) -> Problem {
    Problem::new(format!("( ) × {b} = {}", a * b), Solution::Number(a))
}

/// `a × ( ) = c`
fn missing_factor_right(a: u32, b: u32) -> Problem {
    Problem::new(format!("{a} × ( ) = {}", a * b), Solution::Number(b))
}

/// `dividend ÷ divisor = ?` with dividend built from the quotient
fn quotient(divisor: u32, q: u32, blank: Blank) -> Problem {
    Problem::new(
        format!("{} ÷ {divisor} = {}", divisor * q, blank.as_str()),
        Solution::Number(q),
    )
}

/// `( ) ÷ divisor = q`
fn missing_dividend(divisor: u32, q: u32) -> Problem {
    Problem::new(format!("( ) ÷ {divisor} = {q}"), Solution::Number(divisor * q))
}

/// `dividend ÷ ( ) = q`
fn missing_divisor(divisor: u32, q: u32) -> Problem {
    Problem::new(format!("{} ÷ ( ) = {q}", divisor * q), Solution::Number(divisor))
}
