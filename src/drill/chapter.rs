//! Difficulty chapters

use serde::{Deserialize, Serialize};

use crate::error::DrillError;

/// A difficulty bucket: operation type and operand ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chapter {
    /// Count the fruit (3-10 glyphs)
    PictureCount,
    /// Add or take away fruit (within 10)
    PictureAddSub,
    /// Compare two numbers up to 20
    Compare20,
    Add10,
    Sub10,
    /// Fill-the-blank and comparison forms within 10
    Mixed10,
    Add20,
    Sub20,
    Mixed20,
    Add100,
    Sub100,
    Mixed100,
    Mul10,
    Div10,
    MulDiv10,
    Mul20,
    Div20,
    MulDiv20,
}

impl Chapter {
    /// Every chapter in menu order
    pub const ALL: [Chapter; 18] = [
        Chapter::PictureCount,
        Chapter::PictureAddSub,
        Chapter::Compare20,
        Chapter::Add10,
        Chapter::Sub10,
        Chapter::Mixed10,
        Chapter::Add20,
        Chapter::Sub20,
        Chapter::Mixed20,
        Chapter::Add100,
        Chapter::Sub100,
        Chapter::Mixed100,
        Chapter::Mul10,
        Chapter::Div10,
        Chapter::MulDiv10,
        Chapter::Mul20,
        Chapter::Div20,
        Chapter::MulDiv20,
    ];

    /// Look up a chapter by the numeric id used by the menu
    ///
    /// Unknown ids are rejected rather than mapped to a fallback chapter.
    pub fn from_id(id: i32) -> Result<Self, DrillError> {
        let chapter = match id {
            0 => Chapter::PictureCount,
            -1 => Chapter::PictureAddSub,
            1 => Chapter::Compare20,
            2 => Chapter::Add10,
            3 => Chapter::Sub10,
            4 => Chapter::Mixed10,
            5 => Chapter::Add20,
            6 => Chapter::Sub20,
            7 => Chapter::Mixed20,
            8 => Chapter::Add100,
            9 => Chapter::Sub100,
            10 => Chapter::Mixed100,
            11 => Chapter::Mul10,
            12 => Chapter::Div10,
            13 => Chapter::MulDiv10,
            14 => Chapter::Mul20,
            15 => Chapter::Div20,
            16 => Chapter::MulDiv20,
            _ => return Err(DrillError::UnknownChapter(id)),
        };
        Ok(chapter)
    }

    pub fn id(&self) -> i32 {
        match self {
            Chapter::PictureCount => 0,
            Chapter::PictureAddSub => -1,
            Chapter::Compare20 => 1,
            Chapter::Add10 => 2,
            Chapter::Sub10 => 3,
            Chapter::Mixed10 => 4,
            Chapter::Add20 => 5,
            Chapter::Sub20 => 6,
            Chapter::Mixed20 => 7,
            Chapter::Add100 => 8,
            Chapter::Sub100 => 9,
            Chapter::Mixed100 => 10,
            Chapter::Mul10 => 11,
            Chapter::Div10 => 12,
            Chapter::MulDiv10 => 13,
            Chapter::Mul20 => 14,
            Chapter::Div20 => 15,
            Chapter::MulDiv20 => 16,
        }
    }

    /// Menu title
    pub fn title(&self) -> &'static str {
        match self {
            Chapter::PictureCount => "数字象形",
            Chapter::PictureAddSub => "数字加减",
            Chapter::Compare20 => "数字比大小",
            Chapter::Add10 => "10以内加法",
            Chapter::Sub10 => "10以内减法",
            Chapter::Mixed10 => "10以内加减复合",
            Chapter::Add20 => "20以内加法",
            Chapter::Sub20 => "20以内减法",
            Chapter::Mixed20 => "20以内加减复合",
            Chapter::Add100 => "100以内加法",
            Chapter::Sub100 => "100以内减法",
            Chapter::Mixed100 => "100以内加减复合",
            Chapter::Mul10 => "10以内乘法",
            Chapter::Div10 => "10以内除法",
            Chapter::MulDiv10 => "10以内乘除复合",
            Chapter::Mul20 => "20以内乘法",
            Chapter::Div20 => "20以内除法",
            Chapter::MulDiv20 => "20以内乘除复合",
        }
    }
}
