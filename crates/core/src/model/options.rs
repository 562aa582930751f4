use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── COLOR ─────────────────────────────────────────────────────────────────────
//

/// An opaque RGB color written as `#rrggbb`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardColor {
    r: u8,
    g: u8,
    b: u8,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardColorError {
    #[error("color must look like #rrggbb, got {raw:?}")]
    Malformed { raw: String },
}

impl CardColor {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` (or `rrggbb`) hex string.
    ///
    /// # Errors
    ///
    /// Returns `CardColorError::Malformed` for anything that is not six hex digits.
    pub fn parse(raw: &str) -> Result<Self, CardColorError> {
        let malformed = || CardColorError::Malformed {
            raw: raw.to_string(),
        };
        let hex = raw.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(malformed());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| malformed())
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Lighten (positive) or darken (negative) every channel, clamped to `0..=255`.
    #[must_use]
    pub fn adjust(self, amount: i16) -> Self {
        let shift = |c: u8| {
            let shifted = i16::from(c).saturating_add(amount).clamp(0, 255);
            u8::try_from(shifted).unwrap_or(u8::MAX)
        };
        Self {
            r: shift(self.r),
            g: shift(self.g),
            b: shift(self.b),
        }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardColor({})", self.to_hex())
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for CardColor {
    type Err = CardColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CardColor {
    type Error = CardColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CardColor> for String {
    fn from(value: CardColor) -> Self {
        value.to_hex()
    }
}

/// A named swatch offered by the color picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub color: CardColor,
}

pub const PALETTE: [NamedColor; 7] = [
    NamedColor { name: "Rose", color: CardColor::rgb(0xff, 0x6b, 0x6b) },
    NamedColor { name: "Teal", color: CardColor::rgb(0x4e, 0xcd, 0xc4) },
    NamedColor { name: "Amber", color: CardColor::rgb(0xff, 0xbe, 0x0b) },
    NamedColor { name: "Purple", color: CardColor::rgb(0x8a, 0x2b, 0xe2) },
    NamedColor { name: "Pink", color: CardColor::rgb(0xff, 0x85, 0xa2) },
    NamedColor { name: "Navy", color: CardColor::rgb(0x2d, 0x30, 0x47) },
    NamedColor { name: "Emerald", color: CardColor::rgb(0x4d, 0x8c, 0x57) },
];

//
// ─── FONT SIZE / STYLE ─────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    #[must_use]
    pub const fn px(self) -> u32 {
        match self {
            FontSize::Small => 16,
            FontSize::Medium => 20,
            FontSize::Large => 24,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStyle {
    #[default]
    Modern,
    Vintage,
    Minimalist,
    Playful,
}

impl CardStyle {
    pub const ALL: [CardStyle; 4] = [
        CardStyle::Modern,
        CardStyle::Vintage,
        CardStyle::Minimalist,
        CardStyle::Playful,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardStyle::Modern => "modern",
            CardStyle::Vintage => "vintage",
            CardStyle::Minimalist => "minimalist",
            CardStyle::Playful => "playful",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardStyle::Modern => "Modern",
            CardStyle::Vintage => "Vintage",
            CardStyle::Minimalist => "Minimalist",
            CardStyle::Playful => "Playful",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            CardStyle::Modern => "Clean, bold gradients with smooth shadows",
            CardStyle::Vintage => "Classic look with aged texture and elegant fonts",
            CardStyle::Minimalist => "Simple, uncluttered design with essential elements",
            CardStyle::Playful => "Fun patterns and vibrant visual elements",
        }
    }
}

//
// ─── QUESTION COUNT ────────────────────────────────────────────────────────────
//

/// How many cards one generation produces (1..=10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct QuestionCount(u8);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionCountError {
    #[error("question count must be between {min} and {max}, got {got}")]
    OutOfRange { got: u8, min: u8, max: u8 },
}

impl QuestionCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// # Errors
    ///
    /// Returns `QuestionCountError::OutOfRange` outside `1..=10`.
    pub fn new(value: u8) -> Result<Self, QuestionCountError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(QuestionCountError::OutOfRange {
                got: value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    #[must_use]
    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl Default for QuestionCount {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for QuestionCount {
    type Error = QuestionCountError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionCount> for u8 {
    fn from(value: QuestionCount) -> Self {
        value.0
    }
}

//
// ─── OPTIONS ───────────────────────────────────────────────────────────────────
//

/// Options applied to every card of a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomizationOptions {
    pub include_emojis: bool,
    pub card_color: CardColor,
    pub font_size: FontSize,
    pub question_count: QuestionCount,
    pub card_style: CardStyle,
}

impl Default for CustomizationOptions {
    fn default() -> Self {
        Self {
            include_emojis: true,
            card_color: PALETTE[0].color,
            font_size: FontSize::default(),
            question_count: QuestionCount::default(),
            card_style: CardStyle::default(),
        }
    }
}
