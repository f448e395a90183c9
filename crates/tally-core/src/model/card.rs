use crate::model::color::Color;
use core::fmt;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

pub const MIN_VALUE: u8 = 1;
pub const MAX_VALUE: u8 = 12;

/// One of the 50 distinct card types in the deck.
///
/// The canonical identifier is the `Display` form: `"Red 5"`, `"Wild"`,
/// `"Skip"`. `Card::parse` is the only way free text becomes a `Card`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    Colored { color: Color, value: u8 },
    Wild,
    Skip,
}

impl Card {
    /// Number of distinct card types: 4 colors x 12 values, plus Wild and Skip.
    pub const TYPE_COUNT: usize = 50;

    const WILD_INDEX: usize = 48;
    const SKIP_INDEX: usize = 49;

    pub const fn colored(color: Color, value: u8) -> Option<Self> {
        if value >= MIN_VALUE && value <= MAX_VALUE {
            Some(Card::Colored { color, value })
        } else {
            None
        }
    }

    pub const fn is_special(self) -> bool {
        matches!(self, Card::Wild | Card::Skip)
    }

    /// Dense index in canonical deck order: colored cards grouped by color,
    /// then Wild, then Skip.
    pub const fn index(self) -> usize {
        match self {
            Card::Colored { color, value } => color.index() * MAX_VALUE as usize + (value - 1) as usize,
            Card::Wild => Self::WILD_INDEX,
            Card::Skip => Self::SKIP_INDEX,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::WILD_INDEX {
            let color = match Color::from_index(index / MAX_VALUE as usize) {
                Some(color) => color,
                None => return None,
            };
            Self::colored(color, (index % MAX_VALUE as usize) as u8 + 1)
        } else if index == Self::WILD_INDEX {
            Some(Card::Wild)
        } else if index == Self::SKIP_INDEX {
            Some(Card::Skip)
        } else {
            None
        }
    }

    /// Normalize a free-text card reference into a canonical card type.
    ///
    /// Trims whitespace; accepts `"wild"`/`"w"` and `"skip"`/`"s"` in any
    /// case, otherwise expects a color token followed by a number in 1..=12.
    /// Anything else yields `None` rather than an error; malformed entries
    /// are dropped by callers, never fatal.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.eq_ignore_ascii_case("wild") || trimmed.eq_ignore_ascii_case("w") {
            return Some(Card::Wild);
        }
        if trimmed.eq_ignore_ascii_case("skip") || trimmed.eq_ignore_ascii_case("s") {
            return Some(Card::Skip);
        }

        let mut parts = trimmed.split_whitespace();
        let color = Color::parse(parts.next()?)?;
        let value = parts.next()?.parse::<u8>().ok()?;
        Self::colored(color, value)
    }
}

/// Split free text on newlines and commas, normalize each segment, and drop
/// anything unparseable, preserving the order of the valid entries.
pub fn parse_card_list(text: &str) -> Vec<Card> {
    text.split(['\n', ','])
        .filter_map(Card::parse)
        .collect()
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Colored { color, value } => write!(f, "{color} {value}"),
            Card::Wild => f.write_str("Wild"),
            Card::Skip => f.write_str("Skip"),
        }
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CardVisitor;

        impl Visitor<'_> for CardVisitor {
            type Value = Card;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a card identifier such as \"Red 5\", \"Wild\" or \"Skip\"")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Card, E> {
                Card::parse(value)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_str(CardVisitor)
    }
}
