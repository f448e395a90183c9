use crate::model::card::{Card, MAX_VALUE, MIN_VALUE};
use crate::model::color::Color;

pub const COLORED_COPIES: u8 = 2;
pub const WILD_COPIES: u8 = 8;
pub const SKIP_COPIES: u8 = 4;

/// Total number of cards in the fixed composition: 48 colored types at two
/// copies each, eight Wilds and four Skips.
pub const TOTAL_CARDS: u32 = 104;

/// Multiset of card types and remaining counts, indexed by `Card::index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    counts: [u8; Card::TYPE_COUNT],
}

impl Deck {
    /// The fixed initial composition. Rebuilt fresh for every calculation
    /// pass; counts only ever decrease from here.
    pub fn phase_ten() -> Self {
        let mut counts = [0u8; Card::TYPE_COUNT];
        for color in Color::ALL {
            for value in MIN_VALUE..=MAX_VALUE {
                let card = Card::Colored { color, value };
                counts[card.index()] = COLORED_COPIES;
            }
        }
        counts[Card::Wild.index()] = WILD_COPIES;
        counts[Card::Skip.index()] = SKIP_COPIES;
        Self { counts }
    }

    pub fn count(&self, card: Card) -> u8 {
        self.counts[card.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&count| u32::from(count)).sum()
    }

    /// Remove one copy of `card`, clamped at zero. Observing more copies
    /// than exist is tolerated, not an error.
    pub fn remove(&mut self, card: Card) {
        let slot = &mut self.counts[card.index()];
        *slot = slot.saturating_sub(1);
    }

    /// A copy of this deck with one copy removed per observed card,
    /// duplicates counted individually. Does not mutate `self`.
    pub fn without(&self, observed: &[Card]) -> Deck {
        let mut remaining = self.clone();
        for &card in observed {
            remaining.remove(card);
        }
        remaining
    }

    /// All card types with their counts, in canonical deck order. Includes
    /// zero-count types; filtering is the caller's concern.
    pub fn entries(&self) -> impl Iterator<Item = (Card, u8)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter_map(|(index, &count)| Card::from_index(index).map(|card| (card, count)))
    }
}
