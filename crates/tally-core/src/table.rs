use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::player::PlayerState;
use crate::prob::rank_for_player;
use serde::{Deserialize, Serialize};

/// Everything the engine needs for one calculation pass: the shared hand
/// size, globally revealed cards, and each player's view state. Owned and
/// mutated by the caller between passes; `evaluate` never stores anything.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    pub hand_size: u32,
    pub global_observed: Vec<Card>,
    pub players: Vec<PlayerState>,
}

impl TableState {
    pub fn new(hand_size: u32) -> Self {
        Self {
            hand_size,
            global_observed: Vec::new(),
            players: Vec::new(),
        }
    }

    /// Run one full calculation pass: rebuild the deck from its fixed
    /// composition, subtract every observed card from every source, then
    /// rank each player's outlook against the shared remaining deck.
    ///
    /// Each player is evaluated independently against the same remaining
    /// deck, as if their draws were the only ones happening. Joint
    /// without-replacement modeling across players is deliberately not
    /// attempted.
    pub fn evaluate(&self) -> TableReport {
        let mut observed: Vec<Card> = self.global_observed.clone();
        for player in &self.players {
            observed.extend(player.observed());
        }

        let remaining = Deck::phase_ten().without(&observed);
        let remaining_total = remaining.total();

        let mut deck_entries: Vec<DeckEntry> = remaining
            .entries()
            .filter(|&(_, count)| count > 0)
            .map(|(card, count)| DeckEntry {
                card: card.to_string(),
                count,
            })
            .collect();
        deck_entries.sort_by(|a, b| b.count.cmp(&a.count));

        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(index, player)| {
                let unknown_count = player.unknown_count(self.hand_size);
                let ranked = rank_for_player(&remaining, remaining_total, unknown_count)
                    .into_iter()
                    .map(|entry| RankedCard {
                        card: entry.card.to_string(),
                        expected: entry.expected,
                        probability_percent: entry.probability_percent,
                    })
                    .collect();
                let name = player
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("Player {}", index + 1));
                PlayerReport {
                    name,
                    unknown_count,
                    ranked,
                }
            })
            .collect();

        TableReport {
            remaining_total,
            remaining: deck_entries,
            players,
        }
    }
}

/// Snapshot of one calculation pass, in presentation vocabulary: cards as
/// canonical strings, remaining counts sorted descending, every player's
/// full ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableReport {
    pub remaining_total: u32,
    pub remaining: Vec<DeckEntry>,
    pub players: Vec<PlayerReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeckEntry {
    pub card: String,
    pub count: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerReport {
    pub name: String,
    pub unknown_count: u32,
    pub ranked: Vec<RankedCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedCard {
    pub card: String,
    pub expected: f64,
    pub probability_percent: f64,
}

impl TableReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
