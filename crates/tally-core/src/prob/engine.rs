use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::prob::combinatorics::probability_at_least_one;
use serde::{Deserialize, Serialize};

/// Outlook for a single card type among one player's unknown cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardProbability {
    pub card: Card,
    /// Hypergeometric mean: expected number of copies among the unknown cards.
    pub expected: f64,
    /// Chance of holding at least one copy, in percent.
    pub probability_percent: f64,
}

/// Rank every card type in the remaining deck for a player holding
/// `unknown_count` unknown cards.
///
/// All 50 types are ranked, zero-count types included; those come out at
/// zero expectation and zero probability and sink to the tail. The sort is
/// stable, so ties keep canonical deck order. The full list is returned;
/// truncating to a display-worthy top-N is the caller's concern.
pub fn rank_for_player(
    deck: &Deck,
    remaining_total: u32,
    unknown_count: u32,
) -> Vec<CardProbability> {
    let mut ranked: Vec<CardProbability> = deck
        .entries()
        .map(|(card, count)| {
            let expected = if remaining_total > 0 {
                f64::from(unknown_count) * f64::from(count) / f64::from(remaining_total)
            } else {
                0.0
            };
            let probability_percent =
                probability_at_least_one(remaining_total, u32::from(count), unknown_count) * 100.0;
            CardProbability {
                card,
                expected,
                probability_percent,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.probability_percent
            .partial_cmp(&a.probability_percent)
            .unwrap_or(core::cmp::Ordering::Equal)
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::rank_for_player;
    use crate::model::card::Card;
    use crate::model::color::Color;
    use crate::model::deck::{Deck, TOTAL_CARDS};

    #[test]
    fn ranks_every_card_type() {
        let deck = Deck::phase_ten();
        let ranked = rank_for_player(&deck, deck.total(), 5);
        assert_eq!(ranked.len(), Card::TYPE_COUNT);
    }

    #[test]
    fn wild_tops_the_full_deck_ranking() {
        let deck = Deck::phase_ten();
        let ranked = rank_for_player(&deck, deck.total(), 5);
        assert_eq!(ranked[0].card, Card::Wild);
        assert_eq!(ranked[1].card, Card::Skip);
        assert!((ranked[0].expected - 5.0 * 8.0 / f64::from(TOTAL_CARDS)).abs() < 1e-12);
    }

    #[test]
    fn ties_keep_canonical_deck_order() {
        let deck = Deck::phase_ten();
        let ranked = rank_for_player(&deck, deck.total(), 5);
        // all 48 colored types share a count of 2, so they tie
        let colored: Vec<_> = ranked
            .iter()
            .filter(|entry| !entry.card.is_special())
            .map(|entry| entry.card)
            .collect();
        assert_eq!(colored[0], Card::colored(Color::Red, 1).unwrap());
        assert_eq!(colored[47], Card::colored(Color::Blue, 12).unwrap());
    }

    #[test]
    fn expected_mass_sums_to_unknown_count() {
        let deck = Deck::phase_ten().without(&[Card::Wild, Card::Skip, Card::Wild]);
        let unknown = 7;
        let ranked = rank_for_player(&deck, deck.total(), unknown);
        let mass: f64 = ranked.iter().map(|entry| entry.expected).sum();
        assert!((mass - f64::from(unknown)).abs() < 1e-9);
    }

    #[test]
    fn empty_pool_yields_zeroes() {
        let deck = Deck::phase_ten();
        let ranked = rank_for_player(&deck, 0, 5);
        assert!(ranked.iter().all(|entry| entry.expected == 0.0));
        assert!(ranked.iter().all(|entry| entry.probability_percent == 0.0));
    }

    #[test]
    fn zero_count_types_sink_to_the_tail() {
        let red_one = Card::colored(Color::Red, 1).unwrap();
        let deck = Deck::phase_ten().without(&[red_one, red_one]);
        let ranked = rank_for_player(&deck, deck.total(), 5);
        let last = ranked.last().expect("non-empty ranking");
        assert_eq!(last.card, red_one);
        assert_eq!(last.probability_percent, 0.0);
    }
}
