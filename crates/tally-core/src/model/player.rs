use crate::model::card::Card;

/// One player's view state: which of their cards are known, which they have
/// discarded, and optionally a manual override of how many of their cards
/// remain unknown. Mutated freely by the caller between calculation passes.
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    /// Display label; reports fall back to "Player N" when unset.
    pub name: Option<String>,
    pub known_hand: Vec<Card>,
    pub discarded: Vec<Card>,
    pub unknown_override: Option<u32>,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of unknown cards this player holds: the manual override when
    /// one is set, otherwise the hand size minus the known cards, floored
    /// at zero.
    pub fn unknown_count(&self, hand_size: u32) -> u32 {
        match self.unknown_override {
            Some(count) => count,
            None => hand_size.saturating_sub(self.known_hand.len() as u32),
        }
    }

    /// Every card this player accounts for, known hand first, then discards.
    pub fn observed(&self) -> impl Iterator<Item = Card> + '_ {
        self.known_hand
            .iter()
            .chain(self.discarded.iter())
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::PlayerState;
    use crate::model::card::Card;
    use crate::model::color::Color;

    #[test]
    fn unknown_count_derives_from_hand_size() {
        let mut player = PlayerState::new();
        player.known_hand = vec![Card::Wild, Card::colored(Color::Red, 3).unwrap()];
        assert_eq!(player.unknown_count(10), 8);
    }

    #[test]
    fn unknown_count_floors_at_zero() {
        let mut player = PlayerState::new();
        player.known_hand = vec![Card::Wild; 12];
        assert_eq!(player.unknown_count(10), 0);
    }

    #[test]
    fn override_wins_over_derivation() {
        let mut player = PlayerState::new();
        player.known_hand = vec![Card::Skip];
        player.unknown_override = Some(4);
        assert_eq!(player.unknown_count(10), 4);
    }

    #[test]
    fn observed_chains_hand_and_discards() {
        let mut player = PlayerState::new();
        player.known_hand = vec![Card::Wild];
        player.discarded = vec![Card::Skip];
        let observed: Vec<_> = player.observed().collect();
        assert_eq!(observed, vec![Card::Wild, Card::Skip]);
    }
}
