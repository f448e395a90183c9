pub mod card;
pub mod color;
pub mod deck;
pub mod player;
