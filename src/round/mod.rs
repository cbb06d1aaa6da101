//! Round state: cards, score, and the deal.

pub mod card;
pub mod state;

pub use card::Card;
pub use state::Round;
