//! Card metadata used to narrow arena matching

pub mod card;
pub mod catalog;

pub use card::{Card, CardType, NEUTRAL};
pub use catalog::CardCatalog;
