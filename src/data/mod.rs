//! Race card loading

pub mod card_loader;

pub use card_loader::RaceCard;
