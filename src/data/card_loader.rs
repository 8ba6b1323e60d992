//! Race card loading from JSON
//!
//! Accepts either a bare array of races or an object with a `races` key:
//!
//! ```json
//! [{"track": "Ascot", "class": "Group 1", "distance": 8,
//!   "horses": [{"name": "Frankel", "stall": 3, "form": "111", "or": 140}]}]
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::ScoringError;
use crate::models::Race;

#[derive(Deserialize)]
#[serde(untagged)]
enum CardDocument {
    Races(Vec<Race>),
    Card { races: Vec<Race> },
}

/// A full race card, in running order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RaceCard {
    pub races: Vec<Race>,
}

impl RaceCard {
    /// Parse a race card from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, ScoringError> {
        let races = match serde_json::from_str::<CardDocument>(json)? {
            CardDocument::Races(races) => races,
            CardDocument::Card { races } => races,
        };
        Ok(Self { races })
    }

    /// Load a race card from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScoringError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let card = Self::from_json_str(&text)?;
        info!("Loaded {} races from {:?}", card.races.len(), path);
        Ok(card)
    }

    pub fn len(&self) -> usize {
        self.races.len()
    }

    pub fn is_empty(&self) -> bool {
        self.races.is_empty()
    }
}
