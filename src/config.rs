//! Configuration for the card evaluator.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::core::{RatingEntry, RatingTable, RatingTables};
use crate::error::ScoringError;

fn default_top_n() -> usize {
    2
}

/// Evaluator configuration
///
/// Sources, lowest priority first: built-in defaults, `racecard.toml` (or an
/// explicit file), then `RACECARD_*` environment variables
/// (e.g. `RACECARD_TOP_N=3`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Contenders kept per race
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Replacement trainer table, in match-priority order
    #[serde(default)]
    pub trainers: Option<Vec<RatingEntry>>,
    /// Replacement jockey table, in match-priority order
    #[serde(default)]
    pub jockeys: Option<Vec<RatingEntry>>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            trainers: None,
            jockeys: None,
        }
    }
}

impl EvaluatorConfig {
    /// Load configuration from defaults, config file and environment
    pub fn load(path: Option<&Path>) -> Result<Self, ScoringError> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::with_name("racecard").required(false),
        };

        let settings = config::Config::builder()
            .set_default("top_n", default_top_n() as u64)?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("RACECARD")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: EvaluatorConfig = settings.try_deserialize()?;
        info!("Evaluator configuration loaded (top_n = {})", loaded.top_n);
        Ok(loaded)
    }

    /// Rating tables, with any configured table replacing the built-in one
    pub fn rating_tables(&self) -> RatingTables {
        let trainers = match &self.trainers {
            Some(entries) => {
                warn!("Using configured trainer table ({} entries)", entries.len());
                RatingTable::from_entries(entries)
            }
            None => RatingTable::default_trainers(),
        };
        let jockeys = match &self.jockeys {
            Some(entries) => {
                warn!("Using configured jockey table ({} entries)", entries.len());
                RatingTable::from_entries(entries)
            }
            None => RatingTable::default_jockeys(),
        };

        RatingTables::new(trainers, jockeys)
    }
}
