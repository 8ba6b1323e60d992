//! Racecard - heuristic horse race card evaluator
//!
//! This library provides:
//! - Form figure parsing
//! - Reliability, draw-bias, connections and class/fitness scoring
//! - Per-race ranking and top-contender selection
//! - Race card loading and plain-text tables
//!
//! # Example
//!
//! ```
//! use racecard::{evaluate_card, Entrant, Race};
//!
//! let race = Race {
//!     entrants: vec![
//!         Entrant { stall: 1, form: "1-2-1".into(), ..Entrant::new("Alpha") },
//!         Entrant { stall: 6, form: "0-9-P".into(), ..Entrant::new("Beta") },
//!         Entrant { stall: 4, form: "3-3-2".into(), ..Entrant::new("Gamma") },
//!     ],
//!     distance: Some(8.0),
//!     track: "Newmarket".into(),
//!     class_label: Some("Listed".into()),
//! };
//!
//! let selection = evaluate_card(&[race]).unwrap();
//! let top = selection.get("R1").unwrap();
//! assert_eq!(top.len(), 2);
//! assert_eq!(top[0].name, "Alpha");
//! ```

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod evaluator;
pub mod models;
pub mod report;

// Re-export commonly used types
pub use config::EvaluatorConfig;
pub use data::RaceCard;
pub use error::ScoringError;
pub use evaluator::{evaluate_card, score_entrant, RaceEvaluator};
pub use models::{CardSelection, Entrant, Race, RaceSelection, ScoreSet, ScoredEntrant};
