//! Connections (trainer + jockey) rating
//!
//! Names are matched against ordered rating tables by substring: the first
//! table key contained in the lower-cased name wins. Order matters because
//! keys overlap (several O'Briens, shared surnames), so the tables are kept
//! as ordered pairs rather than maps.

use serde::{Deserialize, Serialize};

use super::round_to;

pub const MAX_CONNECTIONS: f64 = 10.0;

/// Built-in trainer ratings, in match-priority order
const TRAINER_RATINGS: &[(&str, f64)] = &[
    ("aidan o'brien", 4.0),
    ("a p o'brien", 4.0),
    ("joseph patrick o'brien", 3.8),
    ("donnacha o'brien", 3.5),
    ("dermot weld", 3.2),
    ("jessica harrington", 2.8),
    ("william haggas", 3.5),
    ("john gosden", 3.5),
    ("j & t gosden", 3.5),
    ("charlie appleby", 3.2),
    ("sir michael stoute", 3.0),
    ("roger varian", 2.6),
    ("andrew balding", 2.4),
    ("ralph beckett", 2.2),
    ("tim easterby", 2.8),
    ("richard fahey", 2.6),
    ("david o'meara", 2.2),
    ("michael dods", 2.0),
    ("kevin ryan", 1.8),
    ("john quinn", 1.6),
];

/// Built-in jockey ratings, in match-priority order
const JOCKEY_RATINGS: &[(&str, f64)] = &[
    ("ryan moore", 3.0),
    ("william buick", 2.8),
    ("frankie dettori", 2.8),
    ("james doyle", 2.4),
    ("tom marquand", 2.4),
    ("oisin murphy", 2.6),
    ("jim crowley", 2.2),
    ("silvestre de sousa", 2.2),
    ("rossa ryan", 2.0),
    ("daniel tudhope", 2.4),
    ("colin keane", 2.4),
    ("seamie heffernan", 2.8),
    ("wayne lordan", 2.2),
];

/// One row of a rating table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingEntry {
    /// Partial name, matched as a lower-case substring
    pub name: String,
    pub weight: f64,
}

/// Ordered name -> weight table with first-match-wins lookup
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RatingTable {
    entries: Vec<(String, f64)>,
}

impl RatingTable {
    /// Build a table, lower-casing keys and keeping their order
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, weight)| (name.as_ref().to_lowercase(), weight))
                .collect(),
        }
    }

    pub fn from_entries(entries: &[RatingEntry]) -> Self {
        Self::new(entries.iter().map(|e| (e.name.as_str(), e.weight)))
    }

    pub fn default_trainers() -> Self {
        Self::new(TRAINER_RATINGS.iter().copied())
    }

    pub fn default_jockeys() -> Self {
        Self::new(JOCKEY_RATINGS.iter().copied())
    }

    /// Weight of the first key contained in `name` (case-insensitive)
    pub fn lookup(&self, name: &str) -> Option<f64> {
        let name = name.to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| name.contains(key.as_str()))
            .map(|&(_, weight)| weight)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trainer and jockey tables, read-only for the lifetime of an evaluator
#[derive(Debug, Clone, PartialEq)]
pub struct RatingTables {
    pub trainers: RatingTable,
    pub jockeys: RatingTable,
}

impl RatingTables {
    pub fn new(trainers: RatingTable, jockeys: RatingTable) -> Self {
        Self { trainers, jockeys }
    }

    /// Connections score for a trainer/jockey pair
    ///
    /// The parsed form is accepted for form-adjusted connection ratings and
    /// is not used yet.
    pub fn connections(&self, trainer: &str, jockey: &str, _form: &[u8]) -> f64 {
        let trainer_score = self.trainers.lookup(trainer).unwrap_or(0.0);
        let jockey_score = self.jockeys.lookup(jockey).unwrap_or(0.0);

        round_to((trainer_score + jockey_score).min(MAX_CONNECTIONS), 1)
    }
}

impl Default for RatingTables {
    fn default() -> Self {
        Self::new(RatingTable::default_trainers(), RatingTable::default_jockeys())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_connections() {
        let tables = RatingTables::default();
        assert_eq!(tables.connections("Aidan O'Brien", "Ryan Moore", &[]), 7.0);
    }

    #[test]
    fn test_partial_name_matches() {
        let tables = RatingTables::default();
        assert_eq!(tables.connections("Mrs John Quinn", "", &[]), 1.6);
        assert_eq!(tables.connections("", "Rossa Ryan", &[]), 2.0);
        assert_eq!(tables.connections("J & T Gosden", "Frankie Dettori", &[]), 6.3);
    }

    #[test]
    fn test_unknown_connections_score_zero() {
        let tables = RatingTables::default();
        assert_eq!(tables.connections("Unknown", "Nobody", &[]), 0.0);
        assert_eq!(tables.connections("", "", &[]), 0.0);
    }

    #[test]
    fn test_first_defined_key_wins() {
        // Both keys match; the earlier one is used even though the later is longer
        let table = RatingTable::new([("o'brien", 1.0), ("joseph patrick o'brien", 3.8)]);
        assert_eq!(table.lookup("Joseph Patrick O'Brien"), Some(1.0));

        let reversed = RatingTable::new([("joseph patrick o'brien", 3.8), ("o'brien", 1.0)]);
        assert_eq!(reversed.lookup("Joseph Patrick O'Brien"), Some(3.8));
    }

    #[test]
    fn test_table_keys_lowercased() {
        let table = RatingTable::new([("Ryan MOORE", 3.0)]);
        assert_eq!(table.lookup("ryan moore"), Some(3.0));
    }

    #[test]
    fn test_connections_capped() {
        let tables = RatingTables::new(
            RatingTable::new([("big yard", 7.5)]),
            RatingTable::new([("top jock", 6.0)]),
        );
        assert_eq!(tables.connections("Big Yard", "Top Jock", &[]), MAX_CONNECTIONS);
    }

    #[test]
    fn test_default_tables_sizes() {
        assert_eq!(RatingTable::default_trainers().len(), 20);
        assert_eq!(RatingTable::default_jockeys().len(), 13);
    }
}
