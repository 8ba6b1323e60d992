use serde::{Deserialize, Serialize};

fn default_stall() -> i32 {
    1
}

fn default_age() -> i32 {
    5
}

fn default_official_rating() -> i32 {
    60
}

/// Horse entry on a race card
///
/// Optional fields fall back to neutral values when absent from the input
/// (stall 1, age 5, rating 60, empty strings elsewhere).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entrant {
    pub name: String,
    #[serde(default = "default_stall")]
    pub stall: i32,
    #[serde(default = "default_age")]
    pub age: i32,
    /// Official handicap rating
    #[serde(rename = "or", default = "default_official_rating")]
    pub official_rating: i32,
    /// Raw form figures, oldest first (e.g. "1-2-F3-0")
    #[serde(default)]
    pub form: String,
    /// Course-and-distance winner markers (e.g. "CD", "C", "D")
    #[serde(default)]
    pub cd: String,
    #[serde(default)]
    pub trainer: String,
    #[serde(default)]
    pub jockey: String,
}

impl Entrant {
    /// Create an entrant with default attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stall: default_stall(),
            age: default_age(),
            official_rating: default_official_rating(),
            form: String::new(),
            cd: String::new(),
            trainer: String::new(),
            jockey: String::new(),
        }
    }
}

/// A single race: entrants plus race conditions
///
/// `distance` and `class` are required; they are kept optional here so that a
/// missing value is reported by validation with the field name instead of a
/// generic deserialization error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    #[serde(rename = "horses", alias = "entrants", default)]
    pub entrants: Vec<Entrant>,
    /// Distance in furlongs
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub track: String,
    /// Class label, e.g. "Group 1", "Listed", "Handicap"
    #[serde(rename = "class", default)]
    pub class_label: Option<String>,
}

impl Race {
    /// Number of runners (field size)
    pub fn field_size(&self) -> usize {
        self.entrants.len()
    }

    pub fn class_label(&self) -> &str {
        self.class_label.as_deref().unwrap_or("")
    }
}

/// Sub-scores and composites for one entrant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    /// Recent-form reliability, 1.0-4.0
    pub reliability: f64,
    /// Draw (stall position) bias
    pub draw_bias: f64,
    /// Trainer + jockey rating, 0.0-10.0
    pub connections: f64,
    /// Class and fitness points, 0-12
    pub class_fitness: u8,
    /// reliability + draw_bias + connections
    pub primary: f64,
    /// primary + class_fitness (ranking key)
    pub total: f64,
}

/// Entrant with its scores, as emitted by the evaluator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntrant {
    pub name: String,
    pub stall: i32,
    pub cd: String,
    #[serde(flatten)]
    pub scores: ScoreSet,
}

/// Top contenders for one race
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceSelection {
    /// 1-based race id ("R1", "R2", ...)
    pub race_id: String,
    pub contenders: Vec<ScoredEntrant>,
}

/// Selections for a whole card, in race order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardSelection {
    pub races: Vec<RaceSelection>,
}

impl CardSelection {
    /// Look up a race's contenders by id
    pub fn get(&self, race_id: &str) -> Option<&[ScoredEntrant]> {
        self.races
            .iter()
            .find(|r| r.race_id == race_id)
            .map(|r| r.contenders.as_slice())
    }

    pub fn len(&self) -> usize {
        self.races.len()
    }

    pub fn is_empty(&self) -> bool {
        self.races.is_empty()
    }
}

/// Race id for a 0-based card position
pub fn race_id(index: usize) -> String {
    format!("R{}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrant_defaults_when_fields_missing() {
        let entrant: Entrant = serde_json::from_str(r#"{"name": "Lone Star"}"#).unwrap();

        assert_eq!(entrant.stall, 1);
        assert_eq!(entrant.age, 5);
        assert_eq!(entrant.official_rating, 60);
        assert!(entrant.form.is_empty());
        assert!(entrant.cd.is_empty());
        assert!(entrant.trainer.is_empty());
        assert!(entrant.jockey.is_empty());
        assert_eq!(entrant, Entrant::new("Lone Star"));
    }

    #[test]
    fn test_entrant_reads_or_key() {
        let entrant: Entrant =
            serde_json::from_str(r#"{"name": "Rated", "or": 97, "cd": "CD"}"#).unwrap();
        assert_eq!(entrant.official_rating, 97);
        assert_eq!(entrant.cd, "CD");
    }

    #[test]
    fn test_race_missing_required_fields_deserialize_as_none() {
        let race: Race = serde_json::from_str(r#"{"horses": [{"name": "A"}]}"#).unwrap();
        assert_eq!(race.field_size(), 1);
        assert!(race.distance.is_none());
        assert!(race.class_label.is_none());
        assert_eq!(race.class_label(), "");
    }

    #[test]
    fn test_card_selection_lookup() {
        let selection = CardSelection {
            races: vec![RaceSelection {
                race_id: race_id(0),
                contenders: vec![],
            }],
        };

        assert_eq!(selection.len(), 1);
        assert!(selection.get("R1").is_some());
        assert!(selection.get("R2").is_none());
    }

    #[test]
    fn test_race_id_is_one_based() {
        assert_eq!(race_id(0), "R1");
        assert_eq!(race_id(9), "R10");
    }
}
