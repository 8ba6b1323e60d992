use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::{debug, info};

use crate::config::EvaluatorConfig;
use crate::core::{
    class_fitness, draw_bias, parse_form, reliability, round_to, RatingTables,
};
use crate::error::{
    validate_class_label, validate_distance, validate_entrant_name, validate_field_size,
    validate_stall, ScoringError,
};
use crate::models::{race_id, CardSelection, Entrant, Race, RaceSelection, ScoreSet, ScoredEntrant};

/// Contenders kept per race unless configured otherwise
pub const DEFAULT_TOP_N: usize = 2;

/// Heuristic race-card evaluator
///
/// Holds the read-only rating tables; every call is a pure function of its
/// inputs, so one evaluator can be shared freely.
#[derive(Debug, Clone)]
pub struct RaceEvaluator {
    tables: RatingTables,
    top_n: usize,
}

impl RaceEvaluator {
    pub fn new(tables: RatingTables, top_n: usize) -> Self {
        Self { tables, top_n }
    }

    pub fn from_config(config: &EvaluatorConfig) -> Self {
        Self::new(config.rating_tables(), config.top_n)
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn tables(&self) -> &RatingTables {
        &self.tables
    }

    /// Score a single entrant
    ///
    /// # Arguments
    /// * `entrant` - Horse to score
    /// * `field_size` - Number of runners in the race
    /// * `distance` - Race distance in furlongs
    /// * `track` - Track name
    /// * `class_label` - Race class, e.g. "Group 1"
    ///
    /// Returns Err if the field size or stall is invalid
    pub fn score_entrant(
        &self,
        entrant: &Entrant,
        field_size: usize,
        distance: f64,
        track: &str,
        class_label: &str,
    ) -> Result<ScoreSet, ScoringError> {
        validate_field_size(field_size)?;
        validate_stall(entrant.stall)?;

        let form = parse_form(&entrant.form);

        let reliability = reliability(&form, entrant.official_rating, entrant.age);
        let draw_bias = draw_bias(entrant.stall, field_size, distance, track);
        let connections = self
            .tables
            .connections(&entrant.trainer, &entrant.jockey, &form);
        let class_fitness = class_fitness(
            entrant.official_rating,
            &entrant.cd,
            entrant.age,
            class_label,
        );

        let primary = round_to(reliability + draw_bias + connections, 1);
        let total = round_to(primary + class_fitness as f64, 1);

        debug!(
            "{}: rel={} map={} csi={} tpi={} primary={} total={}",
            entrant.name, reliability, draw_bias, connections, class_fitness, primary, total
        );

        Ok(ScoreSet {
            reliability,
            draw_bias,
            connections,
            class_fitness,
            primary,
            total,
        })
    }

    /// Score every entrant in a race and sort best first
    ///
    /// Ordering is by total, then primary, then class/fitness, all
    /// descending. Full ties keep card order.
    pub fn rank_race(&self, race: &Race) -> Result<Vec<ScoredEntrant>, ScoringError> {
        let (distance, class_label) = validate_race(race)?;
        let field_size = race.field_size();

        let mut scored = race
            .entrants
            .iter()
            .map(|entrant| -> Result<ScoredEntrant, ScoringError> {
                let scores =
                    self.score_entrant(entrant, field_size, distance, &race.track, class_label)?;
                Ok(ScoredEntrant {
                    name: entrant.name.clone(),
                    stall: entrant.stall,
                    cd: entrant.cd.clone(),
                    scores,
                })
            })
            .collect::<Result<Vec<_>, ScoringError>>()?;

        scored.sort_by(compare_scores);
        Ok(scored)
    }

    /// Top contenders for every race on a card
    ///
    /// Races are keyed "R1", "R2", ... by card position. Races are scored in
    /// parallel; the result is identical to scoring them in order, including
    /// which error is returned when several races are invalid.
    pub fn evaluate_card(&self, races: &[Race]) -> Result<CardSelection, ScoringError> {
        let results: Vec<Result<RaceSelection, ScoringError>> = races
            .par_iter()
            .enumerate()
            .map(|(i, race)| -> Result<RaceSelection, ScoringError> {
                let id = race_id(i);
                let mut ranked = self.rank_race(race).map_err(|e| e.within(&id))?;
                ranked.truncate(self.top_n);
                Ok(RaceSelection {
                    race_id: id,
                    contenders: ranked,
                })
            })
            .collect();
        // First invalid race in card order wins
        let selections = results.into_iter().collect::<Result<Vec<_>, _>>()?;

        info!("Evaluated {} races", selections.len());
        Ok(CardSelection { races: selections })
    }
}

impl Default for RaceEvaluator {
    fn default() -> Self {
        Self::new(RatingTables::default(), DEFAULT_TOP_N)
    }
}

/// Evaluate a card with the built-in rating tables and a top-2 cut
pub fn evaluate_card(races: &[Race]) -> Result<CardSelection, ScoringError> {
    RaceEvaluator::default().evaluate_card(races)
}

/// Score one entrant with the built-in rating tables
pub fn score_entrant(
    entrant: &Entrant,
    field_size: usize,
    distance: f64,
    track: &str,
    class_label: &str,
) -> Result<ScoreSet, ScoringError> {
    RaceEvaluator::default().score_entrant(entrant, field_size, distance, track, class_label)
}

/// Check the fields a race needs before any entrant is scored
fn validate_race(race: &Race) -> Result<(f64, &str), ScoringError> {
    validate_field_size(race.field_size())?;
    let distance = validate_distance(race.distance)?;
    let class_label = validate_class_label(race.class_label.as_deref())?;

    for (i, entrant) in race.entrants.iter().enumerate() {
        let scope = format!("horses[{}]", i);
        validate_entrant_name(&entrant.name).map_err(|e| e.within(&scope))?;
        validate_stall(entrant.stall).map_err(|e| e.within(&scope))?;
    }

    Ok((distance, class_label))
}

fn compare_scores(a: &ScoredEntrant, b: &ScoredEntrant) -> Ordering {
    b.scores
        .total
        .partial_cmp(&a.scores.total)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            b.scores
                .primary
                .partial_cmp(&a.scores.primary)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| b.scores.class_fitness.cmp(&a.scores.class_fitness))
}
