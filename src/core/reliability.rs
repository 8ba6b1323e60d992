//! Form Reliability
//!
//! Scores how dependable a horse's recent form is, combining three signals:
//!
//! - recency-weighted finishing points over the last 8 runs
//! - consistency (wins / places / top-6 frames) over the last 12 runs
//! - momentum: the last 3 runs against the 3 before them
//!
//! The result is adjusted for age and official rating and always lies in
//! [1.0, 4.0].

use super::round_to;

/// Lower bound; also the score for an unraced horse
pub const MIN_RELIABILITY: f64 = 1.0;
pub const MAX_RELIABILITY: f64 = 4.0;

/// Recency weights, oldest to newest of the last 8 runs
const RECENCY_WEIGHTS: [f64; 8] = [1.0, 1.2, 1.5, 1.8, 2.2, 2.8, 3.2, 3.5];

/// Runs considered for consistency
const CONSISTENCY_WINDOW: usize = 12;

/// Runs needed before momentum is measured (two blocks of 3)
const MOMENTUM_MIN_RUNS: usize = 6;

const SCORE_DIVISOR: f64 = 25.0;

/// Points for a finishing position before the recency weight is applied
fn finish_points(position: u8) -> f64 {
    match position {
        1 => 8.0,
        2 => 5.5,
        3 => 4.0,
        4..=6 => 2.0,
        7..=10 => 0.5,
        _ => 0.0,
    }
}

/// Recency-weighted points over the last 8 runs
///
/// With fewer than 8 runs the weights are taken from the start of the list,
/// so a short record never receives the heaviest weights.
pub fn weighted_form_score(form: &[u8]) -> f64 {
    let recent = &form[form.len().saturating_sub(RECENCY_WEIGHTS.len())..];
    recent
        .iter()
        .zip(RECENCY_WEIGHTS.iter())
        .map(|(&pos, &w)| finish_points(pos) * w)
        .sum()
}

/// (3 x wins + 2 x places + frames) / runs over the last 12 runs
pub fn consistency(form: &[u8]) -> f64 {
    let extended = &form[form.len().saturating_sub(CONSISTENCY_WINDOW)..];
    if extended.is_empty() {
        return 0.0;
    }

    let wins = extended.iter().filter(|&&p| p == 1).count();
    let places = extended.iter().filter(|&&p| p <= 3).count();
    let frames = extended.iter().filter(|&&p| p <= 6).count();

    (wins * 3 + places * 2 + frames) as f64 / extended.len() as f64
}

/// Momentum bonus from the change in average position
///
/// Positive when the last 3 runs average a better (lower) position than the 3
/// runs before them.
pub fn momentum(form: &[u8]) -> f64 {
    if form.len() < MOMENTUM_MIN_RUNS {
        return 0.0;
    }

    let n = form.len();
    let early = mean(&form[n - 6..n - 3]);
    let recent = mean(&form[n - 3..]);
    let improvement = early - recent;

    if improvement >= 3.0 {
        2.0
    } else if improvement >= 1.5 {
        1.0
    } else if improvement >= 0.5 {
        0.5
    } else if improvement <= -3.0 {
        -2.0
    } else if improvement <= -1.5 {
        -1.0
    } else if improvement <= -0.5 {
        -0.5
    } else {
        0.0
    }
}

fn mean(positions: &[u8]) -> f64 {
    positions.iter().map(|&p| p as f64).sum::<f64>() / positions.len() as f64
}

fn age_multiplier(age: i32) -> f64 {
    match age {
        3 => 1.15,
        4 => 1.10,
        a if a >= 8 => 0.90,
        _ => 1.0,
    }
}

fn rating_multiplier(official_rating: i32) -> f64 {
    if official_rating >= 85 {
        0.95
    } else if official_rating <= 55 {
        1.05
    } else {
        1.0
    }
}

/// Calculate the reliability score for a parsed form
///
/// # Arguments
/// * `form` - Parsed positions, most recent last
/// * `official_rating` - Official handicap rating
/// * `age` - Horse age in years
///
/// # Returns
/// Score in [1.0, 4.0], rounded to 2 decimals
pub fn reliability(form: &[u8], official_rating: i32, age: i32) -> f64 {
    if form.is_empty() {
        return MIN_RELIABILITY;
    }

    let raw = weighted_form_score(form) / SCORE_DIVISOR + consistency(form) + momentum(form);
    let base = raw.clamp(MIN_RELIABILITY, MAX_RELIABILITY);
    let adjusted = base * age_multiplier(age) * rating_multiplier(official_rating);

    round_to(adjusted.clamp(MIN_RELIABILITY, MAX_RELIABILITY), 2)
}
