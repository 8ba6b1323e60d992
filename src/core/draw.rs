//! Draw (stall) bias
//!
//! Low stalls are favoured, high stalls penalised. The effect is amplified in
//! big fields and dampened in small ones.

use super::round_to;

const INSIDE_DRAW: f64 = 0.8;
const OUTSIDE_DRAW: f64 = -0.6;
const MIDDLE_DRAW: f64 = 0.1;

const LARGE_FIELD: usize = 14;
const SMALL_FIELD: usize = 8;

/// Calculate the draw bias for a stall
///
/// `distance` and `track` are part of the signature for track-specific bias
/// tables; they do not currently affect the result.
pub fn draw_bias(stall: i32, field_size: usize, _distance: f64, _track: &str) -> f64 {
    let stall = stall as f64;
    let field = field_size as f64;

    let base = if stall <= field * 0.3 {
        INSIDE_DRAW
    } else if stall >= field * 0.7 {
        OUTSIDE_DRAW
    } else {
        MIDDLE_DRAW
    };

    let scaled = if field_size >= LARGE_FIELD {
        base * 1.3
    } else if field_size <= SMALL_FIELD {
        base * 0.7
    } else {
        base
    };

    round_to(scaled, 1)
}
