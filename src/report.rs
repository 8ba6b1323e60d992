//! Plain-text tables for ranked races and card selections

use std::fmt::Write;

use crate::models::{CardSelection, Race, ScoredEntrant};

const RULE_WIDTH: usize = 78;

/// Format a distance in furlongs without a trailing ".0"
fn format_distance(distance: Option<f64>) -> String {
    match distance {
        Some(d) if d.fract() == 0.0 => format!("{}f", d as i64),
        Some(d) => format!("{}f", d),
        None => "-".to_string(),
    }
}

/// Header line for a race, e.g. "Race 1 — Ascot Group 1 8f"
pub fn race_header(race_no: usize, race: &Race) -> String {
    format!(
        "Race {} — {} {} {}",
        race_no,
        race.track,
        race.class_label(),
        format_distance(race.distance)
    )
}

fn truncate_name(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        name.to_string()
    } else {
        name.chars().take(max_chars).collect()
    }
}

fn push_rows(out: &mut String, rows: &[ScoredEntrant]) {
    let _ = writeln!(
        out,
        "{:<20} {:>5} {:>5} {:>5} {:>5} {:<4} {:>4} {:>8} {:>7}",
        "Horse", "Stall", "REL", "MAP", "CSI", "CD", "TPI", "Primary", "Total"
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

    for entry in rows {
        let s = &entry.scores;
        let _ = writeln!(
            out,
            "{:<20} {:>5} {:>5.2} {:>5.1} {:>5.1} {:<4} {:>4} {:>8.1} {:>7.1}",
            truncate_name(&entry.name, 20),
            entry.stall,
            s.reliability,
            s.draw_bias,
            s.connections,
            entry.cd,
            s.class_fitness,
            s.primary,
            s.total
        );
    }
}

/// Full ranked table for one race
///
/// `ranked` is expected to be sorted already (see `RaceEvaluator::rank_race`).
pub fn format_race_table(race_no: usize, race: &Race, ranked: &[ScoredEntrant]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, " {}", race_header(race_no, race));
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    push_rows(&mut out, ranked);
    out
}

/// Top contenders for each race on a card
pub fn format_selection(selection: &CardSelection) -> String {
    let mut out = String::new();
    for race in &selection.races {
        let _ = writeln!(out, "{}:", race.race_id);
        push_rows(&mut out, &race.contenders);
        out.push('\n');
    }
    out
}
