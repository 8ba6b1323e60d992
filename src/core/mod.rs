//! Core scoring functions

pub mod class_fitness;
pub mod connections;
pub mod draw;
pub mod form;
pub mod reliability;

// Re-export commonly used types
pub use class_fitness::class_fitness;
pub use connections::{RatingEntry, RatingTable, RatingTables};
pub use draw::draw_bias;
pub use form::{parse_form, ParsedForm};
pub use reliability::reliability;

/// Round to `decimals` places, correctly rounded on the exact binary value
///
/// Scaling by 10^d first would round the scaled product instead, so
/// 1.05 + 1.0 (stored just below 2.05) would wrongly become 2.1.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value)
        .parse::<f64>()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.04, 1), 1.0);
        assert_eq!(round_to(-0.42, 1), -0.4);
        assert_eq!(round_to(-0.78, 1), -0.8);
        assert_eq!(round_to(3.316, 2), 3.32);
        assert_eq!(round_to(7.0, 1), 7.0);
    }

    #[test]
    fn test_round_to_uses_stored_value_not_scaled_product() {
        // 1.05 + 1.0 is stored as 2.04999..., so it rounds down
        assert_eq!(round_to(1.05 + 1.0 + 0.0, 1), 2.0);
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(0.15, 1), 0.1);
        assert_eq!(round_to(1.0 * 1.15, 2), 1.15);
    }
}
