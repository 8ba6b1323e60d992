use thiserror::Error;

/// Errors raised by card evaluation
#[derive(Debug, Error)]
pub enum ScoringError {
    /// Caller supplied an invalid or missing field
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read race card: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse race card: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ScoringError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ScoringError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Prefix the field path, e.g. "stall" -> "R2.horses[3].stall"
    pub fn within(self, scope: &str) -> Self {
        match self {
            ScoringError::InvalidInput { field, reason } => ScoringError::InvalidInput {
                field: format!("{}.{}", scope, field),
                reason,
            },
            other => other,
        }
    }
}

impl From<config::ConfigError> for ScoringError {
    fn from(err: config::ConfigError) -> Self {
        ScoringError::Config(err.to_string())
    }
}

/// Validation functions
pub fn validate_field_size(field_size: usize) -> Result<(), ScoringError> {
    if field_size == 0 {
        return Err(ScoringError::invalid(
            "field_size",
            "field size must be at least 1, got 0",
        ));
    }
    Ok(())
}

pub fn validate_stall(stall: i32) -> Result<(), ScoringError> {
    if stall < 1 {
        return Err(ScoringError::invalid(
            "stall",
            format!("stall must be a positive number, got {}", stall),
        ));
    }
    Ok(())
}

pub fn validate_entrant_name(name: &str) -> Result<(), ScoringError> {
    if name.trim().is_empty() {
        return Err(ScoringError::invalid("name", "entrant name is required"));
    }
    Ok(())
}

/// Distance only has to be present; no scorer reads its value
pub fn validate_distance(distance: Option<f64>) -> Result<f64, ScoringError> {
    distance.ok_or_else(|| ScoringError::invalid("distance", "race distance is required"))
}

pub fn validate_class_label(class_label: Option<&str>) -> Result<&str, ScoringError> {
    class_label.ok_or_else(|| ScoringError::invalid("class", "race class is required"))
}
