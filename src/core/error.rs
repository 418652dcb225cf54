//! Validation errors raised while constructing game graphs and lock models.
//!
//! Every error here is a caller-supplied configuration problem detected at
//! construction time. The solver itself is total and never fails.

use thiserror::Error;

/// Construction-time precondition violation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("initial location {initial} is not in the location set")]
    InitialNotInLocations { initial: String },

    #[error("transition ({from}, {action}, {to}) is not in locations x actions x locations")]
    TransitionOutOfDomain {
        from: String,
        action: String,
        to: String,
    },

    #[error("hand size {hand} exceeds hole count {holes}")]
    HandExceedsHoles { hand: usize, holes: usize },

    #[error("hand size must be at least 1")]
    EmptyHand,

    #[error("hole count {holes} must be between 1 and {max}")]
    HoleCount { holes: usize, max: usize },

    #[error("color count {colors} must be between 2 and {max}")]
    ColorCount { colors: usize, max: usize },

    #[error("palette must hold at least one color")]
    EmptyPalette,

    #[error("color {color} is outside a palette of {palette}")]
    ColorOutOfPalette { color: u8, palette: u8 },

    #[error("location {location} has no observation class")]
    ObservationMissing { location: String },

    #[error("invalid graph snapshot: {message}")]
    Snapshot { message: String },
}

/// Result alias for fallible constructors.
pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_error_message() {
        let err = ValidationError::HandExceedsHoles { hand: 5, holes: 4 };
        assert_eq!(err.to_string(), "hand size 5 exceeds hole count 4");
    }

    #[test]
    fn test_transition_error_message() {
        let err = ValidationError::TransitionOutOfDomain {
            from: "a".into(),
            action: "1".into(),
            to: "z".into(),
        };
        assert!(err.to_string().contains("(a, 1, z)"));
    }
}
