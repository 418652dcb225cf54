//! Lock puzzle configuration.
//!
//! A lock instance is described by three sizes and a seed:
//! - `holes`: positions on the ring (N)
//! - `hand`: positions the player may select and recolor per turn (n)
//! - `colors`: alphabet size (k); the binary model always uses 2
//! - `seed`: drives the initial coloring draw
//!
//! Configs are validated before any graph is built, so an invalid
//! instance never allocates its (possibly exponential) location space.

use serde::{Deserialize, Serialize};

use super::error::{Result, ValidationError};

/// Largest supported ring. Bit colorings live in a `u32`.
pub const MAX_HOLES: usize = 16;

/// Largest supported color alphabet.
pub const MAX_COLORS: usize = 8;

/// Size parameters and seed for a lock instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockConfig {
    /// Ring size (N).
    pub holes: usize,

    /// Hand size (n): how many holes are selected per turn.
    pub hand: usize,

    /// Alphabet size (k).
    pub colors: usize,

    /// Seed for the initial coloring draw.
    pub seed: u64,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            holes: 4,
            hand: 2,
            colors: 2,
            seed: 42,
        }
    }
}

impl LockConfig {
    /// Two-color lock with `holes` positions and a hand of `hand`.
    #[must_use]
    pub fn binary(holes: usize, hand: usize) -> Self {
        Self {
            holes,
            hand,
            colors: 2,
            ..Self::default()
        }
    }

    /// Lock over an alphabet of `colors` colors.
    #[must_use]
    pub fn colored(holes: usize, hand: usize, colors: usize) -> Self {
        Self {
            holes,
            hand,
            colors,
            ..Self::default()
        }
    }

    /// Set the ring size.
    #[must_use]
    pub fn with_holes(mut self, holes: usize) -> Self {
        self.holes = holes;
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand(mut self, hand: usize) -> Self {
        self.hand = hand;
        self
    }

    /// Set the alphabet size.
    #[must_use]
    pub fn with_colors(mut self, colors: usize) -> Self {
        self.colors = colors;
        self
    }

    /// Set the seed for the initial coloring.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the size parameters.
    ///
    /// Hand size is checked first so an oversized hand always reports
    /// `HandExceedsHoles`, whatever else is wrong.
    pub fn validate(&self) -> Result<()> {
        if self.hand > self.holes {
            return Err(ValidationError::HandExceedsHoles {
                hand: self.hand,
                holes: self.holes,
            });
        }
        if self.hand == 0 {
            return Err(ValidationError::EmptyHand);
        }
        if self.holes == 0 || self.holes > MAX_HOLES {
            return Err(ValidationError::HoleCount {
                holes: self.holes,
                max: MAX_HOLES,
            });
        }
        if !(2..=MAX_COLORS).contains(&self.colors) {
            return Err(ValidationError::ColorCount {
                colors: self.colors,
                max: MAX_COLORS,
            });
        }
        Ok(())
    }

    /// Number of distinct colorings, `colors ^ holes`.
    #[must_use]
    pub fn coloring_count(&self) -> usize {
        self.colors.pow(self.holes as u32)
    }

    /// Number of distinct recolorings of a full hand, `colors ^ hand`.
    #[must_use]
    pub fn recoloring_count(&self) -> usize {
        self.colors.pow(self.hand as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LockConfig::default();
        assert_eq!(config.holes, 4);
        assert_eq!(config.hand, 2);
        assert_eq!(config.colors, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = LockConfig::default()
            .with_holes(6)
            .with_hand(3)
            .with_colors(4)
            .with_seed(7);

        assert_eq!(config.holes, 6);
        assert_eq!(config.hand, 3);
        assert_eq!(config.colors, 4);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_binary_forces_two_colors() {
        let config = LockConfig::binary(5, 2);
        assert_eq!(config.colors, 2);
        assert_eq!(config.coloring_count(), 32);
        assert_eq!(config.recoloring_count(), 4);
    }

    #[test]
    fn test_hand_exceeds_holes() {
        let err = LockConfig::binary(3, 4).validate().unwrap_err();
        assert_eq!(err, ValidationError::HandExceedsHoles { hand: 4, holes: 3 });
    }

    #[test]
    fn test_hand_equal_to_holes_is_valid() {
        assert!(LockConfig::binary(3, 3).validate().is_ok());
    }

    #[test]
    fn test_empty_hand() {
        let err = LockConfig::binary(3, 0).validate().unwrap_err();
        assert_eq!(err, ValidationError::EmptyHand);
    }

    #[test]
    fn test_hole_limits() {
        assert!(matches!(
            LockConfig::binary(17, 2).validate(),
            Err(ValidationError::HoleCount { holes: 17, .. })
        ));
    }

    #[test]
    fn test_color_limits() {
        assert!(matches!(
            LockConfig::colored(4, 2, 1).validate(),
            Err(ValidationError::ColorCount { colors: 1, .. })
        ));
        assert!(matches!(
            LockConfig::colored(4, 2, 9).validate(),
            Err(ValidationError::ColorCount { colors: 9, .. })
        ));
        assert!(LockConfig::colored(4, 2, 8).validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = LockConfig::colored(5, 2, 3).with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: LockConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
