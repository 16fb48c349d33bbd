//! # Weight Classifier
//!
//! Maps a shipment weight to a flat-rate band.
//!
//! ## Default Bands
//! ```text
//! ┌──────────┬──────────────────────┬────────┐
//! │ band     │ range                │ factor │
//! ├──────────┼──────────────────────┼────────┤
//! │ small    │ 0  <  w <   11       │   100  │
//! │ medium   │ 11 <= w <   26       │   300  │
//! │ large    │ 26 <= w <   51       │   500  │
//! │ huge     │ 51 <= w <= 1000      │  2000  │
//! └──────────┴──────────────────────┴────────┘
//! ```
//!
//! Each band ends where the next begins. Only the last band includes its upper
//! bound. Anything outside `(0, 1000]` is `InvalidWeight`.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{RulesError, ValidationError};
use crate::validation::ValidationResult;

/// One weight class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightBand {
    pub name: String,
    /// Upper bound of the band; the lower bound is the previous band's upper.
    pub upper: f64,
    /// Whether `upper` itself belongs to this band.
    #[serde(default)]
    pub inclusive: bool,
    pub factor: u32,
}

impl WeightBand {
    fn new(name: &str, upper: f64, inclusive: bool, factor: u32) -> Self {
        WeightBand {
            name: name.to_string(),
            upper,
            inclusive,
            factor,
        }
    }

    fn admits(&self, weight: f64) -> bool {
        weight < self.upper || (self.inclusive && weight == self.upper)
    }
}

// =============================================================================
// Weight Bands
// =============================================================================

/// Ordered, non-overlapping weight bands starting just above zero.
///
/// ## Example (TOML, inside the pricing rules file)
/// ```toml
/// [[weight]]
/// name = "small"
/// upper = 11.0
/// factor = 100
///
/// [[weight]]
/// name = "huge"
/// upper = 1000.0
/// inclusive = true
/// factor = 2000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<WeightBand>", into = "Vec<WeightBand>")]
pub struct WeightBands {
    bands: Vec<WeightBand>,
}

impl WeightBands {
    /// Builds a band table, rejecting empty, unordered or zero-width bands.
    pub fn new(bands: Vec<WeightBand>) -> Result<Self, RulesError> {
        let first = bands.first().ok_or(RulesError::EmptyBands)?;
        if first.upper.is_nan() || first.upper <= 0.0 {
            return Err(RulesError::EmptyBand {
                index: 0,
                min: 0.0,
                max: first.upper,
            });
        }

        for (index, pair) in bands.windows(2).enumerate() {
            if pair[1].upper.is_nan() || pair[1].upper <= pair[0].upper {
                return Err(RulesError::UnorderedBands { index: index + 1 });
            }
        }

        Ok(WeightBands { bands })
    }

    /// The band containing `weight`, if any.
    pub fn classify(&self, weight: f64) -> Option<&WeightBand> {
        if weight.is_nan() || weight <= 0.0 {
            return None;
        }

        self.bands.iter().find(|band| band.admits(weight))
    }

    /// Flat-rate factor for `weight`.
    pub fn factor(&self, weight: f64) -> ValidationResult<u32> {
        self.classify(weight)
            .map(|band| band.factor)
            .ok_or(ValidationError::InvalidWeight { weight })
    }

    pub fn bands(&self) -> &[WeightBand] {
        &self.bands
    }
}

impl Default for WeightBands {
    fn default() -> Self {
        WeightBands {
            bands: vec![
                WeightBand::new("small", 11.0, false, 100),
                WeightBand::new("medium", 26.0, false, 300),
                WeightBand::new("large", 51.0, false, 500),
                WeightBand::new("huge", 1000.0, true, 2000),
            ],
        }
    }
}

impl TryFrom<Vec<WeightBand>> for WeightBands {
    type Error = RulesError;

    fn try_from(bands: Vec<WeightBand>) -> Result<Self, Self::Error> {
        WeightBands::new(bands)
    }
}

impl From<WeightBands> for Vec<WeightBand> {
    fn from(bands: WeightBands) -> Self {
        bands.bands
    }
}

static DEFAULT_BANDS: LazyLock<WeightBands> = LazyLock::new(WeightBands::default);

/// Weight factor under the default bands.
///
/// ## Example
/// ```rust
/// use shipment_core::weight::weight_factor;
///
/// assert_eq!(weight_factor(10.0), Ok(100));
/// assert_eq!(weight_factor(11.0), Ok(300));
/// assert!(weight_factor(1001.0).is_err());
/// ```
pub fn weight_factor(weight: f64) -> ValidationResult<u32> {
    DEFAULT_BANDS.factor(weight)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::small_left_border(1.0, 100)]
    #[case::small(2.0, 100)]
    #[case::small_right_border(10.0, 100)]
    #[case::small_fraction(10.99, 100)]
    #[case::medium_left_border(11.0, 300)]
    #[case::medium(20.0, 300)]
    #[case::medium_right_border(25.0, 300)]
    #[case::large_left_border(26.0, 500)]
    #[case::large(35.0, 500)]
    #[case::large_right_border(50.0, 500)]
    #[case::large_fraction(50.5, 500)]
    #[case::huge_left_border(51.0, 2000)]
    #[case::huge(700.0, 2000)]
    #[case::huge_fraction(234.4, 2000)]
    #[case::huge_right_border(1000.0, 2000)]
    fn test_weight_factor(#[case] weight: f64, #[case] expected: u32) {
        assert_eq!(weight_factor(weight), Ok(expected));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(1000.5)]
    #[case(1001.0)]
    #[case(1100.0)]
    #[case(f64::NAN)]
    fn test_unsupported_weight(#[case] weight: f64) {
        assert!(matches!(
            weight_factor(weight),
            Err(ValidationError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_classify_names_band() {
        let bands = WeightBands::default();
        assert_eq!(bands.classify(26.0).map(|b| b.name.as_str()), Some("large"));
        assert!(bands.classify(0.0).is_none());
    }

    #[test]
    fn test_rejects_malformed_tables() {
        assert_eq!(WeightBands::new(vec![]), Err(RulesError::EmptyBands));

        let unordered = vec![
            WeightBand::new("a", 20.0, false, 1),
            WeightBand::new("b", 10.0, false, 2),
        ];
        assert_eq!(
            WeightBands::new(unordered),
            Err(RulesError::UnorderedBands { index: 1 })
        );

        let zero_width = vec![WeightBand::new("a", 0.0, true, 1)];
        assert!(matches!(
            WeightBands::new(zero_width),
            Err(RulesError::EmptyBand { index: 0, .. })
        ));
    }

    #[test]
    fn test_bands_from_toml() {
        #[derive(Deserialize)]
        struct File {
            weight: WeightBands,
        }

        let file: File = toml::from_str(
            r#"
            [[weight]]
            name = "light"
            upper = 5.0
            factor = 50

            [[weight]]
            name = "heavy"
            upper = 100.0
            inclusive = true
            factor = 400
            "#,
        )
        .unwrap();

        assert_eq!(file.weight.factor(5.0), Ok(400));
        assert_eq!(file.weight.factor(100.0), Ok(400));
        assert_eq!(file.weight.factor(4.9), Ok(50));
        assert!(file.weight.factor(100.1).is_err());
    }
}
