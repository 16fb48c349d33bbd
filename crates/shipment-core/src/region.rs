//! # Region Classifier
//!
//! Maps the sender's country code to a price multiplier.
//!
//! ## Tiers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  country code                                                           │
//! │       │                                                                 │
//! │       ├── in nordic set {SE, NO, DK, FI}? ──────────► Nordic      ×1.0  │
//! │       │                                                                 │
//! │       ├── reference region == EuropeanUnion? ───────► European    ×1.5  │
//! │       │                                                                 │
//! │       └── anything else (incl. unknown codes) ──────► RestOfWorld ×2.5  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The Nordic check runs first, so SE/DK/FI get the Nordic factor even though
//! they are EU members too.
//!
//! There is no error path here. Malformed or unknown codes fall through to
//! `RestOfWorld`; rejecting them is the country-code validator's job and the
//! pricing engine always validates before it classifies.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::country::{CountryReference, IsoCountries, Region};
use crate::error::RulesError;

pub const NORDIC_FACTOR: f64 = 1.0;
pub const EUROPEAN_FACTOR: f64 = 1.5;
pub const REST_OF_WORLD_FACTOR: f64 = 2.5;

/// Price tier a country code falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionTier {
    Nordic,
    European,
    RestOfWorld,
}

// =============================================================================
// Region Rules
// =============================================================================

/// Region sets and the factor for each tier.
///
/// Loaded once at startup and shared read-only afterwards.
///
/// ## Example (TOML)
/// ```toml
/// nordic = ["SE", "NO", "DK", "FI"]
/// nordic_factor = 1.0
/// european_factor = 1.5
/// rest_of_world_factor = 2.5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRegionRules")]
pub struct RegionRules {
    pub nordic: Vec<String>,
    pub nordic_factor: f64,
    pub european_factor: f64,
    pub rest_of_world_factor: f64,
}

impl Default for RegionRules {
    fn default() -> Self {
        RegionRules {
            nordic: ["SE", "NO", "DK", "FI"].map(String::from).to_vec(),
            nordic_factor: NORDIC_FACTOR,
            european_factor: EUROPEAN_FACTOR,
            rest_of_world_factor: REST_OF_WORLD_FACTOR,
        }
    }
}

impl RegionRules {
    /// Checks every factor is a positive finite number.
    pub fn validate(&self) -> Result<(), RulesError> {
        let factors = [
            ("nordic", self.nordic_factor),
            ("european", self.european_factor),
            ("rest_of_world", self.rest_of_world_factor),
        ];

        for (tier, factor) in factors {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(RulesError::InvalidFactor { tier, factor });
            }
        }

        Ok(())
    }

    /// Classifies a country code. Total: every input lands in exactly one tier.
    pub fn tier(&self, code: &str, countries: &dyn CountryReference) -> RegionTier {
        if self.nordic.iter().any(|nordic| nordic == code) {
            return RegionTier::Nordic;
        }

        match countries.region_of(code) {
            Some(Region::EuropeanUnion) => RegionTier::European,
            _ => RegionTier::RestOfWorld,
        }
    }

    /// Multiplier for a tier.
    pub fn factor_for(&self, tier: RegionTier) -> f64 {
        match tier {
            RegionTier::Nordic => self.nordic_factor,
            RegionTier::European => self.european_factor,
            RegionTier::RestOfWorld => self.rest_of_world_factor,
        }
    }

    /// Multiplier for a country code.
    pub fn factor(&self, code: &str, countries: &dyn CountryReference) -> f64 {
        self.factor_for(self.tier(code, countries))
    }
}

/// Deserialization shadow so loaded rules are validated before use.
#[derive(Deserialize)]
#[serde(default)]
struct RawRegionRules {
    nordic: Vec<String>,
    nordic_factor: f64,
    european_factor: f64,
    rest_of_world_factor: f64,
}

impl Default for RawRegionRules {
    fn default() -> Self {
        let rules = RegionRules::default();
        RawRegionRules {
            nordic: rules.nordic,
            nordic_factor: rules.nordic_factor,
            european_factor: rules.european_factor,
            rest_of_world_factor: rules.rest_of_world_factor,
        }
    }
}

impl TryFrom<RawRegionRules> for RegionRules {
    type Error = RulesError;

    fn try_from(raw: RawRegionRules) -> Result<Self, Self::Error> {
        let rules = RegionRules {
            nordic: raw.nordic,
            nordic_factor: raw.nordic_factor,
            european_factor: raw.european_factor,
            rest_of_world_factor: raw.rest_of_world_factor,
        };
        rules.validate()?;
        Ok(rules)
    }
}

static DEFAULT_RULES: LazyLock<RegionRules> = LazyLock::new(RegionRules::default);

/// Region factor under the default rules and the built-in ISO table.
///
/// ## Example
/// ```rust
/// use shipment_core::region::region_factor;
///
/// assert_eq!(region_factor("SE"), 1.0);
/// assert_eq!(region_factor("PL"), 1.5);
/// assert_eq!(region_factor("AE"), 2.5);
/// ```
pub fn region_factor(code: &str) -> f64 {
    DEFAULT_RULES.factor(code, &IsoCountries)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::nordic_se("SE", 1.0)]
    #[case::nordic_no("NO", 1.0)]
    #[case::nordic_dk("DK", 1.0)]
    #[case::nordic_fi("FI", 1.0)]
    #[case::eu_pl("PL", 1.5)]
    #[case::eu_de("DE", 1.5)]
    #[case::eu_gr("GR", 1.5)]
    #[case::outside_eu_ae("AE", 2.5)]
    #[case::outside_eu_ua("UA", 2.5)]
    #[case::outside_eu_gb("GB", 2.5)]
    #[case::outside_eu_ca("CA", 2.5)]
    fn test_region_factor(#[case] code: &str, #[case] expected: f64) {
        assert_eq!(region_factor(code), expected);
    }

    #[rstest]
    #[case("XX")]
    #[case("se")]
    #[case("")]
    #[case("EL")]
    #[case("SWE")]
    fn test_unknown_codes_fall_through_to_rest_of_world(#[case] code: &str) {
        assert_eq!(region_factor(code), REST_OF_WORLD_FACTOR);
    }

    #[test]
    fn test_region_factor_is_total_over_two_letter_inputs() {
        let allowed = [NORDIC_FACTOR, EUROPEAN_FACTOR, REST_OF_WORLD_FACTOR];
        for first in b'A'..=b'Z' {
            for second in b'A'..=b'Z' {
                let code = String::from_utf8(vec![first, second]).unwrap();
                let factor = region_factor(&code);
                assert!(allowed.contains(&factor), "{code} -> {factor}");
                assert_eq!(factor, region_factor(&code));
            }
        }
    }

    #[test]
    fn test_nordic_takes_precedence_over_eu() {
        let rules = RegionRules::default();
        assert_eq!(rules.tier("SE", &IsoCountries), RegionTier::Nordic);
        assert_eq!(IsoCountries.region_of("SE"), Some(Region::EuropeanUnion));
    }

    #[test]
    fn test_custom_rules_from_toml() {
        let rules: RegionRules = toml::from_str(
            r#"
            nordic = ["SE", "NO", "DK", "FI", "IS"]
            european_factor = 1.75
            "#,
        )
        .unwrap();

        assert_eq!(rules.factor("IS", &IsoCountries), 1.0);
        assert_eq!(rules.factor("PL", &IsoCountries), 1.75);
        assert_eq!(rules.factor("AE", &IsoCountries), 2.5);
    }

    #[test]
    fn test_non_positive_factor_is_rejected() {
        let result: Result<RegionRules, _> = toml::from_str("rest_of_world_factor = 0.0");
        assert!(result.is_err());

        let rules = RegionRules {
            european_factor: -1.0,
            ..RegionRules::default()
        };
        assert_eq!(
            rules.validate(),
            Err(RulesError::InvalidFactor {
                tier: "european",
                factor: -1.0
            })
        );
    }
}
