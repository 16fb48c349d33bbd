//! # Pricing Engine
//!
//! Validates a shipment request and prices it.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ShipmentRequest                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. emails        ── fail ──► InvalidRequest { reason: email }          │
//! │  2. names         ── fail ──► InvalidRequest { reason: name }           │
//! │  3. country codes ── fail ──► InvalidCountryCode / UnknownCountryCode   │
//! │  4. addresses     ── fail ──► InvalidRequest { reason: address }        │
//! │  5. weight        ── fail ──► InvalidRequest { reason: weight }         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  6. region factor  (from_country_code)                                  │
//! │  7. weight factor  (weight)                                             │
//! │  8. price = region factor × weight factor                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  (price, ShipmentDraft)   ← no id yet, the store assigns it             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine holds only read-only rules and reference data, so one instance
//! can be shared across any number of concurrent requests.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::country::{CountryReference, IsoCountries};
use crate::error::{CoreError, CoreResult, RequestField, RulesError};
use crate::region::RegionRules;
use crate::types::{ShipmentDraft, ShipmentRequest};
use crate::validation::{
    validate_address, validate_country_code_with, validate_email, validate_name, validate_weight,
};
use crate::weight::WeightBands;

// =============================================================================
// Pricing Rules
// =============================================================================

/// Every table the engine prices with.
///
/// Missing sections fall back to the defaults, so an empty file is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRules {
    pub region: RegionRules,
    pub weight: WeightBands,
}

impl PricingRules {
    pub fn validate(&self) -> Result<(), RulesError> {
        self.region.validate()
    }
}

// =============================================================================
// Pricing Engine
// =============================================================================

/// Composes the field validators with the region and weight classifiers.
///
/// ## Example
/// ```rust
/// use shipment_core::{PricingEngine, ShipmentRequest};
///
/// let engine = PricingEngine::default();
/// let request = ShipmentRequest {
///     from_name: "Anna".into(),
///     from_email: "anna@post.se".into(),
///     from_address: "Drottninggatan 5, Stockholm 11151".into(),
///     from_country_code: "SE".into(),
///     to_name: "Ola".into(),
///     to_email: "ola@post.no".into(),
///     to_address: "Karl Johans gate 1, Oslo 0154".into(),
///     to_country_code: "NO".into(),
///     weight: 5.0,
/// };
///
/// let (price, draft) = engine.price(&request).unwrap();
/// assert_eq!(price, 100.0);
/// assert_eq!(draft.price, 100.0);
/// ```
#[derive(Clone)]
pub struct PricingEngine {
    rules: Arc<PricingRules>,
    countries: Arc<dyn CountryReference>,
}

impl Default for PricingEngine {
    fn default() -> Self {
        PricingEngine::new(Arc::new(PricingRules::default()), Arc::new(IsoCountries))
    }
}

impl std::fmt::Debug for PricingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PricingEngine")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl PricingEngine {
    pub fn new(rules: Arc<PricingRules>, countries: Arc<dyn CountryReference>) -> Self {
        PricingEngine { rules, countries }
    }

    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    /// Region multiplier for a sender country code. Never fails.
    pub fn region_factor(&self, country_code: &str) -> f64 {
        self.rules.region.factor(country_code, self.countries.as_ref())
    }

    /// Weight band factor.
    pub fn weight_factor(&self, weight: f64) -> CoreResult<u32> {
        Ok(self.rules.weight.factor(weight)?)
    }

    /// Runs every field validator, in the fixed order of the pipeline.
    pub fn validate(&self, request: &ShipmentRequest) -> CoreResult<()> {
        validate_email(&request.from_email)
            .and(validate_email(&request.to_email))
            .map_err(|_| CoreError::invalid(RequestField::Email))?;

        validate_name(&request.from_name)
            .and(validate_name(&request.to_name))
            .map_err(|_| CoreError::invalid(RequestField::Name))?;

        let countries = self.countries.as_ref();
        validate_country_code_with(&request.from_country_code, countries)?;
        validate_country_code_with(&request.to_country_code, countries)?;

        validate_address(&request.from_address)
            .and(validate_address(&request.to_address))
            .map_err(|_| CoreError::invalid(RequestField::Address))?;

        validate_weight(request.weight).map_err(|_| CoreError::invalid(RequestField::Weight))?;

        Ok(())
    }

    /// Validates and prices a request.
    ///
    /// ## Returns
    /// * `Ok((price, draft))` - `draft` carries the request and the same price
    /// * `Err(CoreError)` - the first failing validation step
    pub fn price(&self, request: &ShipmentRequest) -> CoreResult<(f64, ShipmentDraft)> {
        self.validate(request)?;

        let region_factor = self.region_factor(&request.from_country_code);
        // Custom band tables may stop short of the accepted weight range.
        let weight_factor = self
            .rules
            .weight
            .factor(request.weight)
            .map_err(|_| CoreError::invalid(RequestField::Weight))?;

        let price = region_factor * f64::from(weight_factor);

        let draft = ShipmentDraft {
            request: request.clone(),
            price,
        };

        Ok((price, draft))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
