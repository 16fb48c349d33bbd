//! # Error Types
//!
//! Domain-specific error types for shipment-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shipment-core errors (this file)                                      │
//! │  ├── ValidationError  - One field failed its validator                 │
//! │  ├── CoreError        - A shipment request was rejected                │
//! │  ├── StoreError       - The shipment store failed or found nothing     │
//! │  ├── ServiceError     - Either of the two above, from the service      │
//! │  └── RulesError       - A pricing rule table is malformed              │
//! │                                                                         │
//! │  shipment-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures → StoreError       │
//! │                                                                         │
//! │  HTTP API errors (in app)                                              │
//! │  └── ApiError         - What clients see (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ServiceError → ApiError           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use thiserror::Error;

use crate::types::ShipmentId;

// =============================================================================
// Validation Error
// =============================================================================

/// A single field failed validation.
///
/// Every validator in [`crate::validation`] returns exactly one of these.
/// They are permanent for a given input, so callers never retry them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid email")]
    InvalidEmail,

    #[error("invalid name")]
    InvalidName,

    /// Not two uppercase ASCII letters.
    #[error("invalid country code: '{code}'")]
    InvalidCountryCode { code: String },

    /// Well-formed, but no such ISO 3166-1 country.
    #[error("not existing country code: '{code}'")]
    UnknownCountryCode { code: String },

    #[error("invalid address")]
    InvalidAddress,

    #[error("invalid weight: {weight}")]
    InvalidWeight { weight: f64 },
}

// =============================================================================
// Core Error
// =============================================================================

/// The request field group that failed during pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestField {
    Email,
    Name,
    Address,
    Weight,
}

impl fmt::Display for RequestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            RequestField::Email => "email",
            RequestField::Name => "name",
            RequestField::Address => "address",
            RequestField::Weight => "weight",
        };
        f.write_str(reason)
    }
}

/// A shipment request was rejected by the pricing engine.
///
/// ## When This Occurs
/// - Sender or receiver email/name/address is malformed → `InvalidRequest`
/// - Weight outside `(0, 1000]` → `InvalidRequest { reason: Weight }`
/// - Country code malformed or unknown → `Validation(..)` with the specific kind
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Aggregated field failure; `reason` names the field group.
    #[error("invalid request: uncorrect {reason}")]
    InvalidRequest { reason: RequestField },

    /// A specific validator failure that is reported as-is.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CoreError {
    pub fn invalid(reason: RequestField) -> Self {
        CoreError::InvalidRequest { reason }
    }
}

// =============================================================================
// Store Error
// =============================================================================

/// Failures reported by a [`crate::store::ShipmentStore`].
///
/// Backend failures are opaque: the core cannot tell transient from
/// permanent persistence errors, so it passes them through unmodified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("shipment not found: {id}")]
    NotFound { id: ShipmentId },

    #[error("store error: {0}")]
    Backend(String),
}

// =============================================================================
// Service Error
// =============================================================================

/// Errors surfaced by [`crate::service::ShipmentService`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

// =============================================================================
// Rules Error
// =============================================================================

/// A pricing rule table could not be built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RulesError {
    #[error("weight band table is empty")]
    EmptyBands,

    #[error("weight band {index} has an empty range [{min}, {max}]")]
    EmptyBand { index: usize, min: f64, max: f64 },

    #[error("weight band {index} overlaps or precedes the band before it")]
    UnorderedBands { index: usize },

    #[error("region factor for {tier} must be positive, got {factor}")]
    InvalidFactor { tier: &'static str, factor: f64 },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::invalid(RequestField::Email);
        assert_eq!(err.to_string(), "invalid request: uncorrect email");

        let err = ValidationError::UnknownCountryCode {
            code: "XX".to_string(),
        };
        assert_eq!(err.to_string(), "not existing country code: 'XX'");

        let err = StoreError::NotFound { id: ShipmentId(7) };
        assert_eq!(err.to_string(), "shipment not found: 7");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::InvalidCountryCode {
            code: "se".to_string(),
        };
        let core_err: CoreError = validation_err.clone().into();
        assert_eq!(core_err, CoreError::Validation(validation_err));
    }

    #[test]
    fn test_store_error_passes_through_service_error() {
        let store_err = StoreError::Backend("disk I/O error".to_string());
        let service_err: ServiceError = store_err.clone().into();
        assert_eq!(service_err.to_string(), store_err.to_string());
    }
}
