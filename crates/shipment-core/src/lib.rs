//! # shipment-core: Pricing and Validation for Shipments
//!
//! This crate is the **heart** of the shipment service. It validates shipment
//! requests and prices them, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Shipment Service Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (apps/api)                          │   │
//! │  │        GET /api/shipment ─ POST /api/shipment ─ GET /{id}       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shipment-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌──────────┐  ┌──────────┐  ┌─────────────┐  │   │
//! │  │   │ validation │  │  region  │  │  weight  │  │   pricing   │  │   │
//! │  │   │  email     │  │  Nordic  │  │  small   │  │   Engine    │  │   │
//! │  │   │  name ...  │  │  EU ...  │  │  huge .. │  │   Service   │  │   │
//! │  │   └────────────┘  └──────────┘  └──────────┘  └─────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ShipmentStore trait                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  shipment-db (Database Layer)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Request, draft and record types
//! - [`error`] - Domain error types
//! - [`validation`] - Field validators
//! - [`country`] - ISO country reference data
//! - [`region`] - Region classifier
//! - [`weight`] - Weight classifier
//! - [`pricing`] - Pricing engine and rule tables
//! - [`store`] - Shipment store contract
//! - [`service`] - Validate → price → store orchestration
//!
//! ## Example Usage
//!
//! ```rust
//! use shipment_core::region::region_factor;
//! use shipment_core::weight::weight_factor;
//!
//! // Ukraine is outside the EU, 234.4 is in the "huge" band
//! let price = region_factor("UA") * f64::from(weight_factor(234.4).unwrap());
//! assert_eq!(price, 5000.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod country;
pub mod error;
pub mod pricing;
pub mod region;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;
pub mod weight;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use country::{CountryReference, IsoCountries, Region};
pub use error::{CoreError, RequestField, RulesError, ServiceError, StoreError, ValidationError};
pub use pricing::{PricingEngine, PricingRules};
pub use region::{RegionRules, RegionTier};
pub use service::ShipmentService;
pub use store::ShipmentStore;
pub use types::*;
pub use weight::{WeightBand, WeightBands};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest accepted sender/receiver name, in characters.
pub const MAX_NAME_LENGTH: usize = 30;

/// Longest accepted postal address, in characters.
pub const MAX_ADDRESS_LENGTH: usize = 100;

/// Heaviest accepted shipment (inclusive).
pub const MAX_WEIGHT: f64 = 1000.0;
