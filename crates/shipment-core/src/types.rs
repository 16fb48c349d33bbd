//! # Domain Types
//!
//! Core domain types for shipment pricing.
//!
//! ## Type Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Shipment Lifecycle                              │
//! │                                                                         │
//! │  ┌─────────────────┐   price()   ┌─────────────────┐   save()          │
//! │  │ ShipmentRequest │ ──────────► │  ShipmentDraft  │ ─────────┐        │
//! │  │  ─────────────  │             │  ─────────────  │          │        │
//! │  │  sender fields  │             │  request        │          ▼        │
//! │  │  receiver fields│             │  price          │  ┌──────────────┐ │
//! │  │  weight         │             └─────────────────┘  │ShipmentRecord│ │
//! │  └─────────────────┘                                  │ id, price,   │ │
//! │   transient, never persisted                          │ created_at   │ │
//! │                                                       └──────────────┘ │
//! │                                                        immutable       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Shipment Id
// =============================================================================

/// Store-assigned shipment identifier.
///
/// Assigned monotonically by the store on insert and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentId(pub u64);

impl ShipmentId {
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ShipmentId {
    fn from(id: u64) -> Self {
        ShipmentId(id)
    }
}

// =============================================================================
// Shipment Request
// =============================================================================

/// An inbound shipment request, exactly as the client sent it.
///
/// Nothing here is trusted until [`crate::pricing::PricingEngine::price`]
/// has run every field validator over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRequest {
    pub from_name: String,
    pub from_email: String,
    pub from_address: String,
    /// ISO 3166-1 alpha-2, drives the region factor.
    pub from_country_code: String,

    pub to_name: String,
    pub to_email: String,
    pub to_address: String,
    pub to_country_code: String,

    /// Unit-less, accepted range `(0, 1000]`.
    pub weight: f64,
}

// =============================================================================
// Shipment Draft
// =============================================================================

/// A validated and priced request that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentDraft {
    pub request: ShipmentRequest,
    pub price: f64,
}

impl ShipmentDraft {
    /// Attaches the store-assigned identity, producing the stored record.
    pub fn into_record(self, id: ShipmentId, created_at: DateTime<Utc>) -> ShipmentRecord {
        ShipmentRecord {
            id,
            shipment: self.request,
            price: self.price,
            created_at,
        }
    }
}

// =============================================================================
// Shipment Record
// =============================================================================

/// A persisted, priced shipment. Created once, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRecord {
    pub id: ShipmentId,

    #[serde(flatten)]
    pub shipment: ShipmentRequest,

    pub price: f64,

    pub created_at: DateTime<Utc>,
}

/// Returned to the caller after a shipment was accepted and stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricedShipment {
    pub id: ShipmentId,
    pub price: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ShipmentRequest {
        ShipmentRequest {
            from_name: "Mark".to_string(),
            from_email: "testFrom@g.c".to_string(),
            from_address: "Shevchenka street 45, Lviv 79000".to_string(),
            from_country_code: "UA".to_string(),
            to_name: "Iryna".to_string(),
            to_email: "testTo@g.c".to_string(),
            to_address: "Queen street 34, Toronto 10".to_string(),
            to_country_code: "CA".to_string(),
            weight: 234.4,
        }
    }

    #[test]
    fn test_request_uses_camel_case_json() {
        let json = serde_json::to_value(request()).unwrap();
        assert_eq!(json["fromCountryCode"], "UA");
        assert_eq!(json["toName"], "Iryna");
        assert_eq!(json["weight"], 234.4);
    }

    #[test]
    fn test_record_flattens_request_fields() {
        let created_at = Utc::now();
        let draft = ShipmentDraft {
            request: request(),
            price: 5000.0,
        };
        let record = draft.into_record(ShipmentId(3), created_at);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["fromName"], "Mark");
        assert_eq!(json["price"], 5000.0);

        let back: ShipmentRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
