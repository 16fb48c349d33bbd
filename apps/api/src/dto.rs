//! Response bodies.
//!
//! Requests are deserialized straight into [`ShipmentRequest`]; responses get
//! their own shapes so the wire format doesn't follow every core change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shipment_core::{PricedShipment, ShipmentRecord};

/// One stored shipment, as clients see it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentResponse {
    pub id: u64,
    pub from_name: String,
    pub from_email: String,
    pub from_address: String,
    pub from_country_code: String,
    pub to_name: String,
    pub to_email: String,
    pub to_address: String,
    pub to_country_code: String,
    pub weight: f64,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl From<ShipmentRecord> for ShipmentResponse {
    fn from(record: ShipmentRecord) -> Self {
        let shipment = record.shipment;
        ShipmentResponse {
            id: record.id.value(),
            from_name: shipment.from_name,
            from_email: shipment.from_email,
            from_address: shipment.from_address,
            from_country_code: shipment.from_country_code,
            to_name: shipment.to_name,
            to_email: shipment.to_email,
            to_address: shipment.to_address,
            to_country_code: shipment.to_country_code,
            weight: shipment.weight,
            price: record.price,
            created_at: record.created_at,
        }
    }
}

/// `GET /api/shipment`
#[derive(Debug, Serialize, Deserialize)]
pub struct ShipmentListResponse {
    pub shipments: Vec<ShipmentResponse>,
}

/// `GET /api/shipment/{id}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ShipmentDetailResponse {
    pub shipment: ShipmentResponse,
}

/// `POST /api/shipment`
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: u64,
    pub price: f64,
}

impl From<PricedShipment> for CreatedResponse {
    fn from(priced: PricedShipment) -> Self {
        CreatedResponse {
            id: priced.id.value(),
            price: priced.price,
        }
    }
}

/// `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: bool,
}
