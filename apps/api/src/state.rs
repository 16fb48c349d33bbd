//! Shared application state.

use std::sync::Arc;

use shipment_core::{PricingEngine, ShipmentService};
use shipment_db::{Database, ShipmentRepository};

/// Handed to every handler; clones share the same pool and rules.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: Arc<ShipmentService<ShipmentRepository>>,
    pub db: Database,
}

impl AppState {
    pub fn new(engine: PricingEngine, db: Database) -> Self {
        AppState {
            service: Arc::new(ShipmentService::new(engine, db.shipments())),
            db,
        }
    }
}
