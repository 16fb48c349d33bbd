//! # Shipment Store Contract
//!
//! The only thing the core knows about persistence. `shipment-db` provides
//! the SQLite implementation; tests provide in-memory ones.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::{ShipmentDraft, ShipmentId, ShipmentRecord};

/// Durable storage of accepted shipments.
///
/// ## Contract
/// - `save` assigns a fresh, never reused id and returns it
/// - `get` returns the record exactly as saved, or `StoreError::NotFound`
/// - `list` returns every record, ordered by id
/// - records are immutable once saved
#[async_trait]
pub trait ShipmentStore: Send + Sync {
    async fn save(&self, draft: &ShipmentDraft) -> StoreResult<ShipmentId>;

    async fn get(&self, id: ShipmentId) -> StoreResult<ShipmentRecord>;

    async fn list(&self) -> StoreResult<Vec<ShipmentRecord>>;
}
