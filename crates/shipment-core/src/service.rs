//! # Shipment Service
//!
//! Validate → price → store, against any [`ShipmentStore`].
//!
//! ## Flow
//! ```text
//! add_shipment(request)
//!      │
//!      ▼
//! PricingEngine::price ── Err ──► ServiceError::Core   (store never called)
//!      │
//!      ▼
//! store.save(draft)    ── Err ──► ServiceError::Store  (passed through as-is)
//!      │
//!      ▼
//! PricedShipment { id, price }
//! ```

use tracing::{debug, warn};

use crate::error::ServiceError;
use crate::pricing::PricingEngine;
use crate::store::ShipmentStore;
use crate::types::{PricedShipment, ShipmentId, ShipmentRecord, ShipmentRequest};

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Clone)]
pub struct ShipmentService<S> {
    engine: PricingEngine,
    store: S,
}

impl<S: ShipmentStore> ShipmentService<S> {
    pub fn new(engine: PricingEngine, store: S) -> Self {
        ShipmentService { engine, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Prices a request and stores it.
    ///
    /// Rejected requests never reach the store.
    pub async fn add_shipment(&self, request: &ShipmentRequest) -> ServiceResult<PricedShipment> {
        let (price, draft) = self.engine.price(request).inspect_err(|err| {
            warn!(error = %err, "Shipment request rejected");
        })?;

        let id = self.store.save(&draft).await?;
        debug!(%id, price, "Shipment stored");

        Ok(PricedShipment { id, price })
    }

    pub async fn get_shipment(&self, id: ShipmentId) -> ServiceResult<ShipmentRecord> {
        Ok(self.store.get(id).await?)
    }

    pub async fn list_shipments(&self) -> ServiceResult<Vec<ShipmentRecord>> {
        Ok(self.store.list().await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::error::{CoreError, RequestField, StoreError, StoreResult};
    use crate::types::ShipmentDraft;

    /// In-memory store that counts every call.
    #[derive(Default)]
    struct RecordingStore {
        records: Mutex<Vec<ShipmentRecord>>,
        calls: AtomicUsize,
        fail_saves: bool,
    }

    impl RecordingStore {
        fn failing() -> Self {
            RecordingStore {
                fail_saves: true,
                ..RecordingStore::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ShipmentStore for RecordingStore {
        async fn save(&self, draft: &ShipmentDraft) -> StoreResult<ShipmentId> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_saves {
                return Err(StoreError::Backend("some db error".to_string()));
            }

            let mut records = self.records.lock().unwrap();
            let id = ShipmentId(records.len() as u64 + 1);
            records.push(draft.clone().into_record(id, Utc::now()));
            Ok(id)
        }

        async fn get(&self, id: ShipmentId) -> StoreResult<ShipmentRecord> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.records
                .lock()
                .unwrap()
                .iter()
                .find(|record| record.id == id)
                .cloned()
                .ok_or(StoreError::NotFound { id })
        }

        async fn list(&self) -> StoreResult<Vec<ShipmentRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.records.lock().unwrap().clone())
        }
    }

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

    #[tokio::test]
    async fn test_add_then_get_round_trip() {
        let service = ShipmentService::new(PricingEngine::default(), RecordingStore::default());

        let priced = service.add_shipment(&request()).await.unwrap();
        assert_eq!(priced.price, 5000.0);

        let record = service.get_shipment(priced.id).await.unwrap();
        assert_eq!(record.id, priced.id);
        assert_eq!(record.shipment, request());
        assert_eq!(record.price, 5000.0);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let service = ShipmentService::new(PricingEngine::default(), RecordingStore::default());

        let first = service.add_shipment(&request()).await.unwrap();
        let second = service.add_shipment(&request()).await.unwrap();
        assert!(second.id > first.id);

        let all = service.list_shipments().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_rejected_request_never_touches_store() {
        let service = ShipmentService::new(PricingEngine::default(), RecordingStore::default());
        let request = ShipmentRequest {
            from_name: "Taras12345x".to_string(),
            ..request()
        };

        let err = service.add_shipment(&request).await.unwrap_err();
        assert_eq!(
            err,
            ServiceError::Core(CoreError::invalid(RequestField::Name))
        );
        assert_eq!(service.store().calls(), 0);
    }

    #[tokio::test]
    async fn test_store_error_passes_through() {
        let service = ShipmentService::new(PricingEngine::default(), RecordingStore::failing());

        let err = service.add_shipment(&request()).await.unwrap_err();
        assert_eq!(
            err,
            ServiceError::Store(StoreError::Backend("some db error".to_string()))
        );
        assert_eq!(service.store().calls(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_shipment() {
        let service = ShipmentService::new(PricingEngine::default(), RecordingStore::default());

        let err = service.get_shipment(ShipmentId(12)).await.unwrap_err();
        assert_eq!(
            err,
            ServiceError::Store(StoreError::NotFound { id: ShipmentId(12) })
        );
    }
}
