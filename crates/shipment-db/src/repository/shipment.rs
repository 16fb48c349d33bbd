//! # Shipment Repository
//!
//! Database operations for priced shipments.
//!
//! ## Key Operations
//! - Append a priced draft, returning the assigned id
//! - Fetch one record by id
//! - List every record in id order
//!
//! Rows are never updated or deleted. The `AUTOINCREMENT` primary key keeps
//! ids monotonic and never reused.
//!
//! ## Row Mapping
//! ```text
//! ┌───────────────────────┐  TryFrom  ┌────────────────────────────────┐
//! │ ShipmentRow (FromRow) │ ────────► │ ShipmentRecord                 │
//! │  id: i64              │           │  id: ShipmentId(u64)           │
//! │  from_* / to_* TEXT   │           │  shipment: ShipmentRequest     │
//! │  weight, price REAL   │           │  price: f64                    │
//! │  created_at TEXT      │           │  created_at: DateTime<Utc>     │
//! └───────────────────────┘           └────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use shipment_core::error::StoreResult;
use shipment_core::{
    ShipmentDraft, ShipmentId, ShipmentRecord, ShipmentRequest, ShipmentStore, StoreError,
};

const SELECT_COLUMNS: &str = r#"
    SELECT
        id,
        from_name, from_email, from_address, from_country_code,
        to_name, to_email, to_address, to_country_code,
        weight, price, created_at
    FROM shipments
"#;

/// A `shipments` row as SQLite hands it back.
#[derive(Debug, sqlx::FromRow)]
struct ShipmentRow {
    id: i64,
    from_name: String,
    from_email: String,
    from_address: String,
    from_country_code: String,
    to_name: String,
    to_email: String,
    to_address: String,
    to_country_code: String,
    weight: f64,
    price: f64,
    created_at: DateTime<Utc>,
}

impl TryFrom<ShipmentRow> for ShipmentRecord {
    type Error = DbError;

    fn try_from(row: ShipmentRow) -> Result<Self, Self::Error> {
        let id = u64::try_from(row.id)
            .map_err(|_| DbError::CorruptRow(format!("negative shipment id {}", row.id)))?;

        Ok(ShipmentRecord {
            id: ShipmentId(id),
            shipment: ShipmentRequest {
                from_name: row.from_name,
                from_email: row.from_email,
                from_address: row.from_address,
                from_country_code: row.from_country_code,
                to_name: row.to_name,
                to_email: row.to_email,
                to_address: row.to_address,
                to_country_code: row.to_country_code,
                weight: row.weight,
            },
            price: row.price,
            created_at: row.created_at,
        })
    }
}

/// Repository for shipment database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ShipmentRepository::new(pool);
///
/// let id = repo.insert(&draft).await?;
/// let record = repo.get_by_id(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ShipmentRepository {
    pool: SqlitePool,
}

impl ShipmentRepository {
    /// Creates a new ShipmentRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ShipmentRepository { pool }
    }

    /// Inserts a priced draft and returns the id SQLite assigned to it.
    ///
    /// `created_at` is stamped here, at insert time.
    pub async fn insert(&self, draft: &ShipmentDraft) -> DbResult<ShipmentId> {
        let request = &draft.request;
        debug!(
            from = %request.from_country_code,
            weight = request.weight,
            price = draft.price,
            "Inserting shipment"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO shipments (
                from_name, from_email, from_address, from_country_code,
                to_name, to_email, to_address, to_country_code,
                weight, price, created_at
            ) VALUES (
                ?1, ?2, ?3, ?4,
                ?5, ?6, ?7, ?8,
                ?9, ?10, ?11
            )
            "#,
        )
        .bind(&request.from_name)
        .bind(&request.from_email)
        .bind(&request.from_address)
        .bind(&request.from_country_code)
        .bind(&request.to_name)
        .bind(&request.to_email)
        .bind(&request.to_address)
        .bind(&request.to_country_code)
        .bind(request.weight)
        .bind(draft.price)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        let rowid = result.last_insert_rowid();
        let id = u64::try_from(rowid)
            .map_err(|_| DbError::CorruptRow(format!("negative shipment id {rowid}")))?;

        Ok(ShipmentId(id))
    }

    /// Gets a shipment by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(ShipmentRecord))` - Shipment found
    /// * `Ok(None)` - No shipment with that id
    pub async fn get_by_id(&self, id: ShipmentId) -> DbResult<Option<ShipmentRecord>> {
        let Ok(key) = i64::try_from(id.value()) else {
            // Beyond SQLite's rowid range, so it can't exist
            return Ok(None);
        };

        let row: Option<ShipmentRow> = sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE id = ?1"))
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        row.map(ShipmentRecord::try_from).transpose()
    }

    /// Lists every shipment, ordered by id.
    pub async fn list(&self) -> DbResult<Vec<ShipmentRecord>> {
        let rows: Vec<ShipmentRow> = sqlx::query_as(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        debug!(count = rows.len(), "Listed shipments");
        rows.into_iter().map(ShipmentRecord::try_from).collect()
    }

    /// Counts stored shipments.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shipments")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// ShipmentStore Implementation
// =============================================================================

#[async_trait]
impl ShipmentStore for ShipmentRepository {
    async fn save(&self, draft: &ShipmentDraft) -> StoreResult<ShipmentId> {
        Ok(self.insert(draft).await?)
    }

    async fn get(&self, id: ShipmentId) -> StoreResult<ShipmentRecord> {
        self.get_by_id(id)
            .await?
            .ok_or(StoreError::NotFound { id })
    }

    async fn list(&self) -> StoreResult<Vec<ShipmentRecord>> {
        Ok(ShipmentRepository::list(self).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn draft(weight: f64, price: f64) -> ShipmentDraft {
        ShipmentDraft {
            request: ShipmentRequest {
                from_name: "Mark".to_string(),
                from_email: "testFrom@g.c".to_string(),
                from_address: "Shevchenka street 45, Lviv 79000".to_string(),
                from_country_code: "UA".to_string(),
                to_name: "Iryna".to_string(),
                to_email: "testTo@g.c".to_string(),
                to_address: "Queen street 34, Toronto 10".to_string(),
                to_country_code: "CA".to_string(),
                weight,
            },
            price,
        }
    }

    async fn repo() -> ShipmentRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().shipments()
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let repo = repo().await;

        let id = repo.insert(&draft(234.4, 5000.0)).await.unwrap();
        let record = repo.get_by_id(id).await.unwrap().unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.shipment, draft(234.4, 5000.0).request);
        assert_eq!(record.price, 5000.0);
    }

    #[tokio::test]
    async fn test_ids_are_monotonic() {
        let repo = repo().await;

        let first = repo.insert(&draft(5.0, 250.0)).await.unwrap();
        let second = repo.insert(&draft(26.0, 1250.0)).await.unwrap();
        let third = repo.insert(&draft(1000.0, 5000.0)).await.unwrap();

        assert!(first < second && second < third);
        assert_eq!(repo.count().await.unwrap(), 3);

        let ids: Vec<_> = repo.list().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first, second, third]);
    }

    #[tokio::test]
    async fn test_missing_shipment() {
        let repo = repo().await;

        assert!(repo.get_by_id(ShipmentId(99)).await.unwrap().is_none());
        assert!(repo.get_by_id(ShipmentId(u64::MAX)).await.unwrap().is_none());

        let err = ShipmentStore::get(&repo, ShipmentId(99)).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound { id: ShipmentId(99) });
    }

    #[tokio::test]
    async fn test_store_round_trip_preserves_created_at() {
        let repo = repo().await;

        let id = ShipmentStore::save(&repo, &draft(300.0, 5000.0)).await.unwrap();
        let fetched = ShipmentStore::get(&repo, id).await.unwrap();
        let listed = ShipmentStore::list(&repo).await.unwrap();

        assert_eq!(listed, vec![fetched]);
    }

    #[tokio::test]
    async fn test_check_constraint_rejects_bad_weight() {
        let repo = repo().await;

        let err = repo.insert(&draft(1500.0, 0.0)).await.unwrap_err();
        assert!(matches!(err, DbError::ConstraintViolation { .. }));
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
