//! # Repository Module
//!
//! Database repository implementations for the shipment service.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  ShipmentService (shipment-core)                                       │
//! │       │                                                                 │
//! │       │  store.save(&draft)                                            │
//! │       ▼                                                                 │
//! │  ShipmentStore trait ◄── implemented by ShipmentRepository             │
//! │  ├── save(&self, draft)                                                │
//! │  ├── get(&self, id)                                                    │
//! │  └── list(&self)                                                       │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database (shipments table)                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`shipment::ShipmentRepository`] - Append-only shipment records

pub mod shipment;
