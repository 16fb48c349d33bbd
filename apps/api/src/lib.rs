//! # Shipment API
//!
//! HTTP front end for the shipment pricing service.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shipment API Server                              │
//! │                                                                         │
//! │  Client ───► axum (8080) ───► ShipmentService ───► SQLite              │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │                              PricingEngine                              │
//! │                         (rules loaded at startup)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ErrorCode};
pub use routes::create_router;
pub use state::AppState;
