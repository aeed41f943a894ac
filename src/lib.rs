//! Dev Events API: CRUD over developer events and their speakers on PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod mapping;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{Settings, StoreKind};
pub use error::{AppError, ConfigError};
pub use migration::{ensure_database_exists, ensure_schema};
pub use openapi::ApiDoc;
pub use routes::{app, common_routes, dev_event_routes, DEV_EVENTS_PATH};
pub use state::AppState;
pub use store::{DevEventStore, MemoryDevEventStore, PgDevEventStore};
