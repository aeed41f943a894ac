//! Environment-driven configuration.

mod settings;

pub use settings::{Settings, StoreKind, DEFAULT_BIND_ADDR, DEFAULT_BODY_LIMIT, DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS};
