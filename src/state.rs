//! Shared application state for all routes.

use crate::store::DevEventStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DevEventStore>,
}

impl AppState {
    pub fn new(store: impl DevEventStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
