use crate::response_types::registry::{response_type_registry, ResponseTypeRegistry};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only; shared without locking.
    pub registry: &'static ResponseTypeRegistry,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            registry: response_type_registry(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
