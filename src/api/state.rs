//! API server state

use std::sync::Arc;

use crate::activation::{ActivationApi, HttpActivationApi};

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Backend used to confirm activation tokens
    pub activation: Arc<dyn ActivationApi>,

    /// Backend base URL, reported by the health check
    pub backend_url: String,
}

impl AppState {
    /// Create state that talks to the backend over HTTP
    pub fn http(backend_url: impl Into<String>) -> Self {
        let backend_url = backend_url.into();
        let activation = Arc::new(HttpActivationApi::new(&backend_url));

        Self {
            activation,
            backend_url,
        }
    }

    /// Create state around any activation backend
    pub fn with_activation(activation: Arc<dyn ActivationApi>, backend_url: impl Into<String>) -> Self {
        Self {
            activation,
            backend_url: backend_url.into(),
        }
    }
}
