//! Shared application state.
//!
//! `AppState` is built once in `main.rs` and handed to every handler as
//! `web::Data<AppState>`. It owns the store handle explicitly; handlers never
//! reach for a global connection.

use crate::config::Config;
use crate::store::{DocumentStore, StoreError};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Document store shared by all in-flight requests. Concurrent access is
    /// serialized inside the store.
    pub store: DocumentStore,

    /// Configuration loaded at startup; read by the diagnostics endpoint.
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: DocumentStore, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Runs a store operation on the blocking thread pool.
    pub async fn with_store<T, F>(&self, op: F) -> Result<T, StoreCallError>
    where
        F: FnOnce(&DocumentStore) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.store.clone();
        match tokio::task::spawn_blocking(move || op(&store)).await {
            Ok(result) => result.map_err(StoreCallError::Store),
            Err(join_err) => Err(StoreCallError::Join(join_err.to_string())),
        }
    }
}

/// Failure of a store call made through [`AppState::with_store`].
#[derive(Debug, thiserror::Error)]
pub enum StoreCallError {
    #[error(transparent)]
    Store(StoreError),

    #[error("store task failed: {0}")]
    Join(String),
}
