use crate::config::Config;
use crate::db;
use crate::error::ApiError;
use crate::storage::BlobStore;
use rusqlite::Connection;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application context handed to every handler.
///
/// Replaces the process-wide connection/configuration globals of the
/// original service with an explicitly constructed value whose lifecycle
/// starts in `main`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Active bearer tokens, token -> username.
    pub sessions: Arc<RwLock<HashMap<String, String>>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config: Arc::new(config),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Opens a connection to the roster database for one operation.
    pub fn db(&self) -> Result<Connection, ApiError> {
        db::open_db(&self.config.db_path).map_err(ApiError::from)
    }

    pub fn blob_store(&self) -> BlobStore {
        BlobStore::new(self.config.uploads_dir.clone())
    }
}
