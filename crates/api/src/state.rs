use std::sync::Arc;

use crm_db::DbPool;

use crate::config::ServerConfig;

/// Handed to every handler through `State<AppState>`; clones share the pool
/// and the configuration.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    /// Read by the `AuthUser` extractor to verify tokens and by login to
    /// issue them.
    pub config: Arc<ServerConfig>,
}
