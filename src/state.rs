use crate::config::AppConfig;
use crate::store::UserStore;
use std::sync::Arc;

/// Shared application state: the credential store and the loaded config.
/// Handlers receive this through the axum `State` extractor instead of a
/// process-global database handle, so tests can build one around an
/// in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub store: UserStore,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Loads the config and opens the store. A store that cannot be opened
    /// is fatal: the error propagates out of `main` before the listener
    /// binds.
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env());
        let store = UserStore::connect(&config.database_url).await?;
        Ok(Self::from_parts(store, config))
    }

    pub fn from_parts(store: UserStore, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }
}
