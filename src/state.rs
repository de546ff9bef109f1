use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::repository::ProjectRepository;

/// Shared application state available to handlers via `State<AppState>`.
///
/// Constructed once at startup and cheaply cloneable. Holding the repository
/// behind a trait object is what lets tests run the full router against the
/// in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ProjectRepository>,
    pub config: Arc<AppConfig>,
}
