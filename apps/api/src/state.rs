use std::sync::Arc;

use crate::catalog::CatalogProvider;
use crate::config::Config;
use crate::narrative::NarrativeComposer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Catalog backend. `InMemoryCatalog` or `PgCatalog`, chosen from `CATALOG_PATH` / `DATABASE_URL`.
    pub catalog: Arc<dyn CatalogProvider>,
    /// Narrative backend. `LlmNarrativeComposer` when an API key is configured, else `RuleBasedComposer`.
    pub composer: Arc<dyn NarrativeComposer>,
    pub config: Config,
}
