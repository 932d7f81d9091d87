use std::sync::Arc;

use crate::analysis::tables::ScoringTables;
use crate::llm_client::CompletionGateway;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data: credentials travel with each request only.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: `LlmClient`. Tests use a stub.
    pub gateway: Arc<dyn CompletionGateway>,
    /// Immutable lookup tables, built once at startup.
    pub tables: Arc<ScoringTables>,
}
