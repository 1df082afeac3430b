use std::sync::Arc;

use crate::context_store::ContextStore;
use crate::llm_client::Completer;
use crate::mailer::EmailSender;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The provider clients are constructed once at startup and carried as
/// capability traits (`Completer`, `EmailSender`) so tests substitute fakes.
/// The context store is read-only for the life of the process.
#[derive(Clone)]
pub struct AppState {
    pub completer: Arc<dyn Completer>,
    pub mailer: Arc<dyn EmailSender>,
    pub context: Arc<ContextStore>,
}
