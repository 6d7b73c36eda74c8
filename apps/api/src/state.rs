use std::sync::Arc;

use crate::config::Config;
use crate::design::VariantGenerator;
use crate::history::HistoryLog;
use crate::resume::ResumeParser;
use crate::store::PortfolioStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PortfolioStore>,
    pub history: Arc<dyn HistoryLog>,
    /// Production: archives to S3 and parses with the LLM.
    pub resume_parser: Arc<dyn ResumeParser>,
    /// Source of design variants for first saves.
    pub variants: Arc<VariantGenerator>,
    pub config: Config,
}
