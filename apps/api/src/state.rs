use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::config::Config;
use crate::editor::EditorSession;
use crate::export::PdfExporter;
use crate::generation::{ContentGenerator, PendingContent};
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single resume being edited. Every mutation is one write-lock section.
    pub store: Arc<RwLock<ResumeStore>>,
    pub editor: Arc<Mutex<EditorSession>>,
    /// Pluggable content backend. Default: MockContentGenerator.
    pub generator: Arc<dyn ContentGenerator>,
    /// Last generated content awaiting apply or clear.
    pub pending: Arc<Mutex<Option<PendingContent>>>,
    pub exporter: Arc<PdfExporter>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, generator: Arc<dyn ContentGenerator>) -> Self {
        let exporter = PdfExporter::new(config.export_dir.clone());
        AppState {
            store: Arc::new(RwLock::new(ResumeStore::new())),
            editor: Arc::new(Mutex::new(EditorSession::default())),
            generator,
            pending: Arc::new(Mutex::new(None)),
            exporter: Arc::new(exporter),
            config,
        }
    }
}
