use std::sync::Arc;

use placard_export::pdf::PdfExporter;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub exporter: Arc<dyn PdfExporter>,
}

impl AppState {
    pub fn new(exporter: impl PdfExporter + 'static) -> Self {
        Self {
            exporter: Arc::new(exporter),
        }
    }
}
