use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("browser launch failed: {0}")]
    BrowserLaunch(String),

    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("PDF export timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExportError {
    /// Whether the failure happened while producing HTML rather than printing it.
    pub fn is_render(&self) -> bool {
        matches!(
            self,
            ExportError::TemplateRender(_)
                | ExportError::TemplateParse(_)
                | ExportError::Serialization(_)
        )
    }
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}
