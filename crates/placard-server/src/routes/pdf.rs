use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use placard_core::selector::random_document;
use placard_export::render::render_document;

use crate::error::ApiError;
use crate::state::AppState;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const PDF_DISPOSITION: &str = "attachment; filename=output.pdf";

/// Generate a placeholder document and return it as a PDF download.
///
/// The request body is ignored.
pub async fn generate_pdf(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let data = random_document();
    tracing::debug!(title = %data.title, "generating document");

    let html = render_document(&data)?;
    let pdf = state.exporter.export(&html).await?;

    Ok((
        [
            (header::CONTENT_TYPE, PDF_CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, PDF_DISPOSITION),
        ],
        pdf,
    ))
}
