use serde::Serialize;
use tera::{Context, Tera};

use placard_core::models::document::DocumentData;

use crate::error::ExportError;

/// The single page layout every PDF is printed from.
pub const DOCUMENT_TEMPLATE: &str = include_str!("../templates/document.html");

/// Template name for [`DOCUMENT_TEMPLATE`]. The `.html` suffix turns on
/// Tera's HTML autoescaping.
pub const DOCUMENT_TEMPLATE_NAME: &str = "document.html";

/// Compile `template_content` under `template_name` and render it once.
///
/// `value` must serialize to a JSON object; each of its keys is visible to
/// the template by name. Escaping follows the name: `.html` templates get
/// their substitutions HTML-escaped, anything else is left raw.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    value: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(value)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render [`DocumentData`] into the fixed document layout.
pub fn render_document(data: &DocumentData) -> Result<String, ExportError> {
    render_template(DOCUMENT_TEMPLATE_NAME, DOCUMENT_TEMPLATE, data)
}
