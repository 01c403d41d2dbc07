use serde::{Deserialize, Serialize};

/// The values substituted into the document template.
///
/// Built fresh for every request and discarded once the HTML is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentData {
    pub title: String,
    pub content: String,
}

impl DocumentData {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
