use crate::domain::models::{DocumentKind, Layout};
use crate::error::DriftError;
use std::path::Path;

/// Full UTF-8 text of both documentation files, loaded once per run.
#[derive(Debug, Clone)]
pub struct Documents {
    api: String,
    application: String,
}

impl Documents {
    pub fn load(layout: &Layout) -> Result<Self, DriftError> {
        Ok(Self {
            api: read_document(&layout.resolve(&layout.api_doc))?,
            application: read_document(&layout.resolve(&layout.application_doc))?,
        })
    }

    #[cfg(test)]
    pub fn from_texts(api: impl Into<String>, application: impl Into<String>) -> Self {
        Self {
            api: api.into(),
            application: application.into(),
        }
    }

    pub fn text(&self, doc: DocumentKind) -> &str {
        match doc {
            DocumentKind::Api => &self.api,
            DocumentKind::Application => &self.application,
        }
    }
}

fn read_document(path: &Path) -> Result<String, DriftError> {
    let text = std::fs::read_to_string(path).map_err(|e| DriftError::missing(path, e))?;
    tracing::debug!(doc = %path.display(), bytes = text.len(), "loaded document");
    Ok(text)
}
