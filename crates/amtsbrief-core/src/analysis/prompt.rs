//! Analysis request and prompt construction

use crate::error::BriefResult;
use crate::llm::attachment::detect_file_format;
use serde::Serialize;
use std::fmt;
use std::path::Path;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Whether the submitted file is an image of the letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Image,
    Document,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Document => write!(f, "document"),
        }
    }
}

/// What to analyze and in which language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub file_name: String,
    pub language: String,
    pub kind: DocumentKind,
}

impl AnalysisRequest {
    pub fn new(file_name: impl Into<String>, language: impl Into<String>, kind: DocumentKind) -> Self {
        let language = language.into();
        let language = if language.trim().is_empty() {
            DEFAULT_LANGUAGE.to_string()
        } else {
            language.trim().to_string()
        };

        Self {
            file_name: file_name.into(),
            language,
            kind,
        }
    }

    /// Build a request for a file on disk, sniffing whether it is an image
    pub async fn for_file(path: &Path, language: &str) -> BriefResult<Self> {
        let kind = match detect_file_format(path).await? {
            Some(format) if format.is_image() => DocumentKind::Image,
            _ => DocumentKind::Document,
        };
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::new(file_name, language, kind))
    }

    pub fn is_image(&self) -> bool {
        self.kind == DocumentKind::Image
    }
}

/// Structured nine-point prompt for an official German letter
pub fn analysis_prompt(request: &AnalysisRequest) -> String {
    let kind = match request.kind {
        DocumentKind::Image => "Image",
        DocumentKind::Document => "Document",
    };

    format!(
        "Analyze this German official letter and provide a structured response in {language}.\n\
         \n\
         Please provide:\n\
         1. Brief summary\n\
         2. Sender information\n\
         3. Letter type\n\
         4. Main content\n\
         5. Required actions\n\
         6. Important deadlines\n\
         7. Consequences if no action taken\n\
         8. Urgency level (LOW/MEDIUM/HIGH)\n\
         9. Response template if needed\n\
         \n\
         File: {file}\n\
         Type: {kind}\n",
        language = request.language,
        file = request.file_name,
        kind = kind,
    )
}
