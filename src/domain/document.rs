use bytes::Bytes;

use super::document_id::DocumentId;

/// An uploaded file held in memory until it is replaced or analysed.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub content_type: ContentType,
    pub data: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Text,
}

impl ContentType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "application/pdf" => Some(Self::Pdf),
            "text/plain" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Text => "text/plain",
        }
    }
}

/// Which of the two analysis inputs a document fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentRole {
    Paper,
    Rubric,
}

impl DocumentRole {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "paper" => Some(Self::Paper),
            "rubric" => Some(Self::Rubric),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paper => "paper",
            Self::Rubric => "rubric",
        }
    }
}

impl Document {
    pub fn new(filename: String, content_type: ContentType, data: impl Into<Bytes>) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            content_type,
            data: data.into(),
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_pdf(&self) -> bool {
        self.content_type == ContentType::Pdf
    }
}
