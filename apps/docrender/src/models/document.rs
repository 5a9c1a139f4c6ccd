//! Document-level types: what kind of document is being rendered and the
//! semantic role assigned to each of its lines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PipelineError;
use crate::models::style::StylePreset;

/// The kind of document being structured. Selects the classification rule set
/// and the style preset table; fixed for the whole pipeline invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentType {
    Resume,
    CoverLetter,
}

impl DocumentType {
    /// Wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Resume => "resume",
            DocumentType::CoverLetter => "coverLetter",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = PipelineError;

    /// Accepts `resume` and `coverLetter` (plus the `cover_letter` / `cover-letter`
    /// spellings), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resume" => Ok(DocumentType::Resume),
            "coverletter" | "cover_letter" | "cover-letter" => Ok(DocumentType::CoverLetter),
            _ => Err(PipelineError::UnsupportedDocumentType(s.to_string())),
        }
    }
}

/// Semantic classification of a single line.
///
/// One flat enum covers both document types. `ContactInfo` is shared; the
/// others belong to exactly one type (see [`Role::belongs_to`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    // Resume
    Name,
    ContactInfo,
    SectionHeader,
    SubHeader,
    Bullet,
    Body,
    // Cover letter
    Title,
    Date,
    Salutation,
    Closing,
    Paragraph,
}

impl Role {
    /// Every role, in declaration order. Used to check that style lookup is total.
    pub const ALL: [Role; 11] = [
        Role::Name,
        Role::ContactInfo,
        Role::SectionHeader,
        Role::SubHeader,
        Role::Bullet,
        Role::Body,
        Role::Title,
        Role::Date,
        Role::Salutation,
        Role::Closing,
        Role::Paragraph,
    ];

    /// Fallback role for lines no heuristic claims.
    pub fn default_for(doc_type: DocumentType) -> Role {
        match doc_type {
            DocumentType::Resume => Role::Body,
            DocumentType::CoverLetter => Role::Paragraph,
        }
    }

    /// Whether the classifier can produce this role for the given document type.
    /// Holds because each type's rule table and fallback only name its own roles.
    pub fn belongs_to(&self, doc_type: DocumentType) -> bool {
        match self {
            Role::ContactInfo => true,
            Role::Name | Role::SectionHeader | Role::SubHeader | Role::Bullet | Role::Body => {
                doc_type == DocumentType::Resume
            }
            Role::Title | Role::Date | Role::Salutation | Role::Closing | Role::Paragraph => {
                doc_type == DocumentType::CoverLetter
            }
        }
    }
}

/// A line after classification. Reading order is the order of the `Vec` it lives in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    /// Trimmed line text. Bullet markers are stripped.
    pub text: String,
    pub role: Role,
    /// Canonical keyword of the enclosing resume section (`"experience"`, `"skills"`, ...).
    /// `None` before the first section header and for cover letters.
    pub section: Option<String>,
}

/// A classified line paired with its resolved style. The unit both renderers consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledLine {
    pub text: String,
    pub role: Role,
    pub section: Option<String>,
    pub style: StylePreset,
}

impl StyledLine {
    pub fn new(line: ClassifiedLine, style: StylePreset) -> Self {
        Self {
            text: line.text,
            role: line.role,
            section: line.section,
            style,
        }
    }
}
