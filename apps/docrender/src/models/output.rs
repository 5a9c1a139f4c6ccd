//! The two output representations produced by the pipeline.
//!
//! - Structured: an ordered list of [`ParagraphBlock`]s, no positions.
//!   Handed to a paragraph/run-based writer (DOCX-like).
//! - Paginated: a [`PageSet`] of fixed-size pages holding positioned
//!   [`TextRun`]s. Handed to a coordinate-based writer (PDF-like).

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::PageConfig;
use crate::models::document::{DocumentType, Role};
use crate::models::style::StylePreset;

/// One styled paragraph of the structured representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphBlock {
    pub text: String,
    pub role: Role,
    pub style: StylePreset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunKind {
    /// Wrapped text fragment.
    Text,
    /// Zero-height horizontal rule drawn above a section header. `text` is empty.
    Rule,
}

/// One positioned fragment on a page.
///
/// `x`/`y` use PDF user space: origin at the bottom-left corner, `y` is the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub y: f32,
    /// Measured width of `text`; for a rule, the rule length.
    pub width: f32,
    pub style: StylePreset,
    pub kind: RunKind,
    /// Index of the originating `StyledLine`.
    pub line_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 0-based page number.
    pub index: usize,
    pub runs: Vec<TextRun>,
}

impl Page {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            runs: Vec::new(),
        }
    }

    /// Lowest baseline on the page, if anything was placed on it.
    pub fn lowest_y(&self) -> Option<f32> {
        self.runs.iter().map(|r| r.y).reduce(f32::min)
    }
}

/// Ordered pages plus the geometry they were laid out against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSet {
    pub pages: Vec<Page>,
    pub config: PageConfig,
}

impl PageSet {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All runs in emission order (page ascending, then top to bottom).
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.pages.iter().flat_map(|p| p.runs.iter())
    }

    /// Text runs only, skipping rules.
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.runs().filter(|r| r.kind == RunKind::Text)
    }
}

/// Everything one pipeline invocation returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub doc_type: DocumentType,
    pub paragraphs: Vec<ParagraphBlock>,
    pub pages: PageSet,
}

impl RenderedDocument {
    /// JSON hand-off for out-of-process writers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
