//! Pipeline orchestrator — raw text in, both output representations out.
//!
//! # Architecture
//! `raw text → split_lines → Classifier → style_lines → {to_paragraphs, to_pages}`.
//! Every stage is a pure function; the only injected collaborator is the
//! `TextMeasurer` used for word wrapping.
//!
//! # spawn_blocking pattern
//! Pagination is CPU-bound. Async callers use `render_blocking`, which moves the
//! work onto tokio's blocking pool so the scheduler stays responsive. The closure
//! takes owned data to satisfy the `'static` bound.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::classify::{Classifier, ClassifierThresholds};
use crate::config::PipelineConfig;
use crate::errors::PipelineError;
use crate::layout::font_metrics::{FontMetrics, PageConfig, TextMeasurer};
use crate::layout::paginate::to_pages;
use crate::models::document::DocumentType;
use crate::models::output::RenderedDocument;
use crate::render::structured::to_paragraphs;
use crate::style::style_lines;

/// Splits on newlines, trims each line, and drops blank ones.
pub fn split_lines(raw_text: &str) -> Vec<&str> {
    raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// A configured pipeline. Cheap to clone; holds no mutable state.
#[derive(Clone)]
pub struct Pipeline {
    classifier: Classifier,
    measurer: Arc<dyn TextMeasurer>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(
            Arc::new(FontMetrics::default()),
            ClassifierThresholds::default(),
        )
    }
}

impl Pipeline {
    pub fn new(measurer: Arc<dyn TextMeasurer>, thresholds: ClassifierThresholds) -> Self {
        Self {
            classifier: Classifier::new(thresholds),
            measurer,
        }
    }

    /// Table-backed metrics for the configured font family.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(Arc::new(FontMetrics::new(config.font)), config.thresholds)
    }

    /// Runs the full pipeline.
    ///
    /// Fails only before any work is done: on unusable page geometry or when
    /// `raw_text` has no non-blank lines.
    pub fn render(
        &self,
        raw_text: &str,
        doc_type: DocumentType,
        page: &PageConfig,
    ) -> Result<RenderedDocument, PipelineError> {
        page.validate()?;

        let lines = split_lines(raw_text);
        if lines.is_empty() {
            return Err(PipelineError::EmptyContent);
        }
        debug!(doc_type = %doc_type, lines = lines.len(), "Rendering document");

        let classified = self.classifier.classify(&lines, doc_type);
        let styled = style_lines(classified, doc_type);
        let paragraphs = to_paragraphs(&styled);
        let pages = to_pages(&styled, page, self.measurer.as_ref());

        info!(
            doc_type = %doc_type,
            paragraphs = paragraphs.len(),
            pages = pages.page_count(),
            "Document rendered"
        );

        Ok(RenderedDocument {
            doc_type,
            paragraphs,
            pages,
        })
    }

    /// Like [`Pipeline::render`], with the document type given by its wire name.
    pub fn render_str(
        &self,
        raw_text: &str,
        doc_type: &str,
        page: &PageConfig,
    ) -> Result<RenderedDocument, PipelineError> {
        let doc_type: DocumentType = doc_type.parse()?;
        self.render(raw_text, doc_type, page)
    }

    /// Runs [`Pipeline::render`] on tokio's blocking pool.
    pub async fn render_blocking(
        &self,
        raw_text: String,
        doc_type: DocumentType,
        page: PageConfig,
    ) -> Result<RenderedDocument, PipelineError> {
        let pipeline = self.clone();
        tokio::task::spawn_blocking(move || pipeline.render(&raw_text, doc_type, &page))
            .await
            .map_err(|e| {
                error!(doc_type = %doc_type, error = %e, "Render task failed to complete");
                PipelineError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}"))
            })?
    }
}

/// Renders with the default pipeline (Helvetica metrics, default thresholds).
pub fn render(
    raw_text: &str,
    doc_type: DocumentType,
    page: &PageConfig,
) -> Result<RenderedDocument, PipelineError> {
    Pipeline::default().render(raw_text, doc_type, page)
}

/// Renders with the default pipeline, parsing the document type name.
pub fn render_str(
    raw_text: &str,
    doc_type: &str,
    page: &PageConfig,
) -> Result<RenderedDocument, PipelineError> {
    Pipeline::default().render_str(raw_text, doc_type, page)
}
