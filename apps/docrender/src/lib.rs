//! Turns raw, unstructured resume or cover-letter text into two renderings:
//! an ordered list of styled paragraphs for word-processor output, and a set of
//! absolutely positioned text runs split across fixed-size pages.
//!
//! ```no_run
//! use docrender::{default_page_config, render, DocumentType};
//!
//! let doc = render("JANE ROE\njane@roe.dev", DocumentType::Resume, &default_page_config())?;
//! println!("{} paragraphs on {} page(s)", doc.paragraphs.len(), doc.pages.page_count());
//! # Ok::<(), docrender::PipelineError>(())
//! ```

pub mod classify;
pub mod config;
pub mod errors;
pub mod layout;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod style;

pub use classify::{classify, Classifier, ClassifierThresholds};
pub use config::{init_tracing, PipelineConfig};
pub use errors::PipelineError;
pub use layout::{
    analyze_page_fill, default_page_config, to_pages, FontFamily, FontMetrics, PageConfig,
    PageFillAnalysis, PageFillVerdict, TextMeasurer,
};
pub use models::{
    Alignment, ClassifiedLine, DocumentType, Page, PageSet, ParagraphBlock, RenderedDocument,
    Rgb, Role, RunKind, StylePreset, StyledLine, TextRun,
};
pub use pipeline::{render, render_str, split_lines, Pipeline};
pub use render::{plain_text, to_paragraphs};
pub use style::{resolve_style, style_lines};
