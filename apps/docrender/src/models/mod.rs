pub mod document;
pub mod output;
pub mod style;

pub use document::{ClassifiedLine, DocumentType, Role, StyledLine};
pub use output::{Page, PageSet, ParagraphBlock, RenderedDocument, RunKind, TextRun};
pub use style::{Alignment, Rgb, StylePreset};
