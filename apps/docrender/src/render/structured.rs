//! Structured renderer — one styled paragraph per line, no positions.

use crate::models::document::StyledLine;
use crate::models::output::ParagraphBlock;

/// One-to-one, order-preserving projection of styled lines to paragraph blocks.
pub fn to_paragraphs(lines: &[StyledLine]) -> Vec<ParagraphBlock> {
    lines
        .iter()
        .map(|line| ParagraphBlock {
            text: line.text.clone(),
            role: line.role,
            style: line.style,
        })
        .collect()
}

/// Paragraph texts joined by newlines.
pub fn plain_text(paragraphs: &[ParagraphBlock]) -> String {
    paragraphs
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
