//! Page fill analysis — how well the paginated output uses its last page.
//!
//! # Page fill rules
//! - Last page holds ≤ 15% of the usable height on a multi-page document
//!   → the document spills a few lines onto an extra page
//! - Whitespace > 8% on the last page → too much whitespace
//! - Otherwise acceptable

use serde::{Deserialize, Serialize};

use crate::models::output::PageSet;

const MAX_WHITESPACE_FRACTION: f32 = 0.08;
const SPILL_FILL_THRESHOLD: f32 = 0.15;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageFillVerdict {
    /// Last page is ≥ 92% used.
    Acceptable,
    /// Last page leaves more than 8% of its usable height empty.
    TooMuchWhitespace,
    /// A handful of lines overflowed onto an otherwise empty extra page.
    SpillsOntoExtraPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageFillAnalysis {
    pub page_count: usize,
    /// Fraction of the last page's usable height between the top margin and
    /// the lowest baseline (0.0 – 1.0).
    pub last_page_fill: f32,
    pub whitespace_fraction: f32,
    pub verdict: PageFillVerdict,
}

// ────────────────────────────────────────────────────────────────────────────
// Core function
// ────────────────────────────────────────────────────────────────────────────

pub fn analyze_page_fill(pages: &PageSet) -> PageFillAnalysis {
    let config = &pages.config;
    let usable = config.content_height();

    let last_page_fill = pages
        .pages
        .last()
        .and_then(|p| p.lowest_y())
        .map(|lowest| ((config.top_y() - lowest) / usable).clamp(0.0, 1.0))
        .unwrap_or(0.0);

    let whitespace_fraction = 1.0 - last_page_fill;
    let page_count = pages.page_count();

    let verdict = if page_count > 1 && last_page_fill <= SPILL_FILL_THRESHOLD {
        PageFillVerdict::SpillsOntoExtraPage
    } else if whitespace_fraction > MAX_WHITESPACE_FRACTION {
        PageFillVerdict::TooMuchWhitespace
    } else {
        PageFillVerdict::Acceptable
    };

    PageFillAnalysis {
        page_count,
        last_page_fill,
        whitespace_fraction,
        verdict,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::PageConfig;
    use crate::models::output::{Page, RunKind, TextRun};
    use crate::models::style::{Alignment, Rgb, StylePreset};

    fn config() -> PageConfig {
        // usable height 100, top baseline 110
        PageConfig {
            width_pt: 200.0,
            height_pt: 120.0,
            margin_pt: 10.0,
            leading_pt: 4.0,
        }
    }

    fn run_at(y: f32) -> TextRun {
        TextRun {
            text: "x".into(),
            x: 10.0,
            y,
            width: 5.0,
            style: StylePreset {
                font_size_pt: 10.0,
                bold: false,
                color: Rgb::new(0, 0, 0),
                alignment: Alignment::Left,
                indent_pt: 0.0,
                spacing_before_pt: 0.0,
                spacing_after_pt: 0.0,
                underline: false,
            },
            kind: RunKind::Text,
            line_index: 0,
        }
    }

    fn page_set(lowest: &[f32]) -> PageSet {
        PageSet {
            pages: lowest
                .iter()
                .enumerate()
                .map(|(i, &y)| Page {
                    index: i,
                    runs: vec![run_at(110.0), run_at(y)],
                })
                .collect(),
            config: config(),
        }
    }

    #[test]
    fn test_full_single_page_is_acceptable() {
        let analysis = analyze_page_fill(&page_set(&[15.0]));
        assert_eq!(analysis.verdict, PageFillVerdict::Acceptable);
        assert!((analysis.last_page_fill - 0.95).abs() < 1e-4);
    }

    #[test]
    fn test_half_page_has_too_much_whitespace() {
        let analysis = analyze_page_fill(&page_set(&[60.0]));
        assert_eq!(analysis.verdict, PageFillVerdict::TooMuchWhitespace);
        assert!((analysis.whitespace_fraction - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_short_second_page_is_a_spill() {
        let analysis = analyze_page_fill(&page_set(&[15.0, 100.0]));
        assert_eq!(analysis.page_count, 2);
        assert_eq!(analysis.verdict, PageFillVerdict::SpillsOntoExtraPage);
    }

    #[test]
    fn test_empty_page_set_reports_zero_fill() {
        let pages = PageSet {
            pages: vec![Page::new(0)],
            config: config(),
        };
        let analysis = analyze_page_fill(&pages);
        assert_eq!(analysis.last_page_fill, 0.0);
        assert_eq!(analysis.verdict, PageFillVerdict::TooMuchWhitespace);
    }
}
