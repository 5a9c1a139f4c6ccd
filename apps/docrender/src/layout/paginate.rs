//! Paginated renderer — lays styled lines out onto fixed-size pages.
//!
//! # Algorithm
//! A cursor `(page, y)` starts at `(0, height - margin)` and only moves down.
//! For each styled line, in order:
//! 1. Subtract `spacing_before_pt` (skipped at the top of a fresh page).
//! 2. Section headers get a zero-height rule at the cursor, then a gap. If the
//!    header's first line would not fit below the rule, both move to a new page.
//! 3. The text is greedily word-wrapped against `content_width - indent`.
//! 4. Before each sub-line: if `y < margin`, open a new page and reset `y`.
//! 5. After each sub-line: `y -= font_size + leading`.
//! 6. After the last sub-line: subtract `spacing_after_pt`.
//!
//! Terminates in one pass over the words; never fails on valid input.

use tracing::{debug, warn};

use crate::layout::font_metrics::{PageConfig, TextMeasurer};
use crate::layout::wrap::wrap_text;
use crate::models::document::{Role, StyledLine};
use crate::models::output::{Page, PageSet, RunKind, TextRun};
use crate::models::style::{Alignment, StylePreset};

/// Vertical gap between a section rule and the baseline of the header text
/// below it, on top of the header's own font size.
pub const SECTION_RULE_GAP_PT: f32 = 3.0;

// ────────────────────────────────────────────────────────────────────────────
// Cursor
// ────────────────────────────────────────────────────────────────────────────

struct Cursor<'a> {
    config: &'a PageConfig,
    pages: Vec<Page>,
    y: f32,
    /// Nothing has been placed on the current page yet.
    fresh: bool,
}

impl<'a> Cursor<'a> {
    fn new(config: &'a PageConfig) -> Self {
        Self {
            config,
            pages: vec![Page::new(0)],
            y: config.top_y(),
            fresh: true,
        }
    }

    fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }

    /// Opens a new page when the cursor has dropped below the bottom margin.
    fn ensure_room(&mut self) {
        if self.y < self.config.margin_pt {
            self.new_page();
        }
    }

    /// Opens a new page unless `depth` more points fit above the bottom margin.
    /// Never leaves a fresh page empty.
    fn ensure_depth(&mut self, depth: f32) {
        if !self.fresh && self.y - depth < self.config.margin_pt {
            self.new_page();
        }
    }

    fn new_page(&mut self) {
        let index = self.pages.len();
        self.pages.push(Page::new(index));
        self.y = self.config.top_y();
        self.fresh = true;
    }

    fn place(&mut self, run: TextRun) {
        if let Some(page) = self.pages.last_mut() {
            page.runs.push(run);
        }
        self.fresh = false;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry point
// ────────────────────────────────────────────────────────────────────────────

/// Lays `lines` out onto pages of the given geometry.
///
/// Page 0 always exists; further pages are created on demand.
pub fn to_pages(lines: &[StyledLine], config: &PageConfig, measurer: &dyn TextMeasurer) -> PageSet {
    let mut cursor = Cursor::new(config);
    let content_width = config.content_width();
    let mut overflow_words = 0usize;

    for (line_index, line) in lines.iter().enumerate() {
        let style = &line.style;

        if !cursor.fresh {
            cursor.advance(style.spacing_before_pt);
        }

        if line.role == Role::SectionHeader {
            // The rule and the header's first line share a page.
            let rule_depth = style.font_size_pt + SECTION_RULE_GAP_PT;
            cursor.ensure_room();
            cursor.ensure_depth(rule_depth);
            let y = cursor.y;
            cursor.place(TextRun {
                text: String::new(),
                x: config.margin_pt,
                y,
                width: content_width,
                style: *style,
                kind: RunKind::Rule,
                line_index,
            });
            cursor.advance(rule_depth);
        }

        let available = (content_width - style.indent_pt).max(0.0);
        for sub_line in wrap_text(&line.text, style, available, measurer) {
            cursor.ensure_room();

            if sub_line.overflow {
                overflow_words += 1;
                warn!(
                    line_index,
                    page = cursor.pages.len() - 1,
                    width = sub_line.width,
                    available,
                    "Unbreakable word wider than the content area; emitting unwrapped"
                );
            }

            let y = cursor.y;
            cursor.place(TextRun {
                x: run_x(style, sub_line.width, config),
                y,
                width: sub_line.width,
                text: sub_line.text,
                style: *style,
                kind: RunKind::Text,
                line_index,
            });
            cursor.advance(style.line_height(config.leading_pt));
        }

        cursor.advance(style.spacing_after_pt);
    }

    let page_set = PageSet {
        pages: cursor.pages,
        config: *config,
    };
    debug!(
        lines = lines.len(),
        pages = page_set.page_count(),
        runs = page_set.runs().count(),
        overflow_words,
        "Pagination complete"
    );
    page_set
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

/// Horizontal start of a run. Never left of the margin, even for overflowing runs.
fn run_x(style: &StylePreset, width: f32, config: &PageConfig) -> f32 {
    let x = match style.alignment {
        Alignment::Left => config.margin_pt + style.indent_pt,
        Alignment::Center => (config.width_pt - width) / 2.0,
        Alignment::Right => config.width_pt - config.margin_pt - width,
    };
    x.max(config.margin_pt)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
