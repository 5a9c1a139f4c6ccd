//! Greedy word wrap.
//!
//! Words are accumulated onto a candidate line while the measured width of the
//! candidate stays within `max_width`. A word that does not fit on its own is
//! emitted unsplit as a single overflowing line.

use crate::layout::font_metrics::TextMeasurer;
use crate::models::style::StylePreset;

/// One wrapped sub-line of a logical line.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub text: String,
    pub width: f32,
    /// Single unbreakable word wider than the available width.
    pub overflow: bool,
}

/// Wraps `text` to `max_width` points using the style's font size and weight.
///
/// Whitespace runs collapse to a single space. Returns no lines for blank text.
pub fn wrap_text(
    text: &str,
    style: &StylePreset,
    max_width: f32,
    measurer: &dyn TextMeasurer,
) -> Vec<WrappedLine> {
    let measure = |s: &str| measurer.measure(s, style.font_size_pt, style.bold);

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        let candidate_width = measure(&candidate);

        if candidate_width <= max_width {
            current = candidate;
            current_width = candidate_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(WrappedLine {
                text: std::mem::take(&mut current),
                width: current_width,
                overflow: false,
            });
        }

        let word_width = measure(word);
        if word_width > max_width {
            lines.push(WrappedLine {
                text: word.to_string(),
                width: word_width,
                overflow: true,
            });
            current_width = 0.0;
        } else {
            current = word.to_string();
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(WrappedLine {
            text: current,
            width: current_width,
            overflow: false,
        });
    }
    lines
}

/// Number of printed lines `text` occupies when wrapped at `max_width`.
pub fn estimated_lines(
    text: &str,
    style: &StylePreset,
    max_width: f32,
    measurer: &dyn TextMeasurer,
) -> usize {
    wrap_text(text, style, max_width, measurer).len()
}
