// Paginated layout: font metrics, greedy word wrap, page breaking, fill analysis.
// Pure CPU-bound code; async callers go through `pipeline::render_blocking`.

pub mod font_metrics;
pub mod page_fill;
pub mod paginate;
pub mod wrap;

pub use font_metrics::{default_page_config, FontFamily, FontMetrics, PageConfig, TextMeasurer};
pub use page_fill::{analyze_page_fill, PageFillAnalysis, PageFillVerdict};
pub use paginate::to_pages;
pub use wrap::{estimated_lines, wrap_text, WrappedLine};
