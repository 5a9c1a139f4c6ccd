// Structured (flowing) output. The paginated counterpart lives in `layout`.

pub mod structured;

pub use structured::{plain_text, to_paragraphs};
