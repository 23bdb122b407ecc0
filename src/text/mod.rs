//! Text normalization for scoring and layout.

mod segmenter;

pub use segmenter::{segment, truncate_chars};
