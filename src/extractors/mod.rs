// src/extractors/mod.rs
pub mod anchors;
pub mod range;

// Re-export key extraction types for convenience
pub use anchors::{AnchorMatcher, PageMatch};
pub use range::{EdgeMode, NoRange, PageRangeSelector, SelectedRange};
