//! Utility helpers

pub mod labels;

pub use labels::{format_labels, parse_labels};
