//! Image processor business logic

pub mod classification;

pub use classification::{classify_labels, thumbnail_key, Classification, BEER_LABEL, KNOWN_STYLES};
