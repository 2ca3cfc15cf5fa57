//! Vision provider implementations

pub mod rekognition;

pub use rekognition::{LabelDetector, LabelResult, RekognitionLabelDetector};
