//! SNS integration for the image processor
//!
//! Publishes classification messages consumed by the image resizer.

pub mod publisher;

pub use publisher::{Notifier, SnsNotifier};
