//! Classification of vision labels and thumbnail key derivation
use crate::providers::LabelResult;
use crate::{ProcessorError, Result};
use event_schema::{THUMBNAIL_DIR, THUMBNAIL_EXTENSION};

/// Label that marks an image as showing beer (exact, case-sensitive match)
pub const BEER_LABEL: &str = "Beer";

/// Labels treated as mutually exclusive beer styles
pub const KNOWN_STYLES: &[&str] = &["Stout", "Lager"];

/// Outcome of classifying one image's labels
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classification {
    pub is_beer: bool,
    /// First known style in label order, empty if none matched
    pub style: String,
}

/// Derive the beer flag and style from labels in the order the service
/// returned them
pub fn classify_labels(labels: &[LabelResult]) -> Classification {
    let is_beer = labels.iter().any(|label| label.name == BEER_LABEL);

    let style = labels
        .iter()
        .map(|label| label.name.as_str())
        .find(|name| KNOWN_STYLES.contains(name))
        .unwrap_or_default()
        .to_string();

    Classification { is_beer, style }
}

/// Destination key of the thumbnail for an uploaded object
///
/// Everything after the last `.` is replaced by the thumbnail extension and
/// the result is placed under the thumbnail directory:
/// `foo/bar.jpg` becomes `thumb/foo/bar.png`.
pub fn thumbnail_key(key: &str) -> Result<String> {
    let stem = key
        .rfind('.')
        .map(|idx| &key[..idx])
        .ok_or_else(|| {
            ProcessorError::MalformedInput(format!("Object key has no extension: {key}"))
        })?;

    Ok(format!("{THUMBNAIL_DIR}/{stem}.{THUMBNAIL_EXTENSION}"))
}
