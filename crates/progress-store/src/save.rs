use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::progress::ProgressSet;

/// Current progress format version.
pub const FORMAT_VERSION: u32 = 1;

/// Storage key hosts use for the progress envelope.
pub const PROGRESS_STORAGE_KEY: &str = "geomaster-progress";

/// The top-level progress envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressFile {
    /// Format identifier.
    pub format: String,
    /// Format version number.
    pub version: u32,
    /// When the progress was saved.
    pub saved: DateTime<Utc>,
    /// The progress sets.
    pub progress: ProgressSet,
}

/// Serialize progress to a pretty-printed JSON string.
pub fn save_progress(progress: &ProgressSet) -> String {
    let file = ProgressFile {
        format: PROGRESS_STORAGE_KEY.to_string(),
        version: FORMAT_VERSION,
        saved: Utc::now(),
        progress: progress.clone(),
    };
    serde_json::to_string_pretty(&file).expect("ProgressSet serialization should never fail")
}
