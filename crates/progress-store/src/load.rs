use serde::Deserialize;
use tracing::debug;

use crate::errors::LoadError;
use crate::migrate;
use crate::progress::ProgressSet;
use crate::save::{FORMAT_VERSION, PROGRESS_STORAGE_KEY};

/// The top-level envelope for deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressFileRaw {
    pub format: String,
    pub version: u32,
    pub progress: ProgressSet,
}

/// Deserialize progress from a JSON string.
///
/// Validates the format identifier and version. A bare
/// `{"learned": [...], "favorites": [...]}` object with no envelope is
/// the pre-versioning layout and loads through migration.
pub fn load_progress(json: &str) -> Result<ProgressSet, LoadError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if value.get("format").is_none() {
        debug!("no format field, loading as legacy progress");
        return migrate::migrate_legacy(value);
    }

    let raw: ProgressFileRaw = serde_json::from_value(value)
        .map_err(|e| LoadError::ParseError(e.to_string()))?;

    // Validate format identifier
    if raw.format != PROGRESS_STORAGE_KEY {
        return Err(LoadError::UnknownFormat(raw.format));
    }

    // Validate version
    if raw.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }

    // Apply migrations if needed (version < current)
    if raw.version < FORMAT_VERSION {
        migrate::migrate(raw.progress, raw.version, FORMAT_VERSION)
    } else {
        Ok(raw.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::save_progress;

    #[test]
    fn round_trips_through_the_envelope() {
        let mut p = ProgressSet::new();
        p.toggle_learned("3d-sphere");
        p.toggle_learned("2d-circle");
        p.toggle_favorite("concept-ray");
        let json = save_progress(&p);
        assert_eq!(load_progress(&json).unwrap(), p);
    }

    #[test]
    fn legacy_bare_object_loads_via_migration() {
        let json = r#"{"learned": ["3d-cube", "3d-sphere"], "favorites": ["2d-square"]}"#;
        let p = load_progress(json).unwrap();
        assert!(p.is_learned("3d-cube"));
        assert!(p.is_favorite("2d-square"));
        assert_eq!(p.learned_count(), 2);
    }

    #[test]
    fn legacy_object_tolerates_missing_sets() {
        let p = load_progress(r#"{"learned": ["3d-cone"]}"#).unwrap();
        assert_eq!(p.learned_count(), 1);
        assert_eq!(p.favorites_count(), 0);
    }

    #[test]
    fn rejects_unknown_format() {
        let json = r#"{"format": "other-app", "version": 1, "progress": {"learned": [], "favorites": []}}"#;
        assert!(matches!(
            load_progress(json),
            Err(LoadError::UnknownFormat(f)) if f == "other-app"
        ));
    }

    #[test]
    fn rejects_future_version() {
        let json = r#"{"format": "geomaster-progress", "version": 2, "progress": {"learned": [], "favorites": []}}"#;
        assert!(matches!(
            load_progress(json),
            Err(LoadError::FutureVersion {
                file_version: 2,
                supported_version: 1
            })
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            load_progress("not json"),
            Err(LoadError::ParseError(_))
        ));
    }
}
