use serde::Deserialize;

use crate::errors::LoadError;
use crate::progress::ProgressSet;

/// Apply format migrations from `from_version` to `to_version`.
///
/// Migrations are applied sequentially: v1→v2, v2→v3, etc.
/// Currently version 1 is the only enveloped version, so no migrations
/// exist yet.
pub fn migrate(
    progress: ProgressSet,
    from_version: u32,
    to_version: u32,
) -> Result<ProgressSet, LoadError> {
    // As the format evolves, add match arms: 1 => migrate_v1_to_v2(progress)?
    if from_version != to_version {
        return Err(LoadError::MigrationFailed {
            from: from_version,
            to: to_version,
            reason: format!(
                "no migration path from v{} to v{}",
                from_version, to_version
            ),
        });
    }
    Ok(progress)
}

/// The pre-versioning layout: a bare object holding the two id arrays,
/// either of which may be absent.
#[derive(Debug, Deserialize)]
struct LegacyProgress {
    #[serde(default)]
    learned: Vec<String>,
    #[serde(default)]
    favorites: Vec<String>,
}

/// Lift a bare pre-versioning object into the current layout.
pub fn migrate_legacy(value: serde_json::Value) -> Result<ProgressSet, LoadError> {
    let legacy: LegacyProgress = serde_json::from_value(value).map_err(|e| {
        LoadError::MigrationFailed {
            from: 0,
            to: crate::save::FORMAT_VERSION,
            reason: e.to_string(),
        }
    })?;
    Ok(ProgressSet {
        learned: legacy.learned.into_iter().collect(),
        favorites: legacy.favorites.into_iter().collect(),
    })
}
