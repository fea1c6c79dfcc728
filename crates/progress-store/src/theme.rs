//! Dark-mode preference, stored as a bare JSON boolean.

/// Storage key hosts use for the dark-mode flag.
pub const DARK_MODE_STORAGE_KEY: &str = "geomaster-dark-mode";

pub fn save_dark_mode(enabled: bool) -> String {
    enabled.to_string()
}

/// Read the flag back; anything other than a JSON boolean means the
/// preference is unset.
pub fn load_dark_mode(raw: &str) -> Option<bool> {
    serde_json::from_str::<bool>(raw).ok()
}
