//! Persistent study progress.
//!
//! Progress is a pair of sets of scoped entry ids (`learned` and
//! `favorites`) serialized to a versioned JSON envelope. The host
//! decides where the string lives (browser local storage under
//! [`PROGRESS_STORAGE_KEY`], a file on disk, a test fixture).

pub mod errors;
pub mod load;
pub mod migrate;
pub mod progress;
pub mod save;
pub mod theme;

pub use errors::LoadError;
pub use load::load_progress;
pub use progress::ProgressSet;
pub use save::{save_progress, FORMAT_VERSION, PROGRESS_STORAGE_KEY};
pub use theme::{load_dark_mode, save_dark_mode, DARK_MODE_STORAGE_KEY};
