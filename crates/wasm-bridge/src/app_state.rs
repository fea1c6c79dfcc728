use rand::rngs::StdRng;
use rand::SeedableRng;

use geo_catalog::Catalog;
use geo_types::{CatalogEntry, Dimensionality, Domain};
use progress_store::{LoadError, ProgressSet};
use quiz_engine::{QuizItem, QuizSession};

/// The app state behind the message handlers.
///
/// Holds the loaded catalog, the learner's progress, the active quiz
/// session (if any), and view settings. Single-threaded; the wasm entry
/// points keep one instance per worker.
pub struct AppState {
    pub catalog: Catalog,
    pub progress: ProgressSet,
    pub rng: StdRng,
    pub quiz: Option<QuizSession>,
    /// Currently selected entry, as (domain, entry id).
    pub selected: Option<(Domain, String)>,
    pub dark_mode: bool,
    pub wireframe: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic state for tests: quiz generation replays exactly.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            catalog: Catalog::load(),
            progress: ProgressSet::new(),
            rng,
            quiz: None,
            selected: None,
            dark_mode: false,
            wireframe: false,
        }
    }

    /// Look up a catalog entry, or fail with the id that missed.
    pub fn find_entry(&self, domain: Domain, id: &str) -> Result<&CatalogEntry, BridgeError> {
        self.catalog
            .find(domain, id)
            .ok_or_else(|| BridgeError::UnknownEntry {
                domain,
                id: id.to_string(),
            })
    }

    /// An entry plus the dimensionality the calculator needs. Line
    /// concepts have no measurable dimensions.
    pub fn measurable_entry(
        &self,
        domain: Domain,
        id: &str,
    ) -> Result<(&CatalogEntry, Dimensionality), BridgeError> {
        let entry = self.find_entry(domain, id)?;
        let dim = domain
            .dimensionality()
            .ok_or(BridgeError::NotMeasurable { domain })?;
        Ok((entry, dim))
    }

    /// The quiz pool for a domain: every entry of that domain.
    pub fn quiz_pool(&self, domain: Domain) -> Vec<QuizItem> {
        self.catalog
            .entries(domain)
            .iter()
            .map(QuizItem::from)
            .collect()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from the bridge layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    #[error("no entry '{id}' in the {domain:?} catalog")]
    UnknownEntry { domain: Domain, id: String },

    #[error("{domain:?} entries have no measurable dimensions")]
    NotMeasurable { domain: Domain },

    #[error("no active quiz")]
    NoActiveQuiz,

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
