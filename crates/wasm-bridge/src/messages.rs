use serde::{Deserialize, Serialize};
use uuid::Uuid;

use formula_engine::DimensionInputSet;
use geo_types::{
    CatalogEntry, Category, DiagramRenderSpec, Domain, InputField, Measurement, SolidRenderSpec,
};
use quiz_engine::QuizQuestion;

/// Which slice of the catalog an entry listing shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewFilter {
    #[default]
    All,
    Learned,
    Favorites,
}

/// Messages from the UI (JavaScript main thread) to the app core.
/// Serialized as JSON for postMessage transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToApp {
    // -- Catalog browsing --
    /// Switch to a study domain and fetch its full listing.
    SelectDomain {
        domain: Domain,
    },
    /// Re-list a domain's entries under search, category, and view
    /// filters.
    ListEntries {
        domain: Domain,
        #[serde(default)]
        category: Option<String>,
        #[serde(default)]
        query: Option<String>,
        #[serde(default)]
        view: ViewFilter,
    },
    /// Select one entry for the detail panel.
    SelectShape {
        domain: Domain,
        id: String,
    },

    // -- Calculator --
    /// Fetch the input fields the calculator shows for an entry.
    RequestInputFields {
        domain: Domain,
        id: String,
    },
    /// Compute measurements from the entered dimensions.
    Compute {
        domain: Domain,
        id: String,
        inputs: DimensionInputSet,
    },

    // -- Quiz --
    StartQuiz {
        domain: Domain,
    },
    AnswerQuestion {
        selected: String,
    },
    NextQuestion,
    RestartQuiz,
    CloseQuiz,

    // -- Progress --
    ToggleLearned {
        domain: Domain,
        id: String,
    },
    ToggleFavorite {
        domain: Domain,
        id: String,
    },
    GetProgressStats {
        domain: Domain,
    },
    SaveProgress,
    LoadProgress {
        data: String,
    },

    // -- View settings --
    SetDarkMode {
        enabled: bool,
    },
    SetWireframe {
        enabled: bool,
    },
}

/// Messages from the app core back to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AppToUi {
    /// A domain became active.
    DomainSelected {
        domain: Domain,
        entries: Vec<CatalogEntry>,
        categories: Vec<Category>,
        total: usize,
    },

    /// A filtered listing.
    EntryList {
        entries: Vec<CatalogEntry>,
    },

    /// An entry was selected; render specs for whichever renderer the
    /// domain uses.
    ShapeSelected {
        entry: CatalogEntry,
        solid: Option<SolidRenderSpec>,
        diagram: Option<DiagramRenderSpec>,
    },

    /// The calculator's input fields for the selected entry.
    InputFields {
        fields: Vec<InputField>,
    },

    /// Computed measurements.
    ComputeResult {
        results: Vec<Measurement>,
    },

    /// A quiz question is showing (sent on start, next, and restart).
    Question {
        session_id: Uuid,
        index: usize,
        total: usize,
        question: QuizQuestion,
    },

    /// The pool was too small for a quiz.
    QuizUnavailable {
        message: String,
    },

    /// The current question was answered.
    AnswerResult {
        correct: bool,
        correct_answer: String,
        explanation: String,
        score: usize,
    },

    /// The last question was advanced past.
    QuizComplete {
        score: usize,
        total: usize,
        message: String,
    },

    QuizClosed,

    /// A learned mark was flipped. `id` is the scoped progress id.
    LearnedToggled {
        id: String,
        learned: bool,
    },

    /// A favorite mark was flipped.
    FavoriteToggled {
        id: String,
        favorite: bool,
    },

    /// Stats for the progress banner on a domain page.
    ProgressStats {
        learned_count: usize,
        favorites_count: usize,
        total: usize,
        percentage: u32,
    },

    /// Serialized progress ready for the host to store.
    SaveReady {
        json_data: String,
    },

    /// Progress was loaded from host storage.
    ProgressLoaded {
        learned_count: usize,
        favorites_count: usize,
    },

    /// Dark-mode flag changed; `data` is the encoded value for host
    /// storage.
    DarkModeSaved {
        enabled: bool,
        data: String,
    },

    WireframeSet {
        enabled: bool,
    },

    /// An error occurred in the app core.
    Error {
        message: String,
    },
}
