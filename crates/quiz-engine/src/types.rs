use serde::{Deserialize, Serialize};

use geo_types::CatalogEntry;

/// A catalog item as the quiz sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizItem {
    pub id: String,
    pub name: String,
    pub properties: Vec<String>,
    pub category: String,
    /// Formula notation; items without one never get Formula questions.
    pub formula: Option<String>,
}

impl From<&CatalogEntry> for QuizItem {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            properties: entry.properties.clone(),
            category: entry.category.clone(),
            formula: entry.formula.clone(),
        }
    }
}

/// The three question flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    /// "Identify: {first two properties}"
    Identify,
    /// "Which shape has this property: ...?"
    Property,
    /// "Which shape has this formula: ...?"
    Formula,
}

/// A generated multiple-choice question. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub kind: QuestionKind,
    pub prompt: String,
    /// Four distinct options in display order; exactly one equals
    /// `correct_answer`.
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

/// The observable state of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// The pool had fewer than four items; no questions exist. This is a
    /// first-class displayed state, not an error.
    Empty,
    InProgress,
    Complete,
}

/// Qualitative result bands. The Good boundary is exactly 70%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Perfect,
    Good,
    KeepPracticing,
}

impl Verdict {
    pub fn for_score(score: usize, total: usize) -> Self {
        if score == total {
            Verdict::Perfect
        } else if score as f64 >= 0.7 * total as f64 {
            Verdict::Good
        } else {
            Verdict::KeepPracticing
        }
    }

    /// The completion message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Perfect => "Perfect! You're a geometry master! 🎉",
            Verdict::Good => "Great job! Keep practicing! 👏",
            Verdict::KeepPracticing => "Keep learning, you'll get better! 💪",
        }
    }
}
