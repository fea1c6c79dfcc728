//! The quiz engine.
//!
//! Generates a bounded multiple-choice quiz from a pool of catalog items
//! and runs it to completion with scoring. The session is a small state
//! machine (`Empty` / `InProgress` / `Complete`); randomness is always
//! injected so a fixed seed reproduces an exact session.

mod generate;
pub mod types;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

use geo_types::Domain;

pub use types::{QuestionKind, QuizItem, QuizQuestion, SessionState, Verdict};

/// Upper bound on questions per session.
pub const MAX_QUESTIONS: usize = 10;

/// Minimum pool size for a quiz (one correct answer + three distractors).
pub const MIN_POOL: usize = 4;

/// A running quiz.
///
/// The question sequence is fixed at generation time; `restart` replays
/// the same sequence, and a fresh `generate` is the way to get new
/// questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
    pub id: Uuid,
    pub domain: Domain,
    questions: Vec<QuizQuestion>,
    current_index: usize,
    score: usize,
    selected_answer: Option<String>,
    answered: bool,
    complete: bool,
}

impl QuizSession {
    /// Generate a session from a pool of items.
    ///
    /// A pool with fewer than [`MIN_POOL`] items produces an `Empty`
    /// session on which every mutator is a no-op.
    #[instrument(skip(pool, rng), fields(pool = pool.len()))]
    pub fn generate(pool: &[QuizItem], domain: Domain, rng: &mut impl Rng) -> Self {
        let questions = generate::generate_questions(pool, domain, rng);
        debug!(questions = questions.len(), "quiz session generated");
        Self {
            id: Uuid::new_v4(),
            domain,
            questions,
            current_index: 0,
            score: 0,
            selected_answer: None,
            answered: false,
            complete: false,
        }
    }

    /// The observable state of the session.
    pub fn state(&self) -> SessionState {
        if self.questions.is_empty() {
            SessionState::Empty
        } else if self.complete {
            SessionState::Complete
        } else {
            SessionState::InProgress
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// The question currently shown, if the session is in progress.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.state() == SessionState::InProgress {
            self.questions.get(self.current_index)
        } else {
            None
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    pub fn answered(&self) -> bool {
        self.answered
    }

    /// Record an answer for the current question.
    ///
    /// Returns whether the answer was correct, or `None` when the call
    /// has no effect: the session is not in progress, or the question
    /// was already answered (a second answer attempt is an idempotent
    /// no-op; score never changes).
    pub fn answer(&mut self, selected: &str) -> Option<bool> {
        if self.state() != SessionState::InProgress || self.answered {
            return None;
        }
        let correct = self.questions[self.current_index].correct_answer == selected;
        self.selected_answer = Some(selected.to_string());
        self.answered = true;
        if correct {
            self.score += 1;
        }
        debug!(index = self.current_index, correct, score = self.score, "answer recorded");
        Some(correct)
    }

    /// Move to the next question, or complete the session on the last.
    pub fn advance(&mut self) {
        if self.state() != SessionState::InProgress {
            return;
        }
        if self.current_index < self.questions.len() - 1 {
            self.current_index += 1;
            self.selected_answer = None;
            self.answered = false;
        } else {
            self.complete = true;
        }
    }

    /// Reset progress and replay the same question sequence.
    pub fn restart(&mut self) {
        if self.questions.is_empty() {
            return;
        }
        self.current_index = 0;
        self.score = 0;
        self.selected_answer = None;
        self.answered = false;
        self.complete = false;
    }

    /// The qualitative verdict, available once the session is complete.
    pub fn verdict(&self) -> Option<Verdict> {
        if self.state() == SessionState::Complete {
            Some(Verdict::for_score(self.score, self.questions.len()))
        } else {
            None
        }
    }
}
