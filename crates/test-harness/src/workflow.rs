//! StudyBuilder — fluent API for scripting study sessions in tests.
//!
//! Wraps `wasm_bridge::dispatch()` to test the real dispatch path, not a
//! simulation. All methods unwrap the tagged response into plain values.

use geo_types::{CatalogEntry, Category, Domain, InputField, Measurement};
use quiz_engine::QuizQuestion;
use wasm_bridge::messages::{AppToUi, UiToApp};
use wasm_bridge::{AppState, ViewFilter};

use crate::helpers::HarnessError;

/// What `next()` lands on: another question or the completion screen.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizStep {
    Question(QuizQuestion),
    Complete {
        score: usize,
        total: usize,
        message: String,
    },
}

/// Progress banner numbers for one domain page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsView {
    pub learned_count: usize,
    pub favorites_count: usize,
    pub total: usize,
    pub percentage: u32,
}

/// A fluent builder for driving study sessions in tests.
///
/// Wraps `AppState` and tracks the question currently showing so tests
/// can answer without re-plumbing the response.
pub struct StudyBuilder {
    pub state: AppState,
    current_question: Option<QuizQuestion>,
    history: Vec<(String, String)>,
}

impl StudyBuilder {
    /// A builder with entropy-seeded randomness.
    pub fn new() -> Self {
        Self::from_state(AppState::new())
    }

    /// A deterministic builder: quiz generation replays exactly.
    pub fn seeded(seed: u64) -> Self {
        Self::from_state(AppState::with_seed(seed))
    }

    fn from_state(state: AppState) -> Self {
        Self {
            state,
            current_question: None,
            history: Vec::new(),
        }
    }

    /// Send a raw message through the real dispatch path.
    pub fn send(&mut self, msg: UiToApp) -> AppToUi {
        let msg_tag = variant_tag(&serde_json::to_value(&msg).unwrap_or_default());
        let response = wasm_bridge::dispatch(&mut self.state, msg);
        let resp_tag = variant_tag(&serde_json::to_value(&response).unwrap_or_default());
        self.history.push((msg_tag, resp_tag));
        response
    }

    /// The message/response log, as type tags.
    pub fn history(&self) -> &[(String, String)] {
        &self.history
    }

    // ── Catalog browsing ────────────────────────────────────────────────

    /// Select a domain; returns its full listing and categories.
    pub fn select_domain(
        &mut self,
        domain: Domain,
    ) -> Result<(Vec<CatalogEntry>, Vec<Category>), HarnessError> {
        match self.send(UiToApp::SelectDomain { domain }) {
            AppToUi::DomainSelected {
                entries,
                categories,
                ..
            } => Ok((entries, categories)),
            other => Err(unexpected("SelectDomain", other)),
        }
    }

    /// List a domain under filters.
    pub fn list(
        &mut self,
        domain: Domain,
        category: Option<&str>,
        query: Option<&str>,
        view: ViewFilter,
    ) -> Result<Vec<CatalogEntry>, HarnessError> {
        let msg = UiToApp::ListEntries {
            domain,
            category: category.map(str::to_string),
            query: query.map(str::to_string),
            view,
        };
        match self.send(msg) {
            AppToUi::EntryList { entries } => Ok(entries),
            other => Err(unexpected("ListEntries", other)),
        }
    }

    /// Select one entry for the detail panel.
    pub fn select_shape(
        &mut self,
        domain: Domain,
        id: &str,
    ) -> Result<CatalogEntry, HarnessError> {
        let msg = UiToApp::SelectShape {
            domain,
            id: id.to_string(),
        };
        match self.send(msg) {
            AppToUi::ShapeSelected { entry, .. } => Ok(entry),
            other => Err(unexpected("SelectShape", other)),
        }
    }

    // ── Calculator ──────────────────────────────────────────────────────

    pub fn input_fields(
        &mut self,
        domain: Domain,
        id: &str,
    ) -> Result<Vec<InputField>, HarnessError> {
        let msg = UiToApp::RequestInputFields {
            domain,
            id: id.to_string(),
        };
        match self.send(msg) {
            AppToUi::InputFields { fields } => Ok(fields),
            other => Err(unexpected("RequestInputFields", other)),
        }
    }

    /// Compute measurements from key/value dimension pairs.
    pub fn compute(
        &mut self,
        domain: Domain,
        id: &str,
        dimensions: &[(&str, &str)],
    ) -> Result<Vec<Measurement>, HarnessError> {
        let inputs = dimensions
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let msg = UiToApp::Compute {
            domain,
            id: id.to_string(),
            inputs,
        };
        match self.send(msg) {
            AppToUi::ComputeResult { results } => Ok(results),
            other => Err(unexpected("Compute", other)),
        }
    }

    // ── Quiz ────────────────────────────────────────────────────────────

    /// Start a quiz; returns the first question.
    pub fn start_quiz(&mut self, domain: Domain) -> Result<QuizQuestion, HarnessError> {
        match self.send(UiToApp::StartQuiz { domain }) {
            AppToUi::Question { question, .. } => {
                self.current_question = Some(question.clone());
                Ok(question)
            }
            AppToUi::QuizUnavailable { message } => {
                Err(HarnessError::DispatchError { message })
            }
            other => Err(unexpected("StartQuiz", other)),
        }
    }

    /// The question currently showing.
    pub fn current_question(&self) -> Result<&QuizQuestion, HarnessError> {
        self.current_question
            .as_ref()
            .ok_or(HarnessError::NoActiveQuestion)
    }

    /// Answer with an explicit option; returns (correct, running score).
    pub fn answer(&mut self, selected: &str) -> Result<(bool, usize), HarnessError> {
        let msg = UiToApp::AnswerQuestion {
            selected: selected.to_string(),
        };
        match self.send(msg) {
            AppToUi::AnswerResult { correct, score, .. } => Ok((correct, score)),
            other => Err(unexpected("AnswerQuestion", other)),
        }
    }

    /// Answer the current question correctly; returns the running score.
    pub fn answer_correctly(&mut self) -> Result<usize, HarnessError> {
        let selected = self.current_question()?.correct_answer.clone();
        let (correct, score) = self.answer(&selected)?;
        if !correct {
            return Err(HarnessError::AssertionFailed {
                detail: "correct answer was judged wrong".to_string(),
            });
        }
        Ok(score)
    }

    /// Answer the current question with a wrong option.
    pub fn answer_wrongly(&mut self) -> Result<usize, HarnessError> {
        let question = self.current_question()?;
        let wrong = question
            .options
            .iter()
            .find(|o| **o != question.correct_answer)
            .cloned()
            .ok_or_else(|| HarnessError::AssertionFailed {
                detail: "no wrong option available".to_string(),
            })?;
        let (correct, score) = self.answer(&wrong)?;
        if correct {
            return Err(HarnessError::AssertionFailed {
                detail: "wrong answer was judged correct".to_string(),
            });
        }
        Ok(score)
    }

    /// Advance to the next question or the completion screen.
    pub fn next(&mut self) -> Result<QuizStep, HarnessError> {
        match self.send(UiToApp::NextQuestion) {
            AppToUi::Question { question, .. } => {
                self.current_question = Some(question.clone());
                Ok(QuizStep::Question(question))
            }
            AppToUi::QuizComplete {
                score,
                total,
                message,
            } => {
                self.current_question = None;
                Ok(QuizStep::Complete {
                    score,
                    total,
                    message,
                })
            }
            other => Err(unexpected("NextQuestion", other)),
        }
    }

    /// Run the whole quiz answering every question correctly.
    pub fn complete_quiz_perfectly(&mut self) -> Result<(usize, usize, String), HarnessError> {
        loop {
            self.answer_correctly()?;
            if let QuizStep::Complete {
                score,
                total,
                message,
            } = self.next()?
            {
                return Ok((score, total, message));
            }
        }
    }

    /// Restart the active quiz from its first question.
    pub fn restart_quiz(&mut self) -> Result<QuizQuestion, HarnessError> {
        match self.send(UiToApp::RestartQuiz) {
            AppToUi::Question { question, .. } => {
                self.current_question = Some(question.clone());
                Ok(question)
            }
            other => Err(unexpected("RestartQuiz", other)),
        }
    }

    pub fn close_quiz(&mut self) -> Result<(), HarnessError> {
        match self.send(UiToApp::CloseQuiz) {
            AppToUi::QuizClosed => {
                self.current_question = None;
                Ok(())
            }
            other => Err(unexpected("CloseQuiz", other)),
        }
    }

    // ── Progress ────────────────────────────────────────────────────────

    /// Toggle the learned mark; returns the new state.
    pub fn toggle_learned(&mut self, domain: Domain, id: &str) -> Result<bool, HarnessError> {
        let msg = UiToApp::ToggleLearned {
            domain,
            id: id.to_string(),
        };
        match self.send(msg) {
            AppToUi::LearnedToggled { learned, .. } => Ok(learned),
            other => Err(unexpected("ToggleLearned", other)),
        }
    }

    /// Toggle the favorite mark; returns the new state.
    pub fn toggle_favorite(&mut self, domain: Domain, id: &str) -> Result<bool, HarnessError> {
        let msg = UiToApp::ToggleFavorite {
            domain,
            id: id.to_string(),
        };
        match self.send(msg) {
            AppToUi::FavoriteToggled { favorite, .. } => Ok(favorite),
            other => Err(unexpected("ToggleFavorite", other)),
        }
    }

    pub fn stats(&mut self, domain: Domain) -> Result<StatsView, HarnessError> {
        match self.send(UiToApp::GetProgressStats { domain }) {
            AppToUi::ProgressStats {
                learned_count,
                favorites_count,
                total,
                percentage,
            } => Ok(StatsView {
                learned_count,
                favorites_count,
                total,
                percentage,
            }),
            other => Err(unexpected("GetProgressStats", other)),
        }
    }

    /// Save progress and return the JSON string.
    pub fn save(&mut self) -> Result<String, HarnessError> {
        match self.send(UiToApp::SaveProgress) {
            AppToUi::SaveReady { json_data } => Ok(json_data),
            other => Err(unexpected("SaveProgress", other)),
        }
    }

    /// Load progress from JSON, replacing the current sets.
    pub fn load(&mut self, json: &str) -> Result<(usize, usize), HarnessError> {
        let msg = UiToApp::LoadProgress {
            data: json.to_string(),
        };
        match self.send(msg) {
            AppToUi::ProgressLoaded {
                learned_count,
                favorites_count,
            } => Ok((learned_count, favorites_count)),
            other => Err(unexpected("LoadProgress", other)),
        }
    }
}

impl Default for StudyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn unexpected(context: &str, response: AppToUi) -> HarnessError {
    if let AppToUi::Error { message } = response {
        return HarnessError::DispatchError { message };
    }
    HarnessError::UnexpectedResponse {
        context: context.to_string(),
        got: variant_tag(&serde_json::to_value(&response).unwrap_or_default()),
    }
}

fn variant_tag(value: &serde_json::Value) -> String {
    value
        .get("type")
        .and_then(|t| t.as_str())
        .unwrap_or("unknown")
        .to_string()
}
