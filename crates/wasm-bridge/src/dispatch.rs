use tracing::debug;

use geo_catalog::filter_entries;
use geo_types::{CatalogEntry, DiagramRenderSpec, Domain, SolidRenderSpec};
use quiz_engine::SessionState;

use crate::app_state::{AppState, BridgeError};
use crate::messages::{AppToUi, UiToApp, ViewFilter};

/// Size the detail-panel diagram renderer draws at.
const DIAGRAM_SIZE: f64 = 180.0;

/// Dispatch a UI message and return a response.
///
/// This is the main entry point for processing messages from the
/// JavaScript main thread. Failures become an `AppToUi::Error` so the
/// UI always gets a well-formed response.
pub fn dispatch(state: &mut AppState, msg: UiToApp) -> AppToUi {
    match handle_message(state, msg) {
        Ok(response) => response,
        Err(e) => AppToUi::Error {
            message: e.to_string(),
        },
    }
}

fn handle_message(state: &mut AppState, msg: UiToApp) -> Result<AppToUi, BridgeError> {
    match msg {
        // -- Catalog browsing --
        UiToApp::SelectDomain { domain } => Ok(AppToUi::DomainSelected {
            domain,
            entries: state.catalog.entries(domain).to_vec(),
            categories: state.catalog.categories(domain),
            total: state.catalog.total(domain),
        }),

        UiToApp::ListEntries {
            domain,
            category,
            query,
            view,
        } => {
            let filtered = filter_entries(
                state.catalog.entries(domain),
                category.as_deref(),
                query.as_deref(),
            );
            let entries = filtered
                .into_iter()
                .filter(|e| view_matches(state, view, e))
                .cloned()
                .collect();
            Ok(AppToUi::EntryList { entries })
        }

        UiToApp::SelectShape { domain, id } => {
            let entry = state.find_entry(domain, &id)?.clone();
            state.selected = Some((domain, id));
            let (solid, diagram) = render_specs(state, &entry);
            Ok(AppToUi::ShapeSelected {
                entry,
                solid,
                diagram,
            })
        }

        // -- Calculator --
        UiToApp::RequestInputFields { domain, id } => {
            let (entry, dim) = state.measurable_entry(domain, &id)?;
            Ok(AppToUi::InputFields {
                fields: formula_engine::required_inputs(&entry.name, dim),
            })
        }

        UiToApp::Compute { domain, id, inputs } => {
            let (entry, dim) = state.measurable_entry(domain, &id)?;
            Ok(AppToUi::ComputeResult {
                results: formula_engine::compute(&entry.name, dim, &inputs),
            })
        }

        // -- Quiz --
        UiToApp::StartQuiz { domain } => {
            let pool = state.quiz_pool(domain);
            let session = quiz_engine::QuizSession::generate(&pool, domain, &mut state.rng);
            if session.state() == SessionState::Empty {
                debug!(?domain, pool = pool.len(), "quiz unavailable");
                state.quiz = None;
                return Ok(AppToUi::QuizUnavailable {
                    message: format!(
                        "Not enough items for a quiz. Add more {} to start.",
                        domain.noun_plural()
                    ),
                });
            }
            let response = question_response(&session);
            state.quiz = Some(session);
            Ok(response)
        }

        UiToApp::AnswerQuestion { selected } => {
            let session = state.quiz.as_mut().ok_or(BridgeError::NoActiveQuiz)?;
            session.answer(&selected);
            let question = session
                .current_question()
                .ok_or(BridgeError::NoActiveQuiz)?;
            Ok(AppToUi::AnswerResult {
                correct: session.selected_answer() == Some(question.correct_answer.as_str()),
                correct_answer: question.correct_answer.clone(),
                explanation: question.explanation.clone(),
                score: session.score(),
            })
        }

        UiToApp::NextQuestion => {
            let session = state.quiz.as_mut().ok_or(BridgeError::NoActiveQuiz)?;
            session.advance();
            match session.state() {
                SessionState::Complete => {
                    let verdict = session
                        .verdict()
                        .ok_or(BridgeError::NoActiveQuiz)?;
                    Ok(AppToUi::QuizComplete {
                        score: session.score(),
                        total: session.questions().len(),
                        message: verdict.message().to_string(),
                    })
                }
                _ => Ok(question_response(session)),
            }
        }

        UiToApp::RestartQuiz => {
            let session = state.quiz.as_mut().ok_or(BridgeError::NoActiveQuiz)?;
            session.restart();
            Ok(question_response(session))
        }

        UiToApp::CloseQuiz => {
            state.quiz = None;
            Ok(AppToUi::QuizClosed)
        }

        // -- Progress --
        UiToApp::ToggleLearned { domain, id } => {
            state.find_entry(domain, &id)?;
            let scoped = domain.scoped_id(&id);
            let learned = state.progress.toggle_learned(&scoped);
            Ok(AppToUi::LearnedToggled { id: scoped, learned })
        }

        UiToApp::ToggleFavorite { domain, id } => {
            state.find_entry(domain, &id)?;
            let scoped = domain.scoped_id(&id);
            let favorite = state.progress.toggle_favorite(&scoped);
            Ok(AppToUi::FavoriteToggled {
                id: scoped,
                favorite,
            })
        }

        UiToApp::GetProgressStats { domain } => {
            let total = state.catalog.total(domain);
            Ok(AppToUi::ProgressStats {
                learned_count: state.progress.learned_count(),
                favorites_count: state.progress.favorites_count(),
                total,
                percentage: state.progress.completion_percentage(total),
            })
        }

        UiToApp::SaveProgress => Ok(AppToUi::SaveReady {
            json_data: progress_store::save_progress(&state.progress),
        }),

        UiToApp::LoadProgress { data } => {
            state.progress = progress_store::load_progress(&data)?;
            Ok(AppToUi::ProgressLoaded {
                learned_count: state.progress.learned_count(),
                favorites_count: state.progress.favorites_count(),
            })
        }

        // -- View settings --
        UiToApp::SetDarkMode { enabled } => {
            state.dark_mode = enabled;
            Ok(AppToUi::DarkModeSaved {
                enabled,
                data: progress_store::save_dark_mode(enabled),
            })
        }

        UiToApp::SetWireframe { enabled } => {
            state.wireframe = enabled;
            Ok(AppToUi::WireframeSet { enabled })
        }
    }
}

fn view_matches(state: &AppState, view: ViewFilter, entry: &CatalogEntry) -> bool {
    match view {
        ViewFilter::All => true,
        ViewFilter::Learned => state.progress.is_learned(&entry.scoped_id()),
        ViewFilter::Favorites => state.progress.is_favorite(&entry.scoped_id()),
    }
}

/// Render specs for the selected entry: solids go to the 3D renderer,
/// everything else to the SVG diagram renderer.
fn render_specs(
    state: &AppState,
    entry: &CatalogEntry,
) -> (Option<SolidRenderSpec>, Option<DiagramRenderSpec>) {
    match entry.domain {
        Domain::ThreeD => (
            Some(SolidRenderSpec {
                shape_id: entry.id.clone(),
                color: entry.color.clone(),
                wireframe: state.wireframe,
            }),
            None,
        ),
        Domain::TwoD | Domain::Lines => (
            None,
            Some(DiagramRenderSpec {
                type_id: entry.id.clone(),
                size: DIAGRAM_SIZE,
                color: entry.color.clone(),
            }),
        ),
    }
}

/// Build a Question response from the session's current position.
fn question_response(session: &quiz_engine::QuizSession) -> AppToUi {
    match session.current_question() {
        Some(question) => AppToUi::Question {
            session_id: session.id,
            index: session.current_index(),
            total: session.questions().len(),
            question: question.clone(),
        },
        // Only reachable if the session is not in progress.
        None => AppToUi::QuizClosed,
    }
}
