use geo_types::Domain;
use wasm_bridge::messages::*;
use wasm_bridge::{dispatch, AppState, ViewFilter};

// ── Helper functions ─────────────────────────────────────────────────────

fn state() -> AppState {
    AppState::with_seed(42)
}

fn learn(state: &mut AppState, domain: Domain, id: &str) {
    let response = dispatch(
        state,
        UiToApp::ToggleLearned {
            domain,
            id: id.to_string(),
        },
    );
    assert!(matches!(response, AppToUi::LearnedToggled { learned: true, .. }));
}

// ── Serde round-trip tests ───────────────────────────────────────────────

#[test]
fn serde_roundtrip_select_domain() {
    let msg = UiToApp::SelectDomain {
        domain: Domain::ThreeD,
    };
    let json = serde_json::to_string(&msg).unwrap();
    assert!(json.contains("\"type\":\"SelectDomain\""));
    assert!(json.contains("\"3d\""));
    let deserialized: UiToApp = serde_json::from_str(&json).unwrap();
    assert!(matches!(deserialized, UiToApp::SelectDomain { .. }));
}

#[test]
fn serde_roundtrip_list_entries_defaults() {
    // Omitted filters deserialize to their defaults.
    let json = r#"{"type":"ListEntries","domain":"2d"}"#;
    let msg: UiToApp = serde_json::from_str(json).unwrap();
    match msg {
        UiToApp::ListEntries {
            domain,
            category,
            query,
            view,
        } => {
            assert_eq!(domain, Domain::TwoD);
            assert!(category.is_none());
            assert!(query.is_none());
            assert_eq!(view, ViewFilter::All);
        }
        other => panic!("unexpected message: {other:?}"),
    }
}

#[test]
fn serde_roundtrip_answer_question() {
    let msg = UiToApp::AnswerQuestion {
        selected: "Cube (Hexahedron)".to_string(),
    };
    let json = serde_json::to_string(&msg).unwrap();
    assert!(json.contains("\"type\":\"AnswerQuestion\""));
    let deserialized: UiToApp = serde_json::from_str(&json).unwrap();
    assert!(matches!(deserialized, UiToApp::AnswerQuestion { .. }));
}

#[test]
fn serde_response_carries_type_tag() {
    let mut s = state();
    let response = dispatch(
        &mut s,
        UiToApp::SelectDomain {
            domain: Domain::Lines,
        },
    );
    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"type\":\"DomainSelected\""));
}

// ── Catalog browsing ─────────────────────────────────────────────────────

#[test]
fn select_domain_returns_full_listing() {
    let mut s = state();
    match dispatch(
        &mut s,
        UiToApp::SelectDomain {
            domain: Domain::ThreeD,
        },
    ) {
        AppToUi::DomainSelected {
            domain,
            entries,
            categories,
            total,
        } => {
            assert_eq!(domain, Domain::ThreeD);
            assert_eq!(entries.len(), 43);
            assert_eq!(total, 43);
            assert!(categories.iter().any(|c| c.id == "platonic"));
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn list_entries_applies_search_and_category() {
    let mut s = state();
    match dispatch(
        &mut s,
        UiToApp::ListEntries {
            domain: Domain::ThreeD,
            category: Some("platonic".to_string()),
            query: Some("hexahedron".to_string()),
            view: ViewFilter::All,
        },
    ) {
        AppToUi::EntryList { entries } => {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].id, "cube");
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn list_entries_learned_view_uses_progress() {
    let mut s = state();
    learn(&mut s, Domain::TwoD, "circle");
    learn(&mut s, Domain::TwoD, "square");
    match dispatch(
        &mut s,
        UiToApp::ListEntries {
            domain: Domain::TwoD,
            category: None,
            query: None,
            view: ViewFilter::Learned,
        },
    ) {
        AppToUi::EntryList { entries } => {
            let mut ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
            ids.sort_unstable();
            assert_eq!(ids, vec!["circle", "square"]);
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn select_shape_returns_solid_spec_for_3d() {
    let mut s = state();
    dispatch(&mut s, UiToApp::SetWireframe { enabled: true });
    match dispatch(
        &mut s,
        UiToApp::SelectShape {
            domain: Domain::ThreeD,
            id: "torus".to_string(),
        },
    ) {
        AppToUi::ShapeSelected {
            entry,
            solid,
            diagram,
        } => {
            assert_eq!(entry.id, "torus");
            let solid = solid.expect("solids get a render spec");
            assert_eq!(solid.shape_id, "torus");
            assert!(solid.wireframe);
            assert!(diagram.is_none());
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn select_shape_returns_diagram_spec_for_2d() {
    let mut s = state();
    match dispatch(
        &mut s,
        UiToApp::SelectShape {
            domain: Domain::TwoD,
            id: "circle".to_string(),
        },
    ) {
        AppToUi::ShapeSelected { solid, diagram, .. } => {
            assert!(solid.is_none());
            let diagram = diagram.expect("2d shapes get a diagram spec");
            assert_eq!(diagram.type_id, "circle");
            assert_eq!(diagram.size, 180.0);
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn unknown_entry_becomes_error_response() {
    let mut s = state();
    match dispatch(
        &mut s,
        UiToApp::SelectShape {
            domain: Domain::TwoD,
            id: "nonagon-prism".to_string(),
        },
    ) {
        AppToUi::Error { message } => assert!(message.contains("nonagon-prism")),
        other => panic!("unexpected response: {other:?}"),
    }
}

// ── Calculator ───────────────────────────────────────────────────────────

#[test]
fn input_fields_for_cylinder() {
    let mut s = state();
    match dispatch(
        &mut s,
        UiToApp::RequestInputFields {
            domain: Domain::ThreeD,
            id: "cylinder".to_string(),
        },
    ) {
        AppToUi::InputFields { fields } => {
            let keys: Vec<&str> = fields.iter().map(|f| f.key.as_str()).collect();
            assert_eq!(keys, vec!["radius", "height"]);
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn compute_sphere_volume() {
    let mut s = state();
    let inputs: formula_engine::DimensionInputSet =
        [("radius".to_string(), "1".to_string())].into_iter().collect();
    match dispatch(
        &mut s,
        UiToApp::Compute {
            domain: Domain::ThreeD,
            id: "sphere".to_string(),
            inputs,
        },
    ) {
        AppToUi::ComputeResult { results } => {
            let volume = results.iter().find(|m| m.label == "Volume").unwrap();
            assert!((volume.value - 4.18879).abs() < 1e-4);
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn lines_have_no_calculator() {
    let mut s = state();
    match dispatch(
        &mut s,
        UiToApp::RequestInputFields {
            domain: Domain::Lines,
            id: "ray".to_string(),
        },
    ) {
        AppToUi::Error { message } => assert!(message.contains("no measurable dimensions")),
        other => panic!("unexpected response: {other:?}"),
    }
}

// ── Quiz lifecycle ───────────────────────────────────────────────────────

#[test]
fn quiz_runs_to_completion() {
    let mut s = state();
    let (mut index, total, mut question) = match dispatch(
        &mut s,
        UiToApp::StartQuiz {
            domain: Domain::TwoD,
        },
    ) {
        AppToUi::Question {
            index,
            total,
            question,
            ..
        } => (index, total, question),
        other => panic!("unexpected response: {other:?}"),
    };
    assert_eq!(index, 0);
    assert_eq!(total, 10);

    let mut expected_score = 0;
    loop {
        let selected = question.correct_answer.clone();
        match dispatch(&mut s, UiToApp::AnswerQuestion { selected }) {
            AppToUi::AnswerResult { correct, score, .. } => {
                assert!(correct);
                expected_score += 1;
                assert_eq!(score, expected_score);
            }
            other => panic!("unexpected response: {other:?}"),
        }
        match dispatch(&mut s, UiToApp::NextQuestion) {
            AppToUi::Question {
                index: i,
                question: q,
                ..
            } => {
                assert_eq!(i, index + 1);
                index = i;
                question = q;
            }
            AppToUi::QuizComplete {
                score,
                total: t,
                message,
            } => {
                assert_eq!(score, 10);
                assert_eq!(t, total);
                assert_eq!(message, "Perfect! You're a geometry master! 🎉");
                break;
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }
}

#[test]
fn restart_replays_the_same_first_question() {
    let mut s = state();
    let first = match dispatch(
        &mut s,
        UiToApp::StartQuiz {
            domain: Domain::ThreeD,
        },
    ) {
        AppToUi::Question { question, .. } => question,
        other => panic!("unexpected response: {other:?}"),
    };
    dispatch(
        &mut s,
        UiToApp::AnswerQuestion {
            selected: first.correct_answer.clone(),
        },
    );
    dispatch(&mut s, UiToApp::NextQuestion);

    match dispatch(&mut s, UiToApp::RestartQuiz) {
        AppToUi::Question {
            index, question, ..
        } => {
            assert_eq!(index, 0);
            assert_eq!(question, first);
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn quiz_messages_without_a_session_fail() {
    let mut s = state();
    match dispatch(&mut s, UiToApp::NextQuestion) {
        AppToUi::Error { message } => assert!(message.contains("no active quiz")),
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn close_quiz_discards_the_session() {
    let mut s = state();
    dispatch(
        &mut s,
        UiToApp::StartQuiz {
            domain: Domain::Lines,
        },
    );
    assert!(matches!(
        dispatch(&mut s, UiToApp::CloseQuiz),
        AppToUi::QuizClosed
    ));
    assert!(matches!(
        dispatch(&mut s, UiToApp::RestartQuiz),
        AppToUi::Error { .. }
    ));
}

// ── Progress ─────────────────────────────────────────────────────────────

#[test]
fn toggles_are_scoped_and_idempotent() {
    let mut s = state();
    match dispatch(
        &mut s,
        UiToApp::ToggleLearned {
            domain: Domain::ThreeD,
            id: "cube".to_string(),
        },
    ) {
        AppToUi::LearnedToggled { id, learned } => {
            assert_eq!(id, "3d-cube");
            assert!(learned);
        }
        other => panic!("unexpected response: {other:?}"),
    }
    match dispatch(
        &mut s,
        UiToApp::ToggleLearned {
            domain: Domain::ThreeD,
            id: "cube".to_string(),
        },
    ) {
        AppToUi::LearnedToggled { learned, .. } => assert!(!learned),
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn progress_stats_use_domain_total() {
    let mut s = state();
    learn(&mut s, Domain::ThreeD, "cube");
    learn(&mut s, Domain::ThreeD, "sphere");
    learn(&mut s, Domain::TwoD, "circle");
    match dispatch(
        &mut s,
        UiToApp::GetProgressStats {
            domain: Domain::ThreeD,
        },
    ) {
        AppToUi::ProgressStats {
            learned_count,
            favorites_count,
            total,
            percentage,
        } => {
            // Counts span domains; total and percentage are per page.
            assert_eq!(learned_count, 3);
            assert_eq!(favorites_count, 0);
            assert_eq!(total, 43);
            assert_eq!(percentage, 7); // round(3/43 * 100)
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn save_then_load_round_trips_progress() {
    let mut s = state();
    learn(&mut s, Domain::TwoD, "rhombus");
    dispatch(
        &mut s,
        UiToApp::ToggleFavorite {
            domain: Domain::Lines,
            id: "ray".to_string(),
        },
    );
    let json_data = match dispatch(&mut s, UiToApp::SaveProgress) {
        AppToUi::SaveReady { json_data } => json_data,
        other => panic!("unexpected response: {other:?}"),
    };

    let mut fresh = state();
    match dispatch(&mut fresh, UiToApp::LoadProgress { data: json_data }) {
        AppToUi::ProgressLoaded {
            learned_count,
            favorites_count,
        } => {
            assert_eq!(learned_count, 1);
            assert_eq!(favorites_count, 1);
        }
        other => panic!("unexpected response: {other:?}"),
    }
    assert!(fresh.progress.is_learned("2d-rhombus"));
    assert!(fresh.progress.is_favorite("lines-ray"));
}

#[test]
fn malformed_progress_load_is_an_error() {
    let mut s = state();
    match dispatch(
        &mut s,
        UiToApp::LoadProgress {
            data: "{broken".to_string(),
        },
    ) {
        AppToUi::Error { message } => assert!(message.contains("parse")),
        other => panic!("unexpected response: {other:?}"),
    }
}

// ── View settings ────────────────────────────────────────────────────────

#[test]
fn dark_mode_response_carries_storable_value() {
    let mut s = state();
    match dispatch(&mut s, UiToApp::SetDarkMode { enabled: true }) {
        AppToUi::DarkModeSaved { enabled, data } => {
            assert!(enabled);
            assert_eq!(progress_store::load_dark_mode(&data), Some(true));
        }
        other => panic!("unexpected response: {other:?}"),
    }
    assert!(s.dark_mode);
}
