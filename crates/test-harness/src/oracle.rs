//! Verification oracles — pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail, not
//! panics. This lets a test collect all failures in one pass.

use geo_types::Measurement;
use quiz_engine::{QuizQuestion, QuizSession, SessionState};

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: Some(value),
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn fail_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: Some(value),
        }
    }
}

// ── Question Oracles ────────────────────────────────────────────────────────

/// Check that a question shows four distinct options, exactly one of
/// which is the correct answer, with non-empty prompt and explanation.
pub fn check_question_well_formed(question: &QuizQuestion) -> OracleVerdict {
    let mut sorted = question.options.clone();
    sorted.sort();
    sorted.dedup();

    if question.options.len() != 4 {
        return OracleVerdict::fail(
            "question_well_formed",
            format!("expected 4 options, got {}", question.options.len()),
        );
    }
    if sorted.len() != 4 {
        return OracleVerdict::fail(
            "question_well_formed",
            format!("options contain duplicates: {:?}", question.options),
        );
    }
    let correct_count = question
        .options
        .iter()
        .filter(|o| **o == question.correct_answer)
        .count();
    if correct_count != 1 {
        return OracleVerdict::fail(
            "question_well_formed",
            format!(
                "correct answer '{}' appears {} times in options",
                question.correct_answer, correct_count
            ),
        );
    }
    if question.prompt.is_empty() || question.explanation.is_empty() {
        return OracleVerdict::fail(
            "question_well_formed",
            "empty prompt or explanation".to_string(),
        );
    }
    OracleVerdict::pass(
        "question_well_formed",
        format!("4 distinct options, one correct: '{}'", question.correct_answer),
    )
}

/// Check that every option names a member of the pool.
pub fn check_options_from_pool(question: &QuizQuestion, pool_names: &[&str]) -> OracleVerdict {
    let strays: Vec<&String> = question
        .options
        .iter()
        .filter(|o| !pool_names.contains(&o.as_str()))
        .collect();
    if strays.is_empty() {
        OracleVerdict::pass(
            "options_from_pool",
            format!("all {} options drawn from the pool", question.options.len()),
        )
    } else {
        OracleVerdict::fail(
            "options_from_pool",
            format!("options not in pool: {:?}", strays),
        )
    }
}

// ── Session Oracles ─────────────────────────────────────────────────────────

/// Check the session's bookkeeping invariants: score bounded by the
/// question count, index in range, selection recorded iff answered.
pub fn check_session_coherent(session: &QuizSession) -> OracleVerdict {
    let total = session.questions().len();

    if session.score() > total {
        return OracleVerdict::fail(
            "session_coherent",
            format!("score {} exceeds question count {}", session.score(), total),
        );
    }
    if !session.questions().is_empty() && session.current_index() >= total {
        return OracleVerdict::fail(
            "session_coherent",
            format!("index {} out of range (total {})", session.current_index(), total),
        );
    }
    if session.answered() != session.selected_answer().is_some() {
        return OracleVerdict::fail(
            "session_coherent",
            "answered flag disagrees with recorded selection".to_string(),
        );
    }
    if session.state() == SessionState::Empty && total != 0 {
        return OracleVerdict::fail(
            "session_coherent",
            format!("Empty state with {} questions", total),
        );
    }
    OracleVerdict::pass(
        "session_coherent",
        format!(
            "state {:?}, index {}/{}, score {}",
            session.state(),
            session.current_index(),
            total,
            session.score()
        ),
    )
}

// ── Measurement Oracles ─────────────────────────────────────────────────────

/// Check a labelled measurement against an expected value (1e-4 abs).
pub fn check_measurement(
    results: &[Measurement],
    label: &str,
    expected: f64,
) -> OracleVerdict {
    match results.iter().find(|m| m.label == label) {
        Some(m) if (m.value - expected).abs() < 1e-4 => OracleVerdict::pass_val(
            "measurement",
            format!("{} = {:.4}", label, m.value),
            m.value,
        ),
        Some(m) => OracleVerdict::fail_val(
            "measurement",
            format!("{}: expected {:.4}, got {:.4}", label, expected, m.value),
            m.value,
        ),
        None => OracleVerdict::fail(
            "measurement",
            format!(
                "no measurement labelled '{}'; have {:?}",
                label,
                results.iter().map(|m| &m.label).collect::<Vec<_>>()
            ),
        ),
    }
}

// ── Composite ───────────────────────────────────────────────────────────────

/// Run all question checks over a generated session.
pub fn run_question_checks(session: &QuizSession, pool_names: &[&str]) -> Vec<OracleVerdict> {
    let mut verdicts = vec![check_session_coherent(session)];
    for question in session.questions() {
        verdicts.push(check_question_well_formed(question));
        verdicts.push(check_options_from_pool(question, pool_names));
    }
    verdicts
}
