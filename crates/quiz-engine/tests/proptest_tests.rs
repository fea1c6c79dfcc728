//! Property-based tests for quiz generation and scoring using the
//! `proptest` crate.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use geo_types::Domain;
use quiz_engine::{QuizItem, QuizSession, SessionState, MAX_QUESTIONS, MIN_POOL};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_pool() -> impl Strategy<Value = Vec<QuizItem>> {
    (0usize..30).prop_map(|n| {
        (0..n)
            .map(|i| QuizItem {
                id: format!("id-{i}"),
                name: format!("Name {i}"),
                properties: vec![format!("property {i}"), format!("other property {i}")],
                category: "cat".to_string(),
                formula: (i % 3 == 0).then(|| format!("A = {i}x")),
            })
            .collect()
    })
}

fn arb_domain() -> impl Strategy<Value = Domain> {
    prop_oneof![Just(Domain::Lines), Just(Domain::TwoD), Just(Domain::ThreeD)]
}

// ---------------------------------------------------------------------------
// 1. Generation invariants for any pool
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn question_count_follows_pool_size(pool in arb_pool(), domain in arb_domain(), seed: u64) {
        let session = QuizSession::generate(&pool, domain, &mut StdRng::seed_from_u64(seed));
        if pool.len() < MIN_POOL {
            prop_assert_eq!(session.state(), SessionState::Empty);
            prop_assert!(session.questions().is_empty());
        } else {
            prop_assert_eq!(session.questions().len(), pool.len().min(MAX_QUESTIONS));
        }
    }
}

proptest! {
    #[test]
    fn every_question_is_well_formed(pool in arb_pool(), domain in arb_domain(), seed: u64) {
        let session = QuizSession::generate(&pool, domain, &mut StdRng::seed_from_u64(seed));
        for q in session.questions() {
            prop_assert_eq!(q.options.len(), 4);
            prop_assert_eq!(
                q.options.iter().filter(|o| **o == q.correct_answer).count(),
                1
            );
            prop_assert!(!q.prompt.is_empty());
            prop_assert!(!q.explanation.is_empty());
            prop_assert!(pool.iter().any(|i| i.name == q.correct_answer));
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Scoring: score is bounded and only first answers count
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn score_is_bounded_by_question_count(
        pool in arb_pool(),
        seed: u64,
        answers in proptest::collection::vec(0usize..4, 0..2 * MAX_QUESTIONS),
    ) {
        let mut session =
            QuizSession::generate(&pool, Domain::TwoD, &mut StdRng::seed_from_u64(seed));
        let total = session.questions().len();
        for pick in answers {
            if let Some(q) = session.current_question() {
                let option = q.options[pick].clone();
                session.answer(&option);
            }
            session.advance();
        }
        prop_assert!(session.score() <= total);
        if session.state() == SessionState::Complete {
            prop_assert!(session.verdict().is_some());
        }
    }
}

proptest! {
    #[test]
    fn repeat_answers_never_change_the_score(pool in arb_pool(), seed: u64) {
        let mut session =
            QuizSession::generate(&pool, Domain::ThreeD, &mut StdRng::seed_from_u64(seed));
        while let Some(q) = session.current_question().cloned() {
            session.answer(&q.correct_answer);
            let after_first = session.score();
            // Hammering the answer again, right or wrong, is a no-op.
            prop_assert_eq!(session.answer(&q.correct_answer), None);
            prop_assert_eq!(session.answer(&q.options[0]), None);
            prop_assert_eq!(session.score(), after_first);
            session.advance();
        }
        if !session.questions().is_empty() {
            prop_assert_eq!(session.score(), session.questions().len());
        }
    }
}

// ---------------------------------------------------------------------------
// 3. Restart replays the identical sequence from a clean slate
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn restart_preserves_questions_and_resets_progress(pool in arb_pool(), seed: u64) {
        let mut session =
            QuizSession::generate(&pool, Domain::TwoD, &mut StdRng::seed_from_u64(seed));
        let original = session.questions().to_vec();
        while let Some(q) = session.current_question().cloned() {
            session.answer(&q.correct_answer);
            session.advance();
        }
        session.restart();
        prop_assert_eq!(session.questions(), original.as_slice());
        prop_assert_eq!(session.score(), 0);
        prop_assert_eq!(session.current_index(), 0);
        if original.is_empty() {
            prop_assert_eq!(session.state(), SessionState::Empty);
        } else {
            prop_assert_eq!(session.state(), SessionState::InProgress);
        }
    }
}
