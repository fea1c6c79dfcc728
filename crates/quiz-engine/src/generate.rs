//! Question generation: shuffle, kind selection, distractor sampling.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use geo_types::Domain;

use crate::types::{QuestionKind, QuizItem, QuizQuestion};
use crate::{MAX_QUESTIONS, MIN_POOL};

/// Generate the question sequence for a session.
///
/// Returns an empty vector when the pool is below [`MIN_POOL`]; the
/// caller surfaces that as the `Empty` state. Otherwise the pool is
/// uniformly shuffled and truncated to [`MAX_QUESTIONS`], so each pool
/// item appears at most once.
pub(crate) fn generate_questions(
    pool: &[QuizItem],
    domain: Domain,
    rng: &mut impl Rng,
) -> Vec<QuizQuestion> {
    if pool.len() < MIN_POOL {
        debug!(pool = pool.len(), "pool too small for a quiz");
        return Vec::new();
    }

    let mut picked: Vec<&QuizItem> = pool.iter().collect();
    picked.shuffle(rng);
    picked.truncate(MAX_QUESTIONS);

    picked
        .into_iter()
        .map(|item| build_question(item, pool, domain, rng))
        .collect()
}

fn build_question(
    item: &QuizItem,
    pool: &[QuizItem],
    domain: Domain,
    rng: &mut impl Rng,
) -> QuizQuestion {
    let mut kinds = vec![QuestionKind::Identify, QuestionKind::Property];
    if item.formula.as_deref().is_some_and(|f| !f.is_empty()) {
        kinds.push(QuestionKind::Formula);
    }
    // kinds is never empty, so choose always succeeds.
    let kind = *kinds.choose(rng).unwrap_or(&QuestionKind::Identify);

    // Exactly three distractors drawn without replacement from the rest
    // of the pool. Guaranteed available because the pool has >= 4 items.
    let others: Vec<&QuizItem> = pool.iter().filter(|i| i.id != item.id).collect();
    let mut options: Vec<String> = others
        .choose_multiple(rng, 3)
        .map(|i| i.name.clone())
        .collect();
    options.push(item.name.clone());
    options.shuffle(rng);

    let noun = domain.noun();
    let (prompt, explanation) = match kind {
        QuestionKind::Property => {
            let property = item
                .properties
                .choose(rng)
                .cloned()
                .unwrap_or_default();
            (
                format!("Which {noun} has this property: \"{property}\"?"),
                format!("{} has the property: {}", item.name, property),
            )
        }
        QuestionKind::Formula => {
            let formula = item.formula.clone().unwrap_or_default();
            (
                format!("Which {noun} has this formula: {formula}?"),
                format!("The formula {} belongs to {}", formula, item.name),
            )
        }
        QuestionKind::Identify => {
            let desc = item
                .properties
                .iter()
                .take(2)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            (
                format!("Identify: {desc}"),
                format!("This describes {}", item.name),
            )
        }
    };

    QuizQuestion {
        kind,
        prompt,
        options,
        correct_answer: item.name.clone(),
        explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(n: usize) -> Vec<QuizItem> {
        (0..n)
            .map(|i| QuizItem {
                id: format!("item-{i}"),
                name: format!("Item {i}"),
                properties: vec![format!("prop A{i}"), format!("prop B{i}")],
                category: "test".to_string(),
                formula: (i % 2 == 0).then(|| format!("F = {i}")),
            })
            .collect()
    }

    #[test]
    fn small_pools_generate_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 0..4 {
            assert!(generate_questions(&pool(n), Domain::TwoD, &mut rng).is_empty());
        }
    }

    #[test]
    fn question_count_is_pool_size_capped_at_ten() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_questions(&pool(4), Domain::TwoD, &mut rng).len(), 4);
        assert_eq!(generate_questions(&pool(9), Domain::TwoD, &mut rng).len(), 9);
        assert_eq!(
            generate_questions(&pool(25), Domain::TwoD, &mut rng).len(),
            10
        );
    }

    #[test]
    fn each_question_references_a_distinct_item() {
        let mut rng = StdRng::seed_from_u64(11);
        let questions = generate_questions(&pool(8), Domain::ThreeD, &mut rng);
        let mut answers: Vec<&str> = questions.iter().map(|q| q.correct_answer.as_str()).collect();
        answers.sort_unstable();
        answers.dedup();
        assert_eq!(answers.len(), questions.len());
    }

    #[test]
    fn options_are_four_distinct_names_with_one_correct() {
        let mut rng = StdRng::seed_from_u64(13);
        let items = pool(6);
        for q in generate_questions(&items, Domain::TwoD, &mut rng) {
            assert_eq!(q.options.len(), 4);
            let mut sorted = q.options.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), 4, "options must be distinct");
            assert_eq!(
                q.options.iter().filter(|o| **o == q.correct_answer).count(),
                1
            );
            // Distractors come from the pool.
            for option in &q.options {
                assert!(items.iter().any(|i| i.name == *option));
            }
        }
    }

    #[test]
    fn formula_questions_only_for_items_with_formulas() {
        let mut rng = StdRng::seed_from_u64(17);
        // Odd-indexed items have no formula.
        for q in generate_questions(&pool(12), Domain::TwoD, &mut rng) {
            if q.kind == QuestionKind::Formula {
                assert!(q.prompt.contains("F = "));
            }
        }
    }

    #[test]
    fn lines_domain_asks_about_concepts() {
        let mut rng = StdRng::seed_from_u64(19);
        let questions = generate_questions(&pool(5), Domain::Lines, &mut rng);
        for q in questions {
            match q.kind {
                QuestionKind::Identify => assert!(q.prompt.starts_with("Identify: ")),
                _ => assert!(q.prompt.starts_with("Which concept has this ")),
            }
        }
    }

    #[test]
    fn fixed_seed_reproduces_the_same_questions() {
        let items = pool(10);
        let a = generate_questions(&items, Domain::TwoD, &mut StdRng::seed_from_u64(42));
        let b = generate_questions(&items, Domain::TwoD, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
