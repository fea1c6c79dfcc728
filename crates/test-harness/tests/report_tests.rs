use geo_types::Domain;
use test_harness::report::{QuizSummary, StudyReport};
use test_harness::workflow::StatsView;
use test_harness::StudyBuilder;

#[test]
fn report_renders_every_section() {
    let mut study = StudyBuilder::seeded(17);
    study.select_domain(Domain::TwoD).unwrap();
    study.toggle_learned(Domain::TwoD, "circle").unwrap();

    let mut report = StudyReport::new(Domain::TwoD, 32);
    report.stats = Some(study.stats(Domain::TwoD).unwrap());
    report.measurements = study
        .compute(Domain::TwoD, "circle", &[("radius", "2")])
        .unwrap();

    study.start_quiz(Domain::TwoD).unwrap();
    let (score, total, message) = study.complete_quiz_perfectly().unwrap();
    report.quiz = Some(QuizSummary {
        score,
        total,
        message,
    });

    let text = report.to_text();
    assert!(text.starts_with("=== GeoMaster Study Report ==="));
    assert!(text.contains("Domain: 2d (32 entries)"));
    assert!(text.contains("Progress: 1 learned, 0 favorites of 32 (3% complete)"));
    assert!(text.contains("Area: 12.5664 sq units"));
    assert!(text.contains("Circumference: 12.5664 units"));
    assert!(text.contains("Quiz: 10/10 - Perfect! You're a geometry master! 🎉"));
}

#[test]
fn report_formats_measurements_to_four_decimals() {
    let mut report = StudyReport::new(Domain::ThreeD, 43);
    report.measurements = vec![geo_types::Measurement::new(
        "Volume",
        4.188790204786391,
        geo_types::Unit::Cubic,
    )];
    let text = report.to_text();
    assert!(text.contains("Volume: 4.1888 cubic units"));
}

#[test]
fn report_flags_failed_oracles() {
    let question = quiz_engine::QuizQuestion {
        kind: quiz_engine::QuestionKind::Identify,
        prompt: String::new(),
        options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
        correct_answer: "A".into(),
        explanation: String::new(),
    };
    let mut report = StudyReport::new(Domain::Lines, 12);
    report
        .oracle_results
        .push(test_harness::oracle::check_question_well_formed(&question));

    assert!(!report.all_passed());
    let text = report.to_text();
    assert!(text.contains("[FAIL] question_well_formed"));
}

#[test]
fn empty_sections_are_omitted() {
    let report = StudyReport::new(Domain::Lines, 12);
    let text = report.to_text();
    assert!(report.all_passed());
    assert!(!text.contains("Measurements:"));
    assert!(!text.contains("Quiz:"));
    assert!(!text.contains("Oracle Results"));
    assert!(text.contains("Domain: lines (12 entries)"));
}
