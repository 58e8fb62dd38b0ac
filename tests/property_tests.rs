use proptest::prelude::*;
use spectrum_scorer::scorer::metrics::raw_score;
use spectrum_scorer::scorer::{DeficiencyType, InputPoint, SpectrumScorer};

mod common;
use common::uniform;

fn to_points(xs: &[f64]) -> Vec<InputPoint> {
    xs.iter().copied().map(InputPoint::new).collect()
}

// --- STRATEGIES ---

prop_compose! {
    fn arb_marks_and_shuffle()(
        marks in proptest::collection::vec(-200.0..800.0f64, 6)
    )(
        shuffled in Just(marks.clone()).prop_shuffle(),
        marks in Just(marks)
    ) -> (Vec<f64>, Vec<f64>) {
        (marks, shuffled)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_permutation_invariance((marks, shuffled) in arb_marks_and_shuffle()) {
        let scorer = SpectrumScorer::default();
        prop_assert_eq!(
            scorer.analyze(&to_points(&marks)),
            scorer.analyze(&to_points(&shuffled))
        );
    }

    #[test]
    fn test_score_stays_in_range(marks in proptest::collection::vec(-5000.0..5000.0f64, 6)) {
        let result = SpectrumScorer::default().analyze(&to_points(&marks));
        prop_assert!((0.0..=100.0).contains(&result.score), "score {}", result.score);
        prop_assert!(!matches!(result.kind, DeficiencyType::Unknown | DeficiencyType::Incomplete));
    }

    #[test]
    fn test_non_six_counts_are_incomplete(marks in proptest::collection::vec(0.0..600.0f64, 1..20)) {
        prop_assume!(marks.len() != 6);
        let result = SpectrumScorer::default().analyze(&to_points(&marks));
        prop_assert_eq!(result.kind, DeficiencyType::Incomplete);
        prop_assert_eq!(result.score, 0.0);
        let expected_count = format!("got {}.", marks.len());
        prop_assert!(result.message.contains(&expected_count));
        prop_assert!(result.message.contains("Expected 6 lines"));
    }

    #[test]
    fn test_score_non_increasing_in_mse(a in 0.0..1.0f64, b in 0.0..1.0f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(raw_score(lo, 10.0) >= raw_score(hi, 10.0));
    }

    #[test]
    fn test_large_error_floors_at_zero(d in 0.32..1.0f64) {
        // Uniform shift d gives mse = d^2 >= 0.1
        let result = SpectrumScorer::default().analyze(&uniform(d));
        prop_assert_eq!(result.score, 0.0);
    }
}
