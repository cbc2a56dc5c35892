//! Property-based tests for the strength scorer.

use proptest::prelude::*;
use textpass::models::{StrengthChecks, StrengthLabel};
use textpass::strength::analyze_password_strength;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    // The score is always a whole number of sixths inside [0, 100].
    #[test]
    fn score_is_bounded_and_matches_checks(password in "\\PC{0,30}") {
        let assessment = analyze_password_strength(&password);
        prop_assert!(assessment.score >= 0.0 && assessment.score <= 100.0);

        let expected = assessment.checks.passed() as f64 / StrengthChecks::TOTAL as f64 * 100.0;
        prop_assert_eq!(assessment.score, expected);
    }

    // Only the empty string has no label; every other label follows the thresholds.
    #[test]
    fn label_follows_thresholds(password in "\\PC{1,30}") {
        let assessment = analyze_password_strength(&password);
        let label = assessment.label.expect("non-empty passwords are labelled");
        let expected = if assessment.score < 40.0 {
            StrengthLabel::Weak
        } else if assessment.score < 70.0 {
            StrengthLabel::Medium
        } else {
            StrengthLabel::Strong
        };
        prop_assert_eq!(label, expected);
    }

    #[test]
    fn scoring_is_idempotent(password in "\\PC{0,30}") {
        prop_assert_eq!(analyze_password_strength(&password), analyze_password_strength(&password));
    }

    // Any character tripled in a row fails the repeat check.
    #[test]
    fn triples_fail_repeat_check(
        prefix in "[a-z]{0,5}",
        c in "[a-zA-Z0-9!@#]",
        suffix in "[a-z]{0,5}",
    ) {
        let password = format!("{}{}{}{}{}", prefix, c, c, c, suffix);
        prop_assert!(!analyze_password_strength(&password).checks.no_repeats);
    }
}
