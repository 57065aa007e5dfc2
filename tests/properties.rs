//! Property tests for validation and the block scan.

use proptest::prelude::*;
use pwd_blocks::{Feedback, ValidationError, analyze, classify, longest_run, validate};
use secrecy::SecretString;

fn secret(s: &str) -> SecretString {
    SecretString::new(s.to_string().into())
}

proptest! {
    #[test]
    fn short_candidates_fail_length(s in "[^ ]{0,7}") {
        let is_length_error = matches!(validate(&secret(&s)), Err(ValidationError::Length { .. }));
        prop_assert!(is_length_error);
    }

    #[test]
    fn long_candidates_fail_length(s in ".{13,40}") {
        let is_length_error = matches!(validate(&secret(&s)), Err(ValidationError::Length { .. }));
        prop_assert!(is_length_error);
    }

    #[test]
    fn length_is_checked_before_spaces(head in "[a-z]{0,6}", tail in "[a-z]{0,6}") {
        let candidate = format!("{head} {tail}");
        let expected = if (8..=12).contains(&candidate.chars().count()) {
            ValidationError::Whitespace
        } else {
            ValidationError::Length { min: 8, max: 12 }
        };
        prop_assert_eq!(validate(&secret(&candidate)).err(), Some(expected));
    }

    #[test]
    fn space_at_either_end_fails_whitespace(body in "[a-z0-9]{7,11}") {
        let leading = format!(" {body}");
        let trailing = format!("{body} ");
        prop_assert_eq!(validate(&secret(&leading)).err(), Some(ValidationError::Whitespace));
        prop_assert_eq!(validate(&secret(&trailing)).err(), Some(ValidationError::Whitespace));
    }

    #[test]
    fn run_length_is_bounded(s in "[ab1!]{8,12}") {
        let report = analyze(&secret(&s)).unwrap();
        let len = s.chars().count();
        prop_assert!(report.run_length >= 1 && report.run_length <= len);
        let all_same = s.chars().all(|c| Some(c) == s.chars().next());
        prop_assert_eq!(report.run_length == len, all_same);
    }

    #[test]
    fn repeated_char_run_equals_length(c in "[^ ]", n in 8usize..=12) {
        let s = c.repeat(n);
        prop_assert_eq!(longest_run(&s), n);
    }

    #[test]
    fn analyze_is_idempotent(s in ".{0,16}") {
        let pwd = secret(&s);
        prop_assert_eq!(analyze(&pwd), analyze(&pwd));
    }

    #[test]
    fn feedback_matches_threshold(run in 1usize..=12) {
        let feedback = classify(run);
        if run > 2 {
            prop_assert_eq!(feedback, Feedback::ReduceBlock { by: run - 2 });
        } else {
            prop_assert_eq!(feedback, Feedback::Decent);
        }
    }
}
