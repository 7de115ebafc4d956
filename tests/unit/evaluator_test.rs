//! Tests for the checklist evaluator

use checklist_gate::core::models::{
    DeclinedPolicy, EvaluationOutcome, InvalidStatus, StatusPolicy, StatusVocabulary,
};
use checklist_gate::core::services::{evaluate, split_lines};

use crate::common::labels;

fn eval(required: &[&str], body: &str, policy: StatusPolicy) -> EvaluationOutcome {
    evaluate(&labels(required), &split_lines(body), policy)
}

fn eval_default(required: &[&str], body: &str) -> EvaluationOutcome {
    eval(required, body, StatusPolicy::default())
}

mod scenarios {
    use super::*;

    #[test]
    fn checkbox_passes_in_extended_vocabulary() {
        assert!(eval_default(&["Test line"], "- [x] Test line").passed());
    }

    #[test]
    fn checkbox_is_invalid_in_glyph_vocabulary() {
        let glyph = StatusPolicy::new(StatusVocabulary::Glyph, DeclinedPolicy::Fail);
        let outcome = eval(&["Test line"], "- [x] Test line", glyph);
        assert_eq!(
            outcome.invalid_status,
            vec![InvalidStatus {
                label: "Test line".to_string(),
                tokens: vec!["x".to_string()],
            }]
        );
    }

    #[test]
    fn check_glyph_passes() {
        assert!(eval_default(&["Test line"], "- [✔] Test line").passed());
    }

    #[test]
    fn not_applicable_passes() {
        assert!(eval_default(&["Test line"], "- [NA] Test line").passed());
    }

    #[test]
    fn unknown_word_is_invalid_status() {
        let outcome = eval_default(&["Test line"], "- [pending] Test line");
        assert!(!outcome.passed());
        assert_eq!(outcome.invalid_status[0].tokens, vec!["pending"]);
        assert!(outcome.unsatisfied.is_empty());
    }

    #[test]
    fn empty_description_is_missing() {
        let outcome = eval_default(&["Test line"], "");
        assert_eq!(outcome.missing, vec!["Test line"]);
    }
}

mod legacy_checkbox_cases {
    use super::*;

    #[test]
    fn unchecked_box_fails_as_unsatisfied() {
        let outcome = eval_default(&["Test line"], "- [ ] Test line\n");
        assert_eq!(outcome.unsatisfied, vec!["Test line"]);
    }

    #[test]
    fn empty_brackets_fail_as_invalid() {
        let outcome = eval_default(&["Test line"], "- [] Test line\n");
        assert_eq!(outcome.invalid_status[0].tokens, vec![""]);
    }

    #[test]
    fn extra_label_text_is_missing() {
        let outcome = eval_default(&["Test line"], "- [x] Test line extra data\n");
        assert_eq!(outcome.missing, vec!["Test line"]);
    }

    #[test]
    fn uppercase_x_passes() {
        assert!(eval_default(&["Test line"], "- [X] Test line\n").passed());
    }
}

mod aggregation {
    use super::*;

    #[test]
    fn declined_glyph_is_unsatisfied_by_default() {
        let outcome = eval_default(&["Risky change"], "- [✖] Risky change");
        assert_eq!(outcome.unsatisfied, vec!["Risky change"]);
    }

    #[test]
    fn declined_glyph_passes_when_configured() {
        let policy = StatusPolicy::new(StatusVocabulary::Extended, DeclinedPolicy::Pass);
        assert!(eval(&["Risky change"], "- [✖] Risky change", policy).passed());
    }

    #[test]
    fn invalid_tokens_are_distinct_and_ordered() {
        let body = "- [b] L\n- [a] L\n- [b] L\n- [ ] L";
        let outcome = eval_default(&["L"], body);
        assert_eq!(outcome.invalid_status[0].tokens, vec!["b", "a"]);
    }

    #[test]
    fn buckets_follow_configured_order() {
        let outcome = eval_default(&["c", "a", "b"], "");
        assert_eq!(outcome.missing, vec!["c", "a", "b"]);
    }

    #[test]
    fn every_label_lands_in_exactly_one_bucket() {
        let required = ["one", "two", "three", "four", "five"];
        let body = "- [x] one\n- [ ] two\n- [?] three\n- [NA] five\n- [ ] five";
        let outcome = eval_default(&required, body);

        assert_eq!(outcome.required_count(), required.len());
        assert_eq!(outcome.satisfied, vec!["one", "five"]);
        assert_eq!(outcome.unsatisfied, vec!["two"]);
        assert_eq!(outcome.invalid_status[0].label, "three");
        assert_eq!(outcome.missing, vec!["four"]);
        assert_eq!(outcome.failure_count(), 3);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let required = labels(&["A"]);
        let body = "- [x] A";
        let lines = split_lines(body);
        let before = (required.clone(), lines.clone());

        let _ = evaluate(&required, &lines, StatusPolicy::default());
        assert_eq!((required, lines), before);
    }
}
