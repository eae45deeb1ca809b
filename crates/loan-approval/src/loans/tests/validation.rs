use super::common::*;
use crate::loans::domain::{Applicant, LoanApplication};
use crate::loans::InvalidInput;

#[test]
fn missing_applicant_is_rejected_first() {
    let application = LoanApplication {
        applicant: None,
        amount_requested: 0,
        term_months: 0,
    };

    let error = evaluator()
        .evaluate_application(&application)
        .expect_err("applicant is required");

    assert_eq!(error, InvalidInput::MissingApplicant);
    assert_eq!(error.to_string(), "applicant required");
}

#[test]
fn non_positive_amount_is_invalid() {
    let evaluator = evaluator();
    for amount in [0, -1, i64::MIN] {
        let error = evaluator
            .evaluate(&applicant(700, false, false), amount, 12)
            .expect_err("amount must be positive");
        assert_eq!(error, InvalidInput::NonPositiveAmount(amount));
    }
}

#[test]
fn term_outside_6_to_84_is_invalid() {
    let evaluator = evaluator();
    for term in [5, 85, 0, -12] {
        let error = evaluator
            .evaluate(&applicant(700, false, false), 1000, term)
            .expect_err("term out of range");
        match error {
            InvalidInput::TermOutOfRange { actual, min, max } => {
                assert_eq!((actual, min, max), (term, 6, 84));
            }
            other => panic!("expected term error, got {other:?}"),
        }
    }

    for term in [6, 84] {
        assert!(evaluator
            .evaluate(&applicant(700, false, false), 1000, term)
            .is_ok());
    }
}

#[test]
fn non_positive_income_is_invalid() {
    let error = evaluator()
        .evaluate(&Applicant::new(0, 700, false, false), 1000, 12)
        .expect_err("income must be positive");
    assert_eq!(error, InvalidInput::NonPositiveIncome(0));
    assert!(error.to_string().contains("monthly_income"));
}

#[test]
fn credit_score_outside_0_to_850_is_invalid() {
    let evaluator = evaluator();
    for score in [-1, 851] {
        let error = evaluator
            .evaluate(&applicant(score, false, false), 1000, 12)
            .expect_err("score out of range");
        assert_eq!(
            error,
            InvalidInput::CreditScoreOutOfRange {
                actual: score,
                max: 850
            }
        );
    }

    for score in [0, 850] {
        assert!(evaluator
            .evaluate(&applicant(score, false, false), 1000, 12)
            .is_ok());
    }
}

#[test]
fn first_failing_check_wins() {
    let broken = Applicant::new(-5, 900, false, false);

    let error = evaluator()
        .evaluate(&broken, 0, 100)
        .expect_err("everything is invalid");

    assert_eq!(error, InvalidInput::NonPositiveAmount(0));
}

#[test]
fn term_is_checked_before_income() {
    let error = evaluator()
        .evaluate(&Applicant::new(0, 700, false, false), 1000, 85)
        .expect_err("term and income are invalid");

    assert!(matches!(
        error,
        InvalidInput::TermOutOfRange { actual: 85, .. }
    ));
}

#[test]
fn income_is_checked_before_credit_score() {
    let error = evaluator()
        .evaluate(&Applicant::new(-1, 851, false, false), 1000, 12)
        .expect_err("income and score are invalid");

    assert_eq!(error, InvalidInput::NonPositiveIncome(-1));
}
