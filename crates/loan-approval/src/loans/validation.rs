use super::domain::{Applicant, LoanRequest};
use super::evaluation::LoanPolicy;

/// Rejected input. Each variant names the constraint that failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("applicant required")]
    MissingApplicant,
    #[error("amount_requested must be > 0 (got {0})")]
    NonPositiveAmount(i64),
    #[error("term_months must be between {min} and {max} (got {actual})")]
    TermOutOfRange { actual: i32, min: i32, max: i32 },
    #[error("monthly_income must be > 0 (got {0})")]
    NonPositiveIncome(i64),
    #[error("credit_score must be between 0 and {max} (got {actual})")]
    CreditScoreOutOfRange { actual: i32, max: i32 },
}

/// Checks run before any rule; the first failure wins.
pub(crate) fn validate(
    applicant: Option<&Applicant>,
    request: &LoanRequest,
    policy: &LoanPolicy,
) -> Result<Applicant, InvalidInput> {
    let applicant = applicant.copied().ok_or(InvalidInput::MissingApplicant)?;

    if request.amount_requested <= 0 {
        return Err(InvalidInput::NonPositiveAmount(request.amount_requested));
    }

    if !policy.term_range().contains(&request.term_months) {
        return Err(InvalidInput::TermOutOfRange {
            actual: request.term_months,
            min: policy.min_term_months,
            max: policy.max_term_months,
        });
    }

    if applicant.monthly_income <= 0 {
        return Err(InvalidInput::NonPositiveIncome(applicant.monthly_income));
    }

    if !policy.credit_score_range().contains(&applicant.credit_score) {
        return Err(InvalidInput::CreditScoreOutOfRange {
            actual: applicant.credit_score,
            max: policy.max_credit_score,
        });
    }

    Ok(applicant)
}
