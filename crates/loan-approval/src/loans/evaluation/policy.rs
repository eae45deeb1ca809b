use super::super::domain::{Applicant, CreditBand, Decision, LoanRequest};
use super::config::LoanPolicy;
use super::rules::RuleSignals;

pub(crate) fn decide_outcome(
    applicant: &Applicant,
    request: &LoanRequest,
    policy: &LoanPolicy,
    signals: &RuleSignals,
) -> (Decision, String) {
    match signals.band {
        CreditBand::Low => (
            Decision::Rejected,
            format!(
                "credit score {} below minimum {}",
                applicant.credit_score, policy.reject_below_score
            ),
        ),
        CreditBand::Mid if signals.high_income && !applicant.has_recent_defaults => (
            Decision::ManualReview,
            format!(
                "mid-band score {} with income {} and no recent defaults",
                applicant.credit_score, applicant.monthly_income
            ),
        ),
        CreditBand::Mid if applicant.has_recent_defaults => (
            Decision::Rejected,
            format!(
                "mid-band score {} with recent defaults",
                applicant.credit_score
            ),
        ),
        CreditBand::Mid => (
            Decision::Rejected,
            format!(
                "mid-band score {} with income {} below {}",
                applicant.credit_score, applicant.monthly_income, policy.high_income_threshold
            ),
        ),
        CreditBand::High if signals.affordable => (
            Decision::Approved,
            format!(
                "amount {} within affordability limit {}",
                request.amount_requested, signals.affordable_amount
            ),
        ),
        CreditBand::High => (
            Decision::ManualReview,
            format!(
                "amount {} exceeds affordability limit {}",
                request.amount_requested, signals.affordable_amount
            ),
        ),
    }
}

/// Upgrades a manual review to approval for VIP clients in good standing.
/// Never touches approved or rejected outcomes.
pub(crate) fn vip_elevation(
    decision: Decision,
    applicant: &Applicant,
    policy: &LoanPolicy,
) -> Option<String> {
    let eligible = decision == Decision::ManualReview
        && applicant.is_vip
        && applicant.credit_score >= policy.vip_min_score
        && !applicant.has_recent_defaults;

    eligible.then(|| {
        format!(
            "VIP client with score {} (minimum {}) and no recent defaults elevated to approval",
            applicant.credit_score, policy.vip_min_score
        )
    })
}
