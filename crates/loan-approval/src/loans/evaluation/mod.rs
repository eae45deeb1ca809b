mod config;
mod policy;
mod rules;

pub use config::LoanPolicy;

use super::domain::{Applicant, CreditBand, Decision, LoanApplication, LoanRequest};
use super::validation::{validate, InvalidInput};
use policy::{decide_outcome, vip_elevation};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless evaluator that applies the loan policy to an applicant and request.
#[derive(Debug, Clone, Default)]
pub struct LoanDecisionEvaluator {
    policy: LoanPolicy,
}

impl LoanDecisionEvaluator {
    pub fn new(policy: LoanPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &LoanPolicy {
        &self.policy
    }

    pub fn evaluate(
        &self,
        applicant: &Applicant,
        amount_requested: i64,
        term_months: i32,
    ) -> Result<Decision, InvalidInput> {
        self.assess(applicant, amount_requested, term_months)
            .map(|assessment| assessment.decision)
    }

    /// Evaluate an intake envelope, rejecting it when no applicant was supplied.
    pub fn evaluate_application(
        &self,
        application: &LoanApplication,
    ) -> Result<Decision, InvalidInput> {
        self.assess_application(application)
            .map(|assessment| assessment.decision)
    }

    pub fn assess(
        &self,
        applicant: &Applicant,
        amount_requested: i64,
        term_months: i32,
    ) -> Result<LoanAssessment, InvalidInput> {
        let request = LoanRequest {
            amount_requested,
            term_months,
        };
        self.run(Some(applicant), &request)
    }

    pub fn assess_application(
        &self,
        application: &LoanApplication,
    ) -> Result<LoanAssessment, InvalidInput> {
        self.run(application.applicant.as_ref(), &application.request())
    }

    fn run(
        &self,
        applicant: Option<&Applicant>,
        request: &LoanRequest,
    ) -> Result<LoanAssessment, InvalidInput> {
        let applicant = validate(applicant, request, &self.policy)?;

        let signals = rules::collect_signals(&applicant, request, &self.policy);
        let (mut decision, reason) = decide_outcome(&applicant, request, &self.policy, &signals);
        let mut reasons = vec![reason];

        let elevated = match vip_elevation(decision, &applicant, &self.policy) {
            Some(reason) => {
                debug!(credit_score = applicant.credit_score, "vip elevation applied");
                decision = Decision::Approved;
                reasons.push(reason);
                true
            }
            None => false,
        };

        debug!(
            band = signals.band.label(),
            decision = decision.label(),
            amount_requested = request.amount_requested,
            term_months = request.term_months,
            "loan evaluated"
        );

        Ok(LoanAssessment {
            decision,
            band: signals.band,
            elevated,
            reasons,
        })
    }
}

/// Decision together with the rule trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanAssessment {
    pub decision: Decision,
    pub band: CreditBand,
    pub elevated: bool,
    pub reasons: Vec<String>,
}

impl LoanAssessment {
    pub fn summary(&self) -> String {
        if self.reasons.is_empty() {
            self.decision.label().to_string()
        } else {
            format!("{}: {}", self.decision, self.reasons.join("; "))
        }
    }
}
