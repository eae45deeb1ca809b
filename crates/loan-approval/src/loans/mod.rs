//! Loan intake validation, rule evaluation and the HTTP surface around them.
//!
//! Evaluation is a pure function of the applicant and the request; everything outside
//! `evaluation` only feeds inputs to it or reports its result.

pub mod batch;
pub mod domain;
pub mod evaluation;
pub mod router;
pub mod validation;

#[cfg(test)]
mod tests;

pub use batch::{BatchError, BatchRow, BatchTally};
pub use domain::{Applicant, CreditBand, Decision, LoanApplication, LoanRequest};
pub use evaluation::{LoanAssessment, LoanDecisionEvaluator, LoanPolicy};
pub use router::{loan_router, DecisionResponse};
pub use validation::InvalidInput;
