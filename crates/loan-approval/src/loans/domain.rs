use std::fmt;

use serde::{Deserialize, Serialize};

/// Financial snapshot of the person requesting credit.
///
/// Fields are signed so that malformed intake (negative income, negative score) reaches
/// validation instead of failing at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Applicant {
    pub monthly_income: i64,
    pub credit_score: i32,
    pub has_recent_defaults: bool,
    pub is_vip: bool,
}

impl Applicant {
    pub fn new(
        monthly_income: i64,
        credit_score: i32,
        has_recent_defaults: bool,
        is_vip: bool,
    ) -> Self {
        Self {
            monthly_income,
            credit_score,
            has_recent_defaults,
            is_vip,
        }
    }
}

/// Amount and duration being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoanRequest {
    pub amount_requested: i64,
    pub term_months: i32,
}

/// Intake envelope as received over HTTP or from a batch file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanApplication {
    #[serde(default)]
    pub applicant: Option<Applicant>,
    pub amount_requested: i64,
    pub term_months: i32,
}

impl LoanApplication {
    pub fn new(applicant: Applicant, amount_requested: i64, term_months: i32) -> Self {
        Self {
            applicant: Some(applicant),
            amount_requested,
            term_months,
        }
    }

    pub fn request(&self) -> LoanRequest {
        LoanRequest {
            amount_requested: self.amount_requested,
            term_months: self.term_months,
        }
    }
}

/// Outcome of a loan evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Approved,
    ManualReview,
    Rejected,
}

impl Decision {
    pub const ALL: [Decision; 3] = [
        Decision::Approved,
        Decision::ManualReview,
        Decision::Rejected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Decision::Approved => "APPROVED",
            Decision::ManualReview => "MANUAL_REVIEW",
            Decision::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Credit score bracket the decision rules branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditBand {
    Low,
    Mid,
    High,
}

impl CreditBand {
    pub fn label(&self) -> &'static str {
        match self {
            CreditBand::Low => "low",
            CreditBand::Mid => "mid",
            CreditBand::High => "high",
        }
    }
}
