use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Thresholds driving validation and the decision rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanPolicy {
    /// Scores strictly below this are rejected outright.
    pub reject_below_score: i32,
    /// First score of the high band; the mid band spans `reject_below_score..high_band_from_score`.
    pub high_band_from_score: i32,
    /// Mid band applicants need at least this monthly income to reach manual review.
    pub high_income_threshold: i64,
    /// High band requests up to `monthly_income * affordability_multiplier` are auto-approved.
    pub affordability_multiplier: i64,
    pub vip_min_score: i32,
    pub min_term_months: i32,
    pub max_term_months: i32,
    pub max_credit_score: i32,
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            reject_below_score: 500,
            high_band_from_score: 650,
            high_income_threshold: 2500,
            affordability_multiplier: 8,
            vip_min_score: 600,
            min_term_months: 6,
            max_term_months: 84,
            max_credit_score: 850,
        }
    }
}

impl LoanPolicy {
    pub fn term_range(&self) -> RangeInclusive<i32> {
        self.min_term_months..=self.max_term_months
    }

    pub fn credit_score_range(&self) -> RangeInclusive<i32> {
        0..=self.max_credit_score
    }

    /// Largest amount considered affordable for the given income. Saturates instead of wrapping.
    pub fn affordable_amount(&self, monthly_income: i64) -> i64 {
        monthly_income.saturating_mul(self.affordability_multiplier)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
