use super::super::domain::{Applicant, CreditBand, LoanRequest};
use super::config::LoanPolicy;

/// Facts about a validated application that the decision policy branches on.
pub(crate) struct RuleSignals {
    pub band: CreditBand,
    pub high_income: bool,
    pub affordable: bool,
    pub affordable_amount: i64,
}

pub(crate) fn credit_band(credit_score: i32, policy: &LoanPolicy) -> CreditBand {
    if credit_score < policy.reject_below_score {
        CreditBand::Low
    } else if credit_score < policy.high_band_from_score {
        CreditBand::Mid
    } else {
        CreditBand::High
    }
}

pub(crate) fn collect_signals(
    applicant: &Applicant,
    request: &LoanRequest,
    policy: &LoanPolicy,
) -> RuleSignals {
    let affordable_amount = policy.affordable_amount(applicant.monthly_income);

    RuleSignals {
        band: credit_band(applicant.credit_score, policy),
        high_income: applicant.monthly_income >= policy.high_income_threshold,
        affordable: request.amount_requested <= affordable_amount,
        affordable_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_fall_into_upper_band() {
        let policy = LoanPolicy::default();

        assert_eq!(credit_band(0, &policy), CreditBand::Low);
        assert_eq!(credit_band(499, &policy), CreditBand::Low);
        assert_eq!(credit_band(500, &policy), CreditBand::Mid);
        assert_eq!(credit_band(649, &policy), CreditBand::Mid);
        assert_eq!(credit_band(650, &policy), CreditBand::High);
        assert_eq!(credit_band(850, &policy), CreditBand::High);
    }

    #[test]
    fn income_threshold_is_inclusive() {
        let policy = LoanPolicy::default();
        let request = LoanRequest {
            amount_requested: 1000,
            term_months: 12,
        };

        let at = collect_signals(&Applicant::new(2500, 600, false, false), &request, &policy);
        let below = collect_signals(&Applicant::new(2499, 600, false, false), &request, &policy);

        assert!(at.high_income);
        assert!(!below.high_income);
    }

    #[test]
    fn affordability_counts_exact_multiple() {
        let policy = LoanPolicy::default();
        let applicant = Applicant::new(3000, 700, false, false);

        let exact = LoanRequest {
            amount_requested: 24_000,
            term_months: 24,
        };
        let over = LoanRequest {
            amount_requested: 24_001,
            term_months: 24,
        };

        assert!(collect_signals(&applicant, &exact, &policy).affordable);
        assert!(!collect_signals(&applicant, &over, &policy).affordable);
    }
}
