use crate::infra::evaluator_from_config;
use clap::Args;
use loan_approval::error::AppError;
use loan_approval::loans::batch::{evaluate_path, BatchRow, BatchTally};
use loan_approval::loans::{Applicant, Decision, LoanAssessment};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Applicant gross monthly income
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) income: i64,
    /// Applicant credit score (0-850)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) score: i32,
    /// Applicant has defaulted recently
    #[arg(long)]
    pub(crate) defaults: bool,
    /// Applicant is a VIP client
    #[arg(long)]
    pub(crate) vip: bool,
    /// Requested loan amount
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) amount: i64,
    /// Loan term in months (6-84)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) term: i32,
    /// Print the rules that produced the decision
    #[arg(long)]
    pub(crate) explain: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with one application per row
    pub(crate) path: PathBuf,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let evaluator = evaluator_from_config()?;
    let applicant = Applicant::new(args.income, args.score, args.defaults, args.vip);
    let assessment = evaluator.assess(&applicant, args.amount, args.term)?;

    print!("{}", render_assessment(&assessment, args.explain));
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let evaluator = evaluator_from_config()?;
    let rows = evaluate_path(&args.path, &evaluator)?;

    println!("Loan batch: {}", args.path.display());
    print!("{}", render_batch(&rows));
    Ok(())
}

fn render_assessment(assessment: &LoanAssessment, explain: bool) -> String {
    let mut out = format!("{}\n", assessment.decision);
    if explain {
        out.push_str(&format!("credit band: {}\n", assessment.band.label()));
        for reason in &assessment.reasons {
            out.push_str(&format!("- {reason}\n"));
        }
    }
    out
}

fn render_batch(rows: &[BatchRow]) -> String {
    let mut out = String::new();
    for row in rows {
        match &row.outcome {
            Ok(decision) => out.push_str(&format!("line {}: {}\n", row.line, decision)),
            Err(message) => out.push_str(&format!("line {}: invalid ({})\n", row.line, message)),
        }
    }

    let tally = BatchTally::from_rows(rows);
    out.push_str("\nTotals\n");
    for decision in Decision::ALL {
        out.push_str(&format!("- {}: {}\n", decision, tally.count(decision)));
    }
    out.push_str(&format!("- INVALID: {}\n", tally.invalid));
    out
}
