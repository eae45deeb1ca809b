use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{Applicant, Decision, LoanApplication};
use super::evaluation::LoanDecisionEvaluator;

#[derive(Debug)]
pub enum BatchError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchError::Io(err) => write!(f, "failed to read loan batch: {}", err),
            BatchError::Csv(err) => write!(f, "invalid loan batch CSV data: {}", err),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::Io(err) => Some(err),
            BatchError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for BatchError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for BatchError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

#[derive(Debug, Deserialize)]
struct CsvLoanRow {
    monthly_income: i64,
    credit_score: i32,
    has_recent_defaults: bool,
    is_vip: bool,
    amount_requested: i64,
    term_months: i32,
}

impl From<CsvLoanRow> for LoanApplication {
    fn from(row: CsvLoanRow) -> Self {
        LoanApplication::new(
            Applicant::new(
                row.monthly_income,
                row.credit_score,
                row.has_recent_defaults,
                row.is_vip,
            ),
            row.amount_requested,
            row.term_months,
        )
    }
}

/// Result for one CSV record. `line` is the 1-based line in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRow {
    pub line: u64,
    pub application: LoanApplication,
    pub outcome: Result<Decision, String>,
}

pub fn evaluate_path(
    path: impl AsRef<Path>,
    evaluator: &LoanDecisionEvaluator,
) -> Result<Vec<BatchRow>, BatchError> {
    let file = std::fs::File::open(path)?;
    evaluate_csv(file, evaluator)
}

pub fn evaluate_csv<R: Read>(
    reader: R,
    evaluator: &LoanDecisionEvaluator,
) -> Result<Vec<BatchRow>, BatchError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|position| position.line())
            .unwrap_or(index as u64 + 2);
        let row: CsvLoanRow = record.deserialize(Some(&headers))?;
        let application = LoanApplication::from(row);
        let outcome = evaluator
            .evaluate_application(&application)
            .map_err(|err| err.to_string());
        rows.push(BatchRow {
            line,
            application,
            outcome,
        });
    }

    Ok(rows)
}

/// Count of rows per decision, plus rows that failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchTally {
    pub decisions: BTreeMap<Decision, usize>,
    pub invalid: usize,
}

impl BatchTally {
    pub fn from_rows(rows: &[BatchRow]) -> Self {
        let mut tally = Self::default();
        for row in rows {
            match row.outcome {
                Ok(decision) => *tally.decisions.entry(decision).or_insert(0) += 1,
                Err(_) => tally.invalid += 1,
            }
        }
        tally
    }

    pub fn count(&self, decision: Decision) -> usize {
        self.decisions.get(&decision).copied().unwrap_or(0)
    }
}
