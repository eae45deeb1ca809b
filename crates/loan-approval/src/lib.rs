//! Rule-based loan decisioning.
//!
//! [`loans::LoanDecisionEvaluator`] validates an applicant and request and returns one of
//! three decisions. The remaining modules carry configuration, logging and error plumbing
//! for the service binary.

pub mod config;
pub mod error;
pub mod loans;
pub mod telemetry;
