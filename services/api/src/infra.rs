use loan_approval::config::AppConfig;
use loan_approval::error::AppError;
use loan_approval::loans::LoanDecisionEvaluator;
use loan_approval::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads configuration for a one-shot CLI run: installs logging on stderr and builds the
/// evaluator, so `LOAN_POLICY_PATH` and decision events apply outside the server too.
pub(crate) fn evaluator_from_config() -> Result<LoanDecisionEvaluator, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(LoanDecisionEvaluator::new(config.policy))
}
