use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::domain::{CreditBand, Decision, LoanApplication};
use super::evaluation::{LoanAssessment, LoanDecisionEvaluator};

/// Response body for a completed evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub decision: Decision,
    pub band: CreditBand,
    pub elevated: bool,
    pub reasons: Vec<String>,
    pub evaluated_at: DateTime<Utc>,
}

impl DecisionResponse {
    pub fn from_assessment(assessment: LoanAssessment, evaluated_at: DateTime<Utc>) -> Self {
        Self {
            decision: assessment.decision,
            band: assessment.band,
            elevated: assessment.elevated,
            reasons: assessment.reasons,
            evaluated_at,
        }
    }
}

/// Router builder exposing the loan decision endpoint.
pub fn loan_router(evaluator: Arc<LoanDecisionEvaluator>) -> Router {
    Router::new()
        .route("/api/v1/loans/decisions", post(decision_handler))
        .with_state(evaluator)
}

pub(crate) async fn decision_handler(
    State(evaluator): State<Arc<LoanDecisionEvaluator>>,
    payload: Result<axum::Json<LoanApplication>, JsonRejection>,
) -> Response {
    let application = match payload {
        Ok(axum::Json(application)) => application,
        Err(rejection) => {
            warn!(status = %rejection.status(), "loan application body rejected");
            let payload = json!({
                "error": rejection.body_text(),
            });
            return (rejection.status(), axum::Json(payload)).into_response();
        }
    };

    match evaluator.assess_application(&application) {
        Ok(assessment) => {
            let body = DecisionResponse::from_assessment(assessment, Utc::now());
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => {
            warn!(%error, "loan application rejected by validation");
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
