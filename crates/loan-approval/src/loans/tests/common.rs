use std::sync::Arc;

use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;

use crate::loans::domain::{Applicant, LoanApplication};
use crate::loans::{loan_router, LoanDecisionEvaluator};

pub(super) const INCOME: i64 = 3000;

pub(super) fn applicant(credit_score: i32, has_recent_defaults: bool, is_vip: bool) -> Applicant {
    Applicant::new(INCOME, credit_score, has_recent_defaults, is_vip)
}

pub(super) fn evaluator() -> LoanDecisionEvaluator {
    LoanDecisionEvaluator::default()
}

pub(super) fn application(applicant: Applicant, amount: i64, term: i32) -> LoanApplication {
    LoanApplication::new(applicant, amount, term)
}

pub(super) fn router() -> axum::Router {
    loan_router(Arc::new(evaluator()))
}

pub(super) fn json_request(body: &Value) -> Request<axum::body::Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/loans/decisions")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_unprocessable(response: &Response) {
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
