//! HTTP request handlers for the Annual Leave Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calc_unused_leave_payout, full_pipeline_with, suggest_annual_days, summarize_nice_records,
};
use crate::models::{ServiceProfile, WageProfile};

use super::request::{PayoutRequest, PipelineRequest, SuggestRequest, SummarizeRequest};
use super::response::{
    ApiError, ApiErrorResponse, PipelineResponse, RulesResponse, SummarizeResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/pipeline", post(pipeline_handler))
        .route("/summarize", post(summarize_handler))
        .route("/suggest", post(suggest_handler))
        .route("/payout", post(payout_handler))
        .route("/rules", get(rules_handler))
        .with_state(state)
}

/// Handler for POST /pipeline.
///
/// Runs the full calculation and wraps the result in a [`PipelineResponse`].
async fn pipeline_handler(
    State(state): State<AppState>,
    payload: Result<Json<PipelineRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pipeline request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = full_pipeline_with(
        state.catalog(),
        &request.rule_id,
        request.service,
        request.wage,
        request.granted_days,
        request.used_days,
    );
    info!(
        correlation_id = %correlation_id,
        rule_id = %result.rule.id,
        suggested_days = ?result.suggestion.suggested_days,
        payout_rounded = %result.payout.payout_rounded,
        duration_us = start_time.elapsed().as_micros(),
        "Pipeline completed successfully"
    );

    json_ok(PipelineResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        result,
    })
}

/// Handler for POST /summarize.
async fn summarize_handler(payload: Result<Json<SummarizeRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summarize request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let summaries = summarize_nice_records(&request.records);
    info!(
        correlation_id = %correlation_id,
        records = request.records.len(),
        categories = summaries.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Summary completed successfully"
    );

    json_ok(SummarizeResponse { summaries })
}

/// Handler for POST /suggest.
async fn suggest_handler(
    State(state): State<AppState>,
    payload: Result<Json<SuggestRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing suggest request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let rule = state.catalog().get(&request.rule_id);
    let service: ServiceProfile = request.service.into();
    let suggestion = suggest_annual_days(rule, &service);
    info!(
        correlation_id = %correlation_id,
        rule_id = %rule.id,
        suggested_days = ?suggestion.suggested_days,
        "Suggestion completed successfully"
    );

    json_ok(suggestion)
}

/// Handler for POST /payout.
async fn payout_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayoutRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payout request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let rule = state.catalog().get(&request.rule_id);
    let wage: WageProfile = request.wage.into();
    let payout = calc_unused_leave_payout(rule, request.granted_days, request.used_days, &wage);
    info!(
        correlation_id = %correlation_id,
        rule_id = %rule.id,
        unused_days = %payout.unused_days,
        payout_rounded = %payout.payout_rounded,
        "Payout completed successfully"
    );

    json_ok(payout)
}

/// Handler for GET /rules. Lists the catalog ordered by rule id.
async fn rules_handler(State(state): State<AppState>) -> Response {
    json_ok(RulesResponse {
        rules: state.catalog().rules().cloned().collect(),
    })
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message, including the field path
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            warn!(correlation_id = %correlation_id, "Missing JSON content type");
            ApiError::missing_content_type()
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}
