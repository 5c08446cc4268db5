//! HTTP request handlers for the calculator API.
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
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate;
use crate::export::ScheduleSheet;
use crate::models::CalculationInput;

use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/export", post(export_handler))
        .route("/bounds", get(bounds_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a tagged calculator input and returns the full calculation
/// (result, schedule and audit steps) with its display figures.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let input = match parse_input(payload, correlation_id) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    match calculate(&input, state.config()) {
        Ok(calculation) => {
            info!(
                correlation_id = %correlation_id,
                calculator = input.kind().id(),
                final_amount = %calculation.result.final_amount,
                schedule_rows = calculation.schedule.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(CalculationResponse::new(
                    calculation,
                    &state.config().currency.symbol,
                )),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                calculator = input.kind().id(),
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /export endpoint.
///
/// Runs the calculation and returns its schedule as a CSV attachment.
async fn export_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let input = match parse_input(payload, correlation_id) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let exported = calculate(&input, state.config())
        .and_then(|calculation| ScheduleSheet::from_calculation(&calculation))
        .and_then(|sheet| Ok((sheet.file_name(), sheet.to_csv_bytes()?)));

    match exported {
        Ok((file_name, body)) => {
            info!(
                correlation_id = %correlation_id,
                calculator = input.kind().id(),
                file_name = %file_name,
                bytes = body.len(),
                "Export completed successfully"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", file_name),
                    ),
                ],
                body,
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                calculator = input.kind().id(),
                error = %err,
                "Export failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /bounds endpoint.
///
/// Returns the configured currency and input bounds so clients can set up
/// their input ranges.
async fn bounds_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.config().clone())
}

/// Unwraps the JSON body or builds the 400 response for a rejected one.
fn parse_input(
    payload: Result<Json<CalculationInput>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<CalculationInput, Response> {
    let rejection = match payload {
        Ok(Json(input)) => return Ok(input),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Well-formed JSON that does not describe a calculator input:
            // a missing field, an unknown calculator tag or a bad value.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
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
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::bad_request(error).into_response())
}
