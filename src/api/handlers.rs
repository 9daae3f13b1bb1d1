//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use chrono::{Utc, Weekday};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    DashboardOverview, build_dashboard, compute_attendance_summary_with_labels,
    compute_payroll_with_rules,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{Absence, Employee, ReferencePeriod, Shift, Site, parse_weekday};
use crate::reporting::generate_report;
use crate::store::{DataSource, ReportStore};

use super::request::{
    AbsenceQuery, AttendanceRequest, DashboardQuery, GenerateReportRequest, PayrollRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

type HandlerResult = Result<Response, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .route("/attendance", post(attendance_handler))
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/:id", delete(delete_employee))
        .route("/absences", get(list_absences).post(create_absence))
        .route("/sites", get(list_sites).post(create_site))
        .route("/shifts", get(list_shifts).post(create_shift))
        .route("/reports", get(list_reports).post(create_report))
        .route("/reports/:id", get(get_report).delete(delete_report))
        .route("/dashboard", get(dashboard_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn failure(correlation_id: Uuid, error: EngineError) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request failed"
    );
    error.into()
}

/// Unwraps a JSON body, turning extractor rejections into 400 responses.
fn parse_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
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
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::bad_request(error))
}

fn parse_query<T>(
    correlation_id: Uuid,
    query: Result<Query<T>, QueryRejection>,
) -> Result<T, ApiErrorResponse> {
    query.map(|Query(q)| q).map_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Query string rejected"
        );
        ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
    })
}

fn parse_period(correlation_id: Uuid, value: &str) -> Result<ReferencePeriod, ApiErrorResponse> {
    value
        .parse::<ReferencePeriod>()
        .map_err(|err| failure(correlation_id, err))
}

/// Handler for POST /payroll.
///
/// Computes a payroll from the records in the request body.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = parse_body(correlation_id, payload)?;

    let start_time = Instant::now();
    let payroll = compute_payroll_with_rules(
        &request.employees,
        &request.absences,
        request.period,
        state.config().rules(),
    )
    .map_err(|err| failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        period = %payroll.period,
        line_items = payroll.line_items.len(),
        net_salary = %payroll.totals.net_salary,
        duration_us = start_time.elapsed().as_micros(),
        "Payroll computed successfully"
    );

    Ok(json_response(StatusCode::OK, payroll))
}

/// Handler for POST /attendance.
async fn attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance request");

    let request = parse_body(correlation_id, payload)?;

    let rows = compute_attendance_summary_with_labels(
        &request.absences,
        &request.employees,
        request.period,
        state.config().labels(),
    )
    .map_err(|err| failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        rows = rows.len(),
        "Attendance summary computed successfully"
    );

    Ok(json_response(StatusCode::OK, rows))
}

async fn list_employees(State(state): State<AppState>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let employees = state
        .store()
        .employees()
        .map_err(|err| failure(correlation_id, err))?;
    Ok(json_response(StatusCode::OK, employees))
}

async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<Employee>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let employee = parse_body(correlation_id, payload)?;

    let saved = state
        .store()
        .save_employee(employee)
        .map_err(|err| failure(correlation_id, err))?;

    info!(correlation_id = %correlation_id, employee_id = %saved.id, "Employee saved");
    Ok(json_response(StatusCode::CREATED, saved))
}

/// Handler for DELETE /employees/:id.
///
/// Responds 409 while absences still reference the employee.
async fn delete_employee(State(state): State<AppState>, Path(id): Path<String>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    state
        .store()
        .delete_employee(&id)
        .map_err(|err| failure(correlation_id, err))?;

    info!(correlation_id = %correlation_id, employee_id = %id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn list_absences(
    State(state): State<AppState>,
    query: Result<Query<AbsenceQuery>, QueryRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let query = parse_query(correlation_id, query)?;

    let absences = match query.period.as_deref() {
        Some(period) => {
            let period = parse_period(correlation_id, period)?;
            state.store().absences_in(period)
        }
        None => state.store().absences(),
    }
    .map_err(|err| failure(correlation_id, err))?;

    Ok(json_response(StatusCode::OK, absences))
}

async fn create_absence(
    State(state): State<AppState>,
    payload: Result<Json<Absence>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let absence = parse_body(correlation_id, payload)?;

    let saved = state
        .store()
        .save_absence(absence)
        .map_err(|err| failure(correlation_id, err))?;

    info!(correlation_id = %correlation_id, absence_id = %saved.id, "Absence saved");
    Ok(json_response(StatusCode::CREATED, saved))
}

async fn list_sites(State(state): State<AppState>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let sites = state
        .store()
        .sites()
        .map_err(|err| failure(correlation_id, err))?;
    Ok(json_response(StatusCode::OK, sites))
}

async fn create_site(
    State(state): State<AppState>,
    payload: Result<Json<Site>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let site = parse_body(correlation_id, payload)?;

    let saved = state
        .store()
        .save_site(site)
        .map_err(|err| failure(correlation_id, err))?;

    info!(correlation_id = %correlation_id, site_id = %saved.id, "Site saved");
    Ok(json_response(StatusCode::CREATED, saved))
}

async fn list_shifts(State(state): State<AppState>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let shifts = state
        .store()
        .shifts()
        .map_err(|err| failure(correlation_id, err))?;
    Ok(json_response(StatusCode::OK, shifts))
}

async fn create_shift(
    State(state): State<AppState>,
    payload: Result<Json<Shift>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let shift = parse_body(correlation_id, payload)?;

    let saved = state
        .store()
        .save_shift(shift)
        .map_err(|err| failure(correlation_id, err))?;

    info!(correlation_id = %correlation_id, shift_id = %saved.id, "Shift saved");
    Ok(json_response(StatusCode::CREATED, saved))
}

/// Handler for POST /reports.
///
/// Generates a report from the store's current records and persists it.
async fn create_report(
    State(state): State<AppState>,
    payload: Result<Json<GenerateReportRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = parse_body(correlation_id, payload)?;

    let snapshot = generate_report(
        state.store(),
        state.store(),
        state.config().config(),
        request.kind,
        request.period,
    )
    .map_err(|err| failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        report_id = %snapshot.id,
        "Report generated successfully"
    );

    Ok(json_response(StatusCode::CREATED, snapshot))
}

async fn list_reports(State(state): State<AppState>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let reports = state
        .store()
        .list_reports()
        .map_err(|err| failure(correlation_id, err))?;
    Ok(json_response(StatusCode::OK, reports))
}

fn parse_report_id(correlation_id: Uuid, id: &str) -> Result<Uuid, ApiErrorResponse> {
    Uuid::parse_str(id).map_err(|err| {
        warn!(correlation_id = %correlation_id, report_id = %id, "Invalid report id");
        ApiErrorResponse::bad_request(ApiError::with_details(
            "INVALID_REPORT_ID",
            format!("Invalid report id: {}", id),
            err.to_string(),
        ))
    })
}

async fn get_report(State(state): State<AppState>, Path(id): Path<String>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = parse_report_id(correlation_id, &id)?;

    let snapshot = state
        .store()
        .get_report(id)
        .map_err(|err| failure(correlation_id, err))?;
    Ok(json_response(StatusCode::OK, snapshot))
}

async fn delete_report(State(state): State<AppState>, Path(id): Path<String>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = parse_report_id(correlation_id, &id)?;

    state
        .store()
        .delete_report(id)
        .map_err(|err| failure(correlation_id, err))?;

    info!(correlation_id = %correlation_id, report_id = %id, "Report deleted");
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Handler for GET /dashboard.
async fn dashboard_handler(
    State(state): State<AppState>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let query = parse_query(correlation_id, query)?;

    let period = match query.period.as_deref() {
        Some(value) => parse_period(correlation_id, value)?,
        None => ReferencePeriod::of_date(Utc::now().date_naive()),
    };
    let weekday = match query.weekday.as_deref() {
        Some(name) => Some(parse_weekday(name).ok_or_else(|| {
            warn!(correlation_id = %correlation_id, weekday = %name, "Unknown weekday");
            ApiErrorResponse::bad_request(ApiError::validation_error(format!(
                "Unknown weekday: {}",
                name
            )))
        })?),
        None => None,
    };

    let overview =
        dashboard_for(&state, period, weekday).map_err(|err| failure(correlation_id, err))?;

    Ok(json_response(StatusCode::OK, overview))
}

fn dashboard_for(
    state: &AppState,
    period: ReferencePeriod,
    weekday: Option<Weekday>,
) -> EngineResult<DashboardOverview> {
    let store = state.store();
    build_dashboard(
        &store.employees()?,
        &store.absences()?,
        &store.sites()?,
        &store.shifts()?,
        period,
        weekday,
        state.config().rules(),
    )
}
