//! HTTP request handlers for the Attendance Reconciliation Engine API.
//!
//! This module contains the handler functions for all endpoints. Handlers
//! stay thin: they resolve the threshold once per request and delegate the
//! actual reconciliation to [`crate::engine`], so the punch path and the
//! dashboard path share one policy.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::{compute_today_statuses, evaluate_punch_for_lateness, record_late_arrival};
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Punch, Shift};
use crate::reconciliation::{LatenessThreshold, civil_day_window};
use crate::store::{AttendanceStore, MemoryStoreError};

use super::request::{
    DashboardQuery, NewEmployeeRequest, NewShiftsRequest, PunchRequest, ShiftsQuery,
};
use super::response::{
    ApiError, ApiErrorResponse, DashboardResponse, PunchResponse, ShiftsCreatedResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/punches", post(punch_handler))
        .route("/dashboard/today", get(dashboard_handler))
        .route("/alerts", get(alerts_handler))
        .route("/employees", get(list_employees_handler).post(create_employee_handler))
        .route("/shifts", get(list_shifts_handler).post(create_shifts_handler))
        .with_state(state)
}

fn engine_error(error: EngineError) -> ApiErrorResponse {
    error.into()
}

/// Handler for POST /punches.
///
/// Records the punch, evaluates it for lateness, and emits an alert when
/// the clock-in is late. The punch row is the unit of idempotency: a
/// retried alert emission for the same punch never creates a second alert.
async fn punch_handler(
    State(state): State<AppState>,
    payload: Result<Json<PunchRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation id for request tracking
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
            return ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response();
        }
    };

    match process_punch(&state, request, correlation_id).await {
        Ok(response) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(response),
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Punch processing failed"
            );
            engine_error(err).into_response()
        }
    }
}

/// Records a punch and runs the lateness check against today's schedule.
async fn process_punch(
    state: &AppState,
    request: PunchRequest,
    correlation_id: Uuid,
) -> EngineResult<PunchResponse> {
    let store = state.store();

    let employee = store
        .get_employee(request.employee_id)
        .await
        .map_err(EngineError::storage)?
        .ok_or(EngineError::EmployeeNotFound {
            id: request.employee_id,
        })?;

    let punch = Punch {
        id: Uuid::new_v4(),
        employee_id: employee.id,
        kind: request.kind,
        at: request.at.unwrap_or_else(Utc::now),
    };
    store
        .insert_punch(punch.clone())
        .await
        .map_err(EngineError::storage)?;

    let threshold = state.config().default_threshold();
    let evaluation =
        evaluate_punch_for_lateness(store, &punch, threshold, state.config().utc_offset()).await?;

    let mut alert_created = false;
    if evaluation.late {
        // A late evaluation always carries the matched shift and the delay.
        if let (Some(shift), Some(minutes_late)) =
            (&evaluation.matched_shift, evaluation.minutes_late)
        {
            let outcome =
                record_late_arrival(store, shift, &punch, minutes_late, threshold).await?;
            alert_created = outcome.created();
        }
    }

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        punch_id = %punch.id,
        kind = %punch.kind,
        late = evaluation.late,
        alert_created,
        "Punch recorded"
    );

    Ok(PunchResponse {
        punch_id: punch.id,
        recorded_at: punch.at,
        late: evaluation.late,
        minutes_late: evaluation.minutes_late,
        alert_created,
    })
}

/// Handler for GET /dashboard/today.
async fn dashboard_handler(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, ApiErrorResponse> {
    let threshold = match query.threshold {
        Some(minutes) => LatenessThreshold::new(minutes).map_err(engine_error)?,
        None => state.config().default_threshold(),
    };

    let store = state.store();
    let employee_ids: Vec<Uuid> = store
        .list_employees()
        .await
        .map_err(EngineError::storage)
        .map_err(engine_error)?
        .into_iter()
        .map(|e| e.id)
        .collect();

    let now = Utc::now();
    let rows = compute_today_statuses(
        store,
        &employee_ids,
        now,
        threshold,
        state.config().utc_offset(),
        query.boutique.as_deref(),
    )
    .await
    .map_err(engine_error)?;

    let mut boutiques: Vec<String> = rows.iter().filter_map(|r| r.boutique.clone()).collect();
    boutiques.sort();
    boutiques.dedup();

    Ok(Json(DashboardResponse {
        boutiques,
        window: civil_day_window(now, state.config().utc_offset()),
        threshold_minutes: threshold.minutes(),
        rows,
    }))
}

/// Handler for GET /alerts. Newest first, capped at 100 rows.
async fn alerts_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let mut alerts = state
        .store()
        .list_alerts()
        .await
        .map_err(EngineError::storage)
        .map_err(engine_error)?;
    alerts.truncate(100);
    Ok(Json(alerts))
}

/// Handler for GET /employees.
async fn list_employees_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let employees = state
        .store()
        .list_employees()
        .await
        .map_err(EngineError::storage)
        .map_err(engine_error)?;
    Ok(Json(employees))
}

/// Handler for POST /employees.
async fn create_employee_handler(
    State(state): State<AppState>,
    Json(request): Json<NewEmployeeRequest>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let employee = Employee {
        id: Uuid::new_v4(),
        name: request.name,
        email: request.email,
        active: true,
    };

    match state.store().insert_employee(employee.clone()).await {
        Ok(()) => Ok((StatusCode::CREATED, Json(employee))),
        Err(MemoryStoreError::EmailTaken { email }) => Err(ApiErrorResponse::new(
            StatusCode::CONFLICT,
            ApiError::new("EMAIL_IN_USE", format!("Email already in use: {}", email)),
        )),
        Err(err) => Err(engine_error(EngineError::storage(err))),
    }
}

/// Handler for GET /shifts.
async fn list_shifts_handler(
    State(state): State<AppState>,
    Query(query): Query<ShiftsQuery>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let shifts = state
        .store()
        .shifts_starting_between(query.from, query.to)
        .await
        .map_err(EngineError::storage)
        .map_err(engine_error)?;
    Ok(Json(shifts))
}

/// Handler for POST /shifts.
///
/// Accepts a weekly-planning batch. Items whose email matches no employee
/// are skipped and reported back; a batch where nothing matched is a 400.
async fn create_shifts_handler(
    State(state): State<AppState>,
    Json(request): Json<NewShiftsRequest>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let store = state.store();
    let mut shifts = Vec::new();
    let mut skipped_emails = Vec::new();

    for item in request.items {
        let employee = store
            .find_employee_by_email(&item.email)
            .await
            .map_err(EngineError::storage)
            .map_err(engine_error)?;
        let Some(employee) = employee else {
            skipped_emails.push(item.email);
            continue;
        };

        let shift = Shift {
            id: Uuid::new_v4(),
            employee_id: employee.id,
            boutique: item.boutique,
            start_at: item.start_at,
            end_at: item.end_at,
            published: item.published,
        };
        shift.validate().map_err(engine_error)?;
        shifts.push(shift);
    }

    if shifts.is_empty() {
        return Err(ApiErrorResponse::new(
            StatusCode::BAD_REQUEST,
            ApiError::new("NO_MATCHING_EMPLOYEE", "No item matched a known employee"),
        ));
    }

    let created = shifts.len();
    for shift in shifts {
        store
            .insert_shift(shift)
            .await
            .map_err(EngineError::storage)
            .map_err(engine_error)?;
    }

    Ok((
        StatusCode::CREATED,
        Json(ShiftsCreatedResponse {
            created,
            skipped_emails,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config =
            ConfigLoader::load("./config/attendance.yaml").expect("Failed to load config");
        AppState::new(config)
    }

    async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json");
        let request = match body {
            Some(value) => builder.body(Body::from(value.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_punch_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/punches")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_punch_unknown_employee_returns_404() {
        let router = create_router(create_test_state());

        let (status, body) = send(
            router,
            "POST",
            "/punches",
            Some(json!({
                "employee_id": Uuid::new_v4(),
                "kind": "ENTREE"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_create_employee_then_duplicate_conflicts() {
        let state = create_test_state();

        let body = json!({ "name": "Anna", "email": "anna@example.com" });
        let (status, _) = send(
            create_router(state.clone()),
            "POST",
            "/employees",
            Some(body.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, error) =
            send(create_router(state), "POST", "/employees", Some(body)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(error["code"], "EMAIL_IN_USE");
    }

    #[tokio::test]
    async fn test_dashboard_rejects_negative_threshold() {
        let router = create_router(create_test_state());

        let (status, body) = send(router, "GET", "/dashboard/today?threshold=-1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_THRESHOLD");
    }

    #[tokio::test]
    async fn test_dashboard_empty_day() {
        let router = create_router(create_test_state());

        let (status, body) = send(router, "GET", "/dashboard/today", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rows"], json!([]));
        assert_eq!(body["threshold_minutes"], 5);
    }

    #[tokio::test]
    async fn test_create_shifts_without_known_employee_returns_400() {
        let router = create_router(create_test_state());

        let (status, body) = send(
            router,
            "POST",
            "/shifts",
            Some(json!({
                "items": [{
                    "email": "nobody@example.com",
                    "start_at": "2026-03-02T08:00:00Z",
                    "end_at": "2026-03-02T16:00:00Z"
                }]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "NO_MATCHING_EMPLOYEE");
    }

    #[tokio::test]
    async fn test_create_shifts_rejects_reversed_bounds() {
        let state = create_test_state();
        send(
            create_router(state.clone()),
            "POST",
            "/employees",
            Some(json!({ "name": "Anna", "email": "anna@example.com" })),
        )
        .await;

        let (status, body) = send(
            create_router(state),
            "POST",
            "/shifts",
            Some(json!({
                "items": [{
                    "email": "anna@example.com",
                    "start_at": "2026-03-02T16:00:00Z",
                    "end_at": "2026-03-02T08:00:00Z"
                }]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_SHIFT");
    }
}
