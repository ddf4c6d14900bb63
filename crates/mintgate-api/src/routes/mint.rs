//! Mint endpoints: preview, submit, session status, reset

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use nft_drop::{build_plan, evaluate, fetch_snapshot, MintChain, SessionError, Verdict};

use crate::dto::{ApiError, MintPreviewRequest, MintPreviewResponse, MintRequest, SessionResponse};
use crate::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

/// Create mint routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/preview", post(preview))
        .route("/", post(request_mint))
        .route("/status", get(status))
        .route("/reset", post(reset))
}

/// POST /mint/preview - Evaluate eligibility and price without submitting
pub async fn preview(
    State(state): State<AppState>,
    Json(request): Json<MintPreviewRequest>,
) -> ApiResult<MintPreviewResponse> {
    if request.quantity == 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::bad_request("Quantity must be at least 1")),
        ));
    }

    let caller = state.chain().caller().ok_or_else(|| {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiError::new(
                "no_caller",
                "No minting account configured on this endpoint",
            )),
        )
    })?;

    let snapshot = fetch_snapshot(state.chain(), caller).await.map_err(|e| {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiError::new("chain_error", e.to_string())),
        )
    })?;

    match evaluate(&snapshot, request.quantity) {
        Verdict::Denied(reason) => Ok(Json(MintPreviewResponse::denied(
            reason.error_code(),
            reason.to_string(),
        ))),
        Verdict::Allowed(allowance) => {
            let plan =
                build_plan(&allowance, snapshot.caller, request.quantity).map_err(|e| {
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        Json(ApiError::new("value_overflow", e.to_string())),
                    )
                })?;

            Ok(Json(MintPreviewResponse {
                can_execute: true,
                uses_presale: allowance.uses_presale,
                price_per_unit_wei: allowance.price_per_unit.to_string(),
                total_wei: plan.value.to_string(),
                error_code: None,
                error: None,
            }))
        }
    }
}

/// POST /mint - Run one mint attempt to its terminal phase
pub async fn request_mint(
    State(state): State<AppState>,
    Json(request): Json<MintRequest>,
) -> ApiResult<SessionResponse> {
    let outcome = state
        .session()
        .request_mint(request.quantity)
        .await
        .map_err(session_error)?;

    Ok(Json(SessionResponse::from(outcome)))
}

/// GET /mint/status - Current phase of the session's mint attempt
pub async fn status(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(SessionResponse::from(state.session().phase().await))
}

/// POST /mint/reset - Clear a terminal phase back to idle
pub async fn reset(State(state): State<AppState>) -> ApiResult<SessionResponse> {
    let phase = state.session().reset().await.map_err(session_error)?;
    Ok(Json(SessionResponse::from(phase)))
}

fn session_error(error: SessionError) -> (StatusCode, Json<ApiError>) {
    let (status, code) = match error {
        SessionError::InvalidQuantity => (StatusCode::BAD_REQUEST, "invalid_quantity"),
        SessionError::AttemptInProgress => (StatusCode::CONFLICT, "attempt_in_progress"),
        SessionError::NotIdle => (StatusCode::CONFLICT, "session_not_idle"),
        SessionError::ResetWhileSubmitting => (StatusCode::CONFLICT, "attempt_in_progress"),
    };
    (status, Json(ApiError::new(code, error.to_string())))
}
