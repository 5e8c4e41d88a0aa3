//! services/api/src/web/custom_plans.rs
//!
//! The session-gated custom-plan listing for the mobile app. This endpoint
//! keeps the legacy `{data: {success, customplan, error}}` envelope on every
//! path, success or failure, so the response translation happens locally
//! instead of through `web::error::Failure`.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use fitness_core::domain::CustomPlanSummary;
use fitness_core::validate::parse_id;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::web::state::AppState;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

#[derive(Deserialize, ToSchema)]
pub struct CustomPlanRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub session: Option<String>,
    #[serde(default)]
    pub device_id: Option<String>,
}

/// A custom plan annotated with how many exercises it contains. The
/// `totalexercise` key is part of the legacy mobile contract.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomPlanDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[serde(rename = "totalexercise")]
    pub total_exercise: i64,
    pub created_at: DateTime<Utc>,
}

impl From<CustomPlanSummary> for CustomPlanDto {
    fn from(p: CustomPlanSummary) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            name: p.name,
            total_exercise: p.exercise_count,
            created_at: p.created_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct CustomPlanData {
    pub success: u8,
    pub customplan: Vec<CustomPlanDto>,
    pub error: String,
}

#[derive(Serialize, ToSchema)]
pub struct CustomPlanEnvelope {
    pub data: CustomPlanData,
}

fn envelope(status: StatusCode, success: u8, customplan: Vec<CustomPlanDto>, error: &str) -> Response {
    (
        status,
        Json(CustomPlanEnvelope {
            data: CustomPlanData {
                success,
                customplan,
                error: error.to_string(),
            },
        }),
    )
        .into_response()
}

//=========================================================================================
// Handler
//=========================================================================================

/// POST /getcustomplan - a user's custom plans, gated on a session check.
///
/// A failed session check is a normal negative outcome (401, "Please login
/// first"), never a server error. Zero plans is a success with an empty list.
#[utoipa::path(
    post,
    path = "/getcustomplan",
    request_body = CustomPlanRequest,
    responses(
        (status = 200, description = "The user's plans", body = CustomPlanEnvelope),
        (status = 400, description = "Missing credential fields or invalid user ID", body = CustomPlanEnvelope),
        (status = 401, description = "Session check failed", body = CustomPlanEnvelope),
        (status = 500, description = "Internal server error", body = CustomPlanEnvelope)
    )
)]
pub async fn get_custom_plan(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CustomPlanRequest>,
) -> Response {
    let (user_id_raw, session, device_id) = match (
        body.user_id.as_deref().filter(|s| !s.is_empty()),
        body.session.as_deref().filter(|s| !s.is_empty()),
        body.device_id.as_deref().filter(|s| !s.is_empty()),
    ) {
        (Some(u), Some(s), Some(d)) => (u, s, d),
        _ => return envelope(StatusCode::BAD_REQUEST, 0, Vec::new(), "Variable not set"),
    };

    let user_id = match parse_id("User", user_id_raw) {
        Ok(id) => id,
        Err(e) => return envelope(StatusCode::BAD_REQUEST, 0, Vec::new(), &e.0),
    };

    let logged_in = match state.sessions.verify(user_id, session, device_id).await {
        Ok(ok) => ok,
        Err(e) => {
            error!(error = %e, "session check failed");
            return envelope(
                StatusCode::INTERNAL_SERVER_ERROR,
                0,
                Vec::new(),
                "Server Error",
            );
        }
    };
    if !logged_in {
        return envelope(
            StatusCode::UNAUTHORIZED,
            0,
            Vec::new(),
            "Please login first",
        );
    }

    match state.plans.list_for_user(user_id).await {
        Ok(plans) => {
            let plans: Vec<CustomPlanDto> = plans.into_iter().map(CustomPlanDto::from).collect();
            envelope(StatusCode::OK, 1, plans, "")
        }
        Err(e) => {
            error!(error = %e, "custom plan listing failed");
            envelope(
                StatusCode::INTERNAL_SERVER_ERROR,
                0,
                Vec::new(),
                "Server Error",
            )
        }
    }
}
