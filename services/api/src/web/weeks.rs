//! services/api/src/web/weeks.rs
//!
//! Axum handlers for the week endpoints, including the challenge-scoped
//! listing with the parent's display fields joined in.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::{DateTime, Utc};
use fitness_core::domain::{NewWeek, Week, WeekWithChallenge};
use fitness_core::validate::{parse_id, require_name};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::web::error::Failure;
use crate::web::state::AppState;
use crate::web::stretches::{DeleteResponse, MessageResponse};

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeekDto {
    pub id: Uuid,
    pub challenge_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Week> for WeekDto {
    fn from(w: Week) -> Self {
        Self {
            id: w.id,
            challenge_id: w.challenge_id,
            name: w.name,
            created_at: w.created_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ChallengeRefDto {
    pub id: Uuid,
    pub name: String,
}

/// A week with its parent challenge joined in; `challenge` is null when the
/// referenced challenge no longer exists.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeekWithChallengeDto {
    pub id: Uuid,
    pub name: String,
    pub challenge: Option<ChallengeRefDto>,
    pub created_at: DateTime<Utc>,
}

impl From<WeekWithChallenge> for WeekWithChallengeDto {
    fn from(w: WeekWithChallenge) -> Self {
        Self {
            id: w.id,
            name: w.name,
            challenge: w.challenge.map(|c| ChallengeRefDto {
                id: c.id,
                name: c.name,
            }),
            created_at: w.created_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct WeekListResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub weeks: Vec<WeekDto>,
}

#[derive(Serialize, ToSchema)]
pub struct JoinedWeekListResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub weeks: Vec<WeekWithChallengeDto>,
}

/// Field names follow the legacy clients: `challenges_id` and `weekName`.
#[derive(Deserialize, ToSchema)]
pub struct AddWeekRequest {
    #[serde(default)]
    pub challenges_id: Option<String>,
    #[serde(default, rename = "weekName")]
    pub week_name: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateWeekRequest {
    #[serde(default, rename = "weekName")]
    pub week_name: Option<String>,
}

//=========================================================================================
// Handlers
//=========================================================================================

/// POST /addWeek - create a week under a challenge.
///
/// The challenge identifier must be well-formed but its existence is not
/// verified at write time.
#[utoipa::path(
    post,
    path = "/addWeek",
    request_body = AddWeekRequest,
    responses(
        (status = 201, description = "Week created", body = MessageResponse),
        (status = 400, description = "Missing week name or invalid challenge ID"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn add_week(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AddWeekRequest>,
) -> Result<impl IntoResponse, Failure> {
    let name = require_name("Week", body.week_name.as_deref())?.to_string();
    let challenge_id = parse_id("Challenges", body.challenges_id.as_deref().unwrap_or(""))?;

    state.weeks.insert(NewWeek { challenge_id, name }).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Week Added successfully!".to_string(),
        }),
    ))
}

/// GET /getWeeks - all weeks, newest first.
#[utoipa::path(
    get,
    path = "/getWeeks",
    responses(
        (status = 200, description = "List of all weeks", body = WeekListResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_all_weeks(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, Failure> {
    let weeks = state.weeks.list().await?;
    let weeks: Vec<WeekDto> = weeks.into_iter().map(WeekDto::from).collect();

    let message = if weeks.is_empty() {
        Some("No Weeks Added!".to_string())
    } else {
        None
    };
    Ok(Json(WeekListResponse { message, weeks }))
}

/// GET /getWeeksByChallengesId/{id} - a challenge's weeks with the parent's
/// display fields joined in. An unknown challenge yields an empty list.
#[utoipa::path(
    get,
    path = "/getWeeksByChallengesId/{id}",
    params(("id" = String, Path, description = "Challenge ID")),
    responses(
        (status = 200, description = "The challenge's weeks", body = JoinedWeekListResponse),
        (status = 400, description = "Invalid challenge ID"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_weeks_by_challenge(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Failure> {
    let challenge_id = parse_id("Challenges", &id)?;

    let weeks = state.weeks.list_by_challenge(challenge_id).await?;
    let weeks: Vec<WeekWithChallengeDto> =
        weeks.into_iter().map(WeekWithChallengeDto::from).collect();

    let message = if weeks.is_empty() {
        Some("No Weeks Added!".to_string())
    } else {
        None
    };
    Ok(Json(JoinedWeekListResponse { message, weeks }))
}

/// POST /updateWeek/{id} - rename a week.
#[utoipa::path(
    post,
    path = "/updateWeek/{id}",
    request_body = UpdateWeekRequest,
    params(("id" = String, Path, description = "Week ID")),
    responses(
        (status = 200, description = "The updated week", body = WeekDto),
        (status = 400, description = "Missing name or invalid ID"),
        (status = 404, description = "Week not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_week(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateWeekRequest>,
) -> Result<impl IntoResponse, Failure> {
    let name = require_name("Week", body.week_name.as_deref())?.to_string();
    let id = parse_id("Week", &id)?;

    let updated = state
        .weeks
        .rename(id, &name)
        .await
        .map_err(Failure::from_port("Week not found"))?;

    Ok(Json(WeekDto::from(updated)))
}

/// DELETE /deleteWeek/{id} - delete a week.
#[utoipa::path(
    delete,
    path = "/deleteWeek/{id}",
    params(("id" = String, Path, description = "Week ID")),
    responses(
        (status = 200, description = "Week deleted", body = DeleteResponse),
        (status = 400, description = "Invalid week ID"),
        (status = 404, description = "Week not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_week(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Failure> {
    let id = parse_id("Week", &id)?;

    let deleted_count = state.weeks.delete(id).await?;
    if deleted_count == 0 {
        return Err(Failure::NotFound("Week not found".to_string()));
    }

    Ok(Json(DeleteResponse {
        message: "Week deleted successfully".to_string(),
        deleted_count,
    }))
}
