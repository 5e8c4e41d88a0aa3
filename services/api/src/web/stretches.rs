//! services/api/src/web/stretches.rs
//!
//! Axum handlers for the stretches endpoints.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::{DateTime, Utc};
use fitness_core::domain::{NewStretch, Stretch, StretchUpdate};
use fitness_core::ports::BlobStore;
use fitness_core::validate::{parse_id, require_name};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::web::error::Failure;
use crate::web::payload;
use crate::web::state::AppState;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

/// A stretch as returned to clients, with the stored image key resolved to a
/// public URL.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StretchDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    /// Public image URL, or empty when no image was uploaded.
    pub image: String,
    pub created_at: DateTime<Utc>,
}

impl StretchDto {
    fn from_domain(s: Stretch, blobs: &dyn BlobStore) -> Self {
        let image = if s.image.is_empty() {
            String::new()
        } else {
            blobs.url(&s.image)
        };
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            is_active: s.is_active,
            image,
            created_at: s.created_at,
        }
    }
}

/// The list response; `message` is set only for the empty case.
#[derive(Serialize, ToSchema)]
pub struct StretchListResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub stretches: Vec<StretchDto>,
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub message: String,
    pub deleted_count: u64,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStretchRequest {
    #[serde(default)]
    pub stretches_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Accepts a boolean or a 0/1 number; absent means active.
    #[serde(default, deserialize_with = "payload::opt_flag")]
    pub is_active: Option<bool>,
}

#[derive(Deserialize, ToSchema)]
pub struct ChangeStatusRequest {
    pub id: String,
    #[serde(deserialize_with = "payload::flag")]
    pub status: bool,
}

//=========================================================================================
// Handlers
//=========================================================================================

/// GET /stretches - all stretches, newest first.
#[utoipa::path(
    get,
    path = "/stretches",
    responses(
        (status = 200, description = "List of all stretches", body = StretchListResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_all_stretches(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, Failure> {
    let stretches = state.stretches.list().await?;
    let stretches: Vec<StretchDto> = stretches
        .into_iter()
        .map(|s| StretchDto::from_domain(s, state.blobs.as_ref()))
        .collect();

    let message = if stretches.is_empty() {
        Some("No Stretches Added!".to_string())
    } else {
        None
    };
    Ok(Json(StretchListResponse { message, stretches }))
}

/// POST /addstretches - create a stretch from a multipart form.
///
/// Text parts: `stretchesName` (required), `description`, `isActive`
/// (bool or 0/1, default active). Optional file part `image`.
#[utoipa::path(
    post,
    path = "/addstretches",
    request_body(content_type = "multipart/form-data", description = "Stretch fields plus optional image file."),
    responses(
        (status = 201, description = "Stretch created", body = MessageResponse),
        (status = 400, description = "Missing stretch name"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn add_stretches(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Failure> {
    let mut name: Option<String> = None;
    let mut description: Option<String> = None;
    let mut is_active = true;
    let mut image = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Failure::Validation(format!("Malformed form data: {e}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "stretchesName" => {
                name = Some(read_text(field).await?);
            }
            "description" => {
                description = Some(read_text(field).await?);
            }
            "isActive" => {
                let raw = read_text(field).await?;
                is_active = payload::parse_flag(&raw)
                    .ok_or_else(|| Failure::Validation("Invalid isActive value".to_string()))?;
            }
            "image" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| Failure::Validation(format!("Malformed form data: {e}")))?;
                image = state.blobs.store(&file_name, &data).await?;
            }
            _ => {}
        }
    }

    let name = require_name("Stretch", name.as_deref())?.to_string();

    state
        .stretches
        .insert(NewStretch {
            name,
            description,
            is_active,
            image,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Stretch Added successfully!".to_string(),
        }),
    ))
}

/// POST /updatestretches/{id} - update name/description/active flag.
#[utoipa::path(
    post,
    path = "/updatestretches/{id}",
    request_body = UpdateStretchRequest,
    params(("id" = String, Path, description = "Stretch ID")),
    responses(
        (status = 200, description = "The updated stretch", body = StretchDto),
        (status = 400, description = "Missing name or invalid ID"),
        (status = 404, description = "Stretch not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_stretches(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateStretchRequest>,
) -> Result<impl IntoResponse, Failure> {
    let name = require_name("Stretch", body.stretches_name.as_deref())?.to_string();
    let id = parse_id("Stretch", &id)?;

    let updated = state
        .stretches
        .update(
            id,
            StretchUpdate {
                name,
                description: body.description,
                is_active: body.is_active.unwrap_or(true),
            },
        )
        .await
        .map_err(Failure::from_port("Stretch not found"))?;

    Ok(Json(StretchDto::from_domain(updated, state.blobs.as_ref())))
}

/// DELETE /stretches/{id} - delete a stretch plus best-effort image cleanup.
#[utoipa::path(
    delete,
    path = "/stretches/{id}",
    params(("id" = String, Path, description = "Stretch ID")),
    responses(
        (status = 200, description = "Stretch deleted", body = DeleteResponse),
        (status = 400, description = "Invalid stretch ID"),
        (status = 404, description = "Stretch not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_stretches(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Failure> {
    let id = parse_id("Stretch", &id)?;

    let deleted_count = state.stretches.delete(id).await?;
    if deleted_count == 0 {
        return Err(Failure::NotFound("Stretch not found".to_string()));
    }

    Ok(Json(DeleteResponse {
        message: "Stretch deleted successfully".to_string(),
        deleted_count,
    }))
}

/// POST /changeStretchesStatus - toggle the active flag on one stretch.
#[utoipa::path(
    post,
    path = "/changeStretchesStatus",
    request_body = ChangeStatusRequest,
    responses(
        (status = 200, description = "The updated stretch", body = StretchDto),
        (status = 400, description = "Invalid stretch ID"),
        (status = 404, description = "Stretch not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn change_stretches_status(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChangeStatusRequest>,
) -> Result<impl IntoResponse, Failure> {
    let id = parse_id("Stretch", &body.id)?;

    let updated = state
        .stretches
        .set_active(id, body.status)
        .await
        .map_err(Failure::from_port("Stretch not found"))?;

    Ok(Json(StretchDto::from_domain(updated, state.blobs.as_ref())))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, Failure> {
    field
        .text()
        .await
        .map_err(|e| Failure::Validation(format!("Malformed form data: {e}")))
}
