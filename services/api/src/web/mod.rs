//! services/api/src/web/mod.rs
//!
//! The web layer: route table, shared state, handlers per entity kind, the
//! error-to-response translation layer, and the master OpenAPI definition.

pub mod custom_plans;
pub mod error;
pub mod payload;
pub mod state;
pub mod stretches;
pub mod weeks;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use utoipa::OpenApi;

use state::AppState;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        stretches::get_all_stretches,
        stretches::add_stretches,
        stretches::update_stretches,
        stretches::delete_stretches,
        stretches::change_stretches_status,
        weeks::add_week,
        weeks::get_all_weeks,
        weeks::get_weeks_by_challenge,
        weeks::update_week,
        weeks::delete_week,
        custom_plans::get_custom_plan,
    ),
    components(
        schemas(
            stretches::StretchDto,
            stretches::StretchListResponse,
            stretches::MessageResponse,
            stretches::DeleteResponse,
            stretches::UpdateStretchRequest,
            stretches::ChangeStatusRequest,
            weeks::WeekDto,
            weeks::ChallengeRefDto,
            weeks::WeekWithChallengeDto,
            weeks::WeekListResponse,
            weeks::JoinedWeekListResponse,
            weeks::AddWeekRequest,
            weeks::UpdateWeekRequest,
            custom_plans::CustomPlanRequest,
            custom_plans::CustomPlanDto,
            custom_plans::CustomPlanData,
            custom_plans::CustomPlanEnvelope,
        )
    ),
    tags(
        (name = "Fitness API", description = "CRUD endpoints for stretches, weeks and custom workout plans.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Router
//=========================================================================================

/// Builds the route table over a shared `AppState`. Used by the binary and
/// by the integration tests.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/stretches", get(stretches::get_all_stretches))
        .route("/addstretches", post(stretches::add_stretches))
        .route("/updatestretches/{id}", post(stretches::update_stretches))
        .route("/stretches/{id}", delete(stretches::delete_stretches))
        .route(
            "/changeStretchesStatus",
            post(stretches::change_stretches_status),
        )
        .route("/addWeek", post(weeks::add_week))
        .route("/getWeeks", get(weeks::get_all_weeks))
        .route(
            "/getWeeksByChallengesId/{id}",
            get(weeks::get_weeks_by_challenge),
        )
        .route("/updateWeek/{id}", post(weeks::update_week))
        .route("/deleteWeek/{id}", delete(weeks::delete_week))
        .route("/getcustomplan", post(custom_plans::get_custom_plan))
        .with_state(state)
}
