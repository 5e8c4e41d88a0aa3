//! services/api/src/adapters/db/custom_plans.rs
//!
//! `CustomPlanStore` implementation. Plans are only ever read per user, with
//! the exercise count aggregated in a single query rather than one count
//! query per plan.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fitness_core::domain::CustomPlanSummary;
use fitness_core::ports::{CustomPlanStore, PortResult};
use sqlx::FromRow;
use uuid::Uuid;

use super::{unexpected, DbAdapter};

#[derive(FromRow)]
struct CustomPlanRecord {
    id: Uuid,
    user_id: Uuid,
    name: String,
    exercise_count: i64,
    created_at: DateTime<Utc>,
}

impl CustomPlanRecord {
    fn into_domain(self) -> CustomPlanSummary {
        CustomPlanSummary {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            exercise_count: self.exercise_count,
            created_at: self.created_at,
        }
    }
}

#[async_trait]
impl CustomPlanStore for DbAdapter {
    async fn list_for_user(&self, user_id: Uuid) -> PortResult<Vec<CustomPlanSummary>> {
        let records = sqlx::query_as::<_, CustomPlanRecord>(
            "SELECT p.id, p.user_id, p.name, p.created_at, \
                    COUNT(e.id) AS exercise_count \
             FROM custom_plans p \
             LEFT JOIN custom_plan_exercises e ON e.custom_plan_id = p.id \
             WHERE p.user_id = $1 \
             GROUP BY p.id \
             ORDER BY p.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await
        .map_err(unexpected)?;

        Ok(records
            .into_iter()
            .map(CustomPlanRecord::into_domain)
            .collect())
    }
}
