//! services/api/src/adapters/db/stretches.rs
//!
//! `StretchStore` implementation over the `stretches` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fitness_core::domain::{NewStretch, Stretch, StretchUpdate};
use fitness_core::ports::{PortError, PortResult, StretchStore};
use sqlx::FromRow;
use tracing::warn;
use uuid::Uuid;

use super::{unexpected, DbAdapter};

#[derive(FromRow)]
struct StretchRecord {
    id: Uuid,
    name: String,
    description: Option<String>,
    is_active: bool,
    image: String,
    created_at: DateTime<Utc>,
}

impl StretchRecord {
    fn into_domain(self) -> Stretch {
        Stretch {
            id: self.id,
            name: self.name,
            description: self.description,
            is_active: self.is_active,
            image: self.image,
            created_at: self.created_at,
        }
    }
}

#[async_trait]
impl StretchStore for DbAdapter {
    async fn list(&self) -> PortResult<Vec<Stretch>> {
        let records = sqlx::query_as::<_, StretchRecord>(
            "SELECT * FROM stretches ORDER BY created_at DESC",
        )
        .fetch_all(self.pool())
        .await
        .map_err(unexpected)?;

        Ok(records.into_iter().map(StretchRecord::into_domain).collect())
    }

    async fn insert(&self, new: NewStretch) -> PortResult<()> {
        sqlx::query(
            "INSERT INTO stretches (name, description, is_active, image) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.is_active)
        .bind(&new.image)
        .execute(self.pool())
        .await
        .map_err(unexpected)?;

        Ok(())
    }

    async fn update(&self, id: Uuid, update: StretchUpdate) -> PortResult<Stretch> {
        // RETURNING yields the post-update document; the table's own CHECK
        // constraints re-validate the fields.
        let record = sqlx::query_as::<_, StretchRecord>(
            "UPDATE stretches SET name = $1, description = $2, is_active = $3 \
             WHERE id = $4 RETURNING *",
        )
        .bind(&update.name)
        .bind(&update.description)
        .bind(update.is_active)
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(unexpected)?
        .ok_or_else(|| PortError::NotFound(format!("Stretch {id} not found")))?;

        Ok(record.into_domain())
    }

    async fn set_active(&self, id: Uuid, active: bool) -> PortResult<Stretch> {
        let record = sqlx::query_as::<_, StretchRecord>(
            "UPDATE stretches SET is_active = $1 WHERE id = $2 RETURNING *",
        )
        .bind(active)
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(unexpected)?
        .ok_or_else(|| PortError::NotFound(format!("Stretch {id} not found")))?;

        Ok(record.into_domain())
    }

    async fn delete(&self, id: Uuid) -> PortResult<u64> {
        // Capture the image key before the row goes away.
        let image: Option<String> =
            sqlx::query_scalar("SELECT image FROM stretches WHERE id = $1")
                .bind(id)
                .fetch_optional(self.pool())
                .await
                .map_err(unexpected)?;

        let Some(image) = image else {
            return Ok(0);
        };

        let result = sqlx::query("DELETE FROM stretches WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(unexpected)?;
        let count = result.rows_affected();

        // Best-effort blob cleanup: failure is logged, never propagated, so
        // it cannot roll back or fail the record deletion.
        if count > 0 && !image.is_empty() {
            if let Err(e) = self.blobs().remove(&image).await {
                warn!(stretch_id = %id, key = %image, error = %e, "stretch image cleanup failed");
            }
        }

        Ok(count)
    }
}
