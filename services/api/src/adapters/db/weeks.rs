//! services/api/src/adapters/db/weeks.rs
//!
//! `WeekStore` implementation over the `weeks` table, including the
//! challenge-scoped listing that joins the parent's display fields.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fitness_core::domain::{ChallengeRef, NewWeek, Week, WeekWithChallenge};
use fitness_core::ports::{PortError, PortResult, WeekStore};
use sqlx::FromRow;
use uuid::Uuid;

use super::{unexpected, DbAdapter};

#[derive(FromRow)]
struct WeekRecord {
    id: Uuid,
    challenge_id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
}

impl WeekRecord {
    fn into_domain(self) -> Week {
        Week {
            id: self.id,
            challenge_id: self.challenge_id,
            name: self.name,
            created_at: self.created_at,
        }
    }
}

/// A week row left-joined with its parent challenge. The challenge columns
/// are nullable because `challenge_id` existence is not enforced at write time.
#[derive(FromRow)]
struct WeekJoinRecord {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    challenge_id: Option<Uuid>,
    challenge_name: Option<String>,
}

impl WeekJoinRecord {
    fn into_domain(self) -> WeekWithChallenge {
        let challenge = match (self.challenge_id, self.challenge_name) {
            (Some(id), Some(name)) => Some(ChallengeRef { id, name }),
            _ => None,
        };
        WeekWithChallenge {
            id: self.id,
            name: self.name,
            challenge,
            created_at: self.created_at,
        }
    }
}

#[async_trait]
impl WeekStore for DbAdapter {
    async fn list(&self) -> PortResult<Vec<Week>> {
        let records = sqlx::query_as::<_, WeekRecord>(
            "SELECT * FROM weeks ORDER BY created_at DESC",
        )
        .fetch_all(self.pool())
        .await
        .map_err(unexpected)?;

        Ok(records.into_iter().map(WeekRecord::into_domain).collect())
    }

    async fn list_by_challenge(&self, challenge_id: Uuid) -> PortResult<Vec<WeekWithChallenge>> {
        let records = sqlx::query_as::<_, WeekJoinRecord>(
            "SELECT w.id, w.name, w.created_at, c.id AS challenge_id, c.name AS challenge_name \
             FROM weeks w \
             LEFT JOIN challenges c ON c.id = w.challenge_id \
             WHERE w.challenge_id = $1 \
             ORDER BY w.created_at DESC",
        )
        .bind(challenge_id)
        .fetch_all(self.pool())
        .await
        .map_err(unexpected)?;

        Ok(records.into_iter().map(WeekJoinRecord::into_domain).collect())
    }

    async fn insert(&self, new: NewWeek) -> PortResult<()> {
        sqlx::query("INSERT INTO weeks (challenge_id, name) VALUES ($1, $2)")
            .bind(new.challenge_id)
            .bind(&new.name)
            .execute(self.pool())
            .await
            .map_err(unexpected)?;

        Ok(())
    }

    async fn rename(&self, id: Uuid, name: &str) -> PortResult<Week> {
        let record = sqlx::query_as::<_, WeekRecord>(
            "UPDATE weeks SET name = $1 WHERE id = $2 RETURNING *",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(unexpected)?
        .ok_or_else(|| PortError::NotFound(format!("Week {id} not found")))?;

        Ok(record.into_domain())
    }

    async fn delete(&self, id: Uuid) -> PortResult<u64> {
        let result = sqlx::query("DELETE FROM weeks WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(unexpected)?;

        Ok(result.rows_affected())
    }
}
