//! services/api/src/adapters/session.rs
//!
//! Database-backed implementation of the `SessionCheck` port. A credential
//! triple passes when a matching `user_sessions` row exists; a miss is a
//! normal `false`, never an error.

use async_trait::async_trait;
use fitness_core::ports::{PortError, PortResult, SessionCheck};
use sqlx::PgPool;
use uuid::Uuid;

/// A session checker that validates user/session/device triples against the
/// `user_sessions` table.
#[derive(Clone)]
pub struct DbSessionCheck {
    pool: PgPool,
}

impl DbSessionCheck {
    /// Creates a new `DbSessionCheck`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionCheck for DbSessionCheck {
    async fn verify(
        &self,
        user_id: Uuid,
        session_token: &str,
        device_id: &str,
    ) -> PortResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS( \
                 SELECT 1 FROM user_sessions \
                 WHERE user_id = $1 AND session_token = $2 AND device_id = $3 \
             )",
        )
        .bind(user_id)
        .bind(session_token)
        .bind(device_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| PortError::Unexpected(e.to_string()))?;

        Ok(exists)
    }
}
