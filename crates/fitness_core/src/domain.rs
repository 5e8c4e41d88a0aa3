//! crates/fitness_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any database or serialization format.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A single stretch exercise managed through the admin endpoints.
#[derive(Debug, Clone)]
pub struct Stretch {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    /// Blob-store key of the uploaded image, or empty when none was uploaded.
    pub image: String,
    pub created_at: DateTime<Utc>,
}

/// Fields required to insert a new stretch.
#[derive(Debug, Clone)]
pub struct NewStretch {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub image: String,
}

/// Mutable fields of a stretch, applied as a whole on update.
#[derive(Debug, Clone)]
pub struct StretchUpdate {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// A week inside a challenge. The challenge itself is owned elsewhere;
/// `challenge_id` is not verified for existence at write time.
#[derive(Debug, Clone)]
pub struct Week {
    pub id: Uuid,
    pub challenge_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Fields required to insert a new week.
#[derive(Debug, Clone)]
pub struct NewWeek {
    pub challenge_id: Uuid,
    pub name: String,
}

/// The display fields of a week's parent challenge, as joined into
/// challenge-scoped week listings.
#[derive(Debug, Clone)]
pub struct ChallengeRef {
    pub id: Uuid,
    pub name: String,
}

/// A week with its parent challenge's display fields joined in.
/// `challenge` is `None` when the referenced challenge no longer exists.
#[derive(Debug, Clone)]
pub struct WeekWithChallenge {
    pub id: Uuid,
    pub name: String,
    pub challenge: Option<ChallengeRef>,
    pub created_at: DateTime<Utc>,
}

/// A user's custom workout plan, annotated with the number of exercises
/// it contains.
#[derive(Debug, Clone)]
pub struct CustomPlanSummary {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub exercise_count: i64,
    pub created_at: DateTime<Utc>,
}
