//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use std::sync::Arc;

use fitness_core::ports::{BlobStore, CustomPlanStore, SessionCheck, StretchStore, WeekStore};

/// The shared application state, created once at startup and passed to all
/// handlers. Handlers hold no state of their own across requests.
#[derive(Clone)]
pub struct AppState {
    pub stretches: Arc<dyn StretchStore>,
    pub weeks: Arc<dyn WeekStore>,
    pub plans: Arc<dyn CustomPlanStore>,
    pub sessions: Arc<dyn SessionCheck>,
    pub blobs: Arc<dyn BlobStore>,
}
