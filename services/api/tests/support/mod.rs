//! In-memory port stubs for driving the router in integration tests.
//!
//! Each store counts its invocations so tests can assert that validation
//! failures never reach the store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use api_lib::web::{self, state::AppState};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Utc;
use fitness_core::domain::{
    ChallengeRef, CustomPlanSummary, NewStretch, NewWeek, Stretch, StretchUpdate, Week,
    WeekWithChallenge,
};
use fitness_core::ports::{
    BlobStore, CustomPlanStore, PortError, PortResult, SessionCheck, StretchStore, WeekStore,
};
use http_body_util::BodyExt;
use tower::util::ServiceExt;
use uuid::Uuid;

//=========================================================================================
// Stretch store stub
//=========================================================================================

#[derive(Default)]
pub struct MemStretchStore {
    pub items: Mutex<Vec<Stretch>>,
    pub calls: AtomicUsize,
}

impl MemStretchStore {
    pub fn seed(&self, name: &str, image: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.items.lock().unwrap().push(Stretch {
            id,
            name: name.to_string(),
            description: None,
            is_active: true,
            image: image.to_string(),
            created_at: Utc::now(),
        });
        id
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl StretchStore for MemStretchStore {
    async fn list(&self) -> PortResult<Vec<Stretch>> {
        self.bump();
        let items = self.items.lock().unwrap();
        Ok(items.iter().rev().cloned().collect())
    }

    async fn insert(&self, new: NewStretch) -> PortResult<()> {
        self.bump();
        self.items.lock().unwrap().push(Stretch {
            id: Uuid::new_v4(),
            name: new.name,
            description: new.description,
            is_active: new.is_active,
            image: new.image,
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn update(&self, id: Uuid, update: StretchUpdate) -> PortResult<Stretch> {
        self.bump();
        let mut items = self.items.lock().unwrap();
        let item = items
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| PortError::NotFound(format!("Stretch {id} not found")))?;
        item.name = update.name;
        item.description = update.description;
        item.is_active = update.is_active;
        Ok(item.clone())
    }

    async fn set_active(&self, id: Uuid, active: bool) -> PortResult<Stretch> {
        self.bump();
        let mut items = self.items.lock().unwrap();
        let item = items
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| PortError::NotFound(format!("Stretch {id} not found")))?;
        item.is_active = active;
        Ok(item.clone())
    }

    async fn delete(&self, id: Uuid) -> PortResult<u64> {
        self.bump();
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|s| s.id != id);
        Ok((before - items.len()) as u64)
    }
}

//=========================================================================================
// Week store stub
//=========================================================================================

#[derive(Default)]
pub struct MemWeekStore {
    pub items: Mutex<Vec<Week>>,
    /// Known parent challenges, id -> display name, used by the join.
    pub challenges: Mutex<Vec<(Uuid, String)>>,
    pub calls: AtomicUsize,
}

impl MemWeekStore {
    pub fn seed_challenge(&self, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.challenges.lock().unwrap().push((id, name.to_string()));
        id
    }

    pub fn seed_week(&self, challenge_id: Uuid, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.items.lock().unwrap().push(Week {
            id,
            challenge_id,
            name: name.to_string(),
            created_at: Utc::now(),
        });
        id
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl WeekStore for MemWeekStore {
    async fn list(&self) -> PortResult<Vec<Week>> {
        self.bump();
        let items = self.items.lock().unwrap();
        Ok(items.iter().rev().cloned().collect())
    }

    async fn list_by_challenge(&self, challenge_id: Uuid) -> PortResult<Vec<WeekWithChallenge>> {
        self.bump();
        let challenges = self.challenges.lock().unwrap();
        let challenge = challenges
            .iter()
            .find(|(id, _)| *id == challenge_id)
            .map(|(id, name)| ChallengeRef {
                id: *id,
                name: name.clone(),
            });
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .rev()
            .filter(|w| w.challenge_id == challenge_id)
            .map(|w| WeekWithChallenge {
                id: w.id,
                name: w.name.clone(),
                challenge: challenge.clone(),
                created_at: w.created_at,
            })
            .collect())
    }

    async fn insert(&self, new: NewWeek) -> PortResult<()> {
        self.bump();
        self.items.lock().unwrap().push(Week {
            id: Uuid::new_v4(),
            challenge_id: new.challenge_id,
            name: new.name,
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn rename(&self, id: Uuid, name: &str) -> PortResult<Week> {
        self.bump();
        let mut items = self.items.lock().unwrap();
        let item = items
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| PortError::NotFound(format!("Week {id} not found")))?;
        item.name = name.to_string();
        Ok(item.clone())
    }

    async fn delete(&self, id: Uuid) -> PortResult<u64> {
        self.bump();
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|w| w.id != id);
        Ok((before - items.len()) as u64)
    }
}

//=========================================================================================
// Custom-plan store, session check and blob store stubs
//=========================================================================================

#[derive(Default)]
pub struct MemPlanStore {
    pub plans: Mutex<Vec<CustomPlanSummary>>,
    pub calls: AtomicUsize,
}

impl MemPlanStore {
    pub fn seed(&self, user_id: Uuid, name: &str, exercise_count: i64) {
        self.plans.lock().unwrap().push(CustomPlanSummary {
            id: Uuid::new_v4(),
            user_id,
            name: name.to_string(),
            exercise_count,
            created_at: Utc::now(),
        });
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CustomPlanStore for MemPlanStore {
    async fn list_for_user(&self, user_id: Uuid) -> PortResult<Vec<CustomPlanSummary>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let plans = self.plans.lock().unwrap();
        Ok(plans
            .iter()
            .rev()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }
}

pub struct FixedSessionCheck(pub bool);

#[async_trait]
impl SessionCheck for FixedSessionCheck {
    async fn verify(&self, _: Uuid, _: &str, _: &str) -> PortResult<bool> {
        Ok(self.0)
    }
}

#[derive(Default)]
pub struct MemBlobStore {
    pub stored: Mutex<Vec<String>>,
}

#[async_trait]
impl BlobStore for MemBlobStore {
    async fn store(&self, original_name: &str, _bytes: &[u8]) -> PortResult<String> {
        self.stored.lock().unwrap().push(original_name.to_string());
        Ok(original_name.to_string())
    }

    async fn remove(&self, _key: &str) -> PortResult<()> {
        Ok(())
    }

    fn url(&self, key: &str) -> String {
        format!("/uploads/{key}")
    }
}

//=========================================================================================
// Harness
//=========================================================================================

pub struct TestApp {
    pub stretches: Arc<MemStretchStore>,
    pub weeks: Arc<MemWeekStore>,
    pub plans: Arc<MemPlanStore>,
    pub blobs: Arc<MemBlobStore>,
    pub router: Router,
}

pub fn app(session_ok: bool) -> TestApp {
    let stretches = Arc::new(MemStretchStore::default());
    let weeks = Arc::new(MemWeekStore::default());
    let plans = Arc::new(MemPlanStore::default());
    let blobs = Arc::new(MemBlobStore::default());

    let state = Arc::new(AppState {
        stretches: stretches.clone(),
        weeks: weeks.clone(),
        plans: plans.clone(),
        sessions: Arc::new(FixedSessionCheck(session_ok)),
        blobs: blobs.clone(),
    });

    TestApp {
        stretches,
        weeks,
        plans,
        blobs,
        router: web::router(state),
    }
}

/// Sends one request and returns the status plus the parsed JSON body.
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Sends a multipart/form-data request built from (name, filename, value) parts.
pub async fn send_multipart(
    router: &Router,
    uri: &str,
    parts: &[(&str, Option<&str>, &str)],
) -> (StatusCode, serde_json::Value) {
    let boundary = "test-boundary";
    let mut body = String::new();
    for (name, filename, value) in parts {
        body.push_str(&format!("--{boundary}\r\n"));
        match filename {
            Some(f) => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{f}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )),
            None => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
            )),
        }
        body.push_str(value);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{boundary}--\r\n"));

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
