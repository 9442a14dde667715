//! In-memory store for reading sessions.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use reading_core::{NavigationAction, ReadingSession};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::SessionResponse;

struct StoredSession {
    session: ReadingSession,
    created_at: DateTime<Utc>,
    last_accessed_at: DateTime<Utc>,
}

/// Sessions keyed by id, evicting the least recently used past `max_sessions`.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, StoredSession>>,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions: max_sessions.max(1),
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Store a new session and return its initial state.
    pub async fn create(&self, session: ReadingSession) -> SessionResponse {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        while sessions.len() >= self.max_sessions {
            let Some(oldest) = sessions
                .iter()
                .min_by_key(|(_, s)| s.last_accessed_at)
                .map(|(id, _)| *id)
            else {
                break;
            };
            if let Some(evicted) = sessions.remove(&oldest) {
                tracing::info!(
                    "Evicted session {} (created {})",
                    oldest,
                    evicted.created_at
                );
            }
        }

        let response = snapshot(id, &session);
        sessions.insert(
            id,
            StoredSession {
                session,
                created_at: now,
                last_accessed_at: now,
            },
        );
        response
    }

    pub async fn get(&self, id: Uuid) -> Result<SessionResponse> {
        let mut sessions = self.sessions.write().await;
        let stored = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        stored.last_accessed_at = Utc::now();
        Ok(snapshot(id, &stored.session))
    }

    pub async fn navigate(&self, id: Uuid, action: NavigationAction) -> Result<SessionResponse> {
        let mut sessions = self.sessions.write().await;
        let stored = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        stored.last_accessed_at = Utc::now();
        stored.session.apply(action)?;
        Ok(snapshot(id, &stored.session))
    }

    pub async fn remove(&self, id: Uuid) -> Result<()> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}

fn snapshot(id: Uuid, session: &ReadingSession) -> SessionResponse {
    SessionResponse {
        session_id: id,
        position: session.position(),
        len: session.len(),
        card: session.current().clone(),
        view: session.view(),
    }
}

fn not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("Session {} not found", id))
}
