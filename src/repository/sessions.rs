use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::auth::AuthSession;

/// Process-local session store. Sessions are ephemeral and never touch
/// the database.
#[derive(Clone, Default)]
pub struct SessionRepository {
    sessions: Arc<DashMap<Uuid, AuthSession>>,
}

impl SessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, token: Uuid, session: AuthSession) {
        self.sessions.insert(token, session);
    }

    pub fn get(&self, token: Uuid) -> Option<AuthSession> {
        self.sessions.get(&token).map(|entry| entry.value().clone())
    }

    pub fn remove(&self, token: Uuid) {
        self.sessions.remove(&token);
    }
}
