use chrono::{DateTime, Duration, Utc};
use eyre::{ensure, Result};
use uuid::Uuid;

use crate::config::Config;
use crate::domain::auth::AuthSession;
use crate::error::Error;
use crate::repository::sessions::SessionRepository;

/// Lifetime of a session when the caller opts out of the extended one.
const SHORT_SESSION_HOURS: i64 = 2;

#[derive(Clone)]
pub struct AuthService {
    admin_username: String,
    admin_password: String,
    session_hours: i64,
    sessions: SessionRepository,
}

impl AuthService {
    pub fn new(config: &Config) -> Self {
        AuthService {
            admin_username: config.admin_username.clone(),
            admin_password: config.admin_password.clone(),
            session_hours: config.session_hours,
            sessions: SessionRepository::new(),
        }
    }

    /// Exact match against the configured credentials. No lockout and no
    /// attempt counting; a failed login simply reports the error.
    pub fn login(&self, username: &str, password: &str, extend: bool) -> Result<Uuid> {
        ensure!(
            username == self.admin_username && password == self.admin_password,
            Error::InvalidCredentials
        );
        let hours = if extend {
            self.session_hours
        } else {
            SHORT_SESSION_HOURS
        };
        let session = AuthSession::issue(username.to_string(), Utc::now(), Duration::hours(hours));
        let token = Uuid::new_v4();
        self.sessions.insert(token, session);
        Ok(token)
    }

    /// Idempotent: logging out an unknown token is a no-op.
    pub fn logout(&self, token: Uuid) {
        self.sessions.remove(token);
    }

    /// Returns the live session for a token. Expiry is checked on access,
    /// not by a background timer; an expired session is removed here.
    pub fn session(&self, token: Uuid, now: DateTime<Utc>) -> Option<AuthSession> {
        let session = self.sessions.get(token)?;
        if !session.is_valid(now) {
            self.sessions.remove(token);
            return None;
        }
        Some(session)
    }

    pub fn is_logged_in(&self, token: Uuid) -> bool {
        self.session(token, Utc::now()).is_some()
    }
}
