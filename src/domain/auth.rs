use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Proof of a successful login. Produced by the auth service, looked up
/// by token on every protected request, and dropped on logout or expiry.
/// Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub user: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn issue(user: String, now: DateTime<Utc>, lifetime: Duration) -> Self {
        AuthSession {
            user,
            issued_at: now,
            expires_at: now + lifetime,
        }
    }

    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Validate, Deserialize, Serialize)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    pub password: String,
    /// Opting out shortens the session to a fixed two hours.
    #[serde(default = "default_extend")]
    pub extend: bool,
}

fn default_extend() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_is_valid_strictly_before_expiry() {
        let now = Utc::now();
        let session = AuthSession::issue("FNVJADMIN".to_string(), now, Duration::hours(8));
        assert_eq!(session.issued_at, now);
        assert_eq!(session.expires_at, now + Duration::hours(8));
        assert!(session.is_valid(now));
        assert!(session.is_valid(now + Duration::hours(8) - Duration::seconds(1)));
        assert!(!session.is_valid(now + Duration::hours(8)));
        assert!(!session.is_valid(now + Duration::hours(9)));
    }

    #[test]
    fn login_request_extend_defaults_to_true() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"username": "FNVJADMIN", "password": "FNVJ2025"}"#).unwrap();
        assert!(request.extend);
    }
}
