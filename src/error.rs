use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing or invalid configuration: {0}")]
    Configuration(&'static str),
    #[error("Database unavailable")]
    Connection,
    #[error("Name and email must not be empty")]
    Validation,
    #[error("A customer with this email already exists")]
    DuplicateEmail,
    #[error("Customer not found")]
    NotFound,
    #[error("Invalid username or password")]
    InvalidCredentials,
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Connection => StatusCode::SERVICE_UNAVAILABLE,
            Error::Validation => StatusCode::BAD_REQUEST,
            Error::DuplicateEmail => StatusCode::CONFLICT,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::InvalidCredentials => StatusCode::UNAUTHORIZED,
        }
    }

    pub fn into_response_tuple(self) -> (StatusCode, String) {
        (self.status_code(), self.to_string())
    }
}

// Every storage failure is folded into the taxonomy here so no raw
// driver error ever reaches a response body. The unique-violation arm
// is the authoritative duplicate-email signal; the repository's
// existence pre-check is only a fast path.
impl From<sqlx::Error> for Error {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => Error::NotFound,
            sqlx::Error::Database(db) if db.is_unique_violation() => Error::DuplicateEmail,
            _ => Error::Connection,
        }
    }
}
