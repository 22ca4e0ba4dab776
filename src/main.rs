use std::str::FromStr;
use std::sync::Arc;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Extension, Json, Router};
use eyre::Result;
use log::{error, info, warn};
use refinery::config::Config as RefineryConfig;
use sqlx::PgPool;

use crate::config::Config;
use crate::domain::auth::LoginRequest;
use crate::domain::customer::CreateCustomerRequest;
use crate::error::Error;
use crate::extensions::ExtractSession;
use crate::repository::customers::CustomerRepository;
use crate::routes::Api;
use crate::service::auth::AuthService;
use crate::service::customers::CustomerService;

mod config;
mod domain;
mod error;
mod extensions;
mod repository;
mod routes;
mod service;

refinery::embed_migrations!("migrations");

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // config first: a missing DATABASE_URL must fail before anything binds
    let config = Config::from_env()?;

    // schema setup is idempotent; refinery skips applied migrations.
    // Failure here is fatal.
    let mut refinery_config = RefineryConfig::from_str(&config.database_url)?;
    migrations::runner().run_async(&mut refinery_config).await?;
    let pool = PgPool::connect(&config.database_url).await?;
    info!("connected to database, schema up to date");

    let customer_repository = Arc::new(CustomerRepository::new(pool));
    let api = Api {
        customer_service: CustomerService {
            customer_repository,
        },
        auth_service: AuthService::new(&config),
    };

    let router = Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(session))
        .route("/customers", post(create_customer))
        .route("/customers", get(list_customers))
        .route("/customers/selection", get(list_customers_for_selection))
        .route("/customers/{id}", delete(delete_customer))
        .layer(Extension(api));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("listening on {}", config.bind_addr);
    axum::serve(listener, router).await?;
    Ok(())
}

async fn login(
    Extension(api): Extension<Api>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    match api.login(payload) {
        Ok(token) => (StatusCode::OK, token.to_string()).into_response(),
        Err(e) => report_into_response(e).into_response(),
    }
}

async fn logout(
    ExtractSession(token, _): ExtractSession,
    Extension(api): Extension<Api>,
) -> impl IntoResponse {
    api.logout(token);
    StatusCode::NO_CONTENT
}

async fn session(ExtractSession(_, session): ExtractSession) -> impl IntoResponse {
    (StatusCode::OK, Json(session))
}

async fn create_customer(
    ExtractSession(_, _): ExtractSession,
    Extension(api): Extension<Api>,
    Json(payload): Json<CreateCustomerRequest>,
) -> impl IntoResponse {
    match api.create_customer(payload).await {
        Ok(customer) => (StatusCode::CREATED, Json(customer)).into_response(),
        Err(e) => report_into_response(e).into_response(),
    }
}

async fn list_customers(
    ExtractSession(_, _): ExtractSession,
    Extension(api): Extension<Api>,
) -> impl IntoResponse {
    match api.list_customers().await {
        Ok(customers) => (StatusCode::OK, Json(customers)).into_response(),
        Err(e) => report_into_response(e).into_response(),
    }
}

async fn list_customers_for_selection(
    ExtractSession(_, _): ExtractSession,
    Extension(api): Extension<Api>,
) -> impl IntoResponse {
    match api.list_customers_for_selection().await {
        Ok(customers) => (StatusCode::OK, Json(customers)).into_response(),
        Err(e) => report_into_response(e).into_response(),
    }
}

async fn delete_customer(
    ExtractSession(_, _): ExtractSession,
    Extension(api): Extension<Api>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match api.delete_customer(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => report_into_response(e).into_response(),
    }
}

fn report_into_response(e: eyre::Report) -> (StatusCode, String) {
    match e.downcast::<Error>() {
        Ok(error) => {
            match &error {
                // warning-grade outcomes the user can retry
                Error::Validation | Error::NotFound => warn!("{}", error),
                _ => error!("{}", error),
            }
            error.into_response_tuple()
        }
        Err(report) => {
            error!("Unexpected error: {:?}", report);
            (StatusCode::INTERNAL_SERVER_ERROR, "".to_string())
        }
    }
}
