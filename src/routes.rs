use chrono::Utc;
use eyre::Result;
use uuid::Uuid;
use validator::Validate;

use crate::domain::auth::{AuthSession, LoginRequest};
use crate::domain::customer::{CreateCustomerRequest, Customer};
use crate::error::Error;
use crate::service::auth::AuthService;
use crate::service::customers::CustomerService;

/// The surface the presentation layer calls into. Handlers render its
/// results and its typed errors, nothing else.
#[derive(Clone)]
pub struct Api {
    pub customer_service: CustomerService,
    pub auth_service: AuthService,
}

impl Api {
    pub fn login(&self, request: LoginRequest) -> Result<Uuid> {
        request.validate().map_err(|_| Error::InvalidCredentials)?;
        self.auth_service
            .login(&request.username, &request.password, request.extend)
    }

    pub fn logout(&self, token: Uuid) {
        self.auth_service.logout(token);
    }

    pub fn session(&self, token: Uuid) -> Option<AuthSession> {
        self.auth_service.session(token, Utc::now())
    }

    pub async fn create_customer(&self, request: CreateCustomerRequest) -> Result<Customer> {
        request.validate().map_err(|_| Error::Validation)?;
        self.customer_service
            .create(&request.name, &request.email)
            .await
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>> {
        self.customer_service.list_all().await
    }

    pub async fn list_customers_for_selection(&self) -> Result<Vec<Customer>> {
        self.customer_service.list_for_selection().await
    }

    pub async fn delete_customer(&self, id: i32) -> Result<()> {
        self.customer_service.delete(id).await
    }
}
