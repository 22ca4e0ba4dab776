use std::sync::Arc;

use eyre::{ensure, Result};

use crate::domain::customer::Customer;
use crate::error::Error;
use crate::repository::customers::CustomerRepository;

#[derive(Clone)]
pub struct CustomerService {
    pub customer_repository: Arc<CustomerRepository>,
}

impl CustomerService {
    pub async fn create(&self, name: &str, email: &str) -> Result<Customer> {
        let name = name.trim();
        let email = email.trim();
        ensure!(!name.is_empty() && !email.is_empty(), Error::Validation);
        // Fast-path duplicate check. The unique constraint on the email
        // column is the real guard; a racing insert still comes back as
        // DuplicateEmail through the sqlx error mapping.
        ensure!(
            !self
                .customer_repository
                .exists_by_email(email.to_string())
                .await?,
            Error::DuplicateEmail
        );
        self.customer_repository
            .insert(name.to_string(), email.to_string())
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<Customer>> {
        self.customer_repository.list_by_id_desc().await
    }

    pub async fn list_for_selection(&self) -> Result<Vec<Customer>> {
        self.customer_repository.list_by_name_asc().await
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let removed = self.customer_repository.delete(id).await?;
        ensure!(removed > 0, Error::NotFound);
        Ok(())
    }
}
