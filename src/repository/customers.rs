use eyre::Result;
use sqlx::{PgPool, Row};

use crate::domain::customer::Customer;
use crate::error::Error;

#[cfg_attr(test, faux::create)]
#[derive(Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

// Each method runs on a connection checked out from the pool for the
// duration of the query and returned on every exit path. Failures are
// folded into the error taxonomy before leaving the repository.
#[cfg_attr(test, faux::methods)]
impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, name: String, email: String) -> Result<Customer> {
        let customer = sqlx::query_as(
            r#"
            INSERT INTO customers (name, email)
            VALUES ($1, $2) RETURNING *
            "#,
        )
        .bind(&name)
        .bind(&email)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::from)?;
        Ok(customer)
    }

    /// Newest first, for the listing view.
    pub async fn list_by_id_desc(&self) -> Result<Vec<Customer>> {
        let customers = sqlx::query_as(
            r#"
            SELECT * FROM customers
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::from)?;
        Ok(customers)
    }

    /// Alphabetical, for the delete picker.
    pub async fn list_by_name_asc(&self) -> Result<Vec<Customer>> {
        let customers = sqlx::query_as(
            r#"
            SELECT * FROM customers
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::from)?;
        Ok(customers)
    }

    pub async fn exists_by_email(&self, email: String) -> Result<bool> {
        let row = sqlx::query(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM customers
                WHERE email = $1
            )
            "#,
        )
        .bind(&email)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::from)?;
        Ok(row.get(0))
    }

    /// Returns the number of rows removed (zero when the id is absent).
    pub async fn delete(&self, id: i32) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(Error::from)?;
        Ok(result.rows_affected())
    }
}
