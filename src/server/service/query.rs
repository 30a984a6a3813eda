//! Contact queries submitted from the public site.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::query::ContactQueryRepository,
    error::AppError,
    model::query::{ContactQuery, CreateContactQueryParams, QueryStatus},
};

pub struct ContactQueryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactQueryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a new query.
    ///
    /// # Returns
    /// - `Ok(ContactQuery)` - The stored query with status `New`
    /// - `Err(AppError::BadRequest)` - A field failed validation
    pub async fn submit(&self, params: CreateContactQueryParams) -> Result<ContactQuery, AppError> {
        params.validate().map_err(AppError::BadRequest)?;

        let query = ContactQueryRepository::new(self.db).create(params).await?;

        tracing::info!("New contact query {}", query.id);

        Ok(query)
    }

    pub async fn get_all(&self) -> Result<Vec<ContactQuery>, AppError> {
        let queries = ContactQueryRepository::new(self.db).get_all().await?;

        Ok(queries)
    }

    pub async fn set_status(&self, id: i32, status: QueryStatus) -> Result<ContactQuery, AppError> {
        ContactQueryRepository::new(self.db)
            .set_status(id, status)
            .await?
            .ok_or_else(|| query_not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ContactQueryRepository::new(self.db).delete(id).await? {
            return Err(query_not_found(id));
        }

        Ok(())
    }
}

fn query_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Query {} not found", id))
}
