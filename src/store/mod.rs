use async_trait::async_trait;
use thiserror::Error;

use crate::models::category::Category;

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgCategoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    // La base de datos rechazó la escritura (restricción única, etc.)
    #[error("la base de datos rechazó la escritura: {0}")]
    Write(String),
    #[error("error de base de datos: {0}")]
    Other(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => StoreError::Write(db_err.to_string()),
            other => StoreError::Other(other.to_string()),
        }
    }
}

#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Category>, StoreError>;

    async fn find(&self, id: i32) -> Result<Option<Category>, StoreError>;

    // Ignora el id recibido y devuelve la fila con el id asignado por la base
    async fn insert(&self, category: &Category) -> Result<Category, StoreError>;

    // Si la fila ya no existe es un fallo Other, nunca un insert implícito
    async fn update(&self, category: &Category) -> Result<Category, StoreError>;

    async fn remove(&self, id: i32) -> Result<(), StoreError>;
}
