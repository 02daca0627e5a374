use async_trait::async_trait;

use super::{CategoryStore, StoreError};
use crate::{db::DbPool, models::category::Category};

pub struct PgCategoryStore {
    pool: DbPool,
}

impl PgCategoryStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn list(&self) -> Result<Vec<Category>, StoreError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, slug FROM categories ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn find(&self, id: i32) -> Result<Option<Category>, StoreError> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, name, slug FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool) // None si no existe
                .await?;

        Ok(category)
    }

    async fn insert(&self, category: &Category) -> Result<Category, StoreError> {
        let created = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name, slug) VALUES ($1, $2) RETURNING id, name, slug",
        )
        .bind(&category.name)
        .bind(&category.slug)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, category: &Category) -> Result<Category, StoreError> {
        let updated = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories SET name = $1, slug = $2
            WHERE id = $3
            RETURNING id, name, slug
            "#,
        )
        .bind(&category.name)
        .bind(&category.slug)
        .bind(category.id)
        .fetch_optional(&self.pool)
        .await?;

        // Alguien la borró entre la lectura y el guardado
        updated.ok_or_else(|| {
            StoreError::Other(format!("la categoría {} ya no existe", category.id))
        })
    }

    async fn remove(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        // rows_affected nos dice si realmente borró algo
        if result.rows_affected() == 0 {
            return Err(StoreError::Other(format!("la categoría {} ya no existe", id)));
        }

        Ok(())
    }
}
