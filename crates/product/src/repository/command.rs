use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    model::Product as ProductModel, repository::PRODUCT_COLUMNS,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn insert(&self, product: &ProductModel) -> Result<ProductModel, RepositoryError> {
        info!("🆕 Inserting product: {}", product.name);

        let created = sqlx::query_as::<_, ProductModel>(&format!(
            r#"
            INSERT INTO products
                (name, price, discount_price, image_url, description, category, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(&product.name)
        .bind(product.price)
        .bind(product.discount_price)
        .bind(&product.image_url)
        .bind(&product.description)
        .bind(&product.category)
        .bind(&product.status)
        .bind(product.created_at)
        .bind(product.updated_at)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert product {}: {:?}", product.name, e);
            RepositoryError::from(e)
        })?;

        info!("✅ Product created with ID: {:?}", created.id);
        Ok(created)
    }

    async fn update(&self, id: i64, product: &ProductModel) -> Result<ProductModel, RepositoryError> {
        info!("🔄 Updating product ID: {}", id);

        let updated = sqlx::query_as::<_, ProductModel>(&format!(
            r#"
            UPDATE products
            SET name = $2,
                price = $3,
                discount_price = $4,
                image_url = $5,
                description = $6,
                category = $7,
                status = $8,
                updated_at = $9
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.discount_price)
        .bind(&product.image_url)
        .bind(&product.description)
        .bind(&product.category)
        .bind(&product.status)
        .bind(product.updated_at)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        match updated {
            Some(product) => {
                info!("✅ Product updated: {}", id);
                Ok(product)
            }
            None => {
                error!("❌ Product {} vanished before update", id);
                Err(RepositoryError::NotFound)
            }
        }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn save(&self, product: &ProductModel) -> Result<ProductModel, RepositoryError> {
        match product.id {
            None => self.insert(product).await,
            Some(id) => self.update(id, product).await,
        }
    }

    async fn delete(&self, product: &ProductModel) -> Result<(), RepositoryError> {
        let Some(id) = product.id else {
            error!("❌ Cannot delete a product that was never stored");
            return Err(RepositoryError::NotFound);
        };

        info!("🗑️ Deleting product ID: {}", id);

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            error!("❌ Product {} not found for deletion", id);
            return Err(RepositoryError::NotFound);
        }

        info!("✅ Product deleted: {}", id);
        Ok(())
    }
}
