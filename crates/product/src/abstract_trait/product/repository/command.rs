use crate::model::Product as ProductModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCommandRepositoryTrait {
    /// Inserts when `product.id` is `None`, otherwise updates the row with that id.
    async fn save(&self, product: &ProductModel) -> Result<ProductModel, RepositoryError>;

    async fn delete(&self, product: &ProductModel) -> Result<(), RepositoryError>;
}
