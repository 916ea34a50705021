use crate::{
    domain::page::{Page, PageRequest},
    model::Product as ProductModel,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

/// Read side of the product store.
///
/// Every `find*` variant returns its matches ordered by `name` (byte-wise)
/// and then by `id`, sliced to the requested page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self, page: &PageRequest) -> Result<Page<ProductModel>, RepositoryError>;

    async fn find_by_name_contains(
        &self,
        name_part: &str,
        page: &PageRequest,
    ) -> Result<Page<ProductModel>, RepositoryError>;

    async fn find_by_price_between(
        &self,
        min_price: Decimal,
        max_price: Decimal,
        page: &PageRequest,
    ) -> Result<Page<ProductModel>, RepositoryError>;

    async fn find_by_name_contains_and_price_between(
        &self,
        name_part: &str,
        min_price: Decimal,
        max_price: Decimal,
        page: &PageRequest,
    ) -> Result<Page<ProductModel>, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductModel>, RepositoryError>;
}
