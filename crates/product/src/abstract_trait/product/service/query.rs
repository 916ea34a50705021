use crate::domain::{
    requests::FindAllProducts,
    response::{
        api::{ApiResponse, ApiResponsePagination},
        product::ProductView,
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductView>>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<ProductView>, ServiceError>;
}
