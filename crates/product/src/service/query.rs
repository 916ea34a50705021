use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{
        requests::FindAllProducts,
        response::{
            api::{ApiResponse, ApiResponsePagination},
            product::ProductView,
        },
    },
    service::resolver::QueryResolver,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use tracing::info;

const TRACER_NAME: &str = "product-query-service";

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    resolver: QueryResolver,
    metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_query_service", registry);

        Self {
            resolver: QueryResolver::new(query.clone()),
            query,
            metrics,
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductView>>, ServiceError> {
        info!(
            "🔍 Listing products | name: {:?}, price: {:?}..{:?}, page: {}, size: {}",
            req.name, req.min_price, req.max_price, req.page, req.size
        );

        let tracing_ctx = TracingContext::start(
            TRACER_NAME,
            "FindAllProducts",
            Method::Get,
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_all"),
                KeyValue::new("page", req.page),
                KeyValue::new("size", req.size),
            ],
        );

        match self.resolver.resolve(&req.filter(), req.page, req.size).await {
            Ok(page) => {
                let page = page.map(ProductView::from);
                tracing_ctx.success(
                    &self.metrics,
                    &format!("Retrieved {} of {} products", page.items.len(), page.total_count),
                );
                Ok(ApiResponsePagination::from_page(
                    "Products retrieved successfully",
                    page,
                ))
            }
            Err(e) => {
                tracing_ctx.failure(&self.metrics, &format!("Failed to list products: {e}"));
                Err(e)
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<ProductView>, ServiceError> {
        info!("🆔 Finding product by ID: {}", id);

        let tracing_ctx = TracingContext::start(
            TRACER_NAME,
            "FindProductById",
            Method::Get,
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("product.id", id),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(product)) => {
                tracing_ctx.success(&self.metrics, &format!("Product {id} found"));
                Ok(ApiResponse::success(
                    "Product retrieved successfully",
                    ProductView::from(product),
                ))
            }
            Ok(None) => {
                let msg = format!("Product with id {id} not found");
                tracing_ctx.failure(&self.metrics, &msg);
                Err(ServiceError::NotFound(msg))
            }
            Err(e) => {
                tracing_ctx.failure(&self.metrics, &format!("Failed to fetch product {id}: {e}"));
                Err(ServiceError::Repo(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::product::repository::MockProductQueryRepositoryTrait;
    use shared::errors::RepositoryError;
    use std::sync::Arc;

    fn service(mock: MockProductQueryRepositoryTrait) -> ProductQueryService {
        let mut registry = Registry::default();
        ProductQueryService::new(Arc::new(mock), &mut registry)
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let mut mock = MockProductQueryRepositoryTrait::new();
        mock.expect_find_by_id()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock).find_by_id(42).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn repository_error_is_passed_through() {
        let mut mock = MockProductQueryRepositoryTrait::new();
        mock.expect_find_by_id()
            .returning(|_| Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut)));

        let result = service(mock).find_by_id(1).await;
        assert!(matches!(
            result,
            Err(ServiceError::Repo(RepositoryError::Sqlx(
                sqlx::Error::PoolTimedOut
            )))
        ));
    }

    #[tokio::test]
    async fn list_rejects_negative_page() {
        let mock = MockProductQueryRepositoryTrait::new();
        let req = FindAllProducts {
            name: None,
            min_price: None,
            max_price: None,
            page: -1,
            size: 10,
        };

        let result = service(mock).find_all(&req).await;
        assert!(matches!(result, Err(ServiceError::InvalidArgument(_))));
    }
}
