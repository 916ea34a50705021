use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::ProductCommandServiceTrait,
    },
    domain::{
        requests::ProductRequest,
        response::{api::ApiResponse, product::ProductView},
    },
    model::{Product as ProductModel, timestamp_now},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use tracing::info;
use validator::Validate;

const TRACER_NAME: &str = "product-command-service";

#[derive(Clone)]
pub struct ProductCommandService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
    metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(
        query: DynProductQueryRepository,
        command: DynProductCommandRepository,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_command_service", registry);

        Self {
            query,
            command,
            metrics,
        }
    }

    async fn existing(&self, id: i64) -> Result<ProductModel, ServiceError> {
        self.query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Product with id {id} not found")))
    }

    async fn create(&self, req: &ProductRequest) -> Result<ProductModel, ServiceError> {
        req.validate()?;

        let product = req.to_new_model(timestamp_now());
        self.command
            .save(&product)
            .await
            .map_err(ServiceError::from)
    }

    async fn update(&self, id: i64, req: &ProductRequest) -> Result<ProductModel, ServiceError> {
        req.validate()?;

        let mut product = self.existing(id).await?;
        req.apply_to(&mut product);
        product.touch(timestamp_now());

        self.command
            .save(&product)
            .await
            .map_err(ServiceError::from)
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let product = self.existing(id).await?;
        self.command
            .delete(&product)
            .await
            .map_err(ServiceError::from)
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &ProductRequest,
    ) -> Result<ApiResponse<ProductView>, ServiceError> {
        info!("🆕 Creating product: {}", req.name);

        let tracing_ctx = TracingContext::start(
            TRACER_NAME,
            "CreateProduct",
            Method::Post,
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.name", req.name.clone()),
            ],
        );

        match self.create(req).await {
            Ok(product) => {
                tracing_ctx.success(
                    &self.metrics,
                    &format!("Product created with ID {:?}", product.id),
                );
                Ok(ApiResponse::success(
                    "Product created successfully",
                    ProductView::from(product),
                ))
            }
            Err(e) => {
                tracing_ctx.failure(&self.metrics, &format!("Failed to create product: {e}"));
                Err(e)
            }
        }
    }

    async fn update_product(
        &self,
        id: i64,
        req: &ProductRequest,
    ) -> Result<ApiResponse<ProductView>, ServiceError> {
        info!("🔄 Updating product ID: {}", id);

        let tracing_ctx = TracingContext::start(
            TRACER_NAME,
            "UpdateProduct",
            Method::Put,
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", id),
            ],
        );

        match self.update(id, req).await {
            Ok(product) => {
                tracing_ctx.success(&self.metrics, &format!("Product {id} updated"));
                Ok(ApiResponse::success(
                    "Product updated successfully",
                    ProductView::from(product),
                ))
            }
            Err(e) => {
                tracing_ctx.failure(&self.metrics, &format!("Failed to update product {id}: {e}"));
                Err(e)
            }
        }
    }

    async fn delete_product(&self, id: i64) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting product ID: {}", id);

        let tracing_ctx = TracingContext::start(
            TRACER_NAME,
            "DeleteProduct",
            Method::Delete,
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", id),
            ],
        );

        match self.delete(id).await {
            Ok(()) => {
                tracing_ctx.success(&self.metrics, &format!("Product {id} deleted"));
                Ok(ApiResponse::success("Product deleted successfully", ()))
            }
            Err(e) => {
                tracing_ctx.failure(&self.metrics, &format!("Failed to delete product {id}: {e}"));
                Err(e)
            }
        }
    }
}
