use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    domain::page::{Page, PageRequest},
    model::Product as ProductModel,
    repository::PRODUCT_COLUMNS,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{Postgres, QueryBuilder};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn fetch_page(
        &self,
        name_part: Option<&str>,
        price_range: Option<(Decimal, Decimal)>,
        page: &PageRequest,
    ) -> Result<Page<ProductModel>, RepositoryError> {
        // one snapshot for the count and the slice
        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {:?}", e);
            RepositoryError::from(e)
        })?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to set isolation level: {:?}", e);
                RepositoryError::from(e)
            })?;

        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products");
        push_filters(&mut count, name_part, price_range);

        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to count products: {:?}", e);
                RepositoryError::from(e)
            })?;

        let mut select =
            QueryBuilder::<Postgres>::new(format!("SELECT {PRODUCT_COLUMNS} FROM products"));
        push_filters(&mut select, name_part, price_range);
        select
            .push(r#" ORDER BY name COLLATE "C" ASC, id ASC LIMIT "#)
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());

        let products = select
            .build_query_as::<ProductModel>()
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products: {:?}", e);
                RepositoryError::from(e)
            })?;

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit read transaction: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Fetched {} of {} products (page {}, size {})",
            products.len(),
            total,
            page.page_index(),
            page.page_size()
        );

        Ok(Page::new(products, page, total))
    }
}

/// Appends the `WHERE` clause shared by the count and the page query.
fn push_filters(
    builder: &mut QueryBuilder<'_, Postgres>,
    name_part: Option<&str>,
    price_range: Option<(Decimal, Decimal)>,
) {
    let mut separator = " WHERE ";

    if let Some(name_part) = name_part {
        // POSITION instead of ILIKE: `%` and `_` in the input stay literal.
        builder
            .push(separator)
            .push("POSITION(LOWER(")
            .push_bind(name_part.to_owned())
            .push(") IN LOWER(name)) > 0");
        separator = " AND ";
    }

    if let Some((min_price, max_price)) = price_range {
        builder
            .push(separator)
            .push("price BETWEEN ")
            .push_bind(min_price)
            .push(" AND ")
            .push_bind(max_price);
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self, page: &PageRequest) -> Result<Page<ProductModel>, RepositoryError> {
        info!("🔍 Fetching all products");
        self.fetch_page(None, None, page).await
    }

    async fn find_by_name_contains(
        &self,
        name_part: &str,
        page: &PageRequest,
    ) -> Result<Page<ProductModel>, RepositoryError> {
        info!("🔍 Fetching products whose name contains {:?}", name_part);
        self.fetch_page(Some(name_part), None, page).await
    }

    async fn find_by_price_between(
        &self,
        min_price: Decimal,
        max_price: Decimal,
        page: &PageRequest,
    ) -> Result<Page<ProductModel>, RepositoryError> {
        info!("💰 Fetching products priced between {min_price} and {max_price}");
        self.fetch_page(None, Some((min_price, max_price)), page)
            .await
    }

    async fn find_by_name_contains_and_price_between(
        &self,
        name_part: &str,
        min_price: Decimal,
        max_price: Decimal,
        page: &PageRequest,
    ) -> Result<Page<ProductModel>, RepositoryError> {
        info!(
            "🔍 Fetching products whose name contains {:?} priced between {min_price} and {max_price}",
            name_part
        );
        self.fetch_page(Some(name_part), Some((min_price, max_price)), page)
            .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by ID: {}", id);

        let product = sqlx::query_as::<_, ProductModel>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        match &product {
            Some(_) => info!("✅ Found product with ID: {}", id),
            None => info!("⚠️ No product found with ID: {}", id),
        }

        Ok(product)
    }
}
