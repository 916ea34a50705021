use crate::{
    abstract_trait::product::repository::DynProductQueryRepository,
    domain::{
        page::{Page, PageRequest},
        requests::ProductFilter,
    },
    model::Product as ProductModel,
};
use rust_decimal::Decimal;
use shared::errors::ServiceError;
use tracing::info;

/// The four list queries, keyed on which filters are present.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryStrategy {
    NameAndPrice {
        name_part: String,
        min_price: Decimal,
        max_price: Decimal,
    },
    Name {
        name_part: String,
    },
    Price {
        min_price: Decimal,
        max_price: Decimal,
    },
    Unfiltered,
}

impl QueryStrategy {
    /// A price range only counts when both bounds are given; a lone bound is
    /// dropped. An empty `name_part` is still a name filter.
    pub fn from_filter(filter: &ProductFilter) -> Self {
        let range = match (filter.min_price, filter.max_price) {
            (Some(min_price), Some(max_price)) => Some((min_price, max_price)),
            _ => None,
        };

        match (filter.name_part.clone(), range) {
            (Some(name_part), Some((min_price, max_price))) => QueryStrategy::NameAndPrice {
                name_part,
                min_price,
                max_price,
            },
            (Some(name_part), None) => QueryStrategy::Name { name_part },
            (None, Some((min_price, max_price))) => QueryStrategy::Price {
                min_price,
                max_price,
            },
            (None, None) => QueryStrategy::Unfiltered,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QueryStrategy::NameAndPrice { .. } => "name+price",
            QueryStrategy::Name { .. } => "name",
            QueryStrategy::Price { .. } => "price",
            QueryStrategy::Unfiltered => "unfiltered",
        }
    }
}

/// Picks one query variant for a filter and runs it against the repository.
#[derive(Clone)]
pub struct QueryResolver {
    query: DynProductQueryRepository,
}

impl QueryResolver {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }

    pub async fn resolve(
        &self,
        filter: &ProductFilter,
        page_index: i64,
        page_size: i64,
    ) -> Result<Page<ProductModel>, ServiceError> {
        let page = PageRequest::new(page_index, page_size)?;
        let strategy = QueryStrategy::from_filter(filter);

        info!(
            "🧭 Listing products with {} strategy (page {}, size {})",
            strategy.label(),
            page.page_index(),
            page.page_size()
        );

        let result = match strategy {
            QueryStrategy::NameAndPrice {
                name_part,
                min_price,
                max_price,
            } => {
                self.query
                    .find_by_name_contains_and_price_between(&name_part, min_price, max_price, &page)
                    .await?
            }
            QueryStrategy::Name { name_part } => {
                self.query.find_by_name_contains(&name_part, &page).await?
            }
            QueryStrategy::Price {
                min_price,
                max_price,
            } => {
                self.query
                    .find_by_price_between(min_price, max_price, &page)
                    .await?
            }
            QueryStrategy::Unfiltered => self.query.find_all(&page).await?,
        };

        Ok(result)
    }
}
