use crate::{
    abstract_trait::product::repository::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    domain::page::{Page, PageRequest},
    model::Product as ProductModel,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::errors::RepositoryError;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::info;

#[derive(Debug, Default)]
struct Store {
    rows: BTreeMap<i64, ProductModel>,
    last_id: i64,
}

/// Process-local product store with the same ordering and matching rules as
/// the Postgres repositories. Implements both the query and command side.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    store: RwLock<Store>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn select<F>(&self, page: &PageRequest, predicate: F) -> Page<ProductModel>
    where
        F: Fn(&ProductModel) -> bool,
    {
        let store = self.store.read().await;

        let mut matches: Vec<ProductModel> = store
            .rows
            .values()
            .filter(|p| predicate(p))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

        let total = matches.len() as i64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);

        let items = matches.into_iter().skip(offset).take(limit).collect();
        Page::new(items, page, total)
    }
}

fn name_contains(product: &ProductModel, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
}

fn price_between(product: &ProductModel, min_price: Decimal, max_price: Decimal) -> bool {
    product.price >= min_price && product.price <= max_price
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProductRepository {
    async fn find_all(&self, page: &PageRequest) -> Result<Page<ProductModel>, RepositoryError> {
        Ok(self.select(page, |_| true).await)
    }

    async fn find_by_name_contains(
        &self,
        name_part: &str,
        page: &PageRequest,
    ) -> Result<Page<ProductModel>, RepositoryError> {
        let needle = name_part.to_lowercase();
        Ok(self.select(page, |p| name_contains(p, &needle)).await)
    }

    async fn find_by_price_between(
        &self,
        min_price: Decimal,
        max_price: Decimal,
        page: &PageRequest,
    ) -> Result<Page<ProductModel>, RepositoryError> {
        Ok(self
            .select(page, |p| price_between(p, min_price, max_price))
            .await)
    }

    async fn find_by_name_contains_and_price_between(
        &self,
        name_part: &str,
        min_price: Decimal,
        max_price: Decimal,
        page: &PageRequest,
    ) -> Result<Page<ProductModel>, RepositoryError> {
        let needle = name_part.to_lowercase();
        Ok(self
            .select(page, |p| {
                name_contains(p, &needle) && price_between(p, min_price, max_price)
            })
            .await)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductModel>, RepositoryError> {
        Ok(self.store.read().await.rows.get(&id).cloned())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryProductRepository {
    async fn save(&self, product: &ProductModel) -> Result<ProductModel, RepositoryError> {
        let mut store = self.store.write().await;

        let id = match product.id {
            Some(id) if store.rows.contains_key(&id) => id,
            Some(_) => return Err(RepositoryError::NotFound),
            None => {
                store.last_id += 1;
                store.last_id
            }
        };

        let mut stored = product.clone();
        stored.id = Some(id);
        store.rows.insert(id, stored.clone());

        info!("💾 Stored product {} in memory", id);
        Ok(stored)
    }

    async fn delete(&self, product: &ProductModel) -> Result<(), RepositoryError> {
        let id = product.id.ok_or(RepositoryError::NotFound)?;

        let mut store = self.store.write().await;
        store
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::timestamp_now;

    fn product(name: &str, price: i64) -> ProductModel {
        let now = timestamp_now();
        ProductModel {
            id: None,
            name: name.into(),
            price: Decimal::new(price, 0),
            discount_price: None,
            image_url: None,
            description: None,
            category: None,
            status: None,
            created_at: now,
            updated_at: now,
        }
    }

    async fn seeded() -> InMemoryProductRepository {
        let repo = InMemoryProductRepository::new();
        for (name, price) in [("Apple", 10), ("Banana", 5), ("apple pie", 8)] {
            repo.save(&product(name, price)).await.unwrap();
        }
        repo
    }

    fn names(page: &Page<ProductModel>) -> Vec<&str> {
        page.items.iter().map(|p| p.name.as_str()).collect()
    }

    #[tokio::test]
    async fn save_assigns_increasing_ids() {
        let repo = InMemoryProductRepository::new();
        let first = repo.save(&product("A", 1)).await.unwrap();
        let second = repo.save(&product("B", 2)).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn save_with_unknown_id_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let mut ghost = product("Ghost", 1);
        ghost.id = Some(999);

        assert!(matches!(
            repo.save(&ghost).await,
            Err(RepositoryError::NotFound)
        ));
        assert!(repo.find_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn name_match_ignores_case_and_orders_bytewise() {
        let repo = seeded().await;
        let page = PageRequest::new(0, 10).unwrap();

        let all = repo.find_all(&page).await.unwrap();
        assert_eq!(names(&all), vec!["Apple", "Banana", "apple pie"]);

        let apples = repo.find_by_name_contains("APPLE", &page).await.unwrap();
        assert_eq!(names(&apples), vec!["Apple", "apple pie"]);
        assert_eq!(apples.total_count, 2);
    }

    #[tokio::test]
    async fn wildcard_characters_are_literal() {
        let repo = seeded().await;
        repo.save(&product("100% juice", 3)).await.unwrap();
        let page = PageRequest::new(0, 10).unwrap();

        let hits = repo.find_by_name_contains("%", &page).await.unwrap();
        assert_eq!(names(&hits), vec!["100% juice"]);
    }

    #[tokio::test]
    async fn price_range_is_inclusive() {
        let repo = seeded().await;
        let page = PageRequest::new(0, 10).unwrap();

        let hits = repo
            .find_by_price_between(Decimal::new(5, 0), Decimal::new(8, 0), &page)
            .await
            .unwrap();
        assert_eq!(names(&hits), vec!["Banana", "apple pie"]);

        let inverted = repo
            .find_by_price_between(Decimal::new(10, 0), Decimal::new(5, 0), &page)
            .await
            .unwrap();
        assert!(inverted.items.is_empty());
        assert_eq!(inverted.total_count, 0);
    }

    #[tokio::test]
    async fn ties_on_name_fall_back_to_id() {
        let repo = InMemoryProductRepository::new();
        for price in [3, 1, 2] {
            repo.save(&product("Same", price)).await.unwrap();
        }

        let page = repo
            .find_all(&PageRequest::new(0, 10).unwrap())
            .await
            .unwrap();
        let ids: Vec<_> = page.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    }

    #[tokio::test]
    async fn delete_removes_row_once() {
        let repo = seeded().await;
        let apple = repo.find_by_id(1).await.unwrap().unwrap();

        repo.delete(&apple).await.unwrap();
        assert!(repo.find_by_id(1).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(&apple).await,
            Err(RepositoryError::NotFound)
        ));
    }
}
