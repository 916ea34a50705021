#![allow(dead_code)]

use product::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::{FindAllProducts, ProductRequest},
        response::product::ProductView,
    },
    state::AppState,
};
use rust_decimal::Decimal;

pub struct Catalog {
    pub query: DynProductQueryService,
    pub command: DynProductCommandService,
}

pub fn catalog() -> Catalog {
    let state = AppState::in_memory();
    Catalog {
        query: state.di_container.product_query.clone(),
        command: state.di_container.product_command.clone(),
    }
}

pub fn request(name: &str, price: &str) -> ProductRequest {
    ProductRequest {
        name: name.to_string(),
        price: price.parse().expect("valid decimal literal"),
        discount_price: None,
        image_url: None,
        description: None,
        category: None,
        status: None,
    }
}

pub fn list(name: Option<&str>, min: Option<i64>, max: Option<i64>) -> FindAllProducts {
    FindAllProducts {
        name: name.map(str::to_string),
        min_price: min.map(|v| Decimal::new(v, 0)),
        max_price: max.map(|v| Decimal::new(v, 0)),
        page: 0,
        size: 10,
    }
}

/// Apple (10), Banana (5) and "apple pie" (8).
pub async fn seeded_catalog() -> Catalog {
    let catalog = catalog();
    for (name, price) in [("Apple", "10"), ("Banana", "5"), ("apple pie", "8")] {
        catalog
            .command
            .create_product(&request(name, price))
            .await
            .expect("seed product");
    }
    catalog
}

pub fn names(items: &[ProductView]) -> Vec<&str> {
    items.iter().map(|p| p.name.as_str()).collect()
}
