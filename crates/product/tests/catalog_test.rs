mod common;

use common::{catalog, list, names, request, seeded_catalog};
use rust_decimal::Decimal;
use shared::errors::ServiceError;

#[tokio::test]
async fn name_filter_is_case_insensitive_and_sorted() {
    let catalog = seeded_catalog().await;

    let page = catalog
        .query
        .find_all(&list(Some("apple"), None, None))
        .await
        .unwrap();

    assert_eq!(names(&page.data), vec!["Apple", "apple pie"]);
    assert_eq!(page.pagination.total_items, 2);
}

#[tokio::test]
async fn price_range_is_inclusive_and_sorted() {
    let catalog = seeded_catalog().await;

    let page = catalog
        .query
        .find_all(&list(None, Some(6), Some(10)))
        .await
        .unwrap();

    assert_eq!(names(&page.data), vec!["Apple", "apple pie"]);
}

#[tokio::test]
async fn name_and_price_filters_combine() {
    let catalog = seeded_catalog().await;

    let page = catalog
        .query
        .find_all(&list(Some("APPLE"), Some(0), Some(9)))
        .await
        .unwrap();

    assert_eq!(names(&page.data), vec!["apple pie"]);
}

#[tokio::test]
async fn lone_price_bound_lists_everything() {
    let catalog = seeded_catalog().await;

    let page = catalog
        .query
        .find_all(&list(None, Some(9), None))
        .await
        .unwrap();

    assert_eq!(names(&page.data), vec!["Apple", "Banana", "apple pie"]);
}

#[tokio::test]
async fn empty_name_matches_everything() {
    let catalog = seeded_catalog().await;

    let page = catalog
        .query
        .find_all(&list(Some(""), None, None))
        .await
        .unwrap();

    assert_eq!(page.pagination.total_items, 3);
}

#[tokio::test]
async fn empty_store_yields_empty_page() {
    let catalog = catalog();

    let page = catalog.query.find_all(&list(None, None, None)).await.unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.pagination.total_items, 0);
    assert_eq!(page.pagination.total_pages, 0);
}

#[tokio::test]
async fn pages_walk_the_same_order_and_overflow_is_empty() {
    let catalog = seeded_catalog().await;
    catalog
        .command
        .create_product(&request("Apple", "1"))
        .await
        .unwrap();

    let mut seen = Vec::new();
    for index in 0..2 {
        let mut req = list(None, None, None);
        req.page = index;
        req.size = 2;
        let page = catalog.query.find_all(&req).await.unwrap();
        seen.extend(page.data);
    }

    let ids: Vec<_> = seen.iter().map(|p| p.id).collect();
    assert_eq!(names(&seen), vec!["Apple", "Apple", "Banana", "apple pie"]);
    assert_eq!(ids[..2], [Some(1), Some(4)]);

    let mut beyond = list(None, None, None);
    beyond.page = 7;
    beyond.size = 2;
    let page = catalog.query.find_all(&beyond).await.unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.pagination.total_items, 4);
    assert_eq!(page.pagination.total_pages, 2);
    assert_eq!(page.pagination.page, 7);
}

#[tokio::test]
async fn invalid_pagination_is_rejected() {
    let catalog = seeded_catalog().await;

    let mut req = list(None, None, None);
    req.size = 0;

    assert!(matches!(
        catalog.query.find_all(&req).await,
        Err(ServiceError::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let catalog = catalog();
    let mut req = request("Smartphone", "999.99");
    req.discount_price = Some(Decimal::new(89999, 2));
    req.image_url = Some("https://cdn.example/phone.png".into());
    req.description = Some("6.1 inch".into());
    req.category = Some("electronics".into());
    req.status = Some("ACTIVE".into());

    let created = catalog.command.create_product(&req).await.unwrap().data;
    let id = created.id.expect("generated id");
    let fetched = catalog.query.find_by_id(id).await.unwrap().data;

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, req.name);
    assert_eq!(fetched.price, req.price);
    assert_eq!(fetched.discount_price, req.discount_price);
    assert_eq!(fetched.image_url, req.image_url);
    assert_eq!(fetched.description, req.description);
    assert_eq!(fetched.category, req.category);
    assert_eq!(fetched.status, req.status);
    assert_eq!(fetched.created_at, fetched.updated_at);
}

#[tokio::test]
async fn update_overwrites_fields_and_advances_updated_at() {
    let catalog = catalog();
    let mut original = request("Apple", "10");
    original.category = Some("fruit".into());
    let created = catalog.command.create_product(&original).await.unwrap().data;
    let id = created.id.unwrap();

    let updated = catalog
        .command
        .update_product(id, &request("Green apple", "12.50"))
        .await
        .unwrap()
        .data;
    let fetched = catalog.query.find_by_id(id).await.unwrap().data;

    assert_eq!(fetched, updated);
    assert_eq!(fetched.id, Some(id));
    assert_eq!(fetched.name, "Green apple");
    assert_eq!(fetched.price, Decimal::new(1250, 2));
    assert_eq!(fetched.category, None);
    assert_eq!(fetched.created_at, created.created_at);
    assert!(fetched.updated_at > created.updated_at);
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    let catalog = seeded_catalog().await;

    let result = catalog
        .command
        .update_product(999, &request("Ghost", "1"))
        .await;

    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let catalog = seeded_catalog().await;

    catalog.command.delete_product(2).await.unwrap();

    assert!(matches!(
        catalog.query.find_by_id(2).await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        catalog.command.delete_product(2).await,
        Err(ServiceError::NotFound(_))
    ));

    let page = catalog.query.find_all(&list(None, None, None)).await.unwrap();
    assert_eq!(names(&page.data), vec!["Apple", "apple pie"]);
}

#[tokio::test]
async fn largest_page_size_returns_everything_on_one_page() {
    let catalog = seeded_catalog().await;

    let mut req = list(None, None, None);
    req.size = i64::MAX;
    let page = catalog.query.find_all(&req).await.unwrap();

    assert_eq!(page.data.len(), 3);
    assert_eq!(page.pagination.total_pages, 1);
}

#[tokio::test]
async fn prices_and_long_names_are_stored_exactly() {
    let catalog = catalog();
    let long_name = "x".repeat(300);

    let created = catalog
        .command
        .create_product(&request(&long_name, "0.12345"))
        .await
        .unwrap()
        .data;
    let fetched = catalog
        .query
        .find_by_id(created.id.unwrap())
        .await
        .unwrap()
        .data;

    assert_eq!(fetched.name, long_name);
    assert_eq!(fetched.price.to_string(), "0.12345");
}
