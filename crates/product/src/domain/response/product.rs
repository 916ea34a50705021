use crate::model::Product as ProductModel;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Boundary projection of a stored product.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: Option<i64>,
    pub name: String,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<ProductModel> for ProductView {
    fn from(value: ProductModel) -> Self {
        ProductView {
            id: value.id,
            name: value.name,
            price: value.price,
            discount_price: value.discount_price,
            image_url: value.image_url,
            description: value.description,
            category: value.category,
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
