use crate::model::Product as ProductModel;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Query string of `GET /api/products`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FindAllProducts {
    /// Case-insensitive substring of the product name.
    #[serde(default)]
    pub name: Option<String>,

    /// Inclusive lower price bound; only applied together with `maxPrice`.
    #[serde(default)]
    pub min_price: Option<Decimal>,

    /// Inclusive upper price bound; only applied together with `minPrice`.
    #[serde(default)]
    pub max_price: Option<Decimal>,

    /// Zero-based page index.
    #[serde(default = "default_page")]
    pub page: i64,

    #[serde(default = "default_page_size")]
    pub size: i64,
}

fn default_page() -> i64 {
    0
}

fn default_page_size() -> i64 {
    10
}

impl FindAllProducts {
    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            name_part: self.name.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
        }
    }
}

/// Optional list filters. Absence of a filter is a valid state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub name_part: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

/// Mutable product fields as sent by a client on create and update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Smartphone")]
    pub name: String,

    #[validate(custom(function = "validate_non_negative"))]
    #[schema(example = "999.99")]
    pub price: Decimal,

    #[serde(default)]
    #[validate(custom(function = "validate_non_negative"))]
    #[schema(example = "899.99")]
    pub discount_price: Option<Decimal>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub status: Option<String>,
}

fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut err = ValidationError::new("range");
        err.message = Some("Amount cannot be negative".into());
        return Err(err);
    }
    Ok(())
}

impl ProductRequest {
    /// A fresh, not yet stored entity stamped with `now` on both timestamps.
    pub fn to_new_model(&self, now: NaiveDateTime) -> ProductModel {
        ProductModel {
            id: None,
            name: self.name.clone(),
            price: self.price,
            discount_price: self.discount_price,
            image_url: self.image_url.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            status: self.status.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites every mutable field; `id` and timestamps are left alone.
    pub fn apply_to(&self, product: &mut ProductModel) {
        product.name = self.name.clone();
        product.price = self.price;
        product.discount_price = self.discount_price;
        product.image_url = self.image_url.clone();
        product.description = self.description.clone();
        product.category = self.category.clone();
        product.status = self.status.clone();
    }
}
