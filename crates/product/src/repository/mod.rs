pub mod command;
pub mod memory;
pub mod query;

pub(crate) const PRODUCT_COLUMNS: &str = "id, name, price, discount_price, image_url, description, \
     category, status, created_at, updated_at";
