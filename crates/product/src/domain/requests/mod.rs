mod product;

pub use self::product::{FindAllProducts, ProductFilter, ProductRequest};
