mod product;

pub use self::product::{Product, timestamp_now};
