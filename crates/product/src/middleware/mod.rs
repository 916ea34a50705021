pub mod params;
pub mod validate;
