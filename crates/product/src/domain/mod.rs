pub mod page;
pub mod requests;
pub mod response;
