use crate::domain::{page::Page, response::pagination::Pagination};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ApiResponsePagination<T> {
    pub status: String,
    pub message: String,
    pub data: T,
    pub pagination: Pagination,
}

impl<T> ApiResponsePagination<Vec<T>> {
    pub fn from_page(message: impl Into<String>, page: Page<T>) -> Self {
        let pagination = Pagination::from(&page);
        Self {
            status: "success".to_string(),
            message: message.into(),
            data: page.items,
            pagination,
        }
    }
}
