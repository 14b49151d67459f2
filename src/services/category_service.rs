// src/services/category_service.rs

use validator::Validate;

use crate::{
    error::ApiError,
    http::HttpService,
    models::{
        ListQuery,
        category::{Category, CategoryWithChildren, CreateCategoryDto, UpdateCategoryDto},
    },
};

/// HTTP wrapper for the categories resource.
#[derive(Debug, Clone)]
pub struct CategoryService {
    http: HttpService,
}

impl CategoryService {
    pub fn new(http: HttpService) -> Self {
        Self { http }
    }

    /// Root categories with their direct children.
    pub async fn get_categories(
        &self,
        query: &ListQuery,
    ) -> Result<Vec<CategoryWithChildren>, ApiError> {
        self.http.get_with_query("/api/categories", query).await
    }

    pub async fn get_category(&self, id: i64) -> Result<Category, ApiError> {
        self.http.get(&format!("/api/categories/{}", id)).await
    }

    pub async fn create_category(&self, input: &CreateCategoryDto) -> Result<Category, ApiError> {
        input.validate()?;
        self.http.post("/api/categories", input).await
    }

    pub async fn update_category(
        &self,
        id: i64,
        input: &UpdateCategoryDto,
    ) -> Result<Category, ApiError> {
        input.validate()?;
        self.http.patch(&format!("/api/categories/{}", id), input).await
    }

    pub async fn delete_category(&self, id: i64) -> Result<Category, ApiError> {
        self.http.delete(&format!("/api/categories/{}", id)).await
    }
}
