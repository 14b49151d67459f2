// src/services/article_service.rs

use validator::Validate;

use crate::{
    error::ApiError,
    http::HttpService,
    models::{
        IdSet, Paginated,
        article::{Article, CreateArticleDto, GetArticlesQuery, UpdateArticleDto},
    },
};

/// HTTP wrapper for the articles resource.
#[derive(Debug, Clone)]
pub struct ArticleService {
    http: HttpService,
}

impl ArticleService {
    pub fn new(http: HttpService) -> Self {
        Self { http }
    }

    pub async fn get_all_articles(
        &self,
        query: &GetArticlesQuery,
    ) -> Result<Paginated<Article>, ApiError> {
        self.http.get_with_query("/api/articles", query).await
    }

    pub async fn get_one(&self, id: i64) -> Result<Article, ApiError> {
        self.http.get(&format!("/api/articles/{}", id)).await
    }

    pub async fn create_article(&self, input: &CreateArticleDto) -> Result<Article, ApiError> {
        input.validate()?;
        self.http.post("/api/articles", input).await
    }

    pub async fn update_article(
        &self,
        id: i64,
        input: &UpdateArticleDto,
    ) -> Result<Article, ApiError> {
        input.validate()?;
        self.http.patch(&format!("/api/articles/{}", id), input).await
    }

    pub async fn delete_article(&self, id: i64) -> Result<Article, ApiError> {
        self.http
            .delete(&format!("/api/articles/admin/delete/{}", id))
            .await
    }

    /// Deletes every selected article, not just the first row.
    pub async fn delete_many_articles(&self, ids: &[i64]) -> Result<Vec<Article>, ApiError> {
        let body = IdSet { ids: ids.to_vec() };
        self.http
            .delete_with_body("/api/articles/admin/delete-many", &body)
            .await
    }
}
