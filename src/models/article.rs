// src/models/article.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::SortOrder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleType {
    News,
    Tutorial,
    Announcement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleStatus {
    Draft,
    Published,
    Archived,
}

/// Author summary embedded in each article.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleAuthor {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category_id: i64,
    #[serde(rename = "type")]
    pub article_type: ArticleType,
    pub status: ArticleStatus,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub view_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<ArticleAuthor>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleDto {
    #[validate(length(min = 1, max = 300, message = "Title length must be between 1 and 300 characters."))]
    pub title: String,
    #[validate(length(min = 1, message = "Content must not be empty."))]
    pub content: String,
    #[validate(range(min = 1, message = "categoryId must be a positive id."))]
    pub category_id: i64,
    #[serde(rename = "type")]
    pub article_type: ArticleType,
    pub status: ArticleStatus,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleDto {
    #[validate(length(min = 1, max = 300, message = "Title length must be between 1 and 300 characters."))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub article_type: Option<ArticleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetArticlesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub article_type: Option<ArticleType>,
}
