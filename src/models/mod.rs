// src/models/mod.rs

pub mod activity;
pub mod article;
pub mod category;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod library_material;
pub mod user;

use serde::{Deserialize, Serialize};

/// Page of results as returned by the backend's paginated listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Pagination/sort/search parameters accepted by listings without
/// resource-specific filters. Resources that filter further carry
/// these same fields on their own query DTO.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
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
}

/// Body for bulk deletes: the full selected id set, never just the
/// first row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdSet {
    pub ids: Vec<i64>,
}
