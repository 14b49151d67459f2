// src/models/course.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::SortOrder;
use super::activity::Activity;
use super::category::{Category, validate_slug};
use super::lesson::Lesson;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseStatus {
    Draft,
    Published,
    Archived,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_file_url: Option<String>,
    pub category_id: i64,
    pub status: CourseStatus,
    #[serde(default)]
    pub require_approval: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Course with its related collections, from the by-slug endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: Course,
    pub category: Category,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseDto {
    #[validate(length(min = 1, max = 200, message = "Name length must be between 1 and 200 characters."))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(custom(function = validate_slug))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[validate(range(min = 1, message = "categoryId must be a positive id."))]
    pub category_id: i64,
    pub status: CourseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_approval: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseDto {
    #[validate(length(min = 1, max = 200, message = "Name length must be between 1 and 200 characters."))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(custom(function = validate_slug))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CourseStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_approval: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCoursesQuery {
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
    pub status: Option<CourseStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_approval: Option<bool>,
}
