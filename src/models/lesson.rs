// src/models/lesson.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::SortOrder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LessonStatus {
    Draft,
    Published,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub course_id: i64,
    pub status: LessonStatus,
    /// Id of the lesson this one follows, `None` for the first lesson.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLessonDto {
    #[validate(length(min = 1, max = 200, message = "Name length must be between 1 and 200 characters."))]
    pub name: String,
    pub description: String,
    #[validate(range(min = 1, message = "courseId must be a positive id."))]
    pub course_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LessonStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLessonDto {
    #[validate(length(min = 1, max = 200, message = "Name length must be between 1 and 200 characters."))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LessonStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLessonsQuery {
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
    pub course_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LessonStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_id: Option<i64>,
}
