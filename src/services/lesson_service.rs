// src/services/lesson_service.rs

use validator::Validate;

use crate::{
    error::ApiError,
    http::HttpService,
    models::lesson::{CreateLessonDto, GetLessonsQuery, Lesson, UpdateLessonDto},
};

/// HTTP wrapper for the lessons resource.
#[derive(Debug, Clone)]
pub struct LessonService {
    http: HttpService,
}

impl LessonService {
    pub fn new(http: HttpService) -> Self {
        Self { http }
    }

    pub async fn get_all_lessons(&self, query: &GetLessonsQuery) -> Result<Vec<Lesson>, ApiError> {
        self.http.get_with_query("/api/lessons/", query).await
    }

    pub async fn get_one(&self, id: i64) -> Result<Lesson, ApiError> {
        self.http.get(&format!("/api/lessons/{}", id)).await
    }

    pub async fn create_lesson(&self, input: &CreateLessonDto) -> Result<Lesson, ApiError> {
        input.validate()?;
        self.http.post("/api/lessons", input).await
    }

    pub async fn update_lesson(&self, id: i64, input: &UpdateLessonDto) -> Result<Lesson, ApiError> {
        input.validate()?;
        self.http.patch(&format!("/api/lessons/{}", id), input).await
    }

    pub async fn delete_lesson(&self, id: i64) -> Result<Lesson, ApiError> {
        self.http.delete(&format!("/api/lessons/{}", id)).await
    }
}
