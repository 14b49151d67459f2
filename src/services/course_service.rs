// src/services/course_service.rs

use validator::Validate;

use crate::{
    error::ApiError,
    http::HttpService,
    models::course::{Course, CourseDetail, CreateCourseDto, GetCoursesQuery, UpdateCourseDto},
};

/// HTTP wrapper for the courses resource.
#[derive(Debug, Clone)]
pub struct CourseService {
    http: HttpService,
}

impl CourseService {
    pub fn new(http: HttpService) -> Self {
        Self { http }
    }

    pub async fn get_all_courses(&self, query: &GetCoursesQuery) -> Result<Vec<Course>, ApiError> {
        self.http.get_with_query("/api/courses/admin/all", query).await
    }

    pub async fn get_course_by_id(&self, id: i64) -> Result<Course, ApiError> {
        self.http.get(&format!("/api/courses/{}", id)).await
    }

    pub async fn get_course_by_slug(&self, slug: &str) -> Result<CourseDetail, ApiError> {
        self.http
            .get(&format!("/api/courses/admin/get-by-slug/{}", slug))
            .await
    }

    pub async fn create_course(&self, input: &CreateCourseDto) -> Result<Course, ApiError> {
        input.validate()?;
        self.http.post("/api/courses", input).await
    }

    pub async fn update_course(&self, id: i64, input: &UpdateCourseDto) -> Result<Course, ApiError> {
        input.validate()?;
        self.http.patch(&format!("/api/courses/{}", id), input).await
    }

    pub async fn delete_course(&self, id: i64) -> Result<Course, ApiError> {
        self.http.delete(&format!("/api/courses/{}", id)).await
    }
}
