// src/services/enrollment_service.rs

use validator::Validate;

use crate::{
    error::ApiError,
    http::HttpService,
    models::enrollment::{
        CreateEnrollmentDto, Enrollment, GetEnrollmentsQuery, UpdateEnrollmentDto,
    },
};

/// HTTP wrapper for the enrollments resource.
///
/// Update and delete are addressed by (courseId, userId) query rather
/// than row id, matching the backend contract.
#[derive(Debug, Clone)]
pub struct EnrollmentService {
    http: HttpService,
}

impl EnrollmentService {
    pub fn new(http: HttpService) -> Self {
        Self { http }
    }

    pub async fn get_all_enrollments(
        &self,
        query: &GetEnrollmentsQuery,
    ) -> Result<Vec<Enrollment>, ApiError> {
        self.http.get_with_query("/api/enrollments/", query).await
    }

    pub async fn create_enrollment(
        &self,
        input: &CreateEnrollmentDto,
    ) -> Result<Enrollment, ApiError> {
        input.validate()?;
        self.http.post("/api/enrollments", input).await
    }

    pub async fn update_enrollment(
        &self,
        query: &GetEnrollmentsQuery,
        input: &UpdateEnrollmentDto,
    ) -> Result<Enrollment, ApiError> {
        input.validate()?;
        self.http
            .patch_with_query("/api/enrollments/update", query, input)
            .await
    }

    pub async fn delete_enrollment(
        &self,
        query: &GetEnrollmentsQuery,
    ) -> Result<Enrollment, ApiError> {
        self.http
            .delete_with_query("/api/enrollments/delete", query)
            .await
    }
}
