// src/services/activity_service.rs

use async_trait::async_trait;
use validator::Validate;

use crate::{
    error::ApiError,
    http::HttpService,
    models::{
        Paginated,
        activity::{
            Activity, ActivityAttempt, AttemptDetail, CreateActivityDto, GetActivitiesQuery,
            GetAttemptsQuery, GradeSubmission, UpdateActivityDto,
        },
    },
};

/// The slice of the backend the grading workflow depends on.
///
/// `ActivityService` is the real implementation; the trait exists so the
/// grading screen can be driven by an in-memory fake in unit tests.
#[async_trait]
pub trait ActivityApi: Send + Sync {
    /// Attempts for one activity, optionally filtered by student name.
    async fn get_attempts(
        &self,
        query: &GetAttemptsQuery,
    ) -> Result<Paginated<ActivityAttempt>, ApiError>;

    /// One attempt with its full answer list (questions and options
    /// expanded, `isCorrect` visible).
    async fn get_attempt_detail(&self, attempt_id: i64) -> Result<AttemptDetail, ApiError>;

    /// Submits per-answer scores and feedback in one batched call.
    /// Returns the updated attempt, now GRADED.
    async fn grade_attempt(
        &self,
        attempt_id: i64,
        submission: &GradeSubmission,
    ) -> Result<ActivityAttempt, ApiError>;
}

/// HTTP wrapper for the activities resource.
#[derive(Debug, Clone)]
pub struct ActivityService {
    http: HttpService,
}

impl ActivityService {
    pub fn new(http: HttpService) -> Self {
        Self { http }
    }

    pub async fn get_all_activities(
        &self,
        query: &GetActivitiesQuery,
    ) -> Result<Vec<Activity>, ApiError> {
        self.http.get_with_query("/api/activities/", query).await
    }

    pub async fn get_one(&self, id: i64) -> Result<Activity, ApiError> {
        self.http
            .get(&format!("/api/activities/admin/get-by-id/{}", id))
            .await
    }

    pub async fn create_activity(&self, input: &CreateActivityDto) -> Result<Activity, ApiError> {
        input.validate()?;
        self.http.post("/api/activities/admin/create", input).await
    }

    pub async fn update_activity(
        &self,
        id: i64,
        input: &UpdateActivityDto,
    ) -> Result<Activity, ApiError> {
        input.validate()?;
        self.http
            .put(&format!("/api/activities/admin/update/{}", id), input)
            .await
    }

    pub async fn delete_activity(&self, id: i64) -> Result<Activity, ApiError> {
        self.http
            .delete(&format!("/api/activities/admin/delete/{}", id))
            .await
    }
}

#[async_trait]
impl ActivityApi for ActivityService {
    async fn get_attempts(
        &self,
        query: &GetAttemptsQuery,
    ) -> Result<Paginated<ActivityAttempt>, ApiError> {
        self.http
            .get_with_query("/api/activities/attempts", query)
            .await
    }

    async fn get_attempt_detail(&self, attempt_id: i64) -> Result<AttemptDetail, ApiError> {
        self.http
            .get(&format!("/api/activities/attempts/{}", attempt_id))
            .await
    }

    async fn grade_attempt(
        &self,
        attempt_id: i64,
        submission: &GradeSubmission,
    ) -> Result<ActivityAttempt, ApiError> {
        tracing::debug!(
            "Submitting grades for attempt {}: {} answer entries",
            attempt_id,
            submission.answers.len()
        );
        self.http
            .post(
                &format!("/api/activities/attempts/{}/grade", attempt_id),
                submission,
            )
            .await
    }
}
