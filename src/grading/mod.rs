// src/grading/mod.rs

pub mod roster;
pub mod session;

pub use roster::{StudentAttempts, group_attempts_by_student};
pub use session::GradeSession;

use crate::{
    cache::QueryCache,
    error::ApiError,
    models::{
        Paginated,
        activity::{ActivityAttempt, GetAttemptsQuery},
    },
    services::ActivityApi,
};

/// Drives the grading workflow for one activity: cached attempt
/// listing, opening an attempt for review, and saving grades.
///
/// One screen serves one grader; `&mut self` on every mutating method
/// means a second save cannot start while one is in flight. There are
/// no automatic retries: a failed save keeps the session intact and the
/// grader triggers it again.
pub struct GradingScreen<A: ActivityApi> {
    api: A,
    cache: QueryCache,
    activity_id: i64,
    session: Option<GradeSession>,
}

impl<A: ActivityApi> GradingScreen<A> {
    pub fn new(api: A, activity_id: i64) -> Self {
        Self {
            api,
            cache: QueryCache::new(),
            activity_id,
            session: None,
        }
    }

    /// Attempts for this activity grouped by student, read through the
    /// query cache. `search` filters on student name, server-side for
    /// the fetch and client-side for the grouping.
    pub async fn load_roster(
        &mut self,
        search: Option<&str>,
    ) -> Result<Vec<StudentAttempts>, ApiError> {
        let attempts = self.load_attempts(search).await?;
        Ok(group_attempts_by_student(&attempts, search))
    }

    async fn load_attempts(
        &mut self,
        search: Option<&str>,
    ) -> Result<Vec<ActivityAttempt>, ApiError> {
        let key = Self::attempts_key(self.activity_id, search);

        if let Some(cached) = self.cache.get::<Vec<ActivityAttempt>>(&key) {
            return Ok(cached);
        }

        let query = GetAttemptsQuery {
            activity_id: self.activity_id,
            search: search.map(|s| s.to_string()),
            take: None,
            skip: None,
        };
        let page: Paginated<ActivityAttempt> = self.api.get_attempts(&query).await?;

        self.cache.insert(&key, &page.items);
        Ok(page.items)
    }

    /// Fetches the attempt detail and opens an edit session seeded from
    /// it. Replaces any session already open, discarding its edits.
    pub async fn open_attempt(&mut self, attempt_id: i64) -> Result<&GradeSession, ApiError> {
        let detail = self.api.get_attempt_detail(attempt_id).await?;
        Ok(self.session.insert(GradeSession::new(detail)))
    }

    /// The open edit session, if an attempt detail has loaded.
    pub fn session(&self) -> Option<&GradeSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut GradeSession> {
        self.session.as_mut()
    }

    /// Submits the open session's grades.
    ///
    /// * No-op returning `Ok(None)` while no attempt detail is loaded.
    /// * On success: invalidates this activity's cached attempt lists
    ///   so grading statuses refresh, closes the session, and returns
    ///   the updated attempt.
    /// * On failure: returns the error with the session untouched, so
    ///   the grader can retry without re-entering anything.
    pub async fn save(&mut self) -> Result<Option<ActivityAttempt>, ApiError> {
        let Some(session) = &self.session else {
            return Ok(None);
        };

        let attempt_id = session.detail().attempt.id;
        let submission = session.submission();

        let updated = self.api.grade_attempt(attempt_id, &submission).await?;

        self.cache
            .invalidate_prefix(&format!("attempts:{}:", self.activity_id));
        self.session = None;

        tracing::debug!(
            "Attempt {} graded, total {}",
            attempt_id,
            updated.score.unwrap_or_default()
        );

        Ok(Some(updated))
    }

    /// Navigating away before saving: local edits are discarded, nothing
    /// is persisted.
    pub fn close(&mut self) {
        self.session = None;
    }

    fn attempts_key(activity_id: i64, search: Option<&str>) -> String {
        format!("attempts:{}:{}", activity_id, search.unwrap_or(""))
    }
}
