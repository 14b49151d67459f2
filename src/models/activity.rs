// src/models/activity.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::SortOrder;

/// A gradable unit of coursework attached to a course or lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub status: ActivityStatus,
    pub course_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Quiz,
    Assignment,
    Project,
    Discussion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityStatus {
    Draft,
    Published,
    Archived,
}

/// Question kind. Choice-based kinds are scored automatically at
/// submission; free-text kinds wait for a grader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    Essay,
}

impl QuestionKind {
    /// A question requires a human grader iff its kind is free-text.
    pub fn is_manually_graded(self) -> bool {
        matches!(self, QuestionKind::ShortAnswer | QuestionKind::Essay)
    }
}

/// One selectable option of a choice question.
/// `is_correct` is only present on grader-facing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// One question belonging to an activity, as embedded in attempt answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityQuestion {
    pub id: i64,
    /// Prompt text.
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub points: f64,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
}

impl ActivityQuestion {
    pub fn correct_option(&self) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.is_correct)
    }
}

/// Where an attempt sits in the grading workflow. The backend owns the
/// transitions; the client reads the current state and triggers
/// PENDING_AUTO/PENDING_MANUAL -> GRADED by submitting grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GradingStatus {
    InProgress,
    PendingAuto,
    PendingManual,
    Graded,
}

/// Student summary embedded in each attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRef {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl StudentRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One student's attempt at an activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityAttempt {
    pub id: i64,
    pub activity_id: i64,
    /// Sequential per student + activity, starting at 1.
    pub attempt_number: i64,
    pub student: StudentRef,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub grading_status: GradingStatus,
    /// Aggregate score at the time of the last save. Stale until every
    /// manually graded answer has been scored at least once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graded_by_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graded_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grader_feedback: Option<String>,
}

/// One student response to one question within one attempt.
/// The embedded question is read-only during grading; only `score`
/// and `feedback` are ever written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptAnswer {
    pub id: i64,
    pub question: ActivityQuestion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_option_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl AttemptAnswer {
    /// Tagged view of what the student actually submitted, so callers
    /// match on the response shape instead of probing optional fields.
    pub fn response(&self) -> StudentResponse<'_> {
        if self.question.kind.is_manually_graded() {
            StudentResponse::Text(self.answer.as_deref().unwrap_or(""))
        } else {
            let selected = self
                .selected_option_id
                .and_then(|id| self.question.options.iter().find(|o| o.id == id));
            StudentResponse::Choice(selected)
        }
    }
}

/// What a student submitted for one question.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StudentResponse<'a> {
    /// Choice-based question; `None` when nothing was selected.
    Choice(Option<&'a QuestionOption>),
    /// Free-text question.
    Text(&'a str),
}

/// Attempt plus its full answer list, as returned by the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptDetail {
    #[serde(flatten)]
    pub attempt: ActivityAttempt,
    pub answers: Vec<AttemptAnswer>,
}

/// One per-answer grade entry of a grade submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerGrade {
    pub id: i64,
    pub score: f64,
    pub feedback: String,
}

/// Body of `POST /api/activities/attempts/{id}/grade`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeSubmission {
    pub overall_feedback: String,
    pub answers: Vec<AnswerGrade>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetActivitiesQuery {
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
    pub lesson_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ActivityStatus>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<ActivityType>,
}

/// Query for the attempts listing of one activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAttemptsQuery {
    pub activity_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<i64>,
}

impl GetAttemptsQuery {
    pub fn for_activity(activity_id: i64) -> Self {
        Self {
            activity_id,
            search: None,
            take: None,
            skip: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityDto {
    #[validate(length(min = 1, max = 200, message = "Title length must be between 1 and 200 characters."))]
    pub title: String,
    #[validate(length(max = 5000, message = "Description must be at most 5000 characters."))]
    pub description: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub status: ActivityStatus,
    #[validate(range(min = 1, message = "courseId must be a positive id."))]
    pub course_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActivityDto {
    #[validate(length(min = 1, max = 200, message = "Title length must be between 1 and 200 characters."))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[validate(length(max = 5000, message = "Description must be at most 5000 characters."))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<ActivityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ActivityStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&QuestionKind::MultipleChoice).unwrap(),
            "\"MULTIPLE_CHOICE\""
        );
        assert_eq!(
            serde_json::from_str::<QuestionKind>("\"SHORT_ANSWER\"").unwrap(),
            QuestionKind::ShortAnswer
        );
    }

    #[test]
    fn manual_grading_covers_free_text_kinds_only() {
        assert!(QuestionKind::ShortAnswer.is_manually_graded());
        assert!(QuestionKind::Essay.is_manually_graded());
        assert!(!QuestionKind::MultipleChoice.is_manually_graded());
        assert!(!QuestionKind::TrueFalse.is_manually_graded());
    }

    #[test]
    fn grading_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&GradingStatus::PendingManual).unwrap(),
            "\"PENDING_MANUAL\""
        );
        assert_eq!(
            serde_json::from_str::<GradingStatus>("\"IN_PROGRESS\"").unwrap(),
            GradingStatus::InProgress
        );
    }

    #[test]
    fn attempt_detail_flattens_attempt_fields() {
        let json = serde_json::json!({
            "id": 10,
            "activityId": 3,
            "attemptNumber": 1,
            "student": { "id": 5, "firstName": "An", "lastName": "Nguyen" },
            "startedAt": "2025-04-01T08:00:00Z",
            "gradingStatus": "PENDING_MANUAL",
            "answers": [{
                "id": 100,
                "question": {
                    "id": 40,
                    "question": "Explain ownership.",
                    "type": "ESSAY",
                    "points": 10.0,
                    "options": []
                },
                "answer": "It moves."
            }]
        });

        let detail: AttemptDetail = serde_json::from_value(json).unwrap();
        assert_eq!(detail.attempt.id, 10);
        assert_eq!(detail.attempt.grading_status, GradingStatus::PendingManual);
        assert_eq!(detail.answers.len(), 1);
        assert_eq!(detail.answers[0].question.kind, QuestionKind::Essay);
        assert_eq!(
            detail.answers[0].response(),
            StudentResponse::Text("It moves.")
        );
    }

    #[test]
    fn choice_response_resolves_selected_option() {
        let json = serde_json::json!({
            "id": 101,
            "question": {
                "id": 41,
                "question": "2 + 2 = ?",
                "type": "MULTIPLE_CHOICE",
                "points": 5.0,
                "options": [
                    { "id": 1, "text": "3", "isCorrect": false },
                    { "id": 2, "text": "4", "isCorrect": true }
                ]
            },
            "selectedOptionId": 2,
            "isCorrect": true,
            "score": 5.0
        });

        let answer: AttemptAnswer = serde_json::from_value(json).unwrap();
        match answer.response() {
            StudentResponse::Choice(Some(opt)) => {
                assert_eq!(opt.id, 2);
                assert!(opt.is_correct);
            }
            other => panic!("unexpected response view: {:?}", other),
        }
        assert_eq!(answer.question.correct_option().unwrap().id, 2);
    }
}
