// src/grading/session.rs

use std::collections::HashMap;

use crate::{
    error::ApiError,
    models::activity::{AnswerGrade, AttemptAnswer, AttemptDetail, GradeSubmission},
};

/// Local edit state for grading one attempt.
///
/// Holds per-answer scores and feedback plus the overall feedback text
/// from the moment the attempt detail loads until the grader saves or
/// navigates away. Nothing here touches the network; persisting the
/// session is the grading screen's job.
///
/// Scoring rules:
/// * Choice questions were scored at submission time; their stored
///   score always wins, whatever edits were attempted locally.
/// * Free-text questions take the grader's value, seeded from the
///   stored score or 0 if the answer was never scored.
#[derive(Debug)]
pub struct GradeSession {
    detail: AttemptDetail,
    answer_scores: HashMap<i64, f64>,
    answer_feedback: HashMap<i64, String>,
    overall_feedback: String,
}

impl GradeSession {
    /// Seeds edit state from a freshly loaded attempt detail.
    ///
    /// Answers that have never been scored stay absent from the score
    /// map; their effective score is 0 until the grader enters one,
    /// and `all_manual_answers_scored` reports the gap.
    pub fn new(detail: AttemptDetail) -> Self {
        let answer_scores = detail
            .answers
            .iter()
            .filter_map(|a| a.score.map(|s| (a.id, s)))
            .collect();

        let answer_feedback = detail
            .answers
            .iter()
            .map(|a| (a.id, a.feedback.clone().unwrap_or_default()))
            .collect();

        let overall_feedback = detail
            .attempt
            .grader_feedback
            .clone()
            .unwrap_or_default();

        Self {
            detail,
            answer_scores,
            answer_feedback,
            overall_feedback,
        }
    }

    pub fn detail(&self) -> &AttemptDetail {
        &self.detail
    }

    pub fn answers(&self) -> &[AttemptAnswer] {
        &self.detail.answers
    }

    pub fn overall_feedback(&self) -> &str {
        &self.overall_feedback
    }

    pub fn score_of(&self, answer_id: i64) -> Option<f64> {
        self.answer_scores.get(&answer_id).copied()
    }

    pub fn feedback_of(&self, answer_id: i64) -> Option<&str> {
        self.answer_feedback.get(&answer_id).map(|s| s.as_str())
    }

    /// Records a manually entered score.
    ///
    /// Rejects scores outside `[0, points]` before they can enter the
    /// save payload. Edits recorded against an auto-graded answer are
    /// accepted but never override its stored score.
    pub fn set_score(&mut self, answer_id: i64, score: f64) -> Result<(), ApiError> {
        let answer = self.answer(answer_id)?;

        let points = answer.question.points;
        if !score.is_finite() || score < 0.0 || score > points {
            return Err(ApiError::Validation(format!(
                "Score {} for answer {} is outside [0, {}].",
                score, answer_id, points
            )));
        }

        self.answer_scores.insert(answer_id, score);
        Ok(())
    }

    pub fn set_feedback(&mut self, answer_id: i64, feedback: impl Into<String>) -> Result<(), ApiError> {
        self.answer(answer_id)?;
        self.answer_feedback.insert(answer_id, feedback.into());
        Ok(())
    }

    pub fn set_overall_feedback(&mut self, feedback: impl Into<String>) {
        self.overall_feedback = feedback.into();
    }

    /// The score this answer will be saved with: the grader's value for
    /// manually graded questions (0 if never touched), the stored score
    /// for auto-graded ones.
    pub fn effective_score(&self, answer: &AttemptAnswer) -> f64 {
        if answer.question.kind.is_manually_graded() {
            self.answer_scores.get(&answer.id).copied().unwrap_or(0.0)
        } else {
            answer.score.unwrap_or(0.0)
        }
    }

    /// Aggregate total across all answers. Recomputed on demand, so it
    /// always reflects the latest edits.
    pub fn total(&self) -> f64 {
        self.detail
            .answers
            .iter()
            .map(|a| self.effective_score(a))
            .sum()
    }

    /// Maximum achievable total for this attempt.
    pub fn max_total(&self) -> f64 {
        self.detail.answers.iter().map(|a| a.question.points).sum()
    }

    /// True once every manually graded answer has an entered score, i.e.
    /// the aggregate total is no longer provisional.
    pub fn all_manual_answers_scored(&self) -> bool {
        self.detail
            .answers
            .iter()
            .filter(|a| a.question.kind.is_manually_graded())
            .all(|a| self.answer_scores.contains_key(&a.id))
    }

    /// Builds the save payload: exactly one entry per answer, in detail
    /// order, scored by the effective-score rule.
    pub fn submission(&self) -> GradeSubmission {
        let answers = self
            .detail
            .answers
            .iter()
            .map(|a| AnswerGrade {
                id: a.id,
                score: self.effective_score(a),
                feedback: self
                    .answer_feedback
                    .get(&a.id)
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect();

        GradeSubmission {
            overall_feedback: self.overall_feedback.clone(),
            answers,
        }
    }

    fn answer(&self, answer_id: i64) -> Result<&AttemptAnswer, ApiError> {
        self.detail
            .answers
            .iter()
            .find(|a| a.id == answer_id)
            .ok_or_else(|| {
                ApiError::Validation(format!(
                    "Answer {} does not belong to attempt {}.",
                    answer_id, self.detail.attempt.id
                ))
            })
    }
}
