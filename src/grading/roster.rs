// src/grading/roster.rs

use crate::models::activity::{ActivityAttempt, GradingStatus, StudentRef};

/// One student's row in the grading roster: the student plus their
/// attempts in submission order.
#[derive(Debug, Clone)]
pub struct StudentAttempts {
    pub student: StudentRef,
    pub attempts: Vec<ActivityAttempt>,
}

impl StudentAttempts {
    /// True when every attempt of this student has been graded.
    pub fn fully_graded(&self) -> bool {
        self.attempts
            .iter()
            .all(|a| a.grading_status == GradingStatus::Graded)
    }
}

/// Groups a flat attempt list by student, preserving submission order
/// within each student and first-appearance order across students.
///
/// `search` is a case-insensitive substring match against the student's
/// "first last" name; non-matching students are dropped wholesale.
/// Pure projection over already-fetched data, no side effects.
pub fn group_attempts_by_student(
    attempts: &[ActivityAttempt],
    search: Option<&str>,
) -> Vec<StudentAttempts> {
    let needle = search.map(|s| s.to_lowercase());

    let mut groups: Vec<StudentAttempts> = Vec::new();
    for attempt in attempts {
        if let Some(needle) = &needle {
            if !attempt.student.full_name().to_lowercase().contains(needle.as_str()) {
                continue;
            }
        }

        match groups.iter_mut().find(|g| g.student.id == attempt.student.id) {
            Some(group) => group.attempts.push(attempt.clone()),
            None => groups.push(StudentAttempts {
                student: attempt.student.clone(),
                attempts: vec![attempt.clone()],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn attempt(id: i64, student_id: i64, first: &str, last: &str, number: i64) -> ActivityAttempt {
        ActivityAttempt {
            id,
            activity_id: 1,
            attempt_number: number,
            student: StudentRef {
                id: student_id,
                first_name: first.to_string(),
                last_name: last.to_string(),
            },
            started_at: Utc::now(),
            completed_at: Some(Utc::now()),
            grading_status: GradingStatus::PendingManual,
            score: None,
            graded_by_id: None,
            graded_at: None,
            grader_feedback: None,
        }
    }

    #[test]
    fn grouping_covers_every_attempt_exactly_once() {
        let attempts = vec![
            attempt(1, 10, "An", "Nguyen", 1),
            attempt(2, 20, "Binh", "Tran", 1),
            attempt(3, 10, "An", "Nguyen", 2),
            attempt(4, 30, "Chi", "Le", 1),
            attempt(5, 10, "An", "Nguyen", 3),
        ];

        let groups = group_attempts_by_student(&attempts, None);

        let total: usize = groups.iter().map(|g| g.attempts.len()).sum();
        assert_eq!(total, attempts.len());

        // First-appearance order across students.
        let student_ids: Vec<i64> = groups.iter().map(|g| g.student.id).collect();
        assert_eq!(student_ids, vec![10, 20, 30]);

        // Submission order within a student.
        let an = &groups[0];
        let numbers: Vec<i64> = an.attempts.iter().map(|a| a.attempt_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        let ids: Vec<i64> = an.attempts.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn search_filters_on_full_name_case_insensitively() {
        let attempts = vec![
            attempt(1, 10, "An", "Nguyen", 1),
            attempt(2, 20, "Binh", "Tran", 1),
            attempt(3, 10, "An", "Nguyen", 2),
        ];

        let groups = group_attempts_by_student(&attempts, Some("an ngu"));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].student.id, 10);
        assert_eq!(groups[0].attempts.len(), 2);

        // The substring may span first and last name.
        let none = group_attempts_by_student(&attempts, Some("nguyen tran"));
        assert!(none.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_roster() {
        assert!(group_attempts_by_student(&[], None).is_empty());
        assert!(group_attempts_by_student(&[], Some("x")).is_empty());
    }

    #[test]
    fn fully_graded_reflects_attempt_statuses() {
        let mut a1 = attempt(1, 10, "An", "Nguyen", 1);
        a1.grading_status = GradingStatus::Graded;
        let a2 = attempt(2, 10, "An", "Nguyen", 2);

        let groups = group_attempts_by_student(&[a1.clone(), a2], None);
        assert!(!groups[0].fully_graded());

        let groups = group_attempts_by_student(&[a1], None);
        assert!(groups[0].fully_graded());
    }
}
