//! Enrollment record linking one student to one course.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CourseId, EnrollmentId, StudentId};

/// Lifecycle status of an enrollment.
///
/// There is no enforced transition graph: any status may move to any
/// other. Only dropping is an engine-mediated transition, and even it
/// performs no legality check: dropping an already-completed
/// enrollment is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    /// Active participation in the course.
    Enrolled,
    /// Course finished.
    Completed,
    /// Withdrawn from the course.
    Dropped,
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enrolled => write!(f, "ENROLLED"),
            Self::Completed => write!(f, "COMPLETED"),
            Self::Dropped => write!(f, "DROPPED"),
        }
    }
}

/// The record linking one student to one course, with a status and an
/// optional numeric grade.
///
/// Student and course references are set at construction and immutable
/// thereafter. Alongside the identifiers the record carries display
/// snapshots of the student's full name and the course code. Both
/// source fields are immutable, so the snapshots cannot go stale and
/// rendering needs no arena lookups.
#[derive(Debug, Clone, Serialize)]
pub struct Enrollment {
    id: EnrollmentId,
    student_id: StudentId,
    course_id: CourseId,
    student_name: String,
    course_code: String,
    status: EnrollmentStatus,
    grade: Option<f64>,
    enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    /// Creates a record with status [`EnrollmentStatus::Enrolled`] and
    /// no grade. Engine-only: records are created exclusively by
    /// [`crate::service::EnrollmentEngine::enroll`].
    pub(crate) fn new(
        student_id: StudentId,
        course_id: CourseId,
        student_name: String,
        course_code: String,
    ) -> Self {
        Self {
            id: EnrollmentId::new(),
            student_id,
            course_id,
            student_name,
            course_code,
            status: EnrollmentStatus::Enrolled,
            grade: None,
            enrolled_at: Utc::now(),
        }
    }

    /// The record's identifier.
    #[must_use]
    pub const fn id(&self) -> EnrollmentId {
        self.id
    }

    /// The enrolled student.
    #[must_use]
    pub const fn student_id(&self) -> StudentId {
        self.student_id
    }

    /// The course enrolled into.
    #[must_use]
    pub const fn course_id(&self) -> CourseId {
        self.course_id
    }

    /// Full name of the enrolled student at enrollment time.
    #[must_use]
    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    /// Code of the course enrolled into.
    #[must_use]
    pub fn course_code(&self) -> &str {
        &self.course_code
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> EnrollmentStatus {
        self.status
    }

    /// Current grade, if one has been recorded. No range constraint.
    #[must_use]
    pub const fn grade(&self) -> Option<f64> {
        self.grade
    }

    /// When the record was created.
    #[must_use]
    pub const fn enrolled_at(&self) -> DateTime<Utc> {
        self.enrolled_at
    }

    pub(crate) fn set_status(&mut self, status: EnrollmentStatus) {
        self.status = status;
    }

    pub(crate) fn set_grade(&mut self, grade: Option<f64>) {
        self.grade = grade;
    }
}

impl PartialEq for Enrollment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Enrollment {}

impl fmt::Display for Enrollment {
    /// `"Enrollment[id=<id>, student=<name>, course=<code>,
    /// status=<STATUS>, grade=<value|'-'>]"`. This exact shape is part
    /// of the observable contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug formatting keeps the decimal on whole values (92.0
        // renders as "92.0", not "92"), matching the contract text.
        let grade = self
            .grade
            .map_or_else(|| "-".to_string(), |g| format!("{g:?}"));
        write!(
            f,
            "Enrollment[id={}, student={}, course={}, status={}, grade={}]",
            self.id, self.student_name, self.course_code, self.status, grade
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn make_record() -> Enrollment {
        Enrollment::new(
            StudentId::new(),
            CourseId::new(),
            "Ainur K".to_string(),
            "OOP101".to_string(),
        )
    }

    #[test]
    fn new_record_is_enrolled_and_ungraded() {
        let e = make_record();
        assert_eq!(e.status(), EnrollmentStatus::Enrolled);
        assert_eq!(e.grade(), None);
    }

    #[test]
    fn display_without_grade_uses_dash() {
        let e = make_record();
        let text = format!("{e}");
        assert!(text.starts_with(&format!("Enrollment[id={}, student=Ainur K", e.id())));
        assert!(text.ends_with("course=OOP101, status=ENROLLED, grade=-]"));
    }

    #[test]
    fn display_with_grade_and_status() {
        let mut e = make_record();
        e.set_grade(Some(92.0));
        e.set_status(EnrollmentStatus::Completed);
        let text = format!("{e}");
        assert!(text.ends_with("status=COMPLETED, grade=92.0]"));
    }

    #[test]
    fn display_keeps_decimal_on_whole_grades() {
        let mut e = make_record();
        e.set_grade(Some(42.0));
        assert!(format!("{e}").ends_with("grade=42.0]"));
        e.set_grade(Some(87.5));
        assert!(format!("{e}").ends_with("grade=87.5]"));
    }

    #[test]
    fn any_status_may_move_to_any_other() {
        let mut e = make_record();
        e.set_status(EnrollmentStatus::Completed);
        e.set_status(EnrollmentStatus::Dropped);
        e.set_status(EnrollmentStatus::Enrolled);
        assert_eq!(e.status(), EnrollmentStatus::Enrolled);
    }

    #[test]
    fn status_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&EnrollmentStatus::Enrolled).ok();
        assert_eq!(json.as_deref(), Some("\"ENROLLED\""));
    }
}
