//! Registrar error types.
//!
//! [`RegistrarError`] is the central error type for the crate. Both
//! variants are caller-recoverable business-rule violations signaled
//! before any state mutation. Lookups that find nothing return
//! `Option`, never an error.

use uuid::Uuid;

/// Business-rule violations raised by the enrollment engine.
///
/// The engine performs every check before every mutation, so an error
/// guarantees that no partial enrollment state is observable.
#[derive(Debug, thiserror::Error)]
pub enum RegistrarError {
    /// Enroll attempted against a course already at capacity.
    #[error("course {code} is full (capacity {capacity})")]
    CourseFull {
        /// Course code of the full course.
        code: String,
        /// The course's maximum simultaneous active enrollments.
        capacity: u32,
    },

    /// Enroll attempted for a student/course pair that already has an
    /// active enrollment, regardless of that enrollment's status value.
    #[error("student {student} is already enrolled in course {course}")]
    DuplicateEnrollment {
        /// Identifier of the student.
        student: Uuid,
        /// Identifier of the course.
        course: Uuid,
    },
}
