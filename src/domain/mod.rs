//! Domain layer: entity model and course registry.
//!
//! This module contains the entity model (people, courses, enrollment
//! records, and their typed identifiers) plus the [`CourseRegistry`]
//! that owns the course set. Entities carry identifier-based relations
//! only; the record arenas live in the registry and the engine, so the
//! reference graph has no ownership cycles.

pub mod course;
pub mod course_registry;
pub mod enrollment;
pub mod ids;
pub mod person;

pub use course::Course;
pub use course_registry::CourseRegistry;
pub use enrollment::{Enrollment, EnrollmentStatus};
pub use ids::{CourseId, EnrollmentId, InstructorId, StudentId};
pub use person::{Instructor, Person, Role, Student};
