//! # campus-registrar
//!
//! In-memory enrollment integrity and query engine for academic course
//! administration.
//!
//! The crate tracks students, instructors, courses, and the enrollment
//! relationships between students and courses. The core is the
//! [`service::EnrollmentEngine`]: it decides when an enrollment may be
//! created or dropped, enforces capacity and duplicate-enrollment rules,
//! and answers queries over the enrollment set.
//!
//! ## Architecture
//!
//! ```text
//! Caller (demo binary, tests)
//!     │
//!     ├── EnrollmentEngine (service/)
//!     │       owns every Enrollment record (active + archive)
//!     │
//!     ├── CourseRegistry (domain/)
//!     │       owns every Course, insertion-ordered
//!     │
//!     └── Student / Instructor (domain/)
//!             caller-owned entities, id-based back-references
//! ```
//!
//! Entities relate to each other by opaque identifiers, never by shared
//! ownership: `Course` and `Student` hold `EnrollmentId` lists while the
//! engine's arena owns the records themselves. Everything is
//! single-threaded, synchronous, and process-local.

pub mod config;
pub mod domain;
pub mod error;
pub mod service;

pub use domain::{
    Course, CourseId, CourseRegistry, Enrollment, EnrollmentId, EnrollmentStatus, Instructor,
    InstructorId, Person, Role, Student, StudentId,
};
pub use error::RegistrarError;
pub use service::EnrollmentEngine;
