//! Service layer: enrollment business logic.
//!
//! [`EnrollmentEngine`] owns every enrollment record, enforces the
//! capacity and duplicate-enrollment rules, and answers queries over
//! the enrollment set.

pub mod enrollment_engine;

pub use enrollment_engine::EnrollmentEngine;
