//! Type-safe entity identifiers.
//!
//! Each entity kind gets its own newtype wrapper around [`uuid::Uuid`]
//! (v4) so identifiers of different kinds cannot be confused. Identity
//! of every entity is identifier equality; attribute equality never
//! enters into it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a student.
///
/// Wraps a UUID v4. Generated once at construction time and immutable
/// thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(uuid::Uuid);

/// Unique identifier for an instructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstructorId(uuid::Uuid);

/// Unique identifier for a course.
///
/// Used as the dictionary key in [`super::CourseRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(uuid::Uuid);

/// Unique identifier for an enrollment record.
///
/// Used as the arena key in the enrollment engine and as the
/// back-reference element held by [`super::Course`] and
/// [`super::Student`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnrollmentId(uuid::Uuid);

macro_rules! id_impls {
    ($name:ident) => {
        impl $name {
            /// Creates a new random identifier (UUID v4).
            #[must_use]
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            /// Returns the inner [`uuid::Uuid`].
            #[must_use]
            pub const fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<uuid::Uuid> for $name {
            fn from(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for uuid::Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

id_impls!(StudentId);
id_impls!(InstructorId);
id_impls!(CourseId);
id_impls!(EnrollmentId);
