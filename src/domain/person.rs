//! People: the [`Person`] capability, [`Student`], and [`Instructor`].
//!
//! A single level of specialization: students and instructors share
//! the `{full_name, role}` capability and nothing else, so a small
//! trait replaces any deeper hierarchy.

use std::fmt;

use serde::Serialize;

use super::{EnrollmentId, InstructorId, StudentId};

/// The two roles a person can hold in the registrar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    /// A student who enrolls in courses.
    Student,
    /// An instructor who teaches courses.
    Instructor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "Student"),
            Self::Instructor => write!(f, "Instructor"),
        }
    }
}

/// Shared capability of everyone the registrar knows about.
pub trait Person {
    /// First and last name joined with a space.
    fn full_name(&self) -> String;

    /// The role this person holds.
    fn role(&self) -> Role;
}

/// A student. Name and major are immutable after construction; the
/// enrollment list is append-only from the student's perspective and
/// keeps dropped enrollments as a historical record.
#[derive(Debug, Clone, Serialize)]
pub struct Student {
    id: StudentId,
    first_name: String,
    last_name: String,
    major: String,
    enrollment_ids: Vec<EnrollmentId>,
}

impl Student {
    /// Creates a new student with a fresh identifier and no enrollments.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        major: impl Into<String>,
    ) -> Self {
        Self {
            id: StudentId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            major: major.into(),
            enrollment_ids: Vec::new(),
        }
    }

    /// The student's identifier.
    #[must_use]
    pub const fn id(&self) -> StudentId {
        self.id
    }

    /// The student's declared major.
    #[must_use]
    pub fn major(&self) -> &str {
        &self.major
    }

    /// Every enrollment this student has ever held, in insertion order.
    ///
    /// Dropped enrollments stay in this list; resolve the ids through
    /// the engine to read their records.
    #[must_use]
    pub fn enrollment_ids(&self) -> &[EnrollmentId] {
        &self.enrollment_ids
    }

    /// Appends an enrollment back-reference. Engine-only.
    pub(crate) fn add_enrollment(&mut self, id: EnrollmentId) {
        self.enrollment_ids.push(id);
    }
}

impl Person for Student {
    fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    fn role(&self) -> Role {
        Role::Student
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, id={})", self.full_name(), self.role(), self.id)
    }
}

/// An instructor. All fields are immutable after construction; the same
/// instructor value may be referenced by any number of courses.
#[derive(Debug, Clone, Serialize)]
pub struct Instructor {
    id: InstructorId,
    first_name: String,
    last_name: String,
    department: String,
}

impl Instructor {
    /// Creates a new instructor with a fresh identifier.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: InstructorId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            department: department.into(),
        }
    }

    /// The instructor's identifier.
    #[must_use]
    pub const fn id(&self) -> InstructorId {
        self.id
    }

    /// The instructor's department.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }
}

impl Person for Instructor {
    fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    fn role(&self) -> Role {
        Role::Instructor
    }
}

impl PartialEq for Instructor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Instructor {}

impl fmt::Display for Instructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, id={})", self.full_name(), self.role(), self.id)
    }
}
