//! Course entity: catalog data plus current occupancy.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::person::Person;
use super::{CourseId, EnrollmentId, Instructor};

/// A course offering with a bounded number of simultaneous active
/// enrollments.
///
/// Code, title, and capacity are immutable after creation. The
/// instructor is optional and settable; the occupancy list holds
/// back-references into the enrollment engine's arena and is mutated
/// only by the engine. Invariant: `enrollment_ids.len() <= capacity`
/// immediately after any successful enroll.
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    id: CourseId,
    code: String,
    title: String,
    capacity: u32,
    instructor: Option<Instructor>,
    enrollment_ids: Vec<EnrollmentId>,
    created_at: DateTime<Utc>,
}

impl Course {
    /// Creates a course with a fresh identifier, zero enrollments, and
    /// no instructor. Registry-only: callers go through
    /// [`super::CourseRegistry::create`].
    ///
    /// Capacity is not validated: zero is legal and simply means every
    /// enroll attempt fails as full.
    pub(crate) fn new(code: impl Into<String>, title: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: CourseId::new(),
            code: code.into(),
            title: title.into(),
            capacity,
            instructor: None,
            enrollment_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// The course's identifier.
    #[must_use]
    pub const fn id(&self) -> CourseId {
        self.id
    }

    /// The course code (e.g. `"OOP101"`).
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The course title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Maximum simultaneous active enrollments.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// The assigned instructor, if any.
    #[must_use]
    pub const fn instructor(&self) -> Option<&Instructor> {
        self.instructor.as_ref()
    }

    /// Assigns an instructor. The instructor is stored by value; names
    /// are immutable so the stored copy cannot go stale, and the same
    /// instructor may be assigned to any number of courses.
    pub fn set_instructor(&mut self, instructor: &Instructor) {
        self.instructor = Some(instructor.clone());
    }

    /// Creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Current occupancy back-references, in enrollment order.
    #[must_use]
    pub fn enrollment_ids(&self) -> &[EnrollmentId] {
        &self.enrollment_ids
    }

    /// Number of currently active enrollments.
    #[must_use]
    pub fn enrollment_count(&self) -> usize {
        self.enrollment_ids.len()
    }

    /// Whether the course has reached capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.enrollment_ids.len() >= self.capacity as usize
    }

    /// Appends an occupancy back-reference. Engine-only.
    pub(crate) fn add_enrollment(&mut self, id: EnrollmentId) {
        self.enrollment_ids.push(id);
    }

    /// Removes an occupancy back-reference. Engine-only.
    pub(crate) fn remove_enrollment(&mut self, id: EnrollmentId) {
        self.enrollment_ids.retain(|e| *e != id);
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Course {}

impl fmt::Display for Course {
    /// `"<code> - <title> (cap: <capacity>, enrolled: <count>,
    /// instructor: <name|'-'>)"`. This exact shape is part of the
    /// observable contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instructor = self
            .instructor
            .as_ref()
            .map_or_else(|| "-".to_string(), Person::full_name);
        write!(
            f,
            "{} - {} (cap: {}, enrolled: {}, instructor: {})",
            self.code,
            self.title,
            self.capacity,
            self.enrollment_ids.len(),
            instructor
        )
    }
}
