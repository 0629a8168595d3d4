//! Insertion-ordered course storage.
//!
//! [`CourseRegistry`] stores all courses in a `HashMap` keyed by
//! [`CourseId`], with an auxiliary insertion-order list so that
//! iteration order is deterministic. The stable tie-break rules of
//! [`CourseRegistry::sort_by_title`] and the first-match semantics of
//! [`CourseRegistry::get_by_code`] both lean on that order.

use std::collections::HashMap;

use super::{Course, CourseId};

/// Central store for all courses.
///
/// Explicit owned state: construct one and pass it where it is needed.
/// The spec's model is single-threaded, so there is no interior locking.
#[derive(Debug, Default)]
pub struct CourseRegistry {
    courses: HashMap<CourseId, Course>,
    order: Vec<CourseId>,
}

impl CourseRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            courses: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Creates and registers a new course with a fresh identifier, zero
    /// enrollments, and no instructor. Always succeeds.
    ///
    /// Duplicate codes are not prevented; [`Self::get_by_code`] resolves
    /// the first match in insertion order.
    pub fn create(
        &mut self,
        code: impl Into<String>,
        title: impl Into<String>,
        capacity: u32,
    ) -> &Course {
        let course = Course::new(code, title, capacity);
        let id = course.id();
        tracing::info!(%id, code = course.code(), capacity, "course created");
        self.order.push(id);
        self.courses.entry(id).or_insert(course)
    }

    /// Looks a course up by identifier. Absence is `None`, never an
    /// error.
    #[must_use]
    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(&id)
    }

    /// Mutable lookup by identifier.
    #[must_use]
    pub fn get_mut(&mut self, id: CourseId) -> Option<&mut Course> {
        self.courses.get_mut(&id)
    }

    /// Looks a course up by code, ASCII-case-insensitively. Returns the
    /// first match in insertion order when duplicate codes exist.
    #[must_use]
    pub fn get_by_code(&self, code: &str) -> Option<&Course> {
        self.order
            .iter()
            .filter_map(|id| self.courses.get(id))
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }

    /// All registered courses, in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<&Course> {
        self.order
            .iter()
            .filter_map(|id| self.courses.get(id))
            .collect()
    }

    /// All registered courses ordered ascending by title (case-sensitive
    /// lexicographic); ties keep insertion order.
    #[must_use]
    pub fn sort_by_title(&self) -> Vec<&Course> {
        let mut courses = self.list();
        courses.sort_by(|a, b| a.title().cmp(b.title()));
        courses
    }

    /// Removes a course, reporting whether removal occurred.
    ///
    /// Does NOT cascade: enrollment records referencing the course keep
    /// their now-dangling course id. The engine tolerates that on drop.
    pub fn remove(&mut self, id: CourseId) -> bool {
        let removed = self.courses.remove(&id).is_some();
        if removed {
            self.order.retain(|c| *c != id);
            tracing::info!(%id, "course removed");
        }
        removed
    }

    /// Number of registered courses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the registry contains no courses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
