//! Enrollment engine: integrity rules and queries over the enrollment
//! set.
//!
//! The engine is the arena owner of every [`Enrollment`] record.
//! Courses and students hold only [`EnrollmentId`] back-references, so
//! the Course ↔ Enrollment ↔ Student graph carries no ownership cycles.
//!
//! Two stores back the arena:
//! - **active**: the registered set. Capacity, duplicate checks, and
//!   every `find_*` query operate on this set only.
//! - **archive**: dropped records move here so the student-side
//!   historical back-references stay resolvable after a drop.

use std::collections::HashMap;

use crate::domain::{
    Course, CourseRegistry, Enrollment, EnrollmentId, EnrollmentStatus, Person, Student,
};
use crate::error::RegistrarError;

/// Owner of the enrollment set and enforcer of its invariants.
///
/// Explicit owned state, single-threaded: every mutation takes `&mut
/// self` plus mutable borrows of the entities it cross-references, so
/// the check-then-act sequence in [`Self::enroll`] is atomic by
/// construction.
#[derive(Debug, Default)]
pub struct EnrollmentEngine {
    active: HashMap<EnrollmentId, Enrollment>,
    order: Vec<EnrollmentId>,
    archive: HashMap<EnrollmentId, Enrollment>,
}

impl EnrollmentEngine {
    /// Creates an engine with no enrollments.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: HashMap::new(),
            order: Vec::new(),
            archive: HashMap::new(),
        }
    }

    /// Enrolls a student into a course.
    ///
    /// On success the new record starts as
    /// [`EnrollmentStatus::Enrolled`] with no grade, is registered in
    /// the active set, and its id is appended to both the course's and
    /// the student's sequences. All checks precede all mutation: a
    /// failed call leaves every structure untouched.
    ///
    /// # Errors
    ///
    /// - [`RegistrarError::CourseFull`] when the course is at capacity.
    /// - [`RegistrarError::DuplicateEnrollment`] when an active record
    ///   already links this exact student and course, regardless of
    ///   that record's status value.
    pub fn enroll(
        &mut self,
        student: &mut Student,
        course: &mut Course,
    ) -> Result<&Enrollment, RegistrarError> {
        if course.is_full() {
            return Err(RegistrarError::CourseFull {
                code: course.code().to_string(),
                capacity: course.capacity(),
            });
        }

        let duplicate = self
            .active
            .values()
            .any(|e| e.student_id() == student.id() && e.course_id() == course.id());
        if duplicate {
            return Err(RegistrarError::DuplicateEnrollment {
                student: *student.id().as_uuid(),
                course: *course.id().as_uuid(),
            });
        }

        let record = Enrollment::new(
            student.id(),
            course.id(),
            student.full_name(),
            course.code().to_string(),
        );
        let id = record.id();

        course.add_enrollment(id);
        student.add_enrollment(id);
        self.order.push(id);

        tracing::info!(
            %id,
            student = record.student_name(),
            course = record.course_code(),
            "enrollment created"
        );

        Ok(self.active.entry(id).or_insert(record))
    }

    /// Drops an enrollment: sets its status to
    /// [`EnrollmentStatus::Dropped`], removes it from the course's
    /// occupancy sequence, and moves it from the active set to the
    /// archive. The student's own sequence is left untouched: the
    /// dropped record stays reachable there as a historical entry.
    ///
    /// No legality check is made against the record's current status;
    /// dropping a completed enrollment is permitted.
    ///
    /// Returns `false` without mutating anything when the id is not
    /// currently registered, so the operation is idempotent. When the
    /// referenced course has already been deleted from the registry the
    /// course-side removal is skipped silently (the registry documents
    /// that deletion does not cascade).
    pub fn drop_enrollment(&mut self, id: EnrollmentId, courses: &mut CourseRegistry) -> bool {
        let Some(mut record) = self.active.remove(&id) else {
            return false;
        };

        record.set_status(EnrollmentStatus::Dropped);
        self.order.retain(|e| *e != id);
        if let Some(course) = courses.get_mut(record.course_id()) {
            course.remove_enrollment(id);
        }

        tracing::info!(
            %id,
            student = record.student_name(),
            course = record.course_code(),
            "enrollment dropped"
        );

        self.archive.insert(id, record);
        true
    }

    /// Resolves a record by id, whether active or archived. This is how
    /// student history stays readable after a drop.
    #[must_use]
    pub fn get(&self, id: EnrollmentId) -> Option<&Enrollment> {
        self.active.get(&id).or_else(|| self.archive.get(&id))
    }

    /// Sets the status of any resolvable record. Caller-driven: no
    /// transition graph is enforced. Returns `false` when the id is
    /// unknown.
    pub fn set_status(&mut self, id: EnrollmentId, status: EnrollmentStatus) -> bool {
        match self.get_mut(id) {
            Some(record) => {
                record.set_status(status);
                true
            }
            None => false,
        }
    }

    /// Sets or clears the grade of any resolvable record. No range
    /// constraint is enforced. Returns `false` when the id is unknown.
    pub fn set_grade(&mut self, id: EnrollmentId, grade: Option<f64>) -> bool {
        match self.get_mut(id) {
            Some(record) => {
                record.set_grade(grade);
                true
            }
            None => false,
        }
    }

    /// Active enrollments referencing this student, in enrollment order.
    #[must_use]
    pub fn find_by_student(&self, student: &Student) -> Vec<&Enrollment> {
        self.iter_active()
            .filter(|e| e.student_id() == student.id())
            .collect()
    }

    /// Active enrollments referencing this course, in enrollment order.
    #[must_use]
    pub fn find_by_course(&self, course: &Course) -> Vec<&Enrollment> {
        self.iter_active()
            .filter(|e| e.course_id() == course.id())
            .collect()
    }

    /// Active enrollments with exactly this status, in enrollment order.
    #[must_use]
    pub fn find_by_status(&self, status: EnrollmentStatus) -> Vec<&Enrollment> {
        self.iter_active().filter(|e| e.status() == status).collect()
    }

    /// Every record the student's back-reference list names, dropped
    /// ones included, resolved through the active set and the archive.
    #[must_use]
    pub fn history_for(&self, student: &Student) -> Vec<&Enrollment> {
        student
            .enrollment_ids()
            .iter()
            .filter_map(|id| self.get(*id))
            .collect()
    }

    /// The student's historical records with exactly this status,
    /// dropped ones included. A status-filtered view of
    /// [`Self::history_for`]; unlike [`Self::find_by_status`] it is
    /// scoped to one student and also resolves archived records.
    #[must_use]
    pub fn history_by_status(
        &self,
        student: &Student,
        status: EnrollmentStatus,
    ) -> Vec<&Enrollment> {
        student
            .enrollment_ids()
            .iter()
            .filter_map(|id| self.get(*id))
            .filter(|e| e.status() == status)
            .collect()
    }

    /// Active enrollments that have a grade, ordered descending by
    /// grade value; ties keep enrollment order. Records with no grade
    /// are excluded entirely, not sorted to an end.
    #[must_use]
    pub fn sort_by_grade_desc(&self) -> Vec<&Enrollment> {
        let mut graded: Vec<(&Enrollment, f64)> = self
            .iter_active()
            .filter_map(|e| e.grade().map(|g| (e, g)))
            .collect();
        graded.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        graded.into_iter().map(|(e, _)| e).collect()
    }

    /// Number of currently registered enrollments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no enrollments are currently registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Active records in registration order.
    fn iter_active(&self) -> impl Iterator<Item = &Enrollment> {
        self.order.iter().filter_map(|id| self.active.get(id))
    }

    fn get_mut(&mut self, id: EnrollmentId) -> Option<&mut Enrollment> {
        if self.active.contains_key(&id) {
            self.active.get_mut(&id)
        } else {
            self.archive.get_mut(&id)
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn setup() -> (EnrollmentEngine, CourseRegistry) {
        (EnrollmentEngine::new(), CourseRegistry::new())
    }

    fn enroll_ok(
        engine: &mut EnrollmentEngine,
        student: &mut Student,
        course: &mut Course,
    ) -> EnrollmentId {
        match engine.enroll(student, course) {
            Ok(record) => record.id(),
            Err(e) => panic!("enroll failed: {e}"),
        }
    }

    #[test]
    fn enroll_registers_record_and_back_references() {
        let (mut engine, mut courses) = setup();
        let course_id = courses.create("OOP101", "Object-Oriented Programming", 3).id();
        let mut student = Student::new("Ainur", "K", "CS");

        let Some(course) = courses.get_mut(course_id) else {
            panic!("course not found");
        };
        let id = enroll_ok(&mut engine, &mut student, course);

        assert_eq!(course.enrollment_ids(), &[id]);
        assert_eq!(student.enrollment_ids(), &[id]);
        assert_eq!(engine.len(), 1);
        let record = engine.get(id);
        assert_eq!(record.map(Enrollment::status), Some(EnrollmentStatus::Enrolled));
        assert_eq!(record.and_then(Enrollment::grade), None);
    }

    #[test]
    fn capacity_is_never_exceeded() {
        let (mut engine, mut courses) = setup();
        let course_id = courses.create("OOP101", "Object-Oriented Programming", 3).id();
        let mut a = Student::new("Ainur", "K", "CS");
        let mut b = Student::new("Dana", "S", "CS");
        let mut c = Student::new("Erlan", "T", "Math");
        let mut d = Student::new("Madi", "B", "CS");

        let Some(course) = courses.get_mut(course_id) else {
            panic!("course not found");
        };
        enroll_ok(&mut engine, &mut a, course);
        enroll_ok(&mut engine, &mut b, course);
        enroll_ok(&mut engine, &mut c, course);
        assert_eq!(course.enrollment_count(), 3);

        let result = engine.enroll(&mut d, course);
        assert!(matches!(
            result,
            Err(RegistrarError::CourseFull { capacity: 3, .. })
        ));
        // Failed enroll mutates nothing anywhere.
        assert_eq!(course.enrollment_count(), 3);
        assert!(d.enrollment_ids().is_empty());
        assert_eq!(engine.len(), 3);
    }

    #[test]
    fn duplicate_pair_is_rejected_without_mutation() {
        let (mut engine, mut courses) = setup();
        let course_id = courses.create("ALG201", "Algorithms", 5).id();
        let mut a = Student::new("Ainur", "K", "CS");

        let Some(course) = courses.get_mut(course_id) else {
            panic!("course not found");
        };
        enroll_ok(&mut engine, &mut a, course);

        let result = engine.enroll(&mut a, course);
        assert!(matches!(
            result,
            Err(RegistrarError::DuplicateEnrollment { .. })
        ));
        assert_eq!(engine.find_by_student(&a).len(), 1);
        assert_eq!(a.enrollment_ids().len(), 1);
        assert_eq!(course.enrollment_count(), 1);
    }

    #[test]
    fn duplicate_check_ignores_status_value() {
        let (mut engine, mut courses) = setup();
        let course_id = courses.create("ALG201", "Algorithms", 5).id();
        let mut a = Student::new("Ainur", "K", "CS");

        let Some(course) = courses.get_mut(course_id) else {
            panic!("course not found");
        };
        let id = enroll_ok(&mut engine, &mut a, course);
        // Completed but still registered: a second enroll must fail.
        assert!(engine.set_status(id, EnrollmentStatus::Completed));

        let result = engine.enroll(&mut a, course);
        assert!(matches!(
            result,
            Err(RegistrarError::DuplicateEnrollment { .. })
        ));
    }

    #[test]
    fn drop_removes_from_course_and_engine_but_not_student() {
        let (mut engine, mut courses) = setup();
        let course_id = courses.create("OOP101", "Object-Oriented Programming", 3).id();
        let mut a = Student::new("Ainur", "K", "CS");

        let Some(course) = courses.get_mut(course_id) else {
            panic!("course not found");
        };
        let id = enroll_ok(&mut engine, &mut a, course);

        assert!(engine.drop_enrollment(id, &mut courses));

        let Some(course) = courses.get(course_id) else {
            panic!("course not found");
        };
        assert!(engine.find_by_course(course).is_empty());
        assert!(engine.find_by_status(EnrollmentStatus::Enrolled).is_empty());
        assert!(engine.find_by_status(EnrollmentStatus::Completed).is_empty());
        assert_eq!(course.enrollment_count(), 0);
        assert_eq!(engine.len(), 0);

        // Historical record: still reachable through the student.
        assert_eq!(a.enrollment_ids(), &[id]);
        let history = engine.history_for(&a);
        assert_eq!(history.len(), 1);
        assert_eq!(
            history.first().map(|e| e.status()),
            Some(EnrollmentStatus::Dropped)
        );
    }

    #[test]
    fn history_by_status_includes_dropped_records() {
        let (mut engine, mut courses) = setup();
        let oop_id = courses.create("OOP101", "Object-Oriented Programming", 3).id();
        let alg_id = courses.create("ALG201", "Algorithms", 2).id();
        let mut a = Student::new("Ainur", "K", "CS");

        let Some(oop) = courses.get_mut(oop_id) else {
            panic!("course not found");
        };
        let dropped = enroll_ok(&mut engine, &mut a, oop);
        let Some(alg) = courses.get_mut(alg_id) else {
            panic!("course not found");
        };
        let kept = enroll_ok(&mut engine, &mut a, alg);

        assert!(engine.drop_enrollment(dropped, &mut courses));

        let dropped_view: Vec<EnrollmentId> = engine
            .history_by_status(&a, EnrollmentStatus::Dropped)
            .iter()
            .map(|e| e.id())
            .collect();
        assert_eq!(dropped_view, vec![dropped]);

        let enrolled_view: Vec<EnrollmentId> = engine
            .history_by_status(&a, EnrollmentStatus::Enrolled)
            .iter()
            .map(|e| e.id())
            .collect();
        assert_eq!(enrolled_view, vec![kept]);

        assert!(engine
            .history_by_status(&a, EnrollmentStatus::Completed)
            .is_empty());
    }

    #[test]
    fn drop_frees_a_seat_for_the_next_student() {
        let (mut engine, mut courses) = setup();
        let course_id = courses.create("ALG201", "Algorithms", 1).id();
        let mut a = Student::new("Ainur", "K", "CS");
        let mut b = Student::new("Dana", "S", "CS");

        let Some(course) = courses.get_mut(course_id) else {
            panic!("course not found");
        };
        let id = enroll_ok(&mut engine, &mut a, course);
        assert!(matches!(
            engine.enroll(&mut b, course),
            Err(RegistrarError::CourseFull { .. })
        ));

        assert!(engine.drop_enrollment(id, &mut courses));

        let Some(course) = courses.get_mut(course_id) else {
            panic!("course not found");
        };
        enroll_ok(&mut engine, &mut b, course);
        assert_eq!(course.enrollment_count(), 1);
    }

    #[test]
    fn drop_of_unregistered_id_is_a_noop() {
        let (mut engine, mut courses) = setup();
        let course_id = courses.create("OOP101", "Object-Oriented Programming", 3).id();
        let mut a = Student::new("Ainur", "K", "CS");

        let Some(course) = courses.get_mut(course_id) else {
            panic!("course not found");
        };
        let id = enroll_ok(&mut engine, &mut a, course);

        assert!(!engine.drop_enrollment(EnrollmentId::new(), &mut courses));
        assert!(engine.drop_enrollment(id, &mut courses));
        assert!(!engine.drop_enrollment(id, &mut courses));
    }

    #[test]
    fn drop_tolerates_a_deleted_course() {
        let (mut engine, mut courses) = setup();
        let course_id = courses.create("OOP101", "Object-Oriented Programming", 3).id();
        let mut a = Student::new("Ainur", "K", "CS");

        let Some(course) = courses.get_mut(course_id) else {
            panic!("course not found");
        };
        let id = enroll_ok(&mut engine, &mut a, course);

        assert!(courses.remove(course_id));
        assert!(engine.drop_enrollment(id, &mut courses));
        assert_eq!(
            engine.get(id).map(Enrollment::status),
            Some(EnrollmentStatus::Dropped)
        );
    }

    #[test]
    fn find_by_student_and_course_filter_active_records() {
        let (mut engine, mut courses) = setup();
        let oop_id = courses.create("OOP101", "Object-Oriented Programming", 3).id();
        let alg_id = courses.create("ALG201", "Algorithms", 2).id();
        let mut a = Student::new("Ainur", "K", "CS");
        let mut b = Student::new("Dana", "S", "CS");

        let Some(oop) = courses.get_mut(oop_id) else {
            panic!("course not found");
        };
        enroll_ok(&mut engine, &mut a, oop);
        enroll_ok(&mut engine, &mut b, oop);
        let Some(alg) = courses.get_mut(alg_id) else {
            panic!("course not found");
        };
        enroll_ok(&mut engine, &mut a, alg);

        assert_eq!(engine.find_by_student(&a).len(), 2);
        assert_eq!(engine.find_by_student(&b).len(), 1);
        let Some(oop) = courses.get(oop_id) else {
            panic!("course not found");
        };
        assert_eq!(engine.find_by_course(oop).len(), 2);
    }

    #[test]
    fn find_by_status_matches_exactly() {
        let (mut engine, mut courses) = setup();
        let course_id = courses.create("OOP101", "Object-Oriented Programming", 3).id();
        let mut a = Student::new("Ainur", "K", "CS");
        let mut b = Student::new("Dana", "S", "CS");

        let Some(course) = courses.get_mut(course_id) else {
            panic!("course not found");
        };
        let first = enroll_ok(&mut engine, &mut a, course);
        enroll_ok(&mut engine, &mut b, course);

        assert!(engine.set_status(first, EnrollmentStatus::Completed));

        assert_eq!(engine.find_by_status(EnrollmentStatus::Completed).len(), 1);
        assert_eq!(engine.find_by_status(EnrollmentStatus::Enrolled).len(), 1);
        assert!(engine.find_by_status(EnrollmentStatus::Dropped).is_empty());
    }

    #[test]
    fn sort_by_grade_desc_orders_and_excludes_ungraded() {
        let (mut engine, mut courses) = setup();
        let course_id = courses.create("OOP101", "Object-Oriented Programming", 3).id();
        let mut a = Student::new("Ainur", "K", "CS");
        let mut b = Student::new("Dana", "S", "CS");
        let mut c = Student::new("Erlan", "T", "Math");

        let Some(course) = courses.get_mut(course_id) else {
            panic!("course not found");
        };
        enroll_ok(&mut engine, &mut a, course); // grade stays unset
        let b_id = enroll_ok(&mut engine, &mut b, course);
        let c_id = enroll_ok(&mut engine, &mut c, course);

        assert!(engine.set_grade(b_id, Some(92.0)));
        assert!(engine.set_grade(c_id, Some(69.0)));

        let ranked: Vec<EnrollmentId> = engine
            .sort_by_grade_desc()
            .iter()
            .map(|e| e.id())
            .collect();
        assert_eq!(ranked, vec![b_id, c_id]);
    }

    #[test]
    fn grade_ties_keep_enrollment_order() {
        let (mut engine, mut courses) = setup();
        let course_id = courses.create("OOP101", "Object-Oriented Programming", 5).id();
        let mut a = Student::new("Ainur", "K", "CS");
        let mut b = Student::new("Dana", "S", "CS");

        let Some(course) = courses.get_mut(course_id) else {
            panic!("course not found");
        };
        let first = enroll_ok(&mut engine, &mut a, course);
        let second = enroll_ok(&mut engine, &mut b, course);

        assert!(engine.set_grade(first, Some(80.0)));
        assert!(engine.set_grade(second, Some(80.0)));

        let ranked: Vec<EnrollmentId> = engine
            .sort_by_grade_desc()
            .iter()
            .map(|e| e.id())
            .collect();
        assert_eq!(ranked, vec![first, second]);
    }

    #[test]
    fn set_grade_and_status_report_unknown_ids() {
        let (mut engine, _) = setup();
        assert!(!engine.set_grade(EnrollmentId::new(), Some(50.0)));
        assert!(!engine.set_status(EnrollmentId::new(), EnrollmentStatus::Completed));
    }

    #[test]
    fn archived_records_stay_mutable() {
        let (mut engine, mut courses) = setup();
        let course_id = courses.create("OOP101", "Object-Oriented Programming", 3).id();
        let mut a = Student::new("Ainur", "K", "CS");

        let Some(course) = courses.get_mut(course_id) else {
            panic!("course not found");
        };
        let id = enroll_ok(&mut engine, &mut a, course);
        assert!(engine.drop_enrollment(id, &mut courses));

        assert!(engine.set_grade(id, Some(42.0)));
        assert_eq!(engine.get(id).and_then(Enrollment::grade), Some(42.0));
    }
}
