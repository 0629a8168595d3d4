//! campus-registrar demo entry point.
//!
//! Walks the registrar through a small semester: catalog setup,
//! enrollments (including an expected course-full rejection), a roster
//! and schedule report, grading, and the query/ordering surface.

use tracing_subscriber::EnvFilter;

use campus_registrar::config::RegistrarConfig;
use campus_registrar::domain::{
    CourseId, CourseRegistry, EnrollmentStatus, Instructor, Person, Student,
};
use campus_registrar::service::EnrollmentEngine;

fn main() -> anyhow::Result<()> {
    let config = RegistrarConfig::from_env();
    init_tracing(&config);

    tracing::info!("starting campus-registrar demo");

    // Build the owned state: one course registry, one enrollment engine.
    let mut courses = CourseRegistry::new();
    let mut engine = EnrollmentEngine::new();

    let prof_ivan = Instructor::new("Ivan", "Petrov", "Computer Science");
    let prof_anna = Instructor::new("Anna", "Smirnova", "Mathematics");

    let oop_id = courses.create("OOP101", "Object-Oriented Programming", 3).id();
    let alg_id = courses.create("ALG201", "Algorithms", 2).id();

    if let Some(oop) = courses.get_mut(oop_id) {
        oop.set_instructor(&prof_ivan);
    }
    if let Some(alg) = courses.get_mut(alg_id) {
        alg.set_instructor(&prof_anna);
    }

    let mut s1 = Student::new("Ainur", "K", "CS");
    let mut s2 = Student::new("Dana", "S", "CS");
    let mut s3 = Student::new("Erlan", "T", "Math");

    println!(
        "Polymorphism check: {} -> {}",
        s1.full_name(),
        s1.role()
    );

    enroll(&mut engine, &mut courses, &mut s1, oop_id);
    enroll(&mut engine, &mut courses, &mut s2, oop_id);
    enroll(&mut engine, &mut courses, &mut s3, oop_id);
    enroll(&mut engine, &mut courses, &mut s1, alg_id);
    enroll(&mut engine, &mut courses, &mut s2, alg_id);

    println!("\nCourses:");
    for course in courses.list() {
        println!("  {course}");
        for record in engine.find_by_course(course) {
            println!("     -> {} ({})", record.student_name(), record.status());
        }
    }

    println!("\nStudent schedules:");
    for student in [&s1, &s2, &s3] {
        println!("  {student} major={}", student.major());
        for record in engine.history_for(student) {
            println!("     - {} : {}", record.course_code(), record.status());
        }
    }

    // Grading: mutate records through the engine.
    grade_first(&mut engine, &s1, 92.0, EnrollmentStatus::Completed);
    grade_first(&mut engine, &s2, 42.0, EnrollmentStatus::Dropped);
    grade_first(&mut engine, &s3, 69.0, EnrollmentStatus::Enrolled);

    println!("\nAfter grading:");
    for student in [&s1, &s2, &s3] {
        if let Some(record) = engine.history_for(student).first() {
            println!("{record}");
        }
    }

    println!("\nCompleted enrollments:");
    for record in engine.find_by_status(EnrollmentStatus::Completed) {
        println!("{record}");
    }

    println!("\nEnrollments sorted by grade (desc):");
    for record in engine.sort_by_grade_desc() {
        println!("{record}");
    }

    println!("\nCourses sorted by title:");
    for course in courses.sort_by_title() {
        println!("{course}");
    }

    println!("\nCatalog (JSON):");
    println!("{}", serde_json::to_string_pretty(&courses.list())?);

    tracing::info!(
        courses = courses.len(),
        active_enrollments = engine.len(),
        "demo finished"
    );
    Ok(())
}

/// Enrolls and logs instead of aborting on the two business errors;
/// they are expected outcomes, not faults.
fn enroll(
    engine: &mut EnrollmentEngine,
    courses: &mut CourseRegistry,
    student: &mut Student,
    course_id: CourseId,
) {
    let Some(course) = courses.get_mut(course_id) else {
        tracing::warn!(%course_id, "course not found");
        return;
    };
    match engine.enroll(student, course) {
        Ok(record) => tracing::debug!(id = %record.id(), "enrolled"),
        Err(e) => {
            tracing::warn!(error = %e, "enrollment rejected");
            println!("Enrollment failed: {e}");
        }
    }
}

/// Records a grade and status on the student's first enrollment.
fn grade_first(
    engine: &mut EnrollmentEngine,
    student: &Student,
    grade: f64,
    status: EnrollmentStatus,
) {
    if let Some(id) = student.enrollment_ids().first().copied() {
        engine.set_grade(id, Some(grade));
        engine.set_status(id, status);
    }
}

/// Initializes the tracing subscriber in compact or JSON format.
fn init_tracing(config: &RegistrarConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    if config.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
