//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `gradebook_core` linkage.
//! - Start core file logging under the system temp directory.
//! - Run one deterministic demo session through the public API.

use chrono::NaiveDate;
use gradebook_core::{
    default_log_level, init_logging, semester_label, AcademicSession, CategoryFilter, GradeBand,
    NewCourse, NoteCategory, PartialGrade,
};

const LOG_DIR_NAME: &str = "gradebook-logs";

fn main() {
    println!("gradebook_core ping={}", gradebook_core::ping());
    println!("gradebook_core version={}", gradebook_core::core_version());

    let log_dir = std::env::temp_dir().join(LOG_DIR_NAME);
    match init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        Ok(()) => println!("gradebook_core log_dir={}", log_dir.display()),
        Err(err) => eprintln!("logging disabled: {err}"),
    }

    if let Err(err) = run_demo() {
        eprintln!("demo failed: {err}");
        std::process::exit(1);
    }
}

fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = AcademicSession::default();
    let semester = session.current_semester();

    let calculus = NewCourse {
        name: "Calculus".to_string(),
        credits: 4,
        partial_grades: vec![
            PartialGrade::new("Midterm", 40.0, 16.0),
            PartialGrade::new("Final", 60.0, 19.0),
        ],
    };
    let programming = NewCourse {
        name: "Programming".to_string(),
        credits: 2,
        partial_grades: vec![PartialGrade::new("Project", 100.0, 14.0)],
    };
    session.courses_mut().create_course(calculus, semester)?;
    session.courses_mut().create_course(programming, semester)?;

    println!("{}", semester_label(semester));
    for course in session.semester_courses() {
        println!(
            "  {} credits={} grade={} band={:?}",
            course.name,
            course.credits(),
            course.grade(),
            GradeBand::from_grade(course.grade())
        );
    }
    let overview = session.gpa_overview();
    println!(
        "averages current={} cumulative={} overall={}",
        overview.current_semester, overview.cumulative, overview.overall
    );

    let day = NaiveDate::from_ymd_opt(2026, 1, 15).ok_or("invalid demo date")?;
    let noon = day.and_hms_opt(12, 0, 0).ok_or("invalid demo time")?;
    session
        .notes_mut()
        .create_note("Exam", "Chapter 3 derivatives", NoteCategory::Important, noon)?;
    let agenda = session.notes().filter_notes("", CategoryFilter::All, day);
    println!("notes on {day}: {}", agenda.len());

    Ok(())
}
