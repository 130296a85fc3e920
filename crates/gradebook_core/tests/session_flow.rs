use chrono::NaiveDate;
use gradebook_core::{AcademicSession, CategoryFilter, NewCourse, NoteCategory, PartialGrade};

fn form(name: &str, credits: i64, grade: f64) -> NewCourse {
    NewCourse {
        name: name.to_string(),
        credits,
        partial_grades: vec![PartialGrade::new("Final", 100.0, grade)],
    }
}

#[test]
fn session_tracks_semester_scoped_courses_and_averages() {
    let mut session = AcademicSession::default();
    let first = session.current_semester();
    session
        .courses_mut()
        .create_course(form("Calculus I", 4, 18.0), first)
        .unwrap();
    session
        .courses_mut()
        .create_course(form("Programming", 2, 14.0), first)
        .unwrap();

    session.next_semester();
    let second = session.current_semester();
    session
        .courses_mut()
        .create_course(form("Calculus II", 4, 12.0), second)
        .unwrap();

    assert_eq!(session.semester_courses().len(), 1);
    let overview = session.gpa_overview();
    assert_eq!(overview.current_semester, "12.0");
    assert_eq!(overview.cumulative, "16.7");
    // (72 + 28 + 48) / 10 = 14.8
    assert_eq!(overview.overall, "14.8");

    session.previous_semester();
    assert_eq!(session.semester_courses().len(), 2);
    assert_eq!(session.gpa_overview().cumulative, "0.0");
}

#[test]
fn session_notes_are_independent_of_courses() {
    let mut session = AcademicSession::default();
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    session
        .notes_mut()
        .create_note(
            "Books to read",
            "Clean Code",
            NoteCategory::Casual,
            today.and_hms_opt(12, 0, 0).unwrap(),
        )
        .unwrap();

    assert!(session.courses().list_courses(Default::default()).is_empty());
    assert_eq!(
        session
            .notes()
            .filter_notes("", CategoryFilter::All, today)
            .len(),
        1
    );
}
