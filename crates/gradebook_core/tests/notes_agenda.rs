use chrono::{NaiveDate, NaiveDateTime};
use gradebook_core::{
    filter_notes, AgendaCursor, CategoryFilter, InMemoryNoteRepository, Note, NoteCategory,
    NoteService, NoteServiceError, PASTEL_PALETTE,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, d).unwrap()
}

fn at(d: u32, hour: u32) -> NaiveDateTime {
    day(d).and_hms_opt(hour, 0, 0).unwrap()
}

fn service() -> NoteService<InMemoryNoteRepository> {
    NoteService::new(InMemoryNoteRepository::new())
}

#[test]
fn create_note_prepends_and_cycles_palette() {
    let mut service = service();
    let mut created = Vec::new();
    for idx in 0..9 {
        let note = service
            .create_note(format!("note {idx}"), "", NoteCategory::Casual, at(1, 9))
            .unwrap();
        created.push(note);
    }

    assert_eq!(created[0].color, PASTEL_PALETTE[0]);
    assert_eq!(created[1].color, PASTEL_PALETTE[1]);
    assert_eq!(created[8].color, PASTEL_PALETTE[0]);

    let listed = service.list_notes();
    assert_eq!(listed.len(), 9);
    assert_eq!(listed[0].title, "note 8");
    assert_eq!(listed[8].title, "note 0");
}

#[test]
fn note_ids_are_unique_within_session() {
    let mut service = service();
    let a = service
        .create_note("a", "", NoteCategory::Casual, at(1, 9))
        .unwrap();
    let b = service
        .create_note("a", "", NoteCategory::Casual, at(1, 9))
        .unwrap();
    assert_ne!(a.id, b.id);
}

// Current behavior: a non-empty query searches every date, it is not
// combined with the selected day.
#[test]
fn search_query_ignores_selected_date() {
    let mut service = service();
    service
        .create_note("Calculus formulas", "derivatives", NoteCategory::Important, at(9, 8))
        .unwrap();
    service
        .create_note("Team meeting", "Monday", NoteCategory::Important, at(10, 15))
        .unwrap();

    let today = day(10);
    let by_day = service.filter_notes("", CategoryFilter::All, today);
    assert_eq!(by_day.len(), 1);
    assert_eq!(by_day[0].title, "Team meeting");

    let searched = service.filter_notes("calculus", CategoryFilter::All, today);
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].title, "Calculus formulas");
}

#[test]
fn filter_keeps_store_order() {
    let notes = vec![
        Note::new("b exam", "", NoteCategory::Important, at(3, 9), "c"),
        Note::new("a exam", "", NoteCategory::Important, at(1, 9), "c"),
        Note::new("c exam", "", NoteCategory::Casual, at(2, 9), "c"),
    ];
    let filtered = filter_notes(&notes, "EXAM", CategoryFilter::All, day(1));
    let titles: Vec<_> = filtered.iter().map(|note| note.title.as_str()).collect();
    assert_eq!(titles, vec!["b exam", "a exam", "c exam"]);

    let casual = filter_notes(
        &notes,
        "exam",
        CategoryFilter::Only(NoteCategory::Casual),
        day(1),
    );
    assert_eq!(casual.len(), 1);
    assert_eq!(casual[0].title, "c exam");
}

#[test]
fn update_note_replaces_in_place() {
    let mut service = service();
    let older = service
        .create_note("older", "", NoteCategory::Casual, at(1, 9))
        .unwrap();
    service
        .create_note("newer", "", NoteCategory::Casual, at(1, 9))
        .unwrap();

    let mut edited = older.clone();
    edited.title = "older, edited".to_string();
    edited.category = NoteCategory::Important;
    service.update_note(edited.clone()).unwrap();

    let listed = service.list_notes();
    assert_eq!(listed[1], edited);
    assert_eq!(service.get_note(older.id).unwrap().title, "older, edited");
}

#[test]
fn update_unknown_note_reports_not_found() {
    let mut service = service();
    let ghost = Note::new("ghost", "", NoteCategory::Casual, at(1, 9), "c");
    let err = service.update_note(ghost.clone()).unwrap_err();
    assert_eq!(err, NoteServiceError::NoteNotFound(ghost.id));
}

#[test]
fn delete_note_is_unconditional() {
    let mut service = service();
    let note = service
        .create_note("bye", "", NoteCategory::Casual, at(1, 9))
        .unwrap();

    assert!(service.delete_note(note.id));
    assert!(service.list_notes().is_empty());
    assert!(!service.delete_note(note.id));
}

#[test]
fn agenda_cursor_drives_day_filter() {
    let mut service = service();
    service
        .create_note("due", "", NoteCategory::Important, at(12, 18))
        .unwrap();

    let mut cursor = AgendaCursor::new(day(10));
    assert!(cursor.visible_days().contains(&day(12)));
    assert!(service
        .filter_notes("", CategoryFilter::All, cursor.selected())
        .is_empty());

    cursor.select(day(12));
    assert_eq!(
        service
            .filter_notes("", CategoryFilter::All, cursor.selected())
            .len(),
        1
    );
}
