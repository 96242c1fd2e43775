//! End-to-end scenarios over the store / filter / calendar / stats API —
//! the flows the TUI drives, without a terminal.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

use desk::model::calendar::{GridPolicy, MonthRef};
use desk::model::note::NoteDraft;
use desk::model::task::{Category, Priority, TaskDraft};
use desk::ops::calendar::{FIXED_GRID_CELLS, items_on, month_grid};
use desk::ops::filter::{TaskFilter, filter_tasks};
use desk::ops::stats::{note_stats, task_stats};
use desk::store::{NoteStore, StoreError, TaskStore};

fn dt(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Store round-trips
// ---------------------------------------------------------------------------

#[test]
fn created_task_appears_in_list_with_draft_fields() {
    let mut tasks = TaskStore::new();
    let draft = TaskDraft {
        title: "Fix bug".into(),
        description: "Stack trace in the login flow".into(),
        category: Category::Troubleshooting,
        priority: Priority::High,
        deadline: Some(dt(2026, 8, 20, 17)),
        estimated_hours: 2.0,
    };
    let id = tasks.create(draft.clone()).unwrap();

    // Everything from the draft survives; id and bookkeeping are store-owned
    let listed = tasks.list().iter().find(|t| t.id == id).unwrap();
    assert_eq!(listed.title, draft.title);
    assert_eq!(listed.description, draft.description);
    assert_eq!(listed.category, draft.category);
    assert_eq!(listed.priority, draft.priority);
    assert_eq!(listed.deadline, draft.deadline);
    assert_eq!(listed.estimated_hours, draft.estimated_hours);
    assert!(!listed.completed);
    assert_eq!(listed.progress, 0);
}

#[test]
fn full_task_lifecycle_keeps_progress_invariant() {
    let mut tasks = TaskStore::new();
    let id = tasks
        .create(TaskDraft {
            title: "Ship release".into(),
            ..TaskDraft::default()
        })
        .unwrap();

    let check = |store: &TaskStore| {
        for task in store.list() {
            assert_eq!(task.completed, task.progress >= 100);
        }
    };

    tasks.set_progress(id, 50).unwrap();
    check(&tasks);
    tasks.set_progress(id, 150).unwrap();
    check(&tasks);
    assert!(tasks.get(id).unwrap().completed);

    tasks.toggle_completion(id).unwrap();
    check(&tasks);
    assert_eq!(tasks.get(id).unwrap().progress, 0);

    tasks
        .update(
            id,
            TaskDraft {
                title: "Ship the release".into(),
                ..TaskDraft::default()
            },
        )
        .unwrap();
    check(&tasks);

    tasks.set_progress(id, -5).unwrap();
    check(&tasks);
    assert_eq!(tasks.get(id).unwrap().progress, 0);

    tasks.delete(id).unwrap();
    assert!(tasks.is_empty());
}

#[test]
fn missing_ids_are_signalled_not_swallowed() {
    let mut tasks = TaskStore::new();
    let mut notes = NoteStore::new();

    assert_eq!(
        tasks.update(1, TaskDraft { title: "x".into(), ..TaskDraft::default() }),
        Err(StoreError::NotFound(1))
    );
    assert_eq!(tasks.delete(1), Err(StoreError::NotFound(1)));
    assert_eq!(tasks.toggle_completion(1), Err(StoreError::NotFound(1)));
    assert_eq!(tasks.set_progress(1, 10), Err(StoreError::NotFound(1)));
    assert_eq!(notes.delete(9), Err(StoreError::NotFound(9)));
}

#[test]
fn blank_titles_block_submission() {
    let mut tasks = TaskStore::new();
    let mut notes = NoteStore::new();

    assert_eq!(
        tasks.create(TaskDraft { title: " ".into(), ..TaskDraft::default() }),
        Err(StoreError::EmptyTitle)
    );
    assert_eq!(
        notes.create(NoteDraft { title: "\t".into(), ..NoteDraft::default() }),
        Err(StoreError::EmptyTitle)
    );
    assert!(tasks.is_empty());
    assert!(notes.is_empty());
}

// ---------------------------------------------------------------------------
// Filter engine
// ---------------------------------------------------------------------------

#[test]
fn identity_filter_returns_everything_in_order() {
    let mut tasks = TaskStore::new();
    for title in ["one", "two", "three"] {
        tasks
            .create(TaskDraft {
                title: title.into(),
                ..TaskDraft::default()
            })
            .unwrap();
    }

    let filter = TaskFilter {
        category: None,
        query: String::new(),
        on_date: None,
    };
    let titles: Vec<&str> = filter_tasks(tasks.list(), &filter)
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(titles, vec!["one", "two", "three"]);
}

#[test]
fn search_matches_case_insensitively_across_fields() {
    let mut tasks = TaskStore::new();
    tasks
        .create(TaskDraft {
            title: "Deploy Service".into(),
            ..TaskDraft::default()
        })
        .unwrap();
    tasks
        .create(TaskDraft {
            title: "Write docs".into(),
            description: "covers the deployment checklist".into(),
            ..TaskDraft::default()
        })
        .unwrap();
    tasks
        .create(TaskDraft {
            title: "Unrelated".into(),
            ..TaskDraft::default()
        })
        .unwrap();

    let filter = TaskFilter {
        query: "deploy".into(),
        ..TaskFilter::default()
    };
    let titles: Vec<&str> = filter_tasks(tasks.list(), &filter)
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Deploy Service", "Write docs"]);
}

#[test]
fn calendar_date_constraint_composes_with_category() {
    let mut tasks = TaskStore::new();
    tasks
        .create(TaskDraft {
            title: "On the day, right category".into(),
            category: Category::Testing,
            deadline: Some(dt(2026, 8, 10, 9)),
            ..TaskDraft::default()
        })
        .unwrap();
    tasks
        .create(TaskDraft {
            title: "On the day, wrong category".into(),
            category: Category::Simple,
            deadline: Some(dt(2026, 8, 10, 15)),
            ..TaskDraft::default()
        })
        .unwrap();
    tasks
        .create(TaskDraft {
            title: "Right category, different day".into(),
            category: Category::Testing,
            deadline: Some(dt(2026, 8, 11, 9)),
            ..TaskDraft::default()
        })
        .unwrap();

    let filter = TaskFilter {
        category: Some(Category::Testing),
        query: String::new(),
        on_date: Some(date(2026, 8, 10)),
    };
    let titles: Vec<&str> = filter_tasks(tasks.list(), &filter)
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(titles, vec!["On the day, right category"]);
}

// ---------------------------------------------------------------------------
// Calendar grids
// ---------------------------------------------------------------------------

#[test]
fn fixed_grid_holds_42_cells_for_every_month_shape() {
    // 28, 29, 30, and 31-day months
    for (y, m) in [(2026, 2), (2024, 2), (2026, 4), (2026, 8)] {
        let month = MonthRef::containing(date(y, m, 1));
        let grid = month_grid(month, GridPolicy::Fixed);
        assert_eq!(grid.cells.len(), FIXED_GRID_CELLS, "{y}-{m}");

        // The 1st sits at the column of its weekday, Sunday = 0
        let first_col = grid.cells.iter().position(|c| c.is_in_month()).unwrap();
        let expected = date(y, m, 1).weekday().num_days_from_sunday() as usize;
        assert_eq!(first_col, expected, "{y}-{m}");
    }
}

#[test]
fn flow_grid_has_no_trailing_padding() {
    let month = MonthRef::containing(date(2026, 8, 1)); // starts Saturday
    let grid = month_grid(month, GridPolicy::Flow);
    assert_eq!(grid.cells.len(), 6 + 31);
    assert_eq!(grid.cells.last().unwrap().date(), Some(date(2026, 8, 31)));
}

#[test]
fn calendar_lookup_annotates_tasks_by_deadline_date() {
    let mut tasks = TaskStore::new();
    tasks
        .create(TaskDraft {
            title: "Morning standup prep".into(),
            deadline: Some(dt(2026, 8, 10, 9)),
            ..TaskDraft::default()
        })
        .unwrap();
    tasks
        .create(TaskDraft {
            title: "Evening deploy".into(),
            deadline: Some(dt(2026, 8, 10, 21)),
            ..TaskDraft::default()
        })
        .unwrap();
    tasks
        .create(TaskDraft {
            title: "No deadline".into(),
            ..TaskDraft::default()
        })
        .unwrap();

    // Same calendar date matches regardless of time of day
    let on_tenth = items_on(tasks.list(), date(2026, 8, 10), |t| t.deadline_date());
    let titles: Vec<&str> = on_tenth.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Morning standup prep", "Evening deploy"]);
}

// ---------------------------------------------------------------------------
// Stats scenarios
// ---------------------------------------------------------------------------

#[test]
fn stats_track_creation_toggling_and_overdue() {
    let now = dt(2026, 8, 8, 12);
    let mut tasks = TaskStore::new();

    let id = tasks
        .create(TaskDraft {
            title: "Fix bug".into(),
            category: Category::Troubleshooting,
            priority: Priority::High,
            estimated_hours: 2.0,
            deadline: Some(dt(2026, 8, 7, 17)), // already past
            ..TaskDraft::default()
        })
        .unwrap();

    let stats = task_stats(tasks.list(), now);
    assert_eq!(stats.total, 1);
    assert_eq!(stats.completed, 0);
    assert_eq!(stats.in_progress, 0);
    assert_eq!(stats.overdue, 1);

    // Toggle to done: progress 100, overdue clears
    tasks.toggle_completion(id).unwrap();
    let stats = task_stats(tasks.list(), now);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.overdue, 0);
    assert_eq!(tasks.get(id).unwrap().progress, 100);

    // Toggle back: progress 0, not in progress
    tasks.toggle_completion(id).unwrap();
    let stats = task_stats(tasks.list(), now);
    assert_eq!(stats.completed, 0);
    assert_eq!(stats.in_progress, 0);
    assert_eq!(tasks.get(id).unwrap().progress, 0);
}

#[test]
fn todays_notes_counter_ignores_yesterday() {
    let today = date(2026, 8, 8);
    let mut notes = NoteStore::with_categories(["work"]);

    notes
        .create(NoteDraft {
            title: "Written today".into(),
            category: "work".into(),
            date: Some(today),
            ..NoteDraft::default()
        })
        .unwrap();
    assert_eq!(note_stats(notes.list(), today).today, 1);

    notes
        .create(NoteDraft {
            title: "Backfilled yesterday".into(),
            category: "work".into(),
            date: Some(date(2026, 8, 7)),
            ..NoteDraft::default()
        })
        .unwrap();
    let stats = note_stats(notes.list(), today);
    assert_eq!(stats.today, 1);
    assert_eq!(stats.total, 2);
}

// ---------------------------------------------------------------------------
// Notes: categories and tags
// ---------------------------------------------------------------------------

#[test]
fn note_categories_grow_with_use_and_tags_stay_deduplicated() {
    let mut notes = NoteStore::with_categories(["personal", "work"]);

    let id = notes
        .create(NoteDraft {
            title: "Conference takeaways".into(),
            category: "travel".into(),
            tags: ["rust", "#rust", "tui"].iter().map(|s| s.to_string()).collect(),
            ..NoteDraft::default()
        })
        .unwrap();

    let categories: Vec<&str> = notes.categories().iter().map(|s| s.as_str()).collect();
    assert_eq!(categories, vec!["personal", "work", "travel"]);

    let note = notes.get(id).unwrap();
    let tags: Vec<&str> = note.tags.iter().map(|s| s.as_str()).collect();
    assert_eq!(tags, vec!["rust", "tui"]);
}
