use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::model::note::Note;
use crate::model::task::Task;

/// Counters shown in the task workspace header.
/// Recomputed on every render; collections are human-scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    /// progress > 0 and not completed
    pub in_progress: usize,
    /// deadline in the past and not completed
    pub overdue: usize,
}

/// Counters shown in the note workspace header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NoteStats {
    pub total: usize,
    /// Notes dated exactly `today`
    pub today: usize,
    /// Distinct categories in use
    pub categories: usize,
    /// Distinct tags in use
    pub tags: usize,
}

/// Aggregate task counters. `now` is passed in so callers (and tests) control
/// the overdue boundary.
pub fn task_stats(tasks: &[Task], now: NaiveDateTime) -> TaskStats {
    TaskStats {
        total: tasks.len(),
        completed: tasks.iter().filter(|t| t.completed).count(),
        in_progress: tasks
            .iter()
            .filter(|t| t.progress > 0 && !t.completed)
            .count(),
        overdue: tasks.iter().filter(|t| t.is_overdue(now)).count(),
    }
}

/// Aggregate note counters for the given `today`
pub fn note_stats(notes: &[Note], today: NaiveDate) -> NoteStats {
    let categories: HashSet<&str> = notes.iter().map(|n| n.category.as_str()).collect();
    let tags: HashSet<&str> = notes
        .iter()
        .flat_map(|n| n.tags.iter().map(|t| t.as_str()))
        .collect();

    NoteStats {
        total: notes.len(),
        today: notes.iter().filter(|n| n.date == today).count(),
        categories: categories.len(),
        tags: tags.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::note::NoteDraft;
    use crate::model::task::{Category, Priority, TaskDraft};
    use crate::store::{NoteStore, TaskStore};

    fn dt(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_empty_stats() {
        let stats = task_stats(&[], dt(2026, 8, 8, 12));
        assert_eq!(
            stats,
            TaskStats {
                total: 0,
                completed: 0,
                in_progress: 0,
                overdue: 0
            }
        );
    }

    #[test]
    fn test_fresh_task_counts_only_toward_total() {
        let mut store = TaskStore::new();
        let before = task_stats(store.list(), dt(2026, 8, 8, 12));

        store
            .create(TaskDraft {
                title: "Fix bug".into(),
                category: Category::Troubleshooting,
                priority: Priority::High,
                estimated_hours: 2.0,
                ..TaskDraft::default()
            })
            .unwrap();

        let after = task_stats(store.list(), dt(2026, 8, 8, 12));
        assert_eq!(after.total, before.total + 1);
        assert_eq!(after.completed, before.completed);
        // progress == 0 is not "in progress"
        assert_eq!(after.in_progress, before.in_progress);
    }

    #[test]
    fn test_in_progress_needs_nonzero_progress() {
        let mut store = TaskStore::new();
        let id = store
            .create(TaskDraft {
                title: "Partial".into(),
                ..TaskDraft::default()
            })
            .unwrap();

        store.set_progress(id, 30).unwrap();
        let stats = task_stats(store.list(), dt(2026, 8, 8, 12));
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.completed, 0);

        // Completing it moves the count over
        store.set_progress(id, 100).unwrap();
        let stats = task_stats(store.list(), dt(2026, 8, 8, 12));
        assert_eq!(stats.in_progress, 0);
        assert_eq!(stats.completed, 1);
    }

    #[test]
    fn test_overdue_counts_open_past_deadlines() {
        let mut store = TaskStore::new();
        let late = store
            .create(TaskDraft {
                title: "Late".into(),
                deadline: Some(dt(2026, 8, 7, 17)),
                ..TaskDraft::default()
            })
            .unwrap();
        store
            .create(TaskDraft {
                title: "Future".into(),
                deadline: Some(dt(2026, 8, 20, 9)),
                ..TaskDraft::default()
            })
            .unwrap();

        let stats = task_stats(store.list(), dt(2026, 8, 8, 12));
        assert_eq!(stats.overdue, 1);

        // Completing the late task clears it
        store.toggle_completion(late).unwrap();
        let stats = task_stats(store.list(), dt(2026, 8, 8, 12));
        assert_eq!(stats.overdue, 0);
    }

    #[test]
    fn test_note_stats_today_is_exact() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();

        let mut store = NoteStore::new();
        store
            .create(NoteDraft {
                title: "Today's note".into(),
                category: "work".into(),
                date: Some(today),
                ..NoteDraft::default()
            })
            .unwrap();
        let stats = note_stats(store.list(), today);
        assert_eq!(stats.today, 1);

        store
            .create(NoteDraft {
                title: "Yesterday's note".into(),
                category: "work".into(),
                date: Some(yesterday),
                ..NoteDraft::default()
            })
            .unwrap();
        let stats = note_stats(store.list(), today);
        // The yesterday note does not move the today counter
        assert_eq!(stats.today, 1);
        assert_eq!(stats.total, 2);
    }

    #[test]
    fn test_note_stats_distinct_categories_and_tags() {
        let mut store = NoteStore::new();
        for (title, category, tags) in [
            ("a", "work", vec!["retro", "team"]),
            ("b", "work", vec!["retro"]),
            ("c", "ideas", vec![]),
        ] {
            store
                .create(NoteDraft {
                    title: title.into(),
                    category: category.into(),
                    tags: tags.into_iter().map(String::from).collect(),
                    ..NoteDraft::default()
                })
                .unwrap();
        }

        let stats = note_stats(store.list(), NaiveDate::from_ymd_opt(2026, 8, 8).unwrap());
        assert_eq!(stats.categories, 2);
        assert_eq!(stats.tags, 2);
    }
}
