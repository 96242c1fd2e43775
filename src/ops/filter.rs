use chrono::NaiveDate;

use crate::model::note::Note;
use crate::model::task::{Category, Task};

/// Visible-subset criteria for the task list: category, free-text query, and
/// an optional exact-date constraint (calendar pane only). All three are
/// ANDed; an unset field matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    /// None means "all categories"
    pub category: Option<Category>,
    /// Case-insensitive substring over title and description
    pub query: String,
    /// Exact calendar-date match against the deadline's date
    pub on_date: Option<NaiveDate>,
}

impl TaskFilter {
    pub fn is_active(&self) -> bool {
        self.category.is_some() || !self.query.trim().is_empty() || self.on_date.is_some()
    }
}

/// Same shape for notes; the category is free-form and the text search also
/// covers tags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteFilter {
    pub category: Option<String>,
    pub query: String,
    pub on_date: Option<NaiveDate>,
}

impl NoteFilter {
    pub fn is_active(&self) -> bool {
        self.category.is_some() || !self.query.trim().is_empty() || self.on_date.is_some()
    }
}

/// Lazily filter tasks, preserving insertion order.
/// The yielded references live as long as the collection, not the filter.
pub fn filter_tasks<'a>(
    tasks: &'a [Task],
    filter: &TaskFilter,
) -> impl Iterator<Item = &'a Task> {
    tasks.iter().filter(move |task| matches_task(task, filter))
}

/// Lazily filter notes, preserving insertion order
pub fn filter_notes<'a>(
    notes: &'a [Note],
    filter: &NoteFilter,
) -> impl Iterator<Item = &'a Note> {
    notes.iter().filter(move |note| matches_note(note, filter))
}

pub fn matches_task(task: &Task, filter: &TaskFilter) -> bool {
    if let Some(category) = filter.category {
        if task.category != category {
            return false;
        }
    }
    if let Some(date) = filter.on_date {
        if task.deadline_date() != Some(date) {
            return false;
        }
    }
    query_matches(&filter.query, [task.title.as_str(), task.description.as_str()])
}

pub fn matches_note(note: &Note, filter: &NoteFilter) -> bool {
    if let Some(category) = &filter.category {
        if &note.category != category {
            return false;
        }
    }
    if let Some(date) = filter.on_date {
        if note.date != date {
            return false;
        }
    }
    query_matches(
        &filter.query,
        [note.title.as_str(), note.content.as_str()]
            .into_iter()
            .chain(note.tags.iter().map(|t| t.as_str())),
    )
}

/// Case-insensitive substring match across any of the fields.
/// An empty or whitespace-only query matches everything.
fn query_matches<'a>(query: &str, fields: impl IntoIterator<Item = &'a str>) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::note::NoteDraft;
    use crate::model::task::TaskDraft;
    use crate::store::{NoteStore, TaskStore};
    use chrono::NaiveDate;

    fn sample_tasks() -> TaskStore {
        let mut store = TaskStore::new();
        store
            .create(TaskDraft {
                title: "Deploy Service".into(),
                description: "Roll out to staging".into(),
                category: Category::System,
                deadline: NaiveDate::from_ymd_opt(2026, 8, 10)
                    .unwrap()
                    .and_hms_opt(9, 0, 0),
                ..TaskDraft::default()
            })
            .unwrap();
        store
            .create(TaskDraft {
                title: "Trace flaky test".into(),
                category: Category::Testing,
                ..TaskDraft::default()
            })
            .unwrap();
        store
            .create(TaskDraft {
                title: "Clean fans".into(),
                category: Category::Maintenance,
                deadline: NaiveDate::from_ymd_opt(2026, 8, 12)
                    .unwrap()
                    .and_hms_opt(18, 0, 0),
                ..TaskDraft::default()
            })
            .unwrap();
        store
    }

    fn sample_notes() -> NoteStore {
        let mut store = NoteStore::new();
        store
            .create(NoteDraft {
                title: "Retro summary".into(),
                content: "What went well".into(),
                category: "work".into(),
                date: NaiveDate::from_ymd_opt(2026, 8, 7),
                tags: ["retro".to_string()].into_iter().collect(),
            })
            .unwrap();
        store
            .create(NoteDraft {
                title: "Garden plan".into(),
                content: String::new(),
                category: "personal".into(),
                date: NaiveDate::from_ymd_opt(2026, 8, 8),
                tags: ["weekend".to_string(), "outdoors".to_string()]
                    .into_iter()
                    .collect(),
            })
            .unwrap();
        store
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let store = sample_tasks();
        let filter = TaskFilter::default();
        assert!(!filter.is_active());

        let visible: Vec<_> = filter_tasks(store.list(), &filter).collect();
        assert_eq!(visible.len(), store.len());
        // Original insertion order preserved
        let titles: Vec<&str> = visible.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Deploy Service", "Trace flaky test", "Clean fans"]);
    }

    #[test]
    fn test_category_filter() {
        let store = sample_tasks();
        let filter = TaskFilter {
            category: Some(Category::Testing),
            ..TaskFilter::default()
        };
        let visible: Vec<_> = filter_tasks(store.list(), &filter).collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Trace flaky test");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = sample_tasks();
        let filter = TaskFilter {
            query: "deploy".into(),
            ..TaskFilter::default()
        };
        let visible: Vec<_> = filter_tasks(store.list(), &filter).collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Deploy Service");
    }

    #[test]
    fn test_search_covers_description() {
        let store = sample_tasks();
        let filter = TaskFilter {
            query: "STAGING".into(),
            ..TaskFilter::default()
        };
        assert_eq!(filter_tasks(store.list(), &filter).count(), 1);
    }

    #[test]
    fn test_whitespace_query_matches_everything() {
        let store = sample_tasks();
        let filter = TaskFilter {
            query: "   ".into(),
            ..TaskFilter::default()
        };
        assert!(!filter.is_active());
        assert_eq!(filter_tasks(store.list(), &filter).count(), 3);
    }

    #[test]
    fn test_date_constraint_exact_match() {
        let store = sample_tasks();
        let filter = TaskFilter {
            on_date: NaiveDate::from_ymd_opt(2026, 8, 10),
            ..TaskFilter::default()
        };
        let visible: Vec<_> = filter_tasks(store.list(), &filter).collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Deploy Service");

        // No range semantics: the 11th matches nothing
        let filter = TaskFilter {
            on_date: NaiveDate::from_ymd_opt(2026, 8, 11),
            ..TaskFilter::default()
        };
        assert_eq!(filter_tasks(store.list(), &filter).count(), 0);
    }

    #[test]
    fn test_predicates_are_anded() {
        let store = sample_tasks();
        // Category matches but date does not
        let filter = TaskFilter {
            category: Some(Category::System),
            on_date: NaiveDate::from_ymd_opt(2026, 8, 12),
            ..TaskFilter::default()
        };
        assert_eq!(filter_tasks(store.list(), &filter).count(), 0);
    }

    #[test]
    fn test_note_search_covers_tags() {
        let store = sample_notes();
        let filter = NoteFilter {
            query: "OUTDOORS".into(),
            ..NoteFilter::default()
        };
        let visible: Vec<_> = filter_notes(store.list(), &filter).collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Garden plan");
    }

    #[test]
    fn test_note_category_filter() {
        let store = sample_notes();
        let filter = NoteFilter {
            category: Some("work".into()),
            ..NoteFilter::default()
        };
        let visible: Vec<_> = filter_notes(store.list(), &filter).collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Retro summary");
    }

    #[test]
    fn test_note_date_constraint() {
        let store = sample_notes();
        let filter = NoteFilter {
            on_date: NaiveDate::from_ymd_opt(2026, 8, 8),
            ..NoteFilter::default()
        };
        let visible: Vec<_> = filter_notes(store.list(), &filter).collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Garden plan");
    }
}
