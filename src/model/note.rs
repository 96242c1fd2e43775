use chrono::{DateTime, Local, NaiveDate};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Note identifier, assigned by the store
pub type NoteId = u64;

/// A note record.
///
/// `category` is free-form text drawn from the store's user-defined category
/// list (unlike tasks, which use a fixed enum). Tags are a set: deduplicated,
/// insertion order preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub category: String,
    /// The calendar date the note belongs to (not the creation instant)
    pub date: NaiveDate,
    pub tags: IndexSet<String>,
    pub created_at: DateTime<Local>,
}

/// Form input for creating or editing a note
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    pub date: Option<NaiveDate>,
    pub tags: IndexSet<String>,
}
