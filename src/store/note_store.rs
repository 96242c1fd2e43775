use chrono::Local;
use indexmap::IndexSet;

use crate::model::note::{Note, NoteDraft, NoteId};
use crate::store::{StoreError, validate_title};

/// In-memory note collection plus the user-defined category list.
///
/// Unlike tasks, note categories are free-form: the list is seeded from
/// config and grows whenever a note is filed under a new name.
#[derive(Debug, Clone)]
pub struct NoteStore {
    notes: Vec<Note>,
    next_id: NoteId,
    categories: IndexSet<String>,
}

impl Default for NoteStore {
    fn default() -> Self {
        NoteStore {
            notes: Vec::new(),
            next_id: 1,
            categories: IndexSet::new(),
        }
    }
}

impl NoteStore {
    pub fn new() -> Self {
        NoteStore::default()
    }

    /// A store seeded with the given category names (config order preserved)
    pub fn with_categories<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = NoteStore::new();
        for name in seed {
            store.add_category(name.into());
        }
        store
    }

    /// All notes in insertion order
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The user-defined category list, insertion-ordered
    pub fn categories(&self) -> &IndexSet<String> {
        &self.categories
    }

    /// Register a category name. Blank names are ignored; duplicates are a
    /// no-op. Returns true if the name was new.
    pub fn add_category(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.categories.insert(trimmed.to_string())
    }

    /// Create a note from a draft. A missing date defaults to today; the
    /// note's category is registered in the category list.
    pub fn create(&mut self, draft: NoteDraft) -> Result<NoteId, StoreError> {
        let title = validate_title(&draft.title)?;
        let id = self.next_id;
        self.next_id += 1;

        let category = draft.category.trim().to_string();
        self.add_category(category.clone());

        self.notes.push(Note {
            id,
            title,
            content: draft.content,
            category,
            date: draft.date.unwrap_or_else(|| Local::now().date_naive()),
            tags: dedup_tags(draft.tags),
            created_at: Local::now(),
        });
        log::debug!("note created id={id}");
        Ok(id)
    }

    /// Replace the editable fields of the note matching `id`.
    /// `created_at` is preserved; an absent draft date keeps the old one.
    pub fn update(&mut self, id: NoteId, draft: NoteDraft) -> Result<(), StoreError> {
        let title = validate_title(&draft.title)?;
        let category = draft.category.trim().to_string();

        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(StoreError::NotFound(id))?;
        note.title = title;
        note.content = draft.content;
        note.category = category.clone();
        if let Some(date) = draft.date {
            note.date = date;
        }
        note.tags = dedup_tags(draft.tags);

        self.add_category(category);
        log::debug!("note updated id={id}");
        Ok(())
    }

    /// Remove and return the note matching `id`
    pub fn delete(&mut self, id: NoteId) -> Result<Note, StoreError> {
        let idx = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(StoreError::NotFound(id))?;
        log::debug!("note deleted id={id}");
        Ok(self.notes.remove(idx))
    }
}

/// Normalize a tag set: trim entries, drop blanks, strip a leading '#'.
/// The IndexSet collapses duplicates while keeping first-seen order.
fn dedup_tags(tags: IndexSet<String>) -> IndexSet<String> {
    tags.into_iter()
        .filter_map(|tag| {
            let cleaned = tag.trim().trim_start_matches('#').trim();
            if cleaned.is_empty() {
                None
            } else {
                Some(cleaned.to_string())
            }
        })
        .collect()
}
