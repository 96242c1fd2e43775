pub mod note_store;
pub mod task_store;

pub use note_store::NoteStore;
pub use task_store::TaskStore;

/// Error type for store mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The referenced item does not exist. The original views treated this as
    /// a silent no-op; here it is an explicit signal the caller can surface.
    #[error("no item with id {0}")]
    NotFound(u64),
    #[error("title cannot be empty")]
    EmptyTitle,
}

/// Validate a title field: trimmed, non-empty.
/// Returns the trimmed title to store.
pub(crate) fn validate_title(title: &str) -> Result<String, StoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(StoreError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}
