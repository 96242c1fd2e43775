use chrono::Local;

use crate::model::task::{Task, TaskDraft, TaskId};
use crate::store::{StoreError, validate_title};

/// In-memory task collection with explicit CRUD operations.
///
/// Owns id assignment and the progress invariant: after any mutation,
/// `completed == (progress >= 100)` holds for every task.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore::default()
    }

    /// All tasks in insertion order
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Create a task from a draft, appending it to the collection.
    /// Returns the assigned id.
    pub fn create(&mut self, draft: TaskDraft) -> Result<TaskId, StoreError> {
        let title = validate_title(&draft.title)?;
        let id = self.next_id;
        self.next_id += 1;

        self.tasks.push(Task {
            id,
            title,
            description: draft.description,
            category: draft.category,
            priority: draft.priority,
            deadline: draft.deadline,
            estimated_hours: draft.estimated_hours,
            completed: false,
            progress: 0,
            created_at: Local::now(),
        });
        log::debug!("task created id={id}");
        Ok(id)
    }

    /// Replace the editable fields of the task matching `id`.
    /// `completed`, `progress`, and `created_at` are preserved.
    pub fn update(&mut self, id: TaskId, draft: TaskDraft) -> Result<(), StoreError> {
        let title = validate_title(&draft.title)?;
        let task = self.find_mut(id)?;
        task.title = title;
        task.description = draft.description;
        task.category = draft.category;
        task.priority = draft.priority;
        task.deadline = draft.deadline;
        task.estimated_hours = draft.estimated_hours;
        log::debug!("task updated id={id}");
        Ok(())
    }

    /// Remove and return the task matching `id`
    pub fn delete(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        log::debug!("task deleted id={id}");
        Ok(self.tasks.remove(idx))
    }

    /// Flip `completed`, snapping `progress` to 0 or 100 to keep the
    /// invariant. Returns the new completion state.
    pub fn toggle_completion(&mut self, id: TaskId) -> Result<bool, StoreError> {
        let task = self.find_mut(id)?;
        task.completed = !task.completed;
        task.progress = if task.completed { 100 } else { 0 };
        Ok(task.completed)
    }

    /// Set progress, clamping to [0, 100], and derive `completed` from the
    /// clamped value. Returns the clamped progress.
    pub fn set_progress(&mut self, id: TaskId, value: i32) -> Result<u8, StoreError> {
        let task = self.find_mut(id)?;
        let clamped = value.clamp(0, 100) as u8;
        task.progress = clamped;
        task.completed = clamped >= 100;
        Ok(clamped)
    }

    fn find_mut(&mut self, id: TaskId) -> Result<&mut Task, StoreError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}
