use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Task identifier, assigned by the store
pub type TaskId = u64;

/// Work category for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    System,
    Troubleshooting,
    Maintenance,
    Simple,
    Testing,
    Documentation,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Category::System,
        Category::Troubleshooting,
        Category::Maintenance,
        Category::Simple,
        Category::Testing,
        Category::Documentation,
    ];

    /// Display name shown in the sidebar and on task rows
    pub fn label(self) -> &'static str {
        match self {
            Category::System => "System Development",
            Category::Troubleshooting => "Troubleshooting",
            Category::Maintenance => "PC Maintenance",
            Category::Simple => "Simple Tasks",
            Category::Testing => "Testing & QA",
            Category::Documentation => "Documentation",
        }
    }

    /// Stable key used in config and state files
    pub fn key(self) -> &'static str {
        match self {
            Category::System => "system",
            Category::Troubleshooting => "troubleshooting",
            Category::Maintenance => "maintenance",
            Category::Simple => "simple",
            Category::Testing => "testing",
            Category::Documentation => "documentation",
        }
    }

    /// Parse a stable key back into a category
    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// A task record.
///
/// Invariant: `completed == (progress >= 100)`. Every mutation path in
/// `store::TaskStore` maintains this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    /// Optional deadline; tasks without one never count as overdue
    pub deadline: Option<NaiveDateTime>,
    pub estimated_hours: f32,
    pub completed: bool,
    /// 0..=100
    pub progress: u8,
    pub created_at: DateTime<Local>,
}

impl Task {
    /// The calendar date of the deadline, if any
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        self.deadline.map(|dt| dt.date())
    }

    /// Whether the deadline has passed and the task is still open
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        match self.deadline {
            Some(deadline) => deadline < now && !self.completed,
            None => false,
        }
    }
}

/// Form input for creating or editing a task.
///
/// `completed`/`progress`/`created_at` are owned by the store and never part
/// of a draft: edits preserve them, creates initialize them.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub deadline: Option<NaiveDateTime>,
    pub estimated_hours: f32,
}

impl Default for TaskDraft {
    fn default() -> Self {
        TaskDraft {
            title: String::new(),
            description: String::new(),
            category: Category::System,
            priority: Priority::Medium,
            deadline: None,
            estimated_hours: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn sample_task() -> Task {
        Task {
            id: 1,
            title: "Fix bug".into(),
            description: String::new(),
            category: Category::Troubleshooting,
            priority: Priority::High,
            deadline: Some(dt(2026, 3, 10, 17)),
            estimated_hours: 2.0,
            completed: false,
            progress: 0,
            created_at: Local::now(),
        }
    }

    #[test]
    fn test_category_key_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_key(cat.key()), Some(cat));
        }
        assert_eq!(Category::from_key("nonsense"), None);
    }

    #[test]
    fn test_deadline_date() {
        let task = sample_task();
        assert_eq!(task.deadline_date(), NaiveDate::from_ymd_opt(2026, 3, 10));

        let mut no_deadline = sample_task();
        no_deadline.deadline = None;
        assert_eq!(no_deadline.deadline_date(), None);
    }

    #[test]
    fn test_is_overdue() {
        let task = sample_task();
        assert!(!task.is_overdue(dt(2026, 3, 10, 16)));
        assert!(task.is_overdue(dt(2026, 3, 10, 18)));

        // Completed tasks are never overdue
        let mut done = sample_task();
        done.completed = true;
        done.progress = 100;
        assert!(!done.is_overdue(dt(2026, 3, 10, 18)));

        // No deadline, never overdue
        let mut open_ended = sample_task();
        open_ended.deadline = None;
        assert!(!open_ended.is_overdue(dt(2099, 1, 1, 0)));
    }

    #[test]
    fn test_draft_defaults_match_form() {
        let draft = TaskDraft::default();
        assert_eq!(draft.category, Category::System);
        assert_eq!(draft.priority, Priority::Medium);
        assert_eq!(draft.estimated_hours, 1.0);
        assert!(draft.deadline.is_none());
    }
}
