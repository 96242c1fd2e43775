use std::io;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use indexmap::IndexSet;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::cli::Cli;
use crate::model::calendar::{GridPolicy, MonthGrid, MonthRef};
use crate::model::config::AppConfig;
use crate::model::note::{Note, NoteId};
use crate::model::task::{Category, Priority, Task, TaskId};
use crate::ops::calendar::month_grid;
use crate::ops::filter::{NoteFilter, TaskFilter, filter_notes, filter_tasks};
use crate::store::{NoteStore, TaskStore};

use super::input;
use super::render;
use super::theme::Theme;

/// Which item collection is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workspace {
    Tasks,
    Notes,
}

/// Which view of the active collection is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    List,
    Calendar,
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
    Form,
    Confirm,
}

/// A pending destructive action awaiting y/n
#[derive(Debug, Clone)]
pub enum ConfirmAction {
    DeleteTask { id: TaskId, title: String },
    DeleteNote { id: NoteId, title: String },
}

// ---------------------------------------------------------------------------
// Form state
// ---------------------------------------------------------------------------

/// What the open form creates or edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Task { editing: Option<TaskId> },
    Note { editing: Option<NoteId> },
}

/// One focusable field of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Body,
    Category,
    Priority,
    Deadline,
    Hours,
    NoteCategory,
    Date,
    Tags,
}

impl FormField {
    /// Select fields cycle values instead of taking text
    pub fn is_select(self) -> bool {
        matches!(self, FormField::Category | FormField::Priority)
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Body => "Description",
            FormField::Category => "Category",
            FormField::Priority => "Priority",
            FormField::Deadline => "Deadline",
            FormField::Hours => "Est. hours",
            FormField::NoteCategory => "Category",
            FormField::Date => "Date",
            FormField::Tags => "Tags",
        }
    }
}

const TASK_FIELDS: [FormField; 6] = [
    FormField::Title,
    FormField::Body,
    FormField::Category,
    FormField::Priority,
    FormField::Deadline,
    FormField::Hours,
];

const NOTE_FIELDS: [FormField; 5] = [
    FormField::Title,
    FormField::Body,
    FormField::NoteCategory,
    FormField::Date,
    FormField::Tags,
];

/// In-progress form input. Text fields are edited as strings and parsed at
/// submit time; select fields hold an index into the enum's value list.
#[derive(Debug, Clone)]
pub struct FormState {
    pub kind: FormKind,
    pub focus: usize,
    pub title: String,
    /// Description (tasks) or content (notes)
    pub body: String,
    pub category_idx: usize,
    pub priority_idx: usize,
    /// "YYYY-MM-DD" or "YYYY-MM-DD HH:MM"; empty = no deadline
    pub deadline: String,
    pub hours: String,
    pub note_category: String,
    /// "YYYY-MM-DD"; empty = today (create) / keep (edit)
    pub date: String,
    /// Tag being typed; Enter commits it into `tags`
    pub tag_entry: String,
    pub tags: IndexSet<String>,
    /// Byte offset of the cursor within the focused text buffer
    pub cursor: usize,
    pub error: Option<String>,
}

impl FormState {
    pub fn new_task(deadline: Option<NaiveDate>) -> Self {
        FormState {
            kind: FormKind::Task { editing: None },
            focus: 0,
            title: String::new(),
            body: String::new(),
            category_idx: 0,
            priority_idx: 1, // medium
            deadline: deadline
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            hours: "1".into(),
            note_category: String::new(),
            date: String::new(),
            tag_entry: String::new(),
            tags: IndexSet::new(),
            cursor: 0,
            error: None,
        }
    }

    pub fn edit_task(task: &Task) -> Self {
        let mut form = FormState::new_task(None);
        form.kind = FormKind::Task {
            editing: Some(task.id),
        };
        form.title = task.title.clone();
        form.body = task.description.clone();
        form.category_idx = Category::ALL
            .iter()
            .position(|c| *c == task.category)
            .unwrap_or(0);
        form.priority_idx = Priority::ALL
            .iter()
            .position(|p| *p == task.priority)
            .unwrap_or(1);
        form.deadline = task
            .deadline
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        form.hours = format!("{}", task.estimated_hours);
        form.cursor = form.title.len();
        form
    }

    pub fn new_note(default_category: &str, date: Option<NaiveDate>) -> Self {
        FormState {
            kind: FormKind::Note { editing: None },
            focus: 0,
            title: String::new(),
            body: String::new(),
            category_idx: 0,
            priority_idx: 0,
            deadline: String::new(),
            hours: String::new(),
            note_category: default_category.to_string(),
            date: date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            tag_entry: String::new(),
            tags: IndexSet::new(),
            cursor: 0,
            error: None,
        }
    }

    pub fn edit_note(note: &Note) -> Self {
        let mut form = FormState::new_note(&note.category, Some(note.date));
        form.kind = FormKind::Note {
            editing: Some(note.id),
        };
        form.title = note.title.clone();
        form.body = note.content.clone();
        form.tags = note.tags.clone();
        form.cursor = form.title.len();
        form
    }

    pub fn fields(&self) -> &'static [FormField] {
        match self.kind {
            FormKind::Task { .. } => &TASK_FIELDS,
            FormKind::Note { .. } => &NOTE_FIELDS,
        }
    }

    pub fn focused(&self) -> FormField {
        self.fields()[self.focus]
    }

    /// Modal title
    pub fn heading(&self) -> &'static str {
        match self.kind {
            FormKind::Task { editing: None } => "New Task",
            FormKind::Task { editing: Some(_) } => "Edit Task",
            FormKind::Note { editing: None } => "New Note",
            FormKind::Note { editing: Some(_) } => "Edit Note",
        }
    }

    /// The focused field's text buffer, if it is a text field
    pub fn text_buffer(&self) -> Option<&String> {
        match self.focused() {
            FormField::Title => Some(&self.title),
            FormField::Body => Some(&self.body),
            FormField::Deadline => Some(&self.deadline),
            FormField::Hours => Some(&self.hours),
            FormField::NoteCategory => Some(&self.note_category),
            FormField::Date => Some(&self.date),
            FormField::Tags => Some(&self.tag_entry),
            FormField::Category | FormField::Priority => None,
        }
    }

    pub fn text_buffer_mut(&mut self) -> Option<&mut String> {
        match self.focused() {
            FormField::Title => Some(&mut self.title),
            FormField::Body => Some(&mut self.body),
            FormField::Deadline => Some(&mut self.deadline),
            FormField::Hours => Some(&mut self.hours),
            FormField::NoteCategory => Some(&mut self.note_category),
            FormField::Date => Some(&mut self.date),
            FormField::Tags => Some(&mut self.tag_entry),
            FormField::Category | FormField::Priority => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

pub struct App {
    pub tasks: TaskStore,
    pub notes: NoteStore,
    pub config: AppConfig,
    pub theme: Theme,

    pub workspace: Workspace,
    pub pane: Pane,
    pub mode: Mode,
    pub should_quit: bool,
    pub show_help: bool,

    /// Cursor into the *visible* (filtered) task list
    pub task_cursor: usize,
    pub task_scroll: usize,
    pub note_cursor: usize,
    pub note_scroll: usize,
    /// Sidebar category filters
    pub task_category: Option<Category>,
    pub note_category: Option<String>,

    /// Displayed calendar month
    pub month: MonthRef,
    /// Date the calendar cursor is on; doubles as the date constraint
    pub selected_date: NaiveDate,

    /// Query being typed in Search mode
    pub search_input: String,
    /// Last committed query (live filter source in Navigate mode)
    pub last_search: Option<String>,

    pub form: Option<FormState>,
    pub confirm: Option<ConfirmAction>,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, cli: &Cli) -> Self {
        let theme = Theme::from_config(&config.ui);
        let notes = NoteStore::with_categories(config.notes.categories.clone());
        let today = Local::now().date_naive();

        App {
            tasks: TaskStore::new(),
            notes,
            theme,
            config,
            workspace: if cli.notes {
                Workspace::Notes
            } else {
                Workspace::Tasks
            },
            pane: if cli.calendar {
                Pane::Calendar
            } else {
                Pane::List
            },
            mode: Mode::Navigate,
            should_quit: false,
            show_help: false,
            task_cursor: 0,
            task_scroll: 0,
            note_cursor: 0,
            note_scroll: 0,
            task_category: None,
            note_category: None,
            month: MonthRef::containing(today),
            selected_date: today,
            search_input: String::new(),
            last_search: None,
            form: None,
            confirm: None,
            status_message: None,
        }
    }

    // --- Derived views -----------------------------------------------------

    /// The search text currently in effect: the live input while typing, the
    /// committed query otherwise.
    pub fn active_query(&self) -> &str {
        if self.mode == Mode::Search {
            &self.search_input
        } else {
            self.last_search.as_deref().unwrap_or("")
        }
    }

    /// The filter spec for the task workspace. The date constraint only
    /// applies on the calendar pane.
    pub fn task_filter(&self) -> TaskFilter {
        TaskFilter {
            category: self.task_category,
            query: self.active_query().to_string(),
            on_date: match self.pane {
                Pane::Calendar => Some(self.selected_date),
                Pane::List => None,
            },
        }
    }

    pub fn note_filter(&self) -> NoteFilter {
        NoteFilter {
            category: self.note_category.clone(),
            query: self.active_query().to_string(),
            on_date: match self.pane {
                Pane::Calendar => Some(self.selected_date),
                Pane::List => None,
            },
        }
    }

    pub fn visible_tasks(&self) -> Vec<&Task> {
        let filter = self.task_filter();
        filter_tasks(self.tasks.list(), &filter).collect()
    }

    pub fn visible_notes(&self) -> Vec<&Note> {
        let filter = self.note_filter();
        filter_notes(self.notes.list(), &filter).collect()
    }

    /// Number of visible items in the active workspace
    pub fn visible_len(&self) -> usize {
        match self.workspace {
            Workspace::Tasks => self.visible_tasks().len(),
            Workspace::Notes => self.visible_notes().len(),
        }
    }

    /// The task under the cursor (task workspace, list pane)
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.visible_tasks().get(self.task_cursor).map(|t| t.id)
    }

    pub fn selected_note_id(&self) -> Option<NoteId> {
        self.visible_notes().get(self.note_cursor).map(|n| n.id)
    }

    /// Keep cursors inside the visible range after any mutation or filter
    /// change
    pub fn clamp_cursors(&mut self) {
        let tasks = self.visible_tasks().len();
        self.task_cursor = self.task_cursor.min(tasks.saturating_sub(1));
        let notes = self.visible_notes().len();
        self.note_cursor = self.note_cursor.min(notes.saturating_sub(1));
    }

    // --- Calendar ----------------------------------------------------------

    /// Grid policy for the active workspace
    pub fn grid_policy(&self) -> GridPolicy {
        match self.workspace {
            Workspace::Tasks => self.config.calendar.task_grid,
            Workspace::Notes => self.config.calendar.note_grid,
        }
    }

    /// The month grid for the current view (derived, rebuilt per use)
    pub fn grid(&self) -> MonthGrid {
        month_grid(self.month, self.grid_policy())
    }

    pub fn step_month(&mut self, forward: bool) {
        self.month = if forward {
            self.month.next()
        } else {
            self.month.prev()
        };
        let today = Local::now().date_naive();
        self.selected_date = if self.month.contains(today) {
            today
        } else {
            self.month.first_day()
        };
        self.clamp_cursors();
    }

    pub fn go_today(&mut self) {
        let today = Local::now().date_naive();
        self.month = MonthRef::containing(today);
        self.selected_date = today;
        self.clamp_cursors();
    }

    /// Move the calendar selection by whole days, following across months
    pub fn move_selected_date(&mut self, days: i64) {
        self.selected_date = self.selected_date + chrono::Duration::days(days);
        if !self.month.contains(self.selected_date) {
            self.month = MonthRef::containing(self.selected_date);
        }
        self.clamp_cursors();
    }

    // --- Search highlighting ----------------------------------------------

    /// Case-insensitive regex for highlighting the active query; falls back
    /// to an escaped literal if the query isn't a valid pattern.
    pub fn active_search_re(&self) -> Option<Regex> {
        let query = self.active_query();
        if query.trim().is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){}", regex::escape(query))).ok()
    }
}

// ---------------------------------------------------------------------------
// UI state persistence (view state only, never items)
// ---------------------------------------------------------------------------

/// Restore view state from the previous session
pub fn restore_ui_state(app: &mut App) {
    use crate::io::state::read_ui_state;

    let ui_state = match read_ui_state() {
        Some(s) => s,
        None => return,
    };

    match ui_state.workspace.as_str() {
        "tasks" => app.workspace = Workspace::Tasks,
        "notes" => app.workspace = Workspace::Notes,
        _ => {}
    }
    match ui_state.pane.as_str() {
        "list" => app.pane = Pane::List,
        "calendar" => app.pane = Pane::Calendar,
        _ => {}
    }

    app.task_category = ui_state
        .task_category
        .as_deref()
        .and_then(Category::from_key);
    // Only restore a note category that still exists
    app.note_category = ui_state
        .note_category
        .filter(|c| app.notes.categories().contains(c));

    if let Some((year, month)) = ui_state.month {
        if let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) {
            app.month = MonthRef::containing(first);
            let today = Local::now().date_naive();
            app.selected_date = if app.month.contains(today) {
                today
            } else {
                first
            };
        }
    }

    app.last_search = ui_state.last_search;
    app.clamp_cursors();
}

/// Save view state for the next session
pub fn save_ui_state(app: &App) {
    use crate::io::state::{UiState, write_ui_state};

    let ui_state = UiState {
        workspace: match app.workspace {
            Workspace::Tasks => "tasks".into(),
            Workspace::Notes => "notes".into(),
        },
        pane: match app.pane {
            Pane::List => "list".into(),
            Pane::Calendar => "calendar".into(),
        },
        task_category: app.task_category.map(|c| c.key().to_string()),
        note_category: app.note_category.clone(),
        month: Some((app.month.year(), app.month.month())),
        last_search: app.last_search.clone(),
    };

    if let Err(e) = write_ui_state(&ui_state) {
        log::warn!("could not save ui state: {e}");
    }
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

/// Run the TUI application
pub fn run(config: AppConfig, cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config, cli);

    if !cli.fresh {
        restore_ui_state(&mut app);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    save_ui_state(&app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut save_counter = 0u32;
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
            // Debounced state save: every ~5 key presses
            save_counter += 1;
            if save_counter >= 5 {
                save_ui_state(app);
                save_counter = 0;
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
