use crate::error::{TodoError, TodoResult};
use crate::i18n::Language;
use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::debug;

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    /// Position in the store at creation time
    pub id: usize,
    /// Trimmed, never empty
    pub text: String,
    pub created_at: DateTime<Local>,
    pub completed: bool,
    pub selected_language: Language,
    /// Cleared whenever `selected_language` changes
    pub translation: Option<String>,
    /// Bumped on every language change, including re-selecting the same one
    #[serde(skip)]
    pub language_revision: u64,
}

impl Task {
    /// Creation time formatted for display (e.g., "2024-01-15 10:30").
    pub fn created_at_display(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Ordered list of tasks for one session.
///
/// Tasks are never removed, so a task's id is always its index.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task. Whitespace-only text is rejected and the store is left unchanged.
    pub fn add(&mut self, text: &str) -> TodoResult<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TodoError::Validation);
        }

        let id = self.tasks.len();
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            created_at: Local::now(),
            completed: false,
            selected_language: Language::default(),
            translation: None,
            language_revision: 0,
        });
        debug!(id, "Task appended");

        Ok(&self.tasks[id])
    }

    pub fn set_completed(&mut self, id: usize, value: bool) -> TodoResult<()> {
        self.get_mut(id)?.completed = value;
        Ok(())
    }

    /// Change the target language by name, dropping any existing translation.
    pub fn set_language(&mut self, id: usize, language: &str) -> TodoResult<()> {
        let language = Language::from_name(language)?;
        let task = self.get_mut(id)?;
        task.selected_language = language;
        task.translation = None;
        task.language_revision = task.language_revision.wrapping_add(1);
        Ok(())
    }

    /// Store a translation verbatim.
    pub fn set_translation(&mut self, id: usize, text: impl Into<String>) -> TodoResult<()> {
        self.get_mut(id)?.translation = Some(text.into());
        Ok(())
    }

    pub fn get(&self, id: usize) -> TodoResult<&Task> {
        self.tasks.get(id).ok_or(TodoError::NotFound { id })
    }

    fn get_mut(&mut self, id: usize) -> TodoResult<&mut Task> {
        self.tasks.get_mut(id).ok_or(TodoError::NotFound { id })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn pending_count(&self) -> usize {
        self.len() - self.completed_count()
    }
}
