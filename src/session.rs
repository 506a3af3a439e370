//! Per-session state: the task store plus a one-shot notice for the next render.

use crate::error::TodoResult;
use crate::i18n::Language;
use crate::store::TaskStore;
use crate::translation::Translation;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// Feedback shown once after a mutation, then cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    pub store: TaskStore,
    notice: Option<Notice>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn add_task(&mut self, text: &str) -> TodoResult<usize> {
        let id = match self.store.add(text).map(|task| task.id) {
            Ok(id) => id,
            Err(e) => {
                self.notify(Notice::error("Please enter a task before adding it."));
                return Err(e);
            }
        };
        info!(id, "Task added");
        self.notify(Notice::success(format!("✅ Added: {}", text.trim())));
        Ok(id)
    }

    pub fn complete_task(&mut self, id: usize) -> TodoResult<()> {
        self.store.set_completed(id, true)?;
        info!(id, "Task completed");
        self.notify(Notice::success("Task completed!"));
        Ok(())
    }

    pub fn undo_task(&mut self, id: usize) -> TodoResult<()> {
        self.store.set_completed(id, false)?;
        info!(id, "Task marked as pending");
        self.notify(Notice::info("Task marked as pending!"));
        Ok(())
    }

    pub fn change_language(&mut self, id: usize, language: &str) -> TodoResult<()> {
        self.store.set_language(id, language)?;
        info!(id, language, "Task language changed");
        Ok(())
    }

    /// Snapshot what a translation of task `id` needs, taken before the
    /// resolver runs.
    pub fn begin_translation(&self, id: usize) -> TodoResult<PendingTranslation> {
        let task = self.store.get(id)?;
        Ok(PendingTranslation {
            id,
            text: task.text.clone(),
            language: task.selected_language,
            revision: task.language_revision,
        })
    }

    /// Store a resolved translation if the task's language has not changed
    /// since `pending` was taken.
    ///
    /// Any language change in between, even one that lands back on the same
    /// language, makes the result stale; it is then dropped and `false` is
    /// returned.
    pub fn apply_translation(
        &mut self,
        pending: &PendingTranslation,
        translation: &Translation,
    ) -> TodoResult<bool> {
        let current = self.store.get(pending.id)?.language_revision;
        if current != pending.revision {
            debug!(
                id = pending.id,
                requested = pending.language.name(),
                "Discarding stale translation"
            );
            return Ok(false);
        }

        self.store.set_translation(pending.id, translation.to_string())?;
        if translation.is_failure() {
            self.notify(Notice::error("Translation failed. See the task for details."));
        }
        Ok(true)
    }

    /// Run `f` without disturbing the notice waiting for the browser.
    pub fn preserving_notice<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let waiting = self.notice.take();
        let result = f(self);
        self.notice = waiting;
        result
    }
}

/// A translation in flight for one task.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTranslation {
    pub id: usize,
    pub text: String,
    pub language: Language,
    revision: u64,
}
