use thiserror::Error;

/// Errors raised by task store mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("Task text must not be empty")]
    Validation,

    #[error("Task {id} not found")]
    NotFound { id: usize },

    #[error("Unsupported language: '{name}'")]
    InvalidLanguage { name: String },
}

pub type TodoResult<T> = Result<T, TodoError>;
