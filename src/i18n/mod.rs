//! Target languages for task translation.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the closed set of target languages
//! - `language`: Validated `Language` handle stored on every task
//! - `phrases`: Static English phrase tables consulted before any remote call
//!
//! # Example
//!
//! ```rust,ignore
//! use ai_todo::i18n::Language;
//!
//! let french = Language::from_name("French")?;
//! assert!(french.phrases().is_some());
//!
//! let names: Vec<_> = Language::all().map(|l| l.name()).collect();
//! ```

mod language;
mod phrases;
mod registry;

pub use language::Language;
pub use phrases::PhraseTable;
pub use registry::{LanguageConfig, LanguageRegistry};
