//! In-memory todo list with dictionary-first task translation.
//!
//! The store and resolver live in the library so the binary and the
//! integration tests share them.

pub mod config;
pub mod error;
pub mod i18n;
pub mod openai;
pub mod render;
pub mod server;
pub mod session;
pub mod store;
pub mod translation;
