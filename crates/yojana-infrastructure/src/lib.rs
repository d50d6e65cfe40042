//! Infrastructure layer: concrete storage and data loading for the Yojana
//! assistant.
//!
//! # Module Structure
//!
//! - `catalog_loader`: embedded and file-based scheme catalog loading
//! - `in_memory_session_repository`: default `SessionRepository` backend

mod catalog_loader;
mod in_memory_session_repository;

// Re-export public API
pub use catalog_loader::{load_builtin_catalog, load_catalog_from_path};
pub use in_memory_session_repository::InMemorySessionRepository;
