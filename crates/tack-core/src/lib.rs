//! tack Core Library
//!
//! This crate provides the core functionality for tack, a local-first
//! sticky-note manager.
//!
//! # Architecture
//!
//! A thin reconciliation layer over a typed key-value store. The whole
//! note collection lives under a single key and is written through on
//! every mutation; presentation order is derived, never persisted.
//!
//! # Quick Start
//!
//! ```text
//! let config = Config::load()?;
//! let mut repo = NoteRepository::open(FileStore::new(&config));
//!
//! // Save a note
//! let mut draft = Draft::new();
//! draft.content = "Buy milk".to_string();
//! repo.upsert(draft)?;
//!
//! // Query notes, most recently modified first
//! let notes = repo.list_sorted();
//! ```
//!
//! # Modules
//!
//! - `repository`: note collection operations (main entry point)
//! - `store`: key-value persistence (file-backed and in-memory)
//! - `session`: the editor session state machine
//! - `models`: data structures for notes, drafts, and colors
//! - `config`: application configuration

pub mod config;
pub mod models;
pub mod repository;
pub mod session;
pub mod store;

pub use config::Config;
pub use models::{now_millis, Draft, Note, NoteColor, UNTITLED_TITLE};
pub use repository::{NoteRepository, NOTES_KEY};
pub use session::{EditorSession, SessionOutcome};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, StoreResult};
