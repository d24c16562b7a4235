//! Note repository
//!
//! The reconciliation layer between the editor and the persistent store.
//! Every mutation is a read-modify-write-through cycle: the in-memory
//! collection is transformed, then immediately written back under a
//! single key.
//!
//! ## Write failures
//!
//! A failed write-through is surfaced as a [`StoreError`] instead of
//! being dropped silently: the in-memory collection keeps the mutation,
//! and callers present a non-fatal "not saved" warning. Disk catches up
//! on the next successful write.
//!
//! ## Usage
//!
//! ```ignore
//! let mut repo = NoteRepository::open(FileStore::new(&config));
//!
//! let mut draft = Draft::new();
//! draft.content = "Buy milk".to_string();
//! let note = repo.upsert(draft)?;
//!
//! for note in repo.list_sorted() {
//!     println!("{}", note.title);
//! }
//! ```

use tracing::warn;
use uuid::Uuid;

use crate::models::{now_millis, Draft, Note, UNTITLED_TITLE};
use crate::store::{KeyValueStore, StoreResult};

/// Store key under which the note collection is persisted
pub const NOTES_KEY: &str = "notes";

/// The note collection plus its injected store
pub struct NoteRepository<S: KeyValueStore> {
    store: S,
    notes: Vec<Note>,
}

impl<S: KeyValueStore> NoteRepository<S> {
    /// Open the repository, loading the collection from the store
    ///
    /// A missing or corrupt stored collection yields an empty one.
    pub fn open(store: S) -> Self {
        let notes = store.read(NOTES_KEY, Vec::new());
        Self { store, notes }
    }

    /// Save a draft, creating or updating a note
    ///
    /// Returns `None` without touching the store when the draft is empty
    /// (title and content both blank after trimming). Otherwise returns
    /// the note as persisted.
    pub fn upsert(&mut self, draft: Draft) -> StoreResult<Option<Note>> {
        self.upsert_at(draft, now_millis())
    }

    /// Save a draft with an explicit timestamp
    ///
    /// Matching `draft.id` replaces the existing note, retaining its
    /// `created_at`. An absent or unknown id prepends a new note with
    /// `created_at == updated_at == now`.
    pub fn upsert_at(&mut self, draft: Draft, now: i64) -> StoreResult<Option<Note>> {
        if draft.is_empty() {
            return Ok(None);
        }

        let title = if draft.title.is_empty() {
            UNTITLED_TITLE.to_string()
        } else {
            draft.title
        };

        let existing = draft
            .id
            .as_ref()
            .and_then(|id| self.notes.iter().position(|n| n.id == *id));

        let note = match existing {
            Some(pos) => {
                let note = Note {
                    id: self.notes[pos].id.clone(),
                    title,
                    content: draft.content,
                    created_at: self.notes[pos].created_at,
                    updated_at: now,
                    color: draft.color,
                };
                self.notes[pos] = note.clone();
                note
            }
            None => {
                let note = Note {
                    id: draft.id.unwrap_or_else(new_note_id),
                    title,
                    content: draft.content,
                    created_at: now,
                    updated_at: now,
                    color: draft.color,
                };
                self.notes.insert(0, note.clone());
                note
            }
        };

        self.persist()?;
        Ok(Some(note))
    }

    /// Remove the note with the given id
    ///
    /// Removing an unknown id is a no-op, not an error. Returns whether
    /// a note was actually removed.
    pub fn remove(&mut self, id: &str) -> StoreResult<bool> {
        let Some(pos) = self.notes.iter().position(|n| n.id == id) else {
            return Ok(false);
        };

        self.notes.remove(pos);
        self.persist()?;
        Ok(true)
    }

    /// All notes ordered by `updated_at` descending
    ///
    /// The sort is stable: notes with equal timestamps keep their
    /// collection order. Presentation order is derived here, never
    /// persisted.
    pub fn list_sorted(&self) -> Vec<Note> {
        let mut notes = self.notes.clone();
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        notes
    }

    /// Look up a note by id
    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Number of notes in the collection
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write the collection through to the store
    fn persist(&mut self) -> StoreResult<()> {
        self.store.write(NOTES_KEY, &self.notes).map_err(|e| {
            warn!("note collection not persisted: {}", e);
            e
        })
    }
}

/// Generate a fresh note id
///
/// Random UUIDs instead of timestamp-derived ids, so two creations in
/// the same clock tick cannot collide.
fn new_note_id() -> String {
    Uuid::new_v4().to_string()
}
