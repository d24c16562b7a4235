//! Editor session
//!
//! Buffers edits between the UI and the repository. The session moves
//! through `Closed -> Open(draft) -> {Saved, Deleted, Discarded} -> Closed`;
//! every path out of `Open` lands back in `Closed`, and nothing is
//! persisted until an explicit save.

use crate::models::{Draft, Note};
use crate::repository::NoteRepository;
use crate::store::{KeyValueStore, StoreResult};

/// How an open session ended
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// The draft was committed; carries the note as persisted
    Saved(Note),
    /// The note being edited was deleted; carries its id
    Deleted(String),
    /// The draft was thrown away without touching the store
    Discarded,
}

/// The editor session state machine
///
/// Holds at most one open draft. Field edits go through [`draft_mut`];
/// they stay buffered here until [`save`] commits them.
///
/// [`draft_mut`]: EditorSession::draft_mut
/// [`save`]: EditorSession::save
#[derive(Debug, Default)]
pub struct EditorSession {
    draft: Option<Draft>,
}

impl EditorSession {
    /// Create a closed session
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an editor is currently open
    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// The open draft, if any
    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    /// Mutable access to the open draft for buffering edits
    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        self.draft.as_mut()
    }

    /// Open an empty editor (create-intent)
    pub fn open_new(&mut self) {
        self.draft = Some(Draft::new());
    }

    /// Open an editor seeded from an existing note (edit-intent)
    pub fn open_existing(&mut self, note: &Note) {
        self.draft = Some(Draft::from_note(note));
    }

    /// Discard the draft and close
    pub fn close(&mut self) -> SessionOutcome {
        self.draft = None;
        SessionOutcome::Discarded
    }

    /// Commit the draft through the repository and close
    ///
    /// An empty draft is discarded rather than saved. The session closes
    /// even when the write-through fails; the error propagates so the UI
    /// can warn.
    pub fn save<S: KeyValueStore>(
        &mut self,
        repo: &mut NoteRepository<S>,
    ) -> StoreResult<SessionOutcome> {
        let Some(draft) = self.draft.take() else {
            return Ok(SessionOutcome::Discarded);
        };

        match repo.upsert(draft)? {
            Some(note) => Ok(SessionOutcome::Saved(note)),
            None => Ok(SessionOutcome::Discarded),
        }
    }

    /// Delete the note being edited and close
    ///
    /// A draft that was never saved has nothing to delete, so it is
    /// simply discarded.
    pub fn delete<S: KeyValueStore>(
        &mut self,
        repo: &mut NoteRepository<S>,
    ) -> StoreResult<SessionOutcome> {
        let Some(draft) = self.draft.take() else {
            return Ok(SessionOutcome::Discarded);
        };

        match draft.id {
            Some(id) => {
                if repo.remove(&id)? {
                    Ok(SessionOutcome::Deleted(id))
                } else {
                    Ok(SessionOutcome::Discarded)
                }
            }
            None => Ok(SessionOutcome::Discarded),
        }
    }
}
