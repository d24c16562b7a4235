//! Application state and logic

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tack_core::{EditorSession, FileStore, Note, NoteRepository, SessionOutcome};

/// Which editor field receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorFocus {
    Title,
    Content,
}

/// Application state
pub struct App {
    /// Whether the app should exit
    pub should_quit: bool,
    /// The note repository (owns the persistent store)
    pub repo: NoteRepository<FileStore>,
    /// Sorted snapshot of the collection for display
    pub notes: Vec<Note>,
    /// Currently selected note index
    pub selected: usize,
    /// The editor session (open when a note is being edited)
    pub session: EditorSession,
    /// Which editor field has focus
    pub focus: EditorFocus,
    /// Status message to display temporarily
    pub status_message: Option<String>,
    /// When the status message was set (for auto-dismiss)
    pub status_message_time: Option<Instant>,
    /// Whether help overlay is visible
    pub show_help: bool,
}

impl App {
    /// Create a new app over an opened repository
    pub fn new(repo: NoteRepository<FileStore>) -> Self {
        let notes = repo.list_sorted();
        Self {
            should_quit: false,
            repo,
            notes,
            selected: 0,
            session: EditorSession::new(),
            focus: EditorFocus::Title,
            status_message: None,
            status_message_time: None,
            show_help: false,
        }
    }

    /// Rebuild the sorted snapshot after a mutation
    pub fn refresh(&mut self) {
        self.notes = self.repo.list_sorted();
        if self.selected >= self.notes.len() {
            self.selected = self.notes.len().saturating_sub(1);
        }
    }

    /// The note under the cursor, if any
    pub fn selected_note(&self) -> Option<&Note> {
        self.notes.get(self.selected)
    }

    /// Set a status message (will auto-dismiss after 3 seconds)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_message_time = Some(Instant::now());
    }

    /// Check and clear expired status message
    pub fn check_status_timeout(&mut self) {
        if let Some(time) = self.status_message_time {
            if time.elapsed() > Duration::from_secs(3) {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }

    /// Dispatch a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.session.is_open() {
            self.handle_editor_key(key);
        } else if self.show_help {
            self.show_help = false;
        } else {
            self.handle_normal_key(key);
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected + 1 < self.notes.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Char('n') => self.open_new(),
            KeyCode::Char('e') | KeyCode::Enter => self.open_selected(),
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Esc => self.status_message = None,
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => self.save_editor(),
                KeyCode::Char('d') => self.delete_editor_note(),
                KeyCode::Char('p') => self.cycle_color(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.session.close();
                self.set_status("Discarded");
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    EditorFocus::Title => EditorFocus::Content,
                    EditorFocus::Content => EditorFocus::Title,
                };
            }
            KeyCode::Enter => match self.focus {
                // Enter in the title moves on to the content
                EditorFocus::Title => self.focus = EditorFocus::Content,
                EditorFocus::Content => self.push_char('\n'),
            },
            KeyCode::Backspace => self.pop_char(),
            KeyCode::Char(c) => self.push_char(c),
            _ => {}
        }
    }

    /// Open an empty editor (create-intent)
    pub fn open_new(&mut self) {
        self.session.open_new();
        self.focus = EditorFocus::Title;
    }

    /// Open the editor on the selected note (edit-intent)
    pub fn open_selected(&mut self) {
        let Some(note) = self.selected_note().cloned() else {
            return;
        };
        self.session.open_existing(&note);
        self.focus = EditorFocus::Content;
    }

    /// Save the open draft and close the editor
    pub fn save_editor(&mut self) {
        match self.session.save(&mut self.repo) {
            Ok(SessionOutcome::Saved(note)) => {
                self.set_status(format!("Saved '{}'", note.title));
            }
            Ok(_) => self.set_status("Empty note discarded"),
            Err(e) => {
                // The note is kept in memory; disk catches up on the
                // next successful write
                self.set_status(format!("⚠ Not saved to disk: {}", e));
            }
        }
        self.refresh();
    }

    /// Delete the note being edited and close the editor
    pub fn delete_editor_note(&mut self) {
        match self.session.delete(&mut self.repo) {
            Ok(SessionOutcome::Deleted(_)) => self.set_status("Deleted"),
            Ok(_) => self.set_status("Discarded"),
            Err(e) => self.set_status(format!("⚠ Delete not saved to disk: {}", e)),
        }
        self.refresh();
    }

    /// Delete the selected note from the list
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_note().map(|n| n.id.clone()) else {
            return;
        };

        match self.repo.remove(&id) {
            Ok(true) => self.set_status("Deleted"),
            Ok(false) => {}
            Err(e) => self.set_status(format!("⚠ Delete not saved to disk: {}", e)),
        }
        self.refresh();
    }

    /// Cycle the draft color through the palette
    pub fn cycle_color(&mut self) {
        if let Some(draft) = self.session.draft_mut() {
            draft.color = draft.color.next();
        }
    }

    fn push_char(&mut self, c: char) {
        let focus = self.focus;
        if let Some(draft) = self.session.draft_mut() {
            match focus {
                EditorFocus::Title => draft.title.push(c),
                EditorFocus::Content => draft.content.push(c),
            }
        }
    }

    fn pop_char(&mut self) {
        let focus = self.focus;
        if let Some(draft) = self.session.draft_mut() {
            match focus {
                EditorFocus::Title => {
                    draft.title.pop();
                }
                EditorFocus::Content => {
                    draft.content.pop();
                }
            }
        }
    }
}
