//! Data models for tack
//!
//! Defines the core data structures: Note, Draft, and NoteColor.
//! Notes serialize with camelCase field names to match the on-disk
//! JSON layout (`{id, title, content, createdAt, updatedAt, color}`).

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Title given to a note saved with an empty title but non-empty content
pub const UNTITLED_TITLE: &str = "Untitled Note";

/// Current wall-clock time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Swatch color for a note, from a fixed palette
///
/// Serialized as the hex string stored on disk. Unknown stored values
/// fall back to `White` so a single bad color cannot poison the whole
/// collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NoteColor {
    #[default]
    White,
    Red,
    Orange,
    Yellow,
    Lime,
    Blue,
}

impl NoteColor {
    /// The full palette, in display order
    pub const PALETTE: [NoteColor; 6] = [
        NoteColor::White,
        NoteColor::Red,
        NoteColor::Orange,
        NoteColor::Yellow,
        NoteColor::Lime,
        NoteColor::Blue,
    ];

    /// Hex value as persisted on disk
    pub fn hex(&self) -> &'static str {
        match self {
            NoteColor::White => "#FFFFFF",
            NoteColor::Red => "#fecaca",
            NoteColor::Orange => "#fed7aa",
            NoteColor::Yellow => "#fef08a",
            NoteColor::Lime => "#d9f99d",
            NoteColor::Blue => "#bfdbfe",
        }
    }

    /// Human-readable name for CLI output
    pub fn name(&self) -> &'static str {
        match self {
            NoteColor::White => "white",
            NoteColor::Red => "red",
            NoteColor::Orange => "orange",
            NoteColor::Yellow => "yellow",
            NoteColor::Lime => "lime",
            NoteColor::Blue => "blue",
        }
    }

    /// Parse a color by name (for the CLI `--color` flag)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::PALETTE
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Next color in the palette (wrapping)
    pub fn next(self) -> Self {
        let pos = Self::PALETTE.iter().position(|c| *c == self).unwrap_or(0);
        Self::PALETTE[(pos + 1) % Self::PALETTE.len()]
    }

    /// Previous color in the palette (wrapping)
    pub fn prev(self) -> Self {
        let pos = Self::PALETTE.iter().position(|c| *c == self).unwrap_or(0);
        Self::PALETTE[(pos + Self::PALETTE.len() - 1) % Self::PALETTE.len()]
    }
}

impl From<String> for NoteColor {
    fn from(value: String) -> Self {
        Self::PALETTE
            .into_iter()
            .find(|c| c.hex().eq_ignore_ascii_case(&value))
            .unwrap_or_default()
    }
}

impl From<NoteColor> for String {
    fn from(color: NoteColor) -> Self {
        color.hex().to_string()
    }
}

impl std::fmt::Display for NoteColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A saved note
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Opaque unique identifier, assigned once at creation
    pub id: String,
    /// Note title
    pub title: String,
    /// Note body content
    pub content: String,
    /// When this note was created (epoch milliseconds), never mutated
    pub created_at: i64,
    /// When this note was last saved (epoch milliseconds); sole sort key
    pub updated_at: i64,
    /// Display color
    pub color: NoteColor,
}

/// An in-progress, unpersisted edit of a note
///
/// `id` is `None` for a brand new draft and `Some` when editing an
/// existing note. Nothing in a draft touches the store until it is
/// committed through the repository.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub color: NoteColor,
}

impl Draft {
    /// Create an empty draft for a new note
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a draft from an existing note for editing
    pub fn from_note(note: &Note) -> Self {
        Self {
            id: Some(note.id.clone()),
            title: note.title.clone(),
            content: note.content.clone(),
            color: note.color,
        }
    }

    /// True when both title and content are empty after trimming
    ///
    /// An empty draft is never persisted.
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex_round_trip() {
        for color in NoteColor::PALETTE {
            let stored: String = color.into();
            assert_eq!(NoteColor::from(stored), color);
        }
    }

    #[test]
    fn test_color_unknown_falls_back_to_white() {
        assert_eq!(NoteColor::from("#123456".to_string()), NoteColor::White);
        assert_eq!(NoteColor::from(String::new()), NoteColor::White);
    }

    #[test]
    fn test_color_parse_is_case_insensitive() {
        assert_eq!(NoteColor::from("#FECACA".to_string()), NoteColor::Red);
        assert_eq!(NoteColor::from_name("Blue"), Some(NoteColor::Blue));
        assert_eq!(NoteColor::from_name("magenta"), None);
    }

    #[test]
    fn test_color_cycle_wraps() {
        assert_eq!(NoteColor::Blue.next(), NoteColor::White);
        assert_eq!(NoteColor::White.prev(), NoteColor::Blue);

        let mut color = NoteColor::White;
        for _ in 0..NoteColor::PALETTE.len() {
            color = color.next();
        }
        assert_eq!(color, NoteColor::White);
    }

    #[test]
    fn test_note_serialization_uses_camel_case() {
        let note = Note {
            id: "note_1".to_string(),
            title: "Groceries".to_string(),
            content: "Buy milk".to_string(),
            created_at: 100,
            updated_at: 200,
            color: NoteColor::Yellow,
        };

        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("\"createdAt\":100"));
        assert!(json.contains("\"updatedAt\":200"));
        assert!(json.contains("\"color\":\"#fef08a\""));

        let deserialized: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, note);
    }

    #[test]
    fn test_note_deserializes_original_layout() {
        // Layout written by the web version of the app
        let json = r##"{
            "id": "note_1700000000000",
            "title": "Untitled Note",
            "content": "hello",
            "createdAt": 1700000000000,
            "updatedAt": 1700000000001,
            "color": "#bfdbfe"
        }"##;

        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id, "note_1700000000000");
        assert_eq!(note.color, NoteColor::Blue);
        assert!(note.created_at <= note.updated_at);
    }

    #[test]
    fn test_draft_is_empty_ignores_whitespace() {
        let mut draft = Draft::new();
        assert!(draft.is_empty());

        draft.title = "   \n\t".to_string();
        assert!(draft.is_empty());

        draft.content = "x".to_string();
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_draft_from_note() {
        let note = Note {
            id: "abc".to_string(),
            title: "Title".to_string(),
            content: "Body".to_string(),
            created_at: 1,
            updated_at: 2,
            color: NoteColor::Lime,
        };

        let draft = Draft::from_note(&note);
        assert_eq!(draft.id.as_deref(), Some("abc"));
        assert_eq!(draft.title, "Title");
        assert_eq!(draft.content, "Body");
        assert_eq!(draft.color, NoteColor::Lime);
    }
}
