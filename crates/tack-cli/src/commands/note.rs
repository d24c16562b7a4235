//! Note command handlers

use anyhow::{bail, Context, Result};

use tack_core::{Draft, FileStore, NoteColor, NoteRepository};

use crate::editor::edit_text;
use crate::output::{short_id, Output};

type Repo = NoteRepository<FileStore>;

/// Create a new note
pub fn create(
    repo: &mut Repo,
    title: Option<String>,
    color: Option<String>,
    content: Option<String>,
    output: &Output,
) -> Result<()> {
    let color = parse_color(color)?;

    // Open $EDITOR for content when none was given on the command line
    let content = match content {
        Some(c) => c,
        None => edit_text("").context("Failed to edit note")?,
    };

    let draft = Draft {
        id: None,
        title: title.unwrap_or_default(),
        content,
        color: color.unwrap_or_default(),
    };

    match repo.upsert(draft).context("Failed to save note")? {
        Some(note) => {
            output.success(&format!("Created note {}", short_id(&note.id)));
            if output.is_quiet() {
                println!("{}", note.id);
            }
        }
        None => output.message("Empty note discarded."),
    }

    Ok(())
}

/// List all notes, most recently modified first
pub fn list(repo: &Repo, output: &Output) -> Result<()> {
    output.print_notes(&repo.list_sorted());
    Ok(())
}

/// Show a single note in full
pub fn show(repo: &Repo, id: String, output: &Output) -> Result<()> {
    let note_id = resolve_id(&id, repo)?;
    let note = repo
        .get(&note_id)
        .ok_or_else(|| anyhow::anyhow!("Note not found: {}", id))?;

    output.print_note(note);
    Ok(())
}

/// Edit an existing note
///
/// Content is edited in $EDITOR; title and color can be changed with
/// flags without opening the editor.
pub fn edit(
    repo: &mut Repo,
    id: String,
    title: Option<String>,
    color: Option<String>,
    output: &Output,
) -> Result<()> {
    let note_id = resolve_id(&id, repo)?;
    let note = repo
        .get(&note_id)
        .ok_or_else(|| anyhow::anyhow!("Note not found: {}", id))?
        .clone();

    let mut draft = Draft::from_note(&note);

    if let Some(title) = title {
        draft.title = title;
    }
    if let Some(color) = color {
        draft.color = parse_color(Some(color))?.unwrap_or(draft.color);
    }

    draft.content = edit_text(&note.content).context("Failed to edit note")?;

    match repo.upsert(draft).context("Failed to save note")? {
        Some(note) => output.success(&format!("Updated note {}", short_id(&note.id))),
        None => output.message("Note left unchanged (empty draft)."),
    }

    Ok(())
}

/// Delete a note
pub fn delete(repo: &mut Repo, id: String, force: bool, output: &Output) -> Result<()> {
    let note_id = resolve_id(&id, repo)?;
    let note = repo
        .get(&note_id)
        .ok_or_else(|| anyhow::anyhow!("Note not found: {}", id))?;

    if !force && output.should_prompt() {
        println!("Delete note: {} - {}", short_id(&note.id), note.title);
        if !output.confirm("Are you sure?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    repo.remove(&note_id).context("Failed to delete note")?;
    output.success(&format!("Deleted note: {}", short_id(&note_id)));

    Ok(())
}

/// Resolve a note id (supports full id or prefix)
fn resolve_id(id: &str, repo: &Repo) -> Result<String> {
    // Exact match first
    if repo.get(id).is_some() {
        return Ok(id.to_string());
    }

    // Then prefix match
    let notes = repo.list_sorted();
    let matches: Vec<_> = notes.iter().filter(|n| n.id.starts_with(id)).collect();

    match matches.len() {
        0 => bail!("No note found matching: {}", id),
        1 => Ok(matches[0].id.clone()),
        _ => {
            eprintln!("Multiple notes match '{}':", id);
            for note in &matches {
                eprintln!("  {} - {}", note.id, note.title);
            }
            bail!("Ambiguous ID. Please provide more characters.");
        }
    }
}

/// Parse the --color flag
fn parse_color(color: Option<String>) -> Result<Option<NoteColor>> {
    let Some(name) = color else {
        return Ok(None);
    };

    match NoteColor::from_name(&name) {
        Some(color) => Ok(Some(color)),
        None => {
            let names: Vec<&str> = NoteColor::PALETTE.iter().map(|c| c.name()).collect();
            bail!(
                "Unknown color '{}'. Valid colors: {}",
                name,
                names.join(", ")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tack_core::{Config, KeyValueStore};
    use tempfile::TempDir;

    fn test_repo(temp_dir: &TempDir) -> Repo {
        let config = Config {
            data_dir: temp_dir.path().to_path_buf(),
            log_file: None,
        };
        NoteRepository::open(FileStore::new(&config))
    }

    fn saved_draft(repo: &mut Repo, id: &str, title: &str) {
        let draft = Draft {
            id: Some(id.to_string()),
            title: title.to_string(),
            content: "body".to_string(),
            color: NoteColor::White,
        };
        repo.upsert(draft).unwrap();
    }

    #[test]
    fn test_resolve_id_exact() {
        let temp_dir = TempDir::new().unwrap();
        let mut repo = test_repo(&temp_dir);
        saved_draft(&mut repo, "note_1", "one");

        assert_eq!(resolve_id("note_1", &repo).unwrap(), "note_1");
    }

    #[test]
    fn test_resolve_id_prefix() {
        let temp_dir = TempDir::new().unwrap();
        let mut repo = test_repo(&temp_dir);
        saved_draft(&mut repo, "abcdef", "one");

        assert_eq!(resolve_id("abc", &repo).unwrap(), "abcdef");
    }

    #[test]
    fn test_resolve_id_ambiguous() {
        let temp_dir = TempDir::new().unwrap();
        let mut repo = test_repo(&temp_dir);
        saved_draft(&mut repo, "abc1", "one");
        saved_draft(&mut repo, "abc2", "two");

        assert!(resolve_id("abc", &repo).is_err());
    }

    #[test]
    fn test_resolve_id_missing() {
        let temp_dir = TempDir::new().unwrap();
        let repo = test_repo(&temp_dir);

        assert!(resolve_id("nope", &repo).is_err());
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color(None).unwrap(), None);
        assert_eq!(
            parse_color(Some("yellow".to_string())).unwrap(),
            Some(NoteColor::Yellow)
        );
        assert!(parse_color(Some("mauve".to_string())).is_err());
    }

    #[test]
    fn test_repo_persists_to_notes_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut repo = test_repo(&temp_dir);
        saved_draft(&mut repo, "note_1", "one");

        let store = FileStore::with_dir(temp_dir.path().to_path_buf());
        assert!(store.read_raw("notes").unwrap().is_some());
    }
}
