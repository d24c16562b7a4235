//! $EDITOR round-trip for note content

use std::env;
use std::fs;
use std::process::Command;

use anyhow::{anyhow, bail, Context, Result};
use tempfile::Builder;

/// Edit text in the user's preferred editor and return the result
///
/// The text is written to a temporary `.md` file, the editor is run on
/// it, and the file is read back once the editor exits. The temp file
/// is removed on drop, including on the error paths.
pub fn edit_text(initial: &str) -> Result<String> {
    let editor = resolve_editor()?;

    let file = Builder::new()
        .prefix("tack-note-")
        .suffix(".md")
        .tempfile()
        .context("Failed to create temporary file for editing")?;
    fs::write(file.path(), initial)
        .with_context(|| format!("Failed to write draft to {:?}", file.path()))?;

    let status = Command::new(&editor)
        .arg(file.path())
        .status()
        .with_context(|| format!("Failed to launch editor '{}'", editor))?;
    if !status.success() {
        bail!("Editor '{}' exited with an error; note not changed", editor);
    }

    // Read by path, not handle: some editors replace the file via rename
    fs::read_to_string(file.path())
        .with_context(|| format!("Failed to read edited note from {:?}", file.path()))
}

/// Pick an editor: $EDITOR, then $VISUAL, then whatever is on PATH
fn resolve_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(value) = env::var(var) {
            if !value.trim().is_empty() {
                return Ok(value);
            }
        }
    }

    ["nano", "vim", "vi", "emacs"]
        .into_iter()
        .find(|candidate| on_path(candidate))
        .map(String::from)
        .ok_or_else(|| anyhow!("No editor found. Set $EDITOR, e.g. export EDITOR=nano"))
}

/// Whether a command can be found on PATH
fn on_path(cmd: &str) -> bool {
    let Some(paths) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&paths).any(|dir| dir.join(cmd).is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_on_path() {
        assert!(on_path("ls"));
        assert!(!on_path("definitely_not_a_real_command_12345"));
    }

    #[test]
    #[cfg(unix)]
    fn test_edit_text_round_trip() {
        // `true` exits successfully without touching the file, so the
        // round-trip returns the draft unchanged
        env::set_var("EDITOR", "true");
        let edited = edit_text("unchanged body\n").unwrap();
        assert_eq!(edited, "unchanged body\n");
    }
}
