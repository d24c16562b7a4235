//! tack CLI
//!
//! Command-line interface for tack - local sticky-note management.

use anyhow::Result;
use clap::{Parser, Subcommand};

use tack_core::{Config, FileStore, NoteRepository};

mod commands;
mod editor;
mod output;
mod tui;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "tack")]
#[command(about = "tack - local sticky notes in your terminal")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI interface
    Tui,
    /// Create a new note
    #[command(alias = "create")]
    Add {
        /// Note content (opens $EDITOR if not provided)
        content: Option<String>,
        /// Note title (defaults to "Untitled Note")
        #[arg(short = 'T', long)]
        title: Option<String>,
        /// Note color (white, red, orange, yellow, lime, blue)
        #[arg(short, long)]
        color: Option<String>,
    },
    /// List all notes, most recently modified first
    #[command(alias = "ls")]
    List,
    /// Show a note in full
    Show {
        /// Note ID (full id or prefix)
        id: String,
    },
    /// Edit a note in $EDITOR
    Edit {
        /// Note ID (full id or prefix)
        id: String,
        /// Replace the title
        #[arg(short = 'T', long)]
        title: Option<String>,
        /// Replace the color
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Note ID (full id or prefix)
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands don't need the repository
    if let Some(Commands::Config { command }) = &cli.command {
        return handle_config_command(command.clone(), &output);
    }

    // Handle TUI (default when no command given)
    if matches!(&cli.command, Some(Commands::Tui) | None) {
        return tui::run();
    }

    // Open the repository for commands that need it
    let config = Config::load()?;
    let mut repo = NoteRepository::open(FileStore::new(&config));

    match cli.command.unwrap() {
        Commands::Tui => unreachable!(),           // Handled above
        Commands::Config { .. } => unreachable!(), // Handled above
        Commands::Add {
            content,
            title,
            color,
        } => commands::note::create(&mut repo, title, color, content, &output),
        Commands::List => commands::note::list(&repo, &output),
        Commands::Show { id } => commands::note::show(&repo, id, &output),
        Commands::Edit { id, title, color } => {
            commands::note::edit(&mut repo, id, title, color, &output)
        }
        Commands::Delete { id, force } => commands::note::delete(&mut repo, id, force, &output),
    }
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}
