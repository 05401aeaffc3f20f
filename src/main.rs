use clap::Parser;
use linedit::config::{EditorConfig, DEFAULT_EXTENSION};
use linedit::file::FsStorage;
use linedit::prompt::ConsolePrompt;
use linedit::Editor;

use crossterm::Result;
use std::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

/// Menu-driven line editor with undo.
#[derive(Debug, Parser)]
#[command(name = "linedit", version)]
struct Args {
    /// File to open at startup
    file: Option<String>,

    /// Extension appended to file names given without one
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Keep at most this many undo steps (unbounded by default)
    #[arg(long)]
    undo_depth: Option<usize>,

    /// Display file content without line numbers
    #[arg(long)]
    no_line_numbers: bool,
}

impl Args {
    fn config(&self) -> EditorConfig {
        EditorConfig {
            default_extension: self.extension.clone(),
            undo_depth: self.undo_depth,
            line_numbers: !self.no_line_numbers,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let stdin = stdin();
    let prompt = ConsolePrompt::new(stdin.lock(), stdout());
    let mut editor = Editor::new(args.config(), FsStorage::new(), prompt, stdout());

    if let Some(file) = &args.file {
        editor.open_at_startup(file)?;
    }
    editor.start()
}
