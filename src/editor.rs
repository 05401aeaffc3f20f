use crate::commands;
use crate::config::EditorConfig;
use crate::engine::EditEngine;
use crate::file::Storage;
use crate::prompt::Prompt;
use crate::renderer;

use crossterm::Result;
use std::io::Write;
use tracing::debug;

pub struct Editor<S, P, W> {
    pub(crate) config: EditorConfig,
    pub(crate) engine: EditEngine,
    pub(crate) prompt: P,
    pub(crate) running: bool,
    pub(crate) screen: W,
    pub(crate) storage: S,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Create,
    Open,
    Save,
    Close,
    Display,
    Insert,
    Replace,
    Undo,
    Exit,
}

impl<S: Storage, P: Prompt, W: Write> Editor<S, P, W> {
    pub fn new(config: EditorConfig, storage: S, prompt: P, screen: W) -> Editor<S, P, W> {
        let engine = EditEngine::with_config(&config);
        Editor {
            config,
            engine,
            prompt,
            running: false,
            screen,
            storage,
        }
    }

    pub fn start(&mut self) -> Result<()> {
        self.running = true;

        while self.running {
            renderer::menu(&mut self.screen, &self.engine)?;

            let command = match self.prompt.read_line("Enter your choice: ")? {
                Some(choice) => self.map_choice_to_command(&choice),
                None => Some(Command::Exit),
            };

            match command {
                Some(command) => self.execute_command(command)?,
                None => renderer::error(&mut self.screen, "Invalid choice. Please try again.")?,
            }
        }

        Ok(())
    }

    /// Opens `name` before the menu loop starts, as if chosen from the menu.
    pub fn open_at_startup(&mut self, name: &str) -> Result<()> {
        commands::file::open_named(self, name)
    }

    pub fn execute_command(&mut self, command: Command) -> Result<()> {
        debug!(?command, "executing command");
        match command {
            Command::Create => commands::file::create(self),
            Command::Open => commands::file::open(self),
            Command::Save => commands::file::save(self),
            Command::Close => commands::file::close(self),
            Command::Display => commands::app::display(self),
            Command::Insert => commands::edit::insert(self),
            Command::Replace => commands::edit::replace(self),
            Command::Undo => commands::edit::undo(self),
            Command::Exit => commands::app::exit(self),
        }
    }

    fn map_choice_to_command(&self, choice: &str) -> Option<Command> {
        match choice.trim() {
            "1" => Some(Command::Create),
            "2" => Some(Command::Open),
            "3" => Some(Command::Save),
            "4" => Some(Command::Close),
            "5" => Some(Command::Display),
            "6" => Some(Command::Insert),
            "7" => Some(Command::Replace),
            "8" => Some(Command::Undo),
            "9" => Some(Command::Exit),
            _ => None,
        }
    }

    pub fn engine(&self) -> &EditEngine {
        &self.engine
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn into_parts(self) -> (EditEngine, S, P, W) {
        (self.engine, self.storage, self.prompt, self.screen)
    }
}
