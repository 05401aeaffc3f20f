use crate::editor::Editor;
use crate::engine::UndoOutcome;
use crate::file::Storage;
use crate::prompt::Prompt;
use crate::renderer;

use crossterm::Result;
use std::io::Write;

pub fn insert<S: Storage, P: Prompt, W: Write>(editor: &mut Editor<S, P, W>) -> Result<()> {
    let input = match editor.prompt.read_line("Enter the line number to insert text at: ")? {
        Some(input) => input,
        None => return Ok(()),
    };

    let position = match input.trim().parse::<usize>() {
        Ok(position) => position,
        Err(_) => {
            return renderer::error(&mut editor.screen, format!("Invalid line number: {}", input.trim()))
        }
    };
    // Reject before asking for the text; the engine checks again.
    if let Err(e) = editor.engine.buffer().check_position(position) {
        return renderer::error(&mut editor.screen, e);
    }

    let text = match editor.prompt.read_line("Enter the text to insert: ")? {
        Some(text) => text,
        None => return Ok(()),
    };

    match editor.engine.insert(position, &text) {
        Ok(()) => renderer::info(&mut editor.screen, format!("Text inserted at line {}.", position)),
        Err(e) => renderer::error(&mut editor.screen, e),
    }
}

pub fn replace<S: Storage, P: Prompt, W: Write>(editor: &mut Editor<S, P, W>) -> Result<()> {
    let search = match editor.prompt.read_line("Enter the text to search for: ")? {
        Some(search) => search,
        None => return Ok(()),
    };
    let replacement = match editor.prompt.read_line("Enter the replacement text: ")? {
        Some(replacement) => replacement,
        None => return Ok(()),
    };

    match editor.engine.replace_all(&search, &replacement) {
        Ok(count) => renderer::info(
            &mut editor.screen,
            format!("Search and replace completed: {} replacement(s).", count),
        ),
        Err(e) => renderer::error(&mut editor.screen, e),
    }
}

pub fn undo<S: Storage, P: Prompt, W: Write>(editor: &mut Editor<S, P, W>) -> Result<()> {
    match editor.engine.undo() {
        UndoOutcome::Restored => renderer::info(&mut editor.screen, "Last change undone."),
        UndoOutcome::NothingToUndo => renderer::info(&mut editor.screen, "No changes to undo."),
    }
}
