use crate::editor::Editor;
use crate::file::{self, Storage};
use crate::prompt::Prompt;
use crate::renderer;

use crossterm::Result;
use std::io::Write;

pub fn create<S: Storage, P: Prompt, W: Write>(editor: &mut Editor<S, P, W>) -> Result<()> {
    offer_save(editor, "You have unsaved changes. Do you want to save the file first? (y/n): ")?;
    let name = match read_file_name(editor, "Enter the filename: ")? {
        Some(name) => name,
        None => return Ok(()),
    };

    match editor.engine.create(&editor.storage, &name) {
        Ok(()) => renderer::info(&mut editor.screen, format!("New file {} created successfully.", name)),
        Err(e) => renderer::error(&mut editor.screen, e),
    }
}

pub fn open<S: Storage, P: Prompt, W: Write>(editor: &mut Editor<S, P, W>) -> Result<()> {
    offer_save(editor, "You have unsaved changes. Do you want to save the file first? (y/n): ")?;
    match read_file_name(editor, "Enter the filename to open: ")? {
        Some(name) => open_named(editor, &name),
        None => Ok(()),
    }
}

/// Opens `name` after applying the default extension, then shows it.
pub fn open_named<S: Storage, P: Prompt, W: Write>(editor: &mut Editor<S, P, W>, name: &str) -> Result<()> {
    let name = file::with_default_extension(name, &editor.config.default_extension);
    match editor.engine.open(&editor.storage, &name) {
        Ok(()) => {
            renderer::info(&mut editor.screen, "File opened successfully.")?;
            renderer::content(&mut editor.screen, editor.engine.render(), editor.config.line_numbers)
        }
        Err(e) => renderer::error(&mut editor.screen, e),
    }
}

pub fn save<S: Storage, P: Prompt, W: Write>(editor: &mut Editor<S, P, W>) -> Result<()> {
    match editor.engine.save(&editor.storage) {
        Ok(()) => renderer::info(&mut editor.screen, "File saved successfully."),
        Err(e) => renderer::error(&mut editor.screen, e),
    }
}

pub fn close<S: Storage, P: Prompt, W: Write>(editor: &mut Editor<S, P, W>) -> Result<()> {
    offer_save(editor, "You have unsaved changes. Do you want to save the file? (y/n): ")?;
    editor.engine.close();
    renderer::info(&mut editor.screen, "File closed successfully.")
}

/// Asks whether to save, but only when the buffer holds unsaved changes.
pub(crate) fn offer_save<S: Storage, P: Prompt, W: Write>(
    editor: &mut Editor<S, P, W>,
    question: &str,
) -> Result<()> {
    if editor.engine.is_dirty() && editor.prompt.confirm(question)? {
        save(editor)?;
    }
    Ok(())
}

fn read_file_name<S: Storage, P: Prompt, W: Write>(
    editor: &mut Editor<S, P, W>,
    message: &str,
) -> Result<Option<String>> {
    let name = match editor.prompt.read_line(message)? {
        Some(name) => name.trim().to_string(),
        None => return Ok(None),
    };

    if name.is_empty() {
        renderer::error(&mut editor.screen, "No file name given.")?;
        return Ok(None);
    }
    Ok(Some(file::with_default_extension(&name, &editor.config.default_extension)))
}
