use crate::commands::file::offer_save;
use crate::editor::Editor;
use crate::file::Storage;
use crate::prompt::Prompt;
use crate::renderer;

use crossterm::Result;
use std::io::Write;

pub fn display<S: Storage, P: Prompt, W: Write>(editor: &mut Editor<S, P, W>) -> Result<()> {
    renderer::content(&mut editor.screen, editor.engine.render(), editor.config.line_numbers)
}

pub fn exit<S: Storage, P: Prompt, W: Write>(editor: &mut Editor<S, P, W>) -> Result<()> {
    offer_save(editor, "You have unsaved changes. Do you want to save before exiting? (y/n): ")?;
    editor.running = false;
    renderer::info(&mut editor.screen, "Exiting the editor.")
}
