pub mod commands;
pub mod config;
pub mod editor;
pub mod engine;
pub mod error;
pub mod file;
pub mod prompt;
pub mod renderer;
pub mod text_buffer;
pub mod undo;

pub use editor::{Command, Editor};
pub use engine::{EditEngine, UndoOutcome};
pub use error::{EditorError, EditorResult};
