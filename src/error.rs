use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Invalid line number {position}: expected a value from 1 to {}", .len + 1)]
    InvalidPosition { position: usize, len: usize },

    #[error("Text must fit on a single line")]
    EmbeddedNewline,

    #[error("File does not exist: {name}")]
    NotFound { name: String },

    #[error("Could not access {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("No file is currently open. Please create or open a file first.")]
    NoFileOpen,
}

pub type EditorResult<T> = Result<T, EditorError>;

impl EditorError {
    pub(crate) fn io(name: &str, source: io::Error) -> EditorError {
        EditorError::Io {
            name: name.to_string(),
            source,
        }
    }
}
