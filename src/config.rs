pub const DEFAULT_EXTENSION: &str = "txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Appended to file names that have no extension.
    pub default_extension: String,
    /// Maximum number of undo snapshots kept; `None` keeps them all.
    pub undo_depth: Option<usize>,
    pub line_numbers: bool,
}

impl Default for EditorConfig {
    fn default() -> EditorConfig {
        EditorConfig {
            default_extension: String::from(DEFAULT_EXTENSION),
            undo_depth: None,
            line_numbers: true,
        }
    }
}
