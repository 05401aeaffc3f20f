use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};
use crate::file::Storage;
use crate::text_buffer::{LineBuffer, Rendered};
use crate::undo::UndoLog;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    Restored,
    NothingToUndo,
}

#[derive(Debug, Default)]
pub struct EditEngine {
    buffer: LineBuffer,
    history: UndoLog,
}

impl EditEngine {
    pub fn new() -> EditEngine {
        EditEngine::default()
    }

    pub fn with_config(config: &EditorConfig) -> EditEngine {
        EditEngine {
            buffer: LineBuffer::new(),
            history: UndoLog::with_depth(config.undo_depth),
        }
    }

    pub fn insert(&mut self, position: usize, text: &str) -> EditorResult<()> {
        // Snapshot even when the edit is about to be rejected.
        self.history.push(self.buffer.snapshot());
        self.buffer.insert_at(position, text).map_err(|e| {
            debug!(position, len = self.buffer.len(), "insert rejected");
            e
        })
    }

    pub fn replace_all(&mut self, search: &str, replacement: &str) -> EditorResult<usize> {
        self.history.push(self.buffer.snapshot());
        let count = self.buffer.replace_all(search, replacement)?;
        debug!(search, replacement, count, "replace all");
        Ok(count)
    }

    pub fn undo(&mut self) -> UndoOutcome {
        match self.history.pop() {
            Some(snapshot) => {
                self.buffer.restore(snapshot);
                debug!(remaining = self.history.len(), "undo applied");
                UndoOutcome::Restored
            }
            None => UndoOutcome::NothingToUndo,
        }
    }

    /// Truncates `name` if it already exists.
    pub fn create<S: Storage + ?Sized>(&mut self, storage: &S, name: &str) -> EditorResult<()> {
        storage.write_lines(name, &[]).map_err(|e| {
            warn!(name, error = %e, "create failed");
            EditorError::io(name, e)
        })?;

        self.start_session(name, Vec::new());
        Ok(())
    }

    pub fn open<S: Storage + ?Sized>(&mut self, storage: &S, name: &str) -> EditorResult<()> {
        if !storage.exists(name) {
            return Err(EditorError::NotFound {
                name: name.to_string(),
            });
        }

        let lines = storage.read_lines(name).map_err(|e| {
            warn!(name, error = %e, "open failed");
            EditorError::io(name, e)
        })?;

        self.start_session(name, lines);
        Ok(())
    }

    pub fn save<S: Storage + ?Sized>(&mut self, storage: &S) -> EditorResult<()> {
        let name = self.buffer.source_name().ok_or(EditorError::NoFileOpen)?;
        storage.write_lines(name, self.buffer.lines()).map_err(|e| {
            warn!(name, error = %e, "save failed");
            EditorError::io(name, e)
        })?;

        debug!(name, lines = self.buffer.len(), "buffer saved");
        self.buffer.mark_clean();
        Ok(())
    }

    pub fn close(&mut self) {
        self.buffer.clear();
        self.history.clear();
    }

    fn start_session(&mut self, name: &str, lines: Vec<String>) {
        self.buffer.load(lines);
        self.buffer.set_source_name(name);
        self.history.clear();
        debug!(name, lines = self.buffer.len(), "session started");
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn lines(&self) -> &[String] {
        self.buffer.lines()
    }

    pub fn render(&self) -> Rendered<'_> {
        self.buffer.render()
    }

    pub fn is_dirty(&self) -> bool {
        self.buffer.is_dirty()
    }

    pub fn source_name(&self) -> Option<&str> {
        self.buffer.source_name()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::memory::MemoryStorage;

    fn engine_with(lines: &[&str]) -> EditEngine {
        let storage = MemoryStorage::with_file("test.txt", lines);
        let mut engine = EditEngine::new();
        engine.open(&storage, "test.txt").unwrap();
        engine
    }

    #[test]
    fn insert_then_undo() {
        let mut engine = engine_with(&["a", "b"]);
        engine.insert(2, "x").unwrap();
        assert_eq!(engine.lines(), ["a", "x", "b"]);
        assert!(engine.is_dirty());

        assert_eq!(engine.undo(), UndoOutcome::Restored);
        assert_eq!(engine.lines(), ["a", "b"]);
        assert!(engine.is_dirty());
    }

    #[test]
    fn replace_then_undo() {
        let mut engine = engine_with(&["foo bar foo"]);
        assert_eq!(engine.replace_all("foo", "baz").unwrap(), 2);
        assert_eq!(engine.lines(), ["baz bar baz"]);

        assert_eq!(engine.undo(), UndoOutcome::Restored);
        assert_eq!(engine.lines(), ["foo bar foo"]);
    }

    #[test]
    fn undo_on_empty_history() {
        let mut engine = EditEngine::new();
        assert_eq!(engine.undo(), UndoOutcome::NothingToUndo);
        assert!(engine.lines().is_empty());
        assert!(!engine.is_dirty());
    }

    #[test]
    fn undo_steps_back_in_order() {
        let mut engine = engine_with(&["a"]);
        engine.insert(2, "b").unwrap();
        engine.insert(3, "c").unwrap();
        engine.replace_all("a", "z").unwrap();

        engine.undo();
        assert_eq!(engine.lines(), ["a", "b", "c"]);
        engine.undo();
        assert_eq!(engine.lines(), ["a", "b"]);
        engine.undo();
        assert_eq!(engine.lines(), ["a"]);
        assert_eq!(engine.undo(), UndoOutcome::NothingToUndo);
    }

    #[test]
    fn failed_insert_still_records_snapshot() {
        let mut engine = engine_with(&["a", "b"]);
        let result = engine.insert(9, "x");
        assert!(matches!(
            result,
            Err(EditorError::InvalidPosition { position: 9, len: 2 })
        ));
        assert_eq!(engine.lines(), ["a", "b"]);
        assert!(!engine.is_dirty());
        assert_eq!(engine.undo_depth(), 1);

        assert_eq!(engine.undo(), UndoOutcome::Restored);
        assert_eq!(engine.lines(), ["a", "b"]);
        assert!(engine.is_dirty());
    }

    #[test]
    fn failed_replace_still_records_snapshot() {
        let mut engine = engine_with(&["foo", "bar"]);
        let result = engine.replace_all("foo", "x\ny");
        assert!(matches!(result, Err(EditorError::EmbeddedNewline)));
        assert_eq!(engine.lines(), ["foo", "bar"]);
        assert!(!engine.is_dirty());
        assert_eq!(engine.undo_depth(), 1);

        assert_eq!(engine.undo(), UndoOutcome::Restored);
        assert_eq!(engine.lines(), ["foo", "bar"]);
        assert!(engine.is_dirty());
        assert_eq!(engine.undo(), UndoOutcome::NothingToUndo);
    }

    #[test]
    fn open_file_with_lone_carriage_return() {
        let storage = MemoryStorage::with_file("mac.txt", &["a\rb", "x\r"]);
        let mut engine = EditEngine::new();
        engine.open(&storage, "mac.txt").unwrap();
        assert_eq!(engine.lines(), ["a", "b", "x"]);

        engine.replace_all("b", "c").unwrap();
        assert_eq!(engine.lines(), ["a", "c", "x"]);
    }

    #[test]
    fn open_clears_history() {
        let storage = MemoryStorage::with_file("other.txt", &["other"]);
        let mut engine = engine_with(&["a"]);
        engine.insert(1, "x").unwrap();
        engine.replace_all("a", "b").unwrap();

        engine.open(&storage, "other.txt").unwrap();
        assert_eq!(engine.undo(), UndoOutcome::NothingToUndo);
        assert_eq!(engine.lines(), ["other"]);
        assert_eq!(engine.source_name(), Some("other.txt"));
        assert!(!engine.is_dirty());
    }

    #[test]
    fn open_missing_file_keeps_session() {
        let storage = MemoryStorage::default();
        let mut engine = engine_with(&["a"]);
        engine.insert(1, "x").unwrap();

        let result = engine.open(&storage, "missing.txt");
        assert!(matches!(result, Err(EditorError::NotFound { .. })));
        assert_eq!(engine.lines(), ["x", "a"]);
        assert_eq!(engine.source_name(), Some("test.txt"));
        assert_eq!(engine.undo_depth(), 1);
    }

    #[test]
    fn create_starts_empty_session() {
        let storage = MemoryStorage::with_file("new.txt", &["stale"]);
        let mut engine = engine_with(&["a"]);
        engine.insert(1, "x").unwrap();

        engine.create(&storage, "new.txt").unwrap();
        assert!(engine.lines().is_empty());
        assert_eq!(engine.source_name(), Some("new.txt"));
        assert_eq!(engine.undo_depth(), 0);
        assert_eq!(storage.contents("new.txt"), Some(Vec::new()));
    }

    #[test]
    fn create_failure_reports_io() {
        let storage = MemoryStorage {
            read_only: true,
            ..MemoryStorage::default()
        };
        let mut engine = EditEngine::new();
        let result = engine.create(&storage, "new.txt");
        assert!(matches!(result, Err(EditorError::Io { .. })));
        assert_eq!(engine.source_name(), None);
    }

    #[test]
    fn save_keeps_history() {
        let storage = MemoryStorage::with_file("test.txt", &["a"]);
        let mut engine = EditEngine::new();
        engine.open(&storage, "test.txt").unwrap();
        engine.insert(2, "b").unwrap();

        engine.save(&storage).unwrap();
        assert!(!engine.is_dirty());
        assert_eq!(storage.contents("test.txt"), Some(vec![String::from("a"), String::from("b")]));

        assert_eq!(engine.undo(), UndoOutcome::Restored);
        assert_eq!(engine.lines(), ["a"]);
        assert!(engine.is_dirty());
    }

    #[test]
    fn save_without_file() {
        let storage = MemoryStorage::default();
        let mut engine = EditEngine::new();
        engine.insert(1, "orphan").unwrap();
        assert!(matches!(engine.save(&storage), Err(EditorError::NoFileOpen)));
        assert!(engine.is_dirty());
    }

    #[test]
    fn save_failure_keeps_dirty() {
        let mut storage = MemoryStorage::with_file("test.txt", &["a"]);
        let mut engine = EditEngine::new();
        engine.open(&storage, "test.txt").unwrap();
        engine.insert(1, "b").unwrap();

        storage.read_only = true;
        assert!(matches!(engine.save(&storage), Err(EditorError::Io { .. })));
        assert!(engine.is_dirty());
    }

    #[test]
    fn close_clears_everything() {
        let mut engine = engine_with(&["a"]);
        engine.insert(1, "x").unwrap();

        engine.close();
        assert!(engine.lines().is_empty());
        assert_eq!(engine.source_name(), None);
        assert!(!engine.is_dirty());
        assert_eq!(engine.undo(), UndoOutcome::NothingToUndo);
    }

    #[test]
    fn config_limits_history() {
        let config = EditorConfig {
            undo_depth: Some(1),
            ..EditorConfig::default()
        };
        let mut engine = EditEngine::with_config(&config);
        engine.insert(1, "a").unwrap();
        engine.insert(2, "b").unwrap();

        assert_eq!(engine.undo(), UndoOutcome::Restored);
        assert_eq!(engine.lines(), ["a"]);
        assert_eq!(engine.undo(), UndoOutcome::NothingToUndo);
    }
}
