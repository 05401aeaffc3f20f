pub mod line;

use crate::error::{EditorError, EditorResult};
use crate::undo::Snapshot;
use tracing::trace;

/// Positions passed in from outside are 1-indexed; `lines` is 0-indexed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    dirty: bool,
    source_name: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Rendered<'a> {
    Empty,
    Lines(&'a [String]),
}

impl LineBuffer {
    pub fn new() -> LineBuffer {
        LineBuffer::default()
    }

    /// Replaces the content wholesale. Elements holding line breaks are
    /// split so every stored line stays single.
    pub fn load(&mut self, lines: Vec<String>) {
        self.lines = lines
            .into_iter()
            .flat_map(|l| {
                if line::is_single_line(&l) {
                    vec![l]
                } else {
                    line::split_lines(&l)
                }
            })
            .collect();
        self.dirty = false;
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.dirty = false;
        self.source_name = None;
    }

    pub fn check_position(&self, position: usize) -> EditorResult<()> {
        if position < 1 || position > self.lines.len() + 1 {
            return Err(EditorError::InvalidPosition {
                position,
                len: self.lines.len(),
            });
        }
        Ok(())
    }

    pub fn insert_at(&mut self, position: usize, text: &str) -> EditorResult<()> {
        self.check_position(position)?;
        if !line::is_single_line(text) {
            return Err(EditorError::EmbeddedNewline);
        }

        self.lines.insert(position - 1, text.to_string());
        self.dirty = true;
        trace!(position, len = self.lines.len(), "line inserted");
        Ok(())
    }

    /// Replaces `search` with `replacement` in every line and returns the
    /// number of substitutions made.
    pub fn replace_all(&mut self, search: &str, replacement: &str) -> EditorResult<usize> {
        if !line::is_single_line(replacement) {
            return Err(EditorError::EmbeddedNewline);
        }

        let mut total = 0;
        for current in self.lines.iter_mut() {
            if let Some((replaced, count)) = line::replace_in_line(current, search, replacement) {
                *current = replaced;
                total += count;
            }
        }

        if total > 0 {
            self.dirty = true;
        }
        Ok(total)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.lines.clone())
    }

    /// Restoring counts as a modification relative to the last save.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.lines = snapshot.into_lines();
        self.dirty = true;
    }

    pub fn render(&self) -> Rendered<'_> {
        if self.lines.is_empty() {
            Rendered::Empty
        } else {
            Rendered::Lines(&self.lines)
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub fn set_source_name(&mut self, name: &str) {
        self.source_name = Some(name.to_string());
    }
}
