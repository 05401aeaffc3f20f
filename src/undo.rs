use std::collections::VecDeque;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    lines: Vec<String>,
}

impl Snapshot {
    pub fn new(lines: Vec<String>) -> Snapshot {
        Snapshot { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Unbounded unless `depth` is set; then the oldest snapshot goes first.
#[derive(Debug, Default)]
pub struct UndoLog {
    snapshots: VecDeque<Snapshot>,
    depth: Option<usize>,
}

impl UndoLog {
    pub fn new() -> UndoLog {
        UndoLog::default()
    }

    pub fn with_depth(depth: Option<usize>) -> UndoLog {
        UndoLog {
            snapshots: VecDeque::new(),
            depth,
        }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push_back(snapshot);
        if let Some(depth) = self.depth {
            while self.snapshots.len() > depth {
                self.snapshots.pop_front();
                trace!(depth, "oldest undo snapshot dropped");
            }
        }
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
