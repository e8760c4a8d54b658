use std::collections::HashSet;

/// Fallback lines already emitted in one discussion run
///
/// Owned by the run that creates it and dropped with it; never shared
/// between discussions.
#[derive(Debug, Clone, Default)]
pub struct UsedLines {
    lines: HashSet<String>,
}

impl UsedLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.contains(line)
    }

    /// Record a line; returns false if it was already recorded
    pub fn insert(&mut self, line: impl Into<String>) -> bool {
        self.lines.insert(line.into())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
