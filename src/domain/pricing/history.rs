//! Session-scoped calculation history: prepend-only, delete-by-id, nothing
//! survives a reload.

/// One recorded snapshot plus the id used for deletion and list keying.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow<T> {
    pub id: u64,
    pub entry: T,
}

/// Newest-first log of immutable snapshots. Entries are never mutated after
/// recording; the owning section is hidden whenever the log is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLog<T> {
    rows: Vec<HistoryRow<T>>,
    next_id: u64,
}

impl<T> Default for HistoryLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HistoryLog<T> {
    pub fn new() -> Self {
        Self { rows: Vec::new(), next_id: 0 }
    }

    /// Prepends a snapshot and returns its id.
    pub fn record(&mut self, entry: T) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.insert(0, HistoryRow { id, entry });
        id
    }

    /// Removes the row with the given id; unknown ids are a no-op.
    pub fn delete(&mut self, id: u64) {
        self.rows.retain(|row| row.id != id);
    }

    pub fn rows(&self) -> &[HistoryRow<T>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The history section only shows while it has rows.
    pub fn is_visible(&self) -> bool {
        !self.rows.is_empty()
    }
}
