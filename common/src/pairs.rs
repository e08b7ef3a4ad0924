//! Pair-list model and controller
//!
//! An ordered, bounded list of editable (landing, front) rows. The list is
//! never empty: removing the last remaining row clears it in place instead
//! of deleting it. Row positions are the vector indices; display numbering
//! is 1-based and recomputed by the renderer on every structural change.

use serde::{Deserialize, Serialize};

/// Upper bound on manual pairs
pub const MAX_PAIRS: usize = 10;

/// One (landing, front) value pair as carried on the wire and in snapshots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairValues {
    pub landing: String,
    pub front: String,
}

impl PairValues {
    pub fn new(landing: impl Into<String>, front: impl Into<String>) -> Self {
        Self {
            landing: landing.into(),
            front: front.into(),
        }
    }
}

/// One editable row of the pair list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairRow {
    pub landing: String,
    pub front: String,
}

impl PairRow {
    /// Snapshot of the row with surrounding whitespace removed
    pub fn trimmed(&self) -> PairValues {
        PairValues {
            landing: self.landing.trim().to_string(),
            front: self.front.trim().to_string(),
        }
    }

    pub fn clear(&mut self) {
        self.landing.clear();
        self.front.clear();
    }
}

impl From<PairValues> for PairRow {
    fn from(values: PairValues) -> Self {
        Self {
            landing: values.landing,
            front: values.front,
        }
    }
}

/// Result of an insert attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// New empty row inserted at this index
    Inserted(usize),
    /// The list is full; nothing changed
    AtCapacity,
}

/// Result of a remove attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// The sole remaining row was cleared in place instead of removed
    ClearedLastRow,
    OutOfRange,
}

/// Result of a bulk replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    Replaced(usize),
    /// Input exceeded capacity; the first `kept` entries were installed
    Truncated { kept: usize, dropped: usize },
    /// Empty input fell back to a single empty row
    EmptyFallback,
}

/// Ordered, bounded collection of pair rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairList {
    rows: Vec<PairRow>,
    capacity: usize,
}

impl Default for PairList {
    fn default() -> Self {
        Self::new()
    }
}

impl PairList {
    /// List with exactly one empty row and the default capacity
    pub fn new() -> Self {
        Self::with_capacity(MAX_PAIRS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: vec![PairRow::default()],
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        // Invariant: never true after construction
        self.rows.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_at_capacity(&self) -> bool {
        self.rows.len() >= self.capacity
    }

    pub fn rows(&self) -> &[PairRow] {
        &self.rows
    }

    /// Insert one empty row immediately after `anchor`, or at the end when
    /// no anchor is given or the anchor is out of range.
    pub fn insert_after(&mut self, anchor: Option<usize>) -> InsertOutcome {
        if self.is_at_capacity() {
            return InsertOutcome::AtCapacity;
        }
        let at = match anchor {
            Some(index) if index < self.rows.len() => index + 1,
            _ => self.rows.len(),
        };
        self.rows.insert(at, PairRow::default());
        InsertOutcome::Inserted(at)
    }

    /// Remove the row at `index`. The last remaining row is cleared in
    /// place rather than removed.
    pub fn remove(&mut self, index: usize) -> RemoveOutcome {
        if index >= self.rows.len() {
            return RemoveOutcome::OutOfRange;
        }
        if self.rows.len() == 1 {
            self.rows[0].clear();
            return RemoveOutcome::ClearedLastRow;
        }
        self.rows.remove(index);
        RemoveOutcome::Removed
    }

    /// Discard all rows and install `new_rows`, truncated to capacity.
    /// Empty input falls back to a single empty row.
    pub fn replace_all(&mut self, new_rows: Vec<PairValues>) -> ReplaceOutcome {
        if new_rows.is_empty() {
            self.rows = vec![PairRow::default()];
            return ReplaceOutcome::EmptyFallback;
        }
        let total = new_rows.len();
        let kept = total.min(self.capacity);
        self.rows = new_rows
            .into_iter()
            .take(kept)
            .map(PairRow::from)
            .collect();
        if total > kept {
            ReplaceOutcome::Truncated {
                kept,
                dropped: total - kept,
            }
        } else {
            ReplaceOutcome::Replaced(kept)
        }
    }

    /// Trimmed snapshot of every row in order; read-only
    pub fn get_data(&self) -> Vec<PairValues> {
        self.rows.iter().map(PairRow::trimmed).collect()
    }

    pub fn set_landing(&mut self, index: usize, value: impl Into<String>) {
        if let Some(row) = self.rows.get_mut(index) {
            row.landing = value.into();
        }
    }

    pub fn set_front(&mut self, index: usize, value: impl Into<String>) {
        if let Some(row) = self.rows.get_mut(index) {
            row.front = value.into();
        }
    }
}
