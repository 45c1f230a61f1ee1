use tracing::debug;

use crate::{RowAction, RowId, Status, TaskRow};

/// Ordered task rows; index order is display order.
#[derive(Clone, Debug, Default)]
pub struct TaskList {
    rows: Vec<TaskRow>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskRow> {
        self.rows.iter()
    }

    /// Rows in order, mutable for in-place edits. Order and membership
    /// can only change through the list operations.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TaskRow> {
        self.rows.iter_mut()
    }

    pub fn ids(&self) -> Vec<RowId> {
        self.rows.iter().map(TaskRow::id).collect()
    }

    pub fn position(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.id() == id)
    }

    pub fn get(&self, id: RowId) -> Option<&TaskRow> {
        self.rows.iter().find(|r| r.id() == id)
    }

    pub fn get_mut(&mut self, id: RowId) -> Option<&mut TaskRow> {
        self.rows.iter_mut().find(|r| r.id() == id)
    }

    /// Append a Future row. Blank text is ignored.
    pub fn append(&mut self, text: &str) -> Option<RowId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let row = TaskRow::new(text.to_string());
        let id = row.id();
        debug!(%id, text, "append task");
        self.rows.push(row);
        Some(id)
    }

    /// Swap with the predecessor. False at the top or for unknown rows.
    pub fn move_up(&mut self, id: RowId) -> bool {
        match self.position(id) {
            Some(idx) if idx > 0 => {
                self.rows.swap(idx, idx - 1);
                debug!(%id, from = idx, to = idx - 1, "move task");
                true
            }
            _ => false,
        }
    }

    /// Swap with the successor. False at the bottom or for unknown rows.
    pub fn move_down(&mut self, id: RowId) -> bool {
        match self.position(id) {
            Some(idx) if idx + 1 < self.rows.len() => {
                self.rows.swap(idx, idx + 1);
                debug!(%id, from = idx, to = idx + 1, "move task");
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: RowId) -> Option<TaskRow> {
        let idx = self.position(id)?;
        debug!(%id, "delete task");
        Some(self.rows.remove(idx))
    }

    pub fn set_status(&mut self, id: RowId, status: Status) -> bool {
        match self.get_mut(id) {
            Some(row) => {
                row.set_status(status);
                debug!(%id, %status, "set status");
                true
            }
            None => false,
        }
    }

    /// False for unknown rows and blank text.
    pub fn set_text(&mut self, id: RowId, text: &str) -> bool {
        self.get_mut(id).is_some_and(|row| row.set_text(text))
    }

    /// Run a row menu entry. Returns whether anything changed.
    pub fn apply(&mut self, id: RowId, action: RowAction) -> bool {
        match action {
            RowAction::SetFuture => self.set_status(id, Status::Future),
            RowAction::SetCurrent => self.set_status(id, Status::Current),
            RowAction::SetDone => self.set_status(id, Status::Done),
            RowAction::Delete => self.remove(id).is_some(),
            RowAction::MoveUp => self.move_up(id),
            RowAction::MoveDown => self.move_down(id),
        }
    }
}
