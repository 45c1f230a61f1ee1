use std::fmt;

use ulid::Ulid;

use crate::EditableText;

/* ---------- Status ---------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Future,
    Current,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const LIGHT_GREEN: Rgb = Rgb::new(144, 238, 144);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Future => "future",
            Status::Current => "current",
            Status::Done => "done",
        }
    }

    /// Foreground color of a row label.
    pub fn color(&self) -> Rgb {
        match self {
            Status::Future => Rgb::WHITE,
            Status::Current => Rgb::YELLOW,
            Status::Done => Rgb::LIGHT_GREEN,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* ---------- Rows ---------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(Ulid);

impl RowId {
    fn new() -> Self {
        RowId(Ulid::new())
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct TaskRow {
    id: RowId,
    label: EditableText,
    status: Status,
}

impl TaskRow {
    /// Rows are only created through `TaskList::append`, which rejects empty text.
    pub(crate) fn new(text: String) -> Self {
        Self {
            id: RowId::new(),
            label: EditableText::new(text),
            status: Status::Future,
        }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn text(&self) -> &str {
        self.label.text()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn color(&self) -> Rgb {
        self.status.color()
    }

    /// False when `text` is blank; the row keeps its label.
    pub fn set_text(&mut self, text: &str) -> bool {
        self.label.set_text(text)
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn activate_editor(&mut self) {
        self.label.activate_editor();
    }

    pub fn label(&self) -> &EditableText {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut EditableText {
        &mut self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_colors() {
        assert_eq!(Status::default(), Status::Future);
        assert_eq!(Status::Future.color(), Rgb::WHITE);
        assert_eq!(Status::Current.color(), Rgb::YELLOW);
        assert_eq!(Status::Done.color(), Rgb::LIGHT_GREEN);
    }

    #[test]
    fn new_row_is_white_future() {
        let row = TaskRow::new("Buy milk".into());
        assert_eq!(row.text(), "Buy milk");
        assert_eq!(row.status(), Status::Future);
        assert_eq!(row.color(), Rgb::WHITE);
        assert!(!row.label().is_editing());
    }

    #[test]
    fn ids_are_unique() {
        let a = TaskRow::new("a".into());
        let b = TaskRow::new("a".into());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn status_change_only_touches_color() {
        let mut row = TaskRow::new("x".into());
        let id = row.id();
        row.set_status(Status::Done);
        assert_eq!(row.text(), "x");
        assert_eq!(row.id(), id);
        assert_eq!(row.status().to_string(), "done");
    }
}
