/// Window-level commands, reachable from the title menu and keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Minimize,   // title menu / Ctrl-m
    Quit,       // title menu / Ctrl-q
    FocusEntry, // Ctrl-n
}

impl Action {
    /// Entries of the title bar context menu, in display order.
    pub const TITLE_MENU: [Action; 2] = [Action::Minimize, Action::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            Action::Minimize => "minimize",
            Action::Quit => "quit",
            Action::FocusEntry => "new task",
        }
    }

    /// Map action names from Lua strings to Action enum
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "minimize" => Some(Action::Minimize),
            "quit" => Some(Action::Quit),
            "focus_entry" => Some(Action::FocusEntry),
            _ => None,
        }
    }
}

/// Per-row menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    SetFuture,
    SetCurrent,
    SetDone,
    Delete,
    MoveUp,
    MoveDown,
}

impl RowAction {
    pub const ALL: [RowAction; 6] = [
        RowAction::SetFuture,
        RowAction::SetCurrent,
        RowAction::SetDone,
        RowAction::Delete,
        RowAction::MoveUp,
        RowAction::MoveDown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::SetFuture => "future",
            RowAction::SetCurrent => "current",
            RowAction::SetDone => "done",
            RowAction::Delete => "delete",
            RowAction::MoveUp => "up",
            RowAction::MoveDown => "down",
        }
    }
}
