//! The widget as a single state value. The GUI turns input into [`Event`]s,
//! feeds them to [`AppState::update`], and carries out the returned [`Effect`].

use tracing::debug;

use crate::{Action, Config, Point, RowAction, RowId, Size, TaskList, TitleBar, WindowState};

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Enter in the new-entry field.
    EntrySubmitted,
    /// Primary click on a row label.
    RowEditRequested(RowId),
    /// Enter or focus loss in a row editor.
    RowEditCommitted(RowId),
    /// Escape in a row editor.
    RowEditCancelled(RowId),
    TitleEditRequested,
    TitleEditCommitted,
    TitleEditCancelled,
    RowMenu(RowId, RowAction),
    Command(Action),
    FocusChanged(bool),
    RowHovered(Option<RowId>),
    TitleHovered(bool),
    /// Primary press over the title region, screen coordinates.
    PointerPressed(Point),
    PointerMoved(Point),
    PointerReleased,
    WindowObserved { position: Point, size: Size },
    ContentMeasured(Size),
}

/// Requests for the host window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    MoveWindow(Point),
    ResizeWindow(Size),
    Minimize,
    Close,
    FocusEntry,
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub title: TitleBar,
    pub tasks: TaskList,
    pub window: WindowState,
    /// Contents of the new-entry field.
    pub entry: String,
    entry_visible: bool,
    hovered_row: Option<RowId>,
    title_hovered: bool,
}

impl AppState {
    pub fn new(cfg: &Config) -> Self {
        Self {
            title: TitleBar::new(cfg.title.clone()),
            tasks: TaskList::new(),
            window: WindowState::new(
                Point::default(),
                Size::new(cfg.min_width, cfg.min_height),
                cfg.padding,
            ),
            entry: String::new(),
            entry_visible: true,
            hovered_row: None,
            title_hovered: false,
        }
    }

    pub fn entry_visible(&self) -> bool {
        self.entry_visible
    }

    /// Row whose options button is revealed.
    pub fn hovered_row(&self) -> Option<RowId> {
        self.hovered_row
    }

    /// Whether the minimize button is revealed.
    pub fn title_hovered(&self) -> bool {
        self.title_hovered
    }

    pub fn update(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::EntrySubmitted => {
                if self.tasks.append(&self.entry).is_some() {
                    self.entry.clear();
                }
                None
            }
            Event::RowEditRequested(id) => {
                self.commit_editors_except(Some(id));
                if let Some(row) = self.tasks.get_mut(id) {
                    row.activate_editor();
                }
                None
            }
            Event::RowEditCommitted(id) => {
                if let Some(row) = self.tasks.get_mut(id) {
                    if row.label_mut().commit() {
                        debug!(%id, text = row.text(), "rename task");
                    }
                }
                None
            }
            Event::RowEditCancelled(id) => {
                if let Some(row) = self.tasks.get_mut(id) {
                    row.label_mut().cancel();
                }
                None
            }
            Event::TitleEditRequested => {
                self.commit_editors_except(None);
                self.title.editor_mut().activate_editor();
                None
            }
            Event::TitleEditCommitted => {
                if self.title.editor_mut().commit() {
                    debug!(title = self.title.text(), "rename title");
                }
                None
            }
            Event::TitleEditCancelled => {
                self.title.editor_mut().cancel();
                None
            }
            Event::RowMenu(id, action) => {
                self.tasks.apply(id, action);
                if action == RowAction::Delete && self.hovered_row == Some(id) {
                    self.hovered_row = None;
                }
                None
            }
            Event::Command(action) => match action {
                Action::Minimize => Some(Effect::Minimize),
                Action::Quit => Some(Effect::Close),
                Action::FocusEntry => {
                    self.entry_visible = true;
                    Some(Effect::FocusEntry)
                }
            },
            Event::FocusChanged(focused) => {
                self.entry_visible = focused;
                None
            }
            Event::RowHovered(id) => {
                self.hovered_row = id.filter(|id| self.tasks.get(*id).is_some());
                None
            }
            Event::TitleHovered(hovered) => {
                self.title_hovered = hovered;
                None
            }
            Event::PointerPressed(pointer) => {
                self.window.press(pointer);
                None
            }
            Event::PointerMoved(pointer) => self.window.pointer_moved(pointer).map(Effect::MoveWindow),
            Event::PointerReleased => {
                self.window.release();
                None
            }
            Event::WindowObserved { position, size } => {
                self.window.observe(position, size);
                None
            }
            Event::ContentMeasured(content) => self.window.fit_content(content).map(Effect::ResizeWindow),
        }
    }

    /// Opening one editor takes focus from any other.
    fn commit_editors_except(&mut self, keep: Option<RowId>) {
        for row in self.tasks.iter_mut().filter(|r| Some(r.id()) != keep) {
            row.label_mut().commit();
        }
        if keep.is_some() {
            self.title.editor_mut().commit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;
    use pretty_assertions::assert_eq;

    fn state() -> AppState {
        AppState::new(&Config::default())
    }

    fn submit(s: &mut AppState, text: &str) -> Option<RowId> {
        s.entry = text.to_string();
        s.update(Event::EntrySubmitted);
        s.tasks.iter().last().map(|r| r.id())
    }

    #[test]
    fn entry_submission_appends_and_clears() {
        let mut s = state();
        submit(&mut s, "Buy milk");
        assert_eq!(s.entry, "");
        assert_eq!(s.tasks.len(), 1);

        s.entry = "  ".into();
        s.update(Event::EntrySubmitted);
        assert_eq!(s.tasks.len(), 1);
        assert_eq!(s.entry, "  ");
    }

    #[test]
    fn opening_an_editor_commits_the_others() {
        let mut s = state();
        let a = submit(&mut s, "a").unwrap();
        let b = submit(&mut s, "b").unwrap();

        s.update(Event::RowEditRequested(a));
        *s.tasks.get_mut(a).unwrap().label_mut().buffer_mut().unwrap() = "a2".into();
        s.update(Event::RowEditRequested(b));

        assert_eq!(s.tasks.get(a).unwrap().text(), "a2");
        assert!(!s.tasks.get(a).unwrap().label().is_editing());
        assert!(s.tasks.get(b).unwrap().label().is_editing());

        s.update(Event::TitleEditRequested);
        assert!(!s.tasks.get(b).unwrap().label().is_editing());
        assert!(s.title.editor().is_editing());
    }

    #[test]
    fn commands_map_to_effects() {
        let mut s = state();
        assert_eq!(s.update(Event::Command(Action::Minimize)), Some(Effect::Minimize));
        assert_eq!(s.update(Event::Command(Action::Quit)), Some(Effect::Close));
        s.update(Event::FocusChanged(false));
        assert!(!s.entry_visible());
        assert_eq!(s.update(Event::Command(Action::FocusEntry)), Some(Effect::FocusEntry));
        assert!(s.entry_visible());
    }

    #[test]
    fn title_rename_commits_and_ignores_blank() {
        let mut s = state();
        s.update(Event::TitleEditRequested);
        *s.title.editor_mut().buffer_mut().unwrap() = "Today".into();
        s.update(Event::TitleEditCommitted);
        assert_eq!(s.title.text(), "Today");
        assert!(!s.title.editor().is_editing());

        s.update(Event::TitleEditRequested);
        s.title.editor_mut().buffer_mut().unwrap().clear();
        s.update(Event::TitleEditCommitted);
        assert_eq!(s.title.text(), "Today");
    }

    #[test]
    fn escape_discards_edits() {
        let mut s = state();
        let a = submit(&mut s, "a").unwrap();
        s.update(Event::RowEditRequested(a));
        *s.tasks.get_mut(a).unwrap().label_mut().buffer_mut().unwrap() = "zzz".into();
        s.update(Event::RowEditCancelled(a));
        assert_eq!(s.tasks.get(a).unwrap().text(), "a");
        assert!(!s.tasks.get(a).unwrap().label().is_editing());

        s.update(Event::TitleEditRequested);
        *s.title.editor_mut().buffer_mut().unwrap() = "zzz".into();
        s.update(Event::TitleEditCancelled);
        assert_eq!(s.title.text(), "TODO");
        assert!(!s.title.editor().is_editing());
    }

    #[test]
    fn title_hover_reveals_minimize() {
        let mut s = state();
        assert!(!s.title_hovered());
        s.update(Event::TitleHovered(true));
        assert!(s.title_hovered());
        s.update(Event::TitleHovered(false));
        assert!(!s.title_hovered());
    }

    #[test]
    fn window_focus_toggles_entry() {
        let mut s = state();
        assert!(s.entry_visible());
        s.update(Event::FocusChanged(false));
        assert!(!s.entry_visible());
        s.update(Event::FocusChanged(true));
        assert!(s.entry_visible());
    }

    #[test]
    fn row_hover_clears() {
        let mut s = state();
        let a = submit(&mut s, "a").unwrap();
        s.update(Event::RowHovered(Some(a)));
        assert_eq!(s.hovered_row(), Some(a));
        s.update(Event::RowHovered(None));
        assert_eq!(s.hovered_row(), None);
    }

    #[test]
    fn deleting_hovered_row_clears_hover() {
        let mut s = state();
        let a = submit(&mut s, "a").unwrap();
        s.update(Event::RowHovered(Some(a)));
        assert_eq!(s.hovered_row(), Some(a));
        s.update(Event::RowMenu(a, RowAction::Delete));
        assert_eq!(s.hovered_row(), None);
        s.update(Event::RowHovered(Some(a)));
        assert_eq!(s.hovered_row(), None);
    }

    #[test]
    fn row_menu_status() {
        let mut s = state();
        let a = submit(&mut s, "a").unwrap();
        s.update(Event::RowMenu(a, RowAction::SetDone));
        assert_eq!(s.tasks.get(a).unwrap().status(), Status::Done);
    }

    #[test]
    fn drag_emits_moves_until_release() {
        let mut s = state();
        s.update(Event::WindowObserved {
            position: Point::new(40.0, 40.0),
            size: Size::new(200.0, 200.0),
        });
        assert_eq!(s.update(Event::PointerMoved(Point::new(0.0, 0.0))), None);
        s.update(Event::PointerPressed(Point::new(50.0, 45.0)));
        assert_eq!(
            s.update(Event::PointerMoved(Point::new(60.0, 65.0))),
            Some(Effect::MoveWindow(Point::new(50.0, 60.0)))
        );
        s.update(Event::PointerReleased);
        assert_eq!(s.update(Event::PointerMoved(Point::new(90.0, 90.0))), None);
    }

    #[test]
    fn content_growth_resizes_window() {
        let mut s = state();
        assert_eq!(s.update(Event::ContentMeasured(Size::new(180.0, 150.0))), None);
        assert_eq!(
            s.update(Event::ContentMeasured(Size::new(180.0, 230.0))),
            Some(Effect::ResizeWindow(Size::new(200.0, 250.0)))
        );
    }
}
