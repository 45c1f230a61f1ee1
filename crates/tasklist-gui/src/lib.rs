use anyhow::Result;
use eframe::NativeOptions;
use egui::{Color32, Event as InputEvent, FontId, Key, Modifiers, RichText, Sense};
use tasklist_core::{
    Action, AppState, Config, Effect, Event, Keymap, Point, Rgb, RowAction, RowId, Size,
};
use tracing::{debug, info};

const ROW_INDENT: f32 = 10.0;
const FIELD_WIDTH: f32 = 150.0;

pub fn run_gui(cfg: Config, keymap: Keymap, seed: Vec<String>) -> Result<()> {
    let mut viewport = egui::ViewportBuilder::default()
        .with_title("Tasklist")
        .with_decorations(false)
        .with_transparent(true)
        .with_resizable(false)
        .with_inner_size([cfg.min_width, cfg.min_height])
        .with_min_inner_size([cfg.min_width, cfg.min_height]);
    if cfg.always_on_top {
        viewport = viewport.with_always_on_top();
    }
    let native_options = NativeOptions {
        viewport,
        ..Default::default()
    };

    let mut state = AppState::new(&cfg);
    for text in &seed {
        state.tasks.append(text);
    }
    info!(tasks = state.tasks.len(), "starting tasklist");

    eframe::run_native(
        "Tasklist",
        native_options,
        Box::new(move |_cc| {
            Box::new(App {
                state,
                keymap,
                font_size: cfg.font_size,
                padding: cfg.padding,
                focused: None,
                focus_entry: false,
                menu_row: None,
            })
        }),
    )
    .map_err(|e| anyhow::Error::msg(e.to_string()))?;
    Ok(())
}

struct App {
    state: AppState,
    keymap: Keymap,
    font_size: f32,
    padding: f32,
    focused: Option<bool>, // last reported window focus
    focus_entry: bool,
    menu_row: Option<RowId>, // row whose "..." menu is open
}

fn key_to_token(key: Key, mods: Modifiers) -> String {
    // Same tokens as the keymap: "Ctrl-q", "Escape", "n", "N"
    let name = key.name();
    let base = if name.chars().count() == 1 {
        name.to_lowercase()
    } else {
        name.to_string()
    };

    if mods.ctrl || mods.mac_cmd {
        format!("Ctrl-{base}")
    } else if mods.shift && base.chars().count() == 1 {
        base.to_uppercase()
    } else {
        base
    }
}

fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Pointer position in screen coordinates.
fn screen_pointer(ctx: &egui::Context) -> Option<Point> {
    ctx.input(|i| {
        let origin = i.viewport().outer_rect?.min;
        let local = i.pointer.latest_pos()?;
        Some(Point::new(origin.x + local.x, origin.y + local.y))
    })
}

/// Escape also drops focus; it discards the edit instead of committing it.
fn escape_pressed(ui: &egui::Ui) -> bool {
    ui.input(|i| i.key_pressed(Key::Escape))
}

fn row_menu(ui: &mut egui::Ui, id: RowId, events: &mut Vec<Event>) {
    for action in RowAction::ALL {
        if ui.button(action.label()).clicked() {
            events.push(Event::RowMenu(id, action));
            ui.close_menu();
        }
    }
}

fn title_menu(ui: &mut egui::Ui, events: &mut Vec<Event>) {
    for action in Action::TITLE_MENU {
        if ui.button(action.label()).clicked() {
            events.push(Event::Command(action));
            ui.close_menu();
        }
    }
}

impl App {
    fn observe_window(&mut self, ctx: &egui::Context, events: &mut Vec<Event>) {
        let (outer, inner, focused) = ctx.input(|i| {
            let v = i.viewport();
            (v.outer_rect, v.inner_rect, v.focused)
        });
        if let (Some(outer), Some(inner)) = (outer, inner) {
            events.push(Event::WindowObserved {
                position: Point::new(outer.min.x, outer.min.y),
                size: Size::new(inner.width(), inner.height()),
            });
        }
        if focused != self.focused {
            self.focused = focused;
            if let Some(f) = focused {
                events.push(Event::FocusChanged(f));
            }
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context, events: &mut Vec<Event>) {
        let typing = ctx.memory(|m| m.focused().is_some());
        let presses: Vec<(Key, Modifiers)> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|ev| match ev {
                    InputEvent::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => Some((*key, *modifiers)),
                    _ => None,
                })
                .collect()
        });

        for (key, mods) in presses {
            // bare keys belong to the focused text field
            if typing && !(mods.ctrl || mods.mac_cmd) {
                continue;
            }
            let token = key_to_token(key, mods);
            if let Some(action) = self.keymap.lookup(&token) {
                debug!(%token, ?action, "shortcut");
                events.push(Event::Command(action));
            }
        }
    }

    fn title_bar(&mut self, ui: &mut egui::Ui, events: &mut Vec<Event>) {
        let font_size = self.font_size;
        let show_minimize = self.state.title_hovered();
        let ctx = ui.ctx().clone();

        let row = ui.horizontal(|ui| {
            let editor = self.state.title.editor_mut();
            if editor.is_editing() {
                let wants_focus = editor.take_focus_request();
                if let Some(buffer) = editor.buffer_mut() {
                    let resp = ui.add(
                        egui::TextEdit::singleline(buffer)
                            .id_source("title_editor")
                            .font(FontId::proportional(font_size))
                            .desired_width(FIELD_WIDTH),
                    );
                    if wants_focus {
                        resp.request_focus();
                    }
                    if resp.lost_focus() {
                        events.push(if escape_pressed(ui) {
                            Event::TitleEditCancelled
                        } else {
                            Event::TitleEditCommitted
                        });
                    }
                }
            } else {
                let text = RichText::new(editor.text())
                    .strong()
                    .size(font_size)
                    .color(Color32::WHITE);
                let resp = ui.add(egui::Label::new(text).sense(Sense::click_and_drag()));
                if resp.clicked() {
                    events.push(Event::TitleEditRequested);
                }
                if resp.drag_started_by(egui::PointerButton::Primary) {
                    if let Some(p) = screen_pointer(&ctx) {
                        events.push(Event::PointerPressed(p));
                    }
                }
            }

            if ui.add_visible(show_minimize, egui::Button::new("min")).clicked() {
                events.push(Event::Command(Action::Minimize));
            }
        });

        row.response.context_menu(|ui| title_menu(ui, events));
        events.push(Event::TitleHovered(ui.rect_contains_pointer(row.response.rect)));
    }

    fn task_rows(&mut self, ui: &mut egui::Ui, events: &mut Vec<Event>) {
        let font_size = self.font_size;
        let hovered = self.state.hovered_row();
        let open_menu = self.menu_row;
        let mut pointer_row = None;
        let mut menu_row = None;

        for row in self.state.tasks.iter_mut() {
            let id = row.id();
            let fg = color(row.color());

            let resp = ui.horizontal(|ui| {
                ui.add_space(ROW_INDENT);
                if row.label().is_editing() {
                    let wants_focus = row.label_mut().take_focus_request();
                    if let Some(buffer) = row.label_mut().buffer_mut() {
                        let resp = ui.add(
                            egui::TextEdit::singleline(buffer)
                                .id_source(("row_editor", id))
                                .font(FontId::proportional(font_size))
                                .desired_width(FIELD_WIDTH),
                        );
                        if wants_focus {
                            resp.request_focus();
                        }
                        if resp.lost_focus() {
                            events.push(if escape_pressed(ui) {
                                Event::RowEditCancelled(id)
                            } else {
                                Event::RowEditCommitted(id)
                            });
                        }
                    }
                } else {
                    let text = RichText::new(row.text()).size(font_size).color(fg);
                    let resp = ui.add(egui::Label::new(text).sense(Sense::click()));
                    if resp.clicked() {
                        events.push(Event::RowEditRequested(id));
                    }
                }

                let show_options = hovered == Some(id) || open_menu == Some(id);
                ui.add_visible_ui(show_options, |ui| {
                    let menu = ui.menu_button("...", |ui| row_menu(ui, id, events));
                    if menu.inner.is_some() {
                        menu_row = Some(id);
                    }
                });
            });

            resp.response.context_menu(|ui| row_menu(ui, id, events));
            if ui.rect_contains_pointer(resp.response.rect) {
                pointer_row = Some(id);
            }
        }

        self.menu_row = menu_row;
        events.push(Event::RowHovered(pointer_row));
    }

    fn entry_field(&mut self, ui: &mut egui::Ui, events: &mut Vec<Event>) {
        let visible = self.state.entry_visible();
        let focus = std::mem::take(&mut self.focus_entry);
        let entry = &mut self.state.entry;

        ui.add_visible_ui(visible, |ui| {
            let resp = ui.add(
                egui::TextEdit::singleline(entry)
                    .id_source("new_entry")
                    .hint_text("new task")
                    .desired_width(FIELD_WIDTH),
            );
            if focus {
                resp.request_focus();
            }
            if resp.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                events.push(Event::EntrySubmitted);
                resp.request_focus();
            }
        });
    }

    fn track_drag(&self, ctx: &egui::Context, events: &mut Vec<Event>) {
        if !self.state.window.is_dragging() {
            return;
        }
        if ctx.input(|i| i.pointer.primary_down()) {
            if let Some(p) = screen_pointer(ctx) {
                events.push(Event::PointerMoved(p));
            }
        } else {
            events.push(Event::PointerReleased);
        }
    }

    fn perform(&mut self, ctx: &egui::Context, effect: Effect) {
        match effect {
            Effect::MoveWindow(p) => {
                ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(p.x, p.y)))
            }
            Effect::ResizeWindow(s) => {
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(s.width, s.height)))
            }
            Effect::Minimize => ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true)),
            Effect::Close => {
                info!("quit");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close)
            }
            Effect::FocusEntry => {
                self.focus_entry = true;
                ctx.request_repaint();
            }
        }
    }
}

impl eframe::App for App {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();
        self.observe_window(ctx, &mut events);
        self.handle_keys(ctx, &mut events);

        let outer = egui::Frame::none().inner_margin(self.padding);
        egui::CentralPanel::default().frame(outer).show(ctx, |ui| {
            let content = egui::Frame::none()
                .fill(Color32::from_rgba_unmultiplied(140, 140, 140, 153))
                .rounding(4.0)
                .inner_margin(15.0)
                .show(ui, |ui| {
                    ui.vertical(|ui| {
                        self.title_bar(ui, &mut events);
                        self.task_rows(ui, &mut events);
                        self.entry_field(ui, &mut events);
                    });
                })
                .response;
            let size = content.rect.size();
            events.push(Event::ContentMeasured(Size::new(size.x, size.y)));
        });

        self.track_drag(ctx, &mut events);

        for event in events {
            if let Some(effect) = self.state.update(event) {
                self.perform(ctx, effect);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_match_keymap_format() {
        let ctrl = Modifiers {
            ctrl: true,
            ..Default::default()
        };
        let shift = Modifiers {
            shift: true,
            ..Default::default()
        };
        assert_eq!(key_to_token(Key::Q, ctrl), "Ctrl-q");
        assert_eq!(key_to_token(Key::N, Modifiers::NONE), "n");
        assert_eq!(key_to_token(Key::N, shift), "N");
        assert_eq!(key_to_token(Key::Escape, Modifiers::NONE), "Escape");
    }

    #[test]
    fn default_shortcuts_resolve() {
        let km = tasklist_core::default_keymap();
        let ctrl = Modifiers {
            ctrl: true,
            ..Default::default()
        };
        assert_eq!(km.lookup(&key_to_token(Key::Q, ctrl)), Some(Action::Quit));
        assert_eq!(km.lookup(&key_to_token(Key::M, ctrl)), Some(Action::Minimize));
        assert_eq!(km.lookup(&key_to_token(Key::N, ctrl)), Some(Action::FocusEntry));
    }

    #[test]
    fn status_colors_convert() {
        assert_eq!(color(Rgb::YELLOW), Color32::from_rgb(255, 255, 0));
    }
}
