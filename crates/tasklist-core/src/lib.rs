//! Core model for the tasklist widget: rows, list, title, window geometry
//! and the event/effect state machine the GUI drives.

// ACTIONS
pub mod actions;
pub use actions::{Action, RowAction};

// Keymap Configs
pub mod keymap;
pub use keymap::{default_keymap, Keymap};

pub mod config;
pub use config::{default_config_path, load_user_config, Config, ConfigError, Settings};

pub mod edit;
pub use edit::EditableText;

pub mod task;
pub use task::{Rgb, RowId, Status, TaskRow};

pub mod list;
pub use list::TaskList;

pub mod title;
pub use title::TitleBar;

pub mod window;
pub use window::{Point, Size, WindowState};

pub mod state;
pub use state::{AppState, Effect, Event};
