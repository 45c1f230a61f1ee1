use std::collections::HashMap;

use mlua::{Table, Value};
use tracing::warn;

use crate::{Action, ConfigError};

/// Global shortcuts: normalized tokens like "Ctrl-q", "Escape", "n"
#[derive(Clone, Debug, Default)]
pub struct Keymap {
    pub normal: HashMap<String, Action>,
}

impl Keymap {
    pub fn lookup(&self, token: &str) -> Option<Action> {
        self.normal.get(token).copied()
    }

    /// Overlay `keymaps = { ["Ctrl-w"] = "quit", ... }` from the config table.
    /// Entries with unknown action names are skipped.
    pub(crate) fn merge_lua(&mut self, cfg: &Table) -> Result<(), ConfigError> {
        let Value::Table(keymaps) = cfg.get::<Value>("keymaps").map_err(ConfigError::lua)? else {
            return Ok(());
        };

        for pair in keymaps.pairs::<Value, Value>() {
            // mlua::Error stays out of ConfigError; keep only its message
            let (k, v) = pair.map_err(ConfigError::lua)?;

            let token = match k {
                Value::String(s) => s.to_str().map_err(ConfigError::lua)?.to_string(),
                Value::Integer(n) => n.to_string(),
                _ => continue,
            };
            let action_name = match v {
                Value::String(s) => s.to_str().map_err(ConfigError::lua)?.to_string(),
                _ => continue,
            };

            match Action::from_name(&action_name) {
                Some(act) => {
                    self.normal.insert(token, act);
                }
                None => warn!(%token, action = %action_name, "unknown action in keymap"),
            }
        }
        Ok(())
    }
}

/// Built-in defaults
pub fn default_keymap() -> Keymap {
    use Action::*;
    let mut m = HashMap::new();

    m.insert("Ctrl-q".into(), Quit);
    m.insert("Ctrl-m".into(), Minimize);
    m.insert("Ctrl-n".into(), FocusEntry);

    Keymap { normal: m }
}
