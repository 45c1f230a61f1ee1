//! User configuration: a Lua chunk returning a table.
//!
//! ```lua
//! return {
//!   title = "Today",
//!   font_size = 16,
//!   keymaps = { ["Ctrl-w"] = "quit" },
//! }
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use mlua::{Lua, LuaSerdeExt, Value};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{default_keymap, Keymap};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("lua: {0}")]
    Lua(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub(crate) fn lua(e: mlua::Error) -> Self {
        ConfigError::Lua(e.to_string())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub title: String,
    /// Outer margin around the widget, also added on autosize.
    pub padding: f32,
    pub min_width: f32,
    pub min_height: f32,
    pub font_size: f32,
    pub always_on_top: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "TODO".into(),
            padding: 10.0,
            min_width: 200.0,
            min_height: 200.0,
            font_size: 18.0,
            always_on_top: true,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.padding >= 0.0) {
            return Err(ConfigError::Invalid(format!("padding must be >= 0, got {}", self.padding)));
        }
        if !(self.min_width > 0.0 && self.min_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "minimum size must be positive, got {}x{}",
                self.min_width, self.min_height
            )));
        }
        if !(self.font_size > 0.0) {
            return Err(ConfigError::Invalid(format!("font_size must be positive, got {}", self.font_size)));
        }
        Ok(())
    }
}

/// Everything read from the config file.
#[derive(Clone, Debug)]
pub struct Settings {
    pub config: Config,
    pub keymap: Keymap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config: Config::default(),
            keymap: default_keymap(),
        }
    }
}

impl Settings {
    pub fn from_lua_str(src: &str) -> Result<Self, ConfigError> {
        let lua = Lua::new();
        let value = lua.load(src).eval::<Value>().map_err(ConfigError::lua)?;

        let Value::Table(tbl) = value else {
            return Ok(Self::default());
        };

        let config: Config = lua
            .from_value(Value::Table(tbl.clone()))
            .map_err(ConfigError::lua)?;
        config.validate()?;

        let mut keymap = default_keymap();
        keymap.merge_lua(&tbl)?;

        Ok(Self { config, keymap })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let src = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading config");
        Self::from_lua_str(&src)
    }
}

/// XDG: ~/.config/tasklist/config.lua  (also accept ~/.config/tasklist/config as a plain file)
pub fn default_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("dev", "example", "tasklist")?;
    let base = proj.config_dir();
    let lua = base.join("config.lua");
    let plain = base.join("config");
    if !lua.exists() && plain.exists() {
        Some(plain)
    } else {
        Some(lua)
    }
}

/// An explicit path must load; the default path falls back to built-ins on any error.
pub fn load_user_config(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    if let Some(path) = explicit {
        return Settings::from_file(path);
    }
    let Some(path) = default_config_path().filter(|p| p.exists()) else {
        return Ok(Settings::default());
    };
    match Settings::from_file(&path) {
        Ok(settings) => Ok(settings),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            Ok(Settings::default())
        }
    }
}
