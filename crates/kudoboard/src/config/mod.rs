//! Configuration loading and merging.
//!
//! Config is loaded from two sources with the local file taking precedence:
//! 1. User-level: `~/.config/kudoboard/config.toml`
//! 2. Local: `<cwd>/.kudoboard/config.toml`
//!
//! Every field is optional; anything missing falls back to the built-in
//! defaults. Unreadable or malformed files are skipped.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::board::Grid;

const DEFAULT_DATA_FILE: &str = "data/kudoboard.json";
const DEFAULT_SCROLL_STEP: u16 = 20;
const DEFAULT_CELL_WIDTH: u16 = 10;
const DEFAULT_CELL_HEIGHT: u16 = 20;
const DEFAULT_CREATE: &str = "c";
const DEFAULT_SCROLL_UP: &str = "up";
const DEFAULT_SCROLL_DOWN: &str = "down";

#[derive(Debug, Clone)]
pub struct Config {
    pub board: BoardConfig,
    pub display: DisplayConfig,
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub data_file: PathBuf,
    pub scroll_step: u16,
}

/// Board units covered by one terminal cell.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub cell_width: u16,
    pub cell_height: u16,
}

#[derive(Debug, Clone)]
pub struct KeymapConfig {
    pub create: String,
    pub scroll_up: String,
    pub scroll_down: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    board: Option<RawBoard>,
    display: Option<RawDisplay>,
    keymap: Option<RawKeymap>,
}

#[derive(Debug, Default, Deserialize)]
struct RawBoard {
    #[serde(alias = "dataFile")]
    data_file: Option<String>,
    #[serde(alias = "scrollStep")]
    scroll_step: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
struct RawDisplay {
    #[serde(alias = "cellWidth")]
    cell_width: Option<u16>,
    #[serde(alias = "cellHeight")]
    cell_height: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
struct RawKeymap {
    create: Option<String>,
    #[serde(alias = "scrollUp")]
    scroll_up: Option<String>,
    #[serde(alias = "scrollDown")]
    scroll_down: Option<String>,
}

impl Config {
    /// Board file location; relative paths resolve against `cwd`.
    pub fn data_path(&self, cwd: &Path) -> PathBuf {
        if self.board.data_file.is_absolute() {
            self.board.data_file.clone()
        } else {
            cwd.join(&self.board.data_file)
        }
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.display.cell_width, self.display.cell_height)
    }
}

impl Default for Config {
    fn default() -> Self {
        merge_config(None, None)
    }
}

fn read_toml(path: &Path) -> Option<RawConfig> {
    let contents = fs::read_to_string(path).ok()?;
    if contents.trim().is_empty() {
        return None;
    }
    match toml::from_str::<RawConfig>(&contents) {
        Ok(raw) => Some(raw),
        Err(err) => {
            log::warn!("ignoring malformed config {}: {err}", path.display());
            None
        }
    }
}

fn merge_config(user: Option<RawConfig>, local: Option<RawConfig>) -> Config {
    let local_board = local.as_ref().and_then(|c| c.board.as_ref());
    let user_board = user.as_ref().and_then(|c| c.board.as_ref());
    let data_file = local_board
        .and_then(|b| b.data_file.clone())
        .or_else(|| user_board.and_then(|b| b.data_file.clone()))
        .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
    let scroll_step = local_board
        .and_then(|b| b.scroll_step)
        .or_else(|| user_board.and_then(|b| b.scroll_step))
        .unwrap_or(DEFAULT_SCROLL_STEP);

    let local_display = local.as_ref().and_then(|c| c.display.as_ref());
    let user_display = user.as_ref().and_then(|c| c.display.as_ref());
    let cell_width = local_display
        .and_then(|d| d.cell_width)
        .or_else(|| user_display.and_then(|d| d.cell_width))
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_CELL_WIDTH);
    let cell_height = local_display
        .and_then(|d| d.cell_height)
        .or_else(|| user_display.and_then(|d| d.cell_height))
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_CELL_HEIGHT);

    let local_keymap = local.as_ref().and_then(|c| c.keymap.as_ref());
    let user_keymap = user.as_ref().and_then(|c| c.keymap.as_ref());
    let create = local_keymap
        .and_then(|k| k.create.clone())
        .or_else(|| user_keymap.and_then(|k| k.create.clone()))
        .unwrap_or_else(|| DEFAULT_CREATE.to_string());
    let scroll_up = local_keymap
        .and_then(|k| k.scroll_up.clone())
        .or_else(|| user_keymap.and_then(|k| k.scroll_up.clone()))
        .unwrap_or_else(|| DEFAULT_SCROLL_UP.to_string());
    let scroll_down = local_keymap
        .and_then(|k| k.scroll_down.clone())
        .or_else(|| user_keymap.and_then(|k| k.scroll_down.clone()))
        .unwrap_or_else(|| DEFAULT_SCROLL_DOWN.to_string());

    Config {
        board: BoardConfig {
            data_file: PathBuf::from(data_file),
            scroll_step,
        },
        display: DisplayConfig {
            cell_width,
            cell_height,
        },
        keymap: KeymapConfig {
            create,
            scroll_up,
            scroll_down,
        },
    }
}

fn local_config_path(cwd: &Path) -> PathBuf {
    cwd.join(".kudoboard").join("config.toml")
}

fn user_config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("kudoboard").join("config.toml"))
}

pub fn load_config(cwd: &Path) -> Config {
    load_config_from(user_config_path().as_deref(), &local_config_path(cwd))
}

fn load_config_from(user_path: Option<&Path>, local_path: &Path) -> Config {
    let local_config = read_toml(local_path);
    let user_config = user_path.and_then(read_toml);
    merge_config(user_config, local_config)
}
