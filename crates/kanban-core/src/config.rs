use crate::{KanbanError, KanbanResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How fresh column and task identifiers are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Monotonically increasing counter starting at 1. Never collides.
    #[default]
    Sequential,
    /// Uniform draw from a wide range with no collision check.
    Random,
}

/// Which sequence a completed drop reorders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropRouting {
    /// Drops always reorder the column sequence, whatever was dragged.
    #[default]
    ColumnsOnly,
    /// Task drops reorder tasks, everything else reorders columns.
    ByDraggedKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub id_strategy: IdStrategy,

    #[serde(default)]
    pub drop_routing: DropRouting,

    /// Remove a column's tasks together with the column.
    #[serde(default)]
    pub cascade_column_delete: bool,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/kanban-board/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("kanban-board/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("kanban-board\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user config, falling back to defaults when it is missing or malformed.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match Self::load_from(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!(
                            "Ignoring unreadable config at {}: {}",
                            config_path.display(),
                            e
                        );
                    }
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> KanbanResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> KanbanResult<Self> {
        toml::from_str(content).map_err(|e| KanbanError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> KanbanResult<String> {
        toml::to_string(self).map_err(|e| KanbanError::Serialization(e.to_string()))
    }
}
