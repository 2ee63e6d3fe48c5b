//! Point-in-time capture of the board for the view layer.
//!
//! A `BoardSnapshot` owns plain vectors so it can be serialized for debugging
//! dumps or handed to a renderer that outlives the controller borrow.

use crate::{Column, DragSession, Task};
use kanban_core::{KanbanError, KanbanResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    #[serde(default)]
    pub columns: Vec<Column>,

    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Overlay state at capture time.
    #[serde(default)]
    pub drag: DragSession,
}

impl BoardSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.tasks.is_empty()
    }

    pub fn to_json(&self) -> KanbanResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| KanbanError::Serialization(e.to_string()))
    }

    pub fn from_json(data: &str) -> KanbanResult<Self> {
        serde_json::from_str(data).map_err(|e| KanbanError::Serialization(e.to_string()))
    }
}
