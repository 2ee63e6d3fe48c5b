use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::column::ColumnId;
use crate::id::Id;

pub type TaskId = Id;

/// A card on the board.
///
/// `column_id` is a plain reference: it is not validated on creation and may
/// point at a column that has since been deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub column_id: ColumnId,
    pub content: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(id: TaskId, column_id: ColumnId, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            column_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Content given to the task appended after `existing` tasks board-wide.
    pub fn default_content(existing: usize) -> String {
        format!("Task {}", existing + 1)
    }

    pub fn update_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }

    pub fn belongs_to(&self, column_id: ColumnId) -> bool {
        self.column_id == column_id
    }
}
