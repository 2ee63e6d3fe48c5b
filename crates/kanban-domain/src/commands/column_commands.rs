use super::{Command, CommandContext};
use crate::ColumnId;

/// Append a new column with a count-based default title
pub struct CreateColumn {
    pub column_id: ColumnId,
}

impl Command for CreateColumn {
    fn execute(&self, context: &mut CommandContext) -> bool {
        context.store.create_column(self.column_id);
        true
    }

    fn description(&self) -> String {
        format!("Create column {}", self.column_id)
    }
}

/// Rename a column
pub struct RenameColumn {
    pub column_id: ColumnId,
    pub title: String,
}

impl Command for RenameColumn {
    fn execute(&self, context: &mut CommandContext) -> bool {
        context
            .store
            .update_column_title(self.column_id, self.title.clone())
    }

    fn description(&self) -> String {
        format!("Rename column {} to '{}'", self.column_id, self.title)
    }
}

/// Delete a column, optionally taking its tasks with it
pub struct DeleteColumn {
    pub column_id: ColumnId,
    pub cascade: bool,
}

impl Command for DeleteColumn {
    fn execute(&self, context: &mut CommandContext) -> bool {
        if !context.store.delete_column(self.column_id) {
            return false;
        }
        if self.cascade {
            let removed = context.store.delete_tasks_in_column(self.column_id);
            tracing::debug!("Removed {} tasks with column {}", removed, self.column_id);
        }
        true
    }

    fn description(&self) -> String {
        format!("Delete column {}", self.column_id)
    }
}

/// Move a column to the position held by another
pub struct ReorderColumns {
    pub active: ColumnId,
    pub over: ColumnId,
}

impl Command for ReorderColumns {
    fn execute(&self, context: &mut CommandContext) -> bool {
        context.store.reorder_columns(self.active, self.over)
    }

    fn description(&self) -> String {
        format!("Move column {} to position of {}", self.active, self.over)
    }
}
