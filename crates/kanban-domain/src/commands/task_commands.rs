use super::{Command, CommandContext};
use crate::{ColumnId, TaskId};

/// Append a new task referencing a column
pub struct CreateTask {
    pub task_id: TaskId,
    pub column_id: ColumnId,
}

impl Command for CreateTask {
    fn execute(&self, context: &mut CommandContext) -> bool {
        if context.store.column(self.column_id).is_none() {
            tracing::trace!(
                "Creating task {} under unknown column {}",
                self.task_id,
                self.column_id
            );
        }
        context.store.create_task(self.task_id, self.column_id);
        true
    }

    fn description(&self) -> String {
        format!("Create task {} in column {}", self.task_id, self.column_id)
    }
}

/// Replace a task's content
pub struct EditTask {
    pub task_id: TaskId,
    pub content: String,
}

impl Command for EditTask {
    fn execute(&self, context: &mut CommandContext) -> bool {
        context
            .store
            .update_task_content(self.task_id, self.content.clone())
    }

    fn description(&self) -> String {
        format!("Edit task {}", self.task_id)
    }
}

/// Delete a task
pub struct DeleteTask {
    pub task_id: TaskId,
}

impl Command for DeleteTask {
    fn execute(&self, context: &mut CommandContext) -> bool {
        context.store.delete_task(self.task_id)
    }

    fn description(&self) -> String {
        format!("Delete task {}", self.task_id)
    }
}

/// Move a task to the position held by another in the board-wide ordering
pub struct ReorderTasks {
    pub active: TaskId,
    pub over: TaskId,
}

impl Command for ReorderTasks {
    fn execute(&self, context: &mut CommandContext) -> bool {
        context.store.reorder_tasks(self.active, self.over)
    }

    fn description(&self) -> String {
        format!("Move task {} to position of {}", self.active, self.over)
    }
}
