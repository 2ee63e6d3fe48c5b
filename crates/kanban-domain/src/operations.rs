use crate::{ColumnId, TaskId};

/// Intents the view layer forwards to the board.
///
/// None of these fail: unknown ids are ignored and the board is left as it was.
pub trait BoardOperations {
    // Column operations
    fn create_column(&mut self) -> ColumnId;
    fn delete_column(&mut self, id: ColumnId);
    fn rename_column(&mut self, id: ColumnId, title: String);

    // Task operations
    fn create_task(&mut self, column_id: ColumnId) -> TaskId;
    fn delete_task(&mut self, id: TaskId);
    fn edit_task(&mut self, id: TaskId, content: String);
}
