pub mod column;
pub mod commands;
pub mod controller;
pub mod drag;
pub mod id;
pub mod operations;
pub mod reorder;
pub mod snapshot;
pub mod store;
pub mod task;

pub use column::{Column, ColumnId};
pub use controller::BoardController;
pub use drag::{DragKind, DragNotification, DragPayload, DragSession, DragTarget};
pub use id::{Id, IdGenerator, RandomIds, SequentialIds};
pub use operations::BoardOperations;
pub use reorder::{move_element, reorder, Identified};
pub use snapshot::BoardSnapshot;
pub use store::EntityStore;
pub use task::{Task, TaskId};
