//! Board state controller: owns the entity store and the drag session and
//! turns drag notifications into reorder commands.
//!
//! # Notification handling
//!
//! - `Start` records the dragged entity for the overlay. A missing payload is
//!   ignored.
//! - `Over` with no droppable under the pointer is ignored outright.
//!   Otherwise the session is cleared to idle first, so the overlay drops as
//!   soon as the pointer crosses any droppable. If both sides are tasks with
//!   different ids, the task ordering is updated.
//! - `End` with no target or a drop on itself is ignored. Otherwise the
//!   column ordering is updated, or under [`DropRouting::ByDraggedKind`] the
//!   sequence matching the dragged kind. The session is left as-is.
//! - `Cancel` clears the session.
//!
//! Nothing here returns an error. Ignored notifications are traced.

use std::sync::Arc;

use kanban_core::{AppConfig, DropRouting, IdStrategy};

use crate::commands::{
    Command, CommandContext, CreateColumn, CreateTask, DeleteColumn, DeleteTask, EditTask,
    RenameColumn, ReorderColumns, ReorderTasks,
};
use crate::drag::{DragKind, DragNotification, DragPayload, DragSession, DragTarget};
use crate::id::{self, IdGenerator, SequentialIds};
use crate::operations::BoardOperations;
use crate::snapshot::BoardSnapshot;
use crate::{Column, ColumnId, EntityStore, Id, Task, TaskId};

pub struct BoardController {
    store: EntityStore,
    session: DragSession,
    ids: Box<dyn IdGenerator>,
    config: AppConfig,
}

impl Default for BoardController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BoardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardController")
            .field("store", &self.store)
            .field("session", &self.session)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl BoardController {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let ids = id::generator_for(config.id_strategy);
        Self::with_id_generator(config, ids)
    }

    pub fn with_id_generator(config: AppConfig, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            store: EntityStore::new(),
            session: DragSession::Idle,
            ids,
            config,
        }
    }

    /// Resume from a captured board. Sequential ids continue after the
    /// largest id already in use.
    pub fn from_snapshot(snapshot: BoardSnapshot, config: AppConfig) -> Self {
        let store = EntityStore::from_parts(snapshot.columns, snapshot.tasks);
        let ids: Box<dyn IdGenerator> = match (config.id_strategy, store.max_id()) {
            (IdStrategy::Sequential, Some(last)) => Box::new(SequentialIds::after(last)),
            (strategy, _) => id::generator_for(strategy),
        };
        Self {
            store,
            session: snapshot.drag,
            ids,
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn columns(&self) -> Arc<[Column]> {
        self.store.columns()
    }

    pub fn tasks(&self) -> Arc<[Task]> {
        self.store.tasks()
    }

    pub fn tasks_in_column(&self, column_id: ColumnId) -> Vec<Task> {
        self.store.tasks_in_column(column_id)
    }

    pub fn drag_session(&self) -> &DragSession {
        &self.session
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            columns: self.store.columns().to_vec(),
            tasks: self.store.tasks().to_vec(),
            drag: self.session.clone(),
        }
    }

    /// Draw an id not already held by a column or task.
    fn fresh_id(&mut self) -> Id {
        const MAX_ATTEMPTS: usize = 64;
        let mut id = self.ids.next_id();
        for _ in 1..MAX_ATTEMPTS {
            if !self.store.contains_id(id) {
                break;
            }
            tracing::trace!("Skipping id {} already in use", id);
            id = self.ids.next_id();
        }
        id
    }

    /// Run a command against the store, returning whether the board changed.
    pub fn execute(&mut self, command: &dyn Command) -> bool {
        let description = command.description();
        let mut context = CommandContext {
            store: &mut self.store,
        };
        let changed = command.execute(&mut context);
        if changed {
            tracing::debug!("Executed: {}", description);
        } else {
            tracing::trace!("No change: {}", description);
        }
        changed
    }

    pub fn handle(&mut self, notification: DragNotification) {
        match notification {
            DragNotification::Start { payload } => self.on_drag_start(payload),
            DragNotification::Over { active, over } => self.on_drag_over(active, over),
            DragNotification::End { active, over } => self.on_drag_end(active, over),
            DragNotification::Cancel => self.on_drag_cancel(),
        }
    }

    pub fn on_drag_start(&mut self, payload: Option<DragPayload>) {
        let Some(payload) = payload else {
            tracing::trace!("Drag start without a recognised payload ignored");
            return;
        };
        tracing::debug!("Drag started: {} {}", payload.kind(), payload.id());
        self.session = DragSession::begin(payload);
    }

    pub fn on_drag_over(&mut self, active: DragTarget, over: Option<DragTarget>) {
        let Some(over) = over else {
            tracing::trace!("Drag over nothing ignored for {}", active.id);
            return;
        };

        if !self.session.is_idle() {
            tracing::debug!("Drag overlay cleared over {}", over.id);
        }
        self.session = DragSession::Idle;

        if active.id == over.id {
            return;
        }
        if !(active.is(DragKind::Task) && over.is(DragKind::Task)) {
            tracing::trace!(
                "Drag over skipped: {:?} over {:?} is not task over task",
                active.kind,
                over.kind
            );
            return;
        }

        self.execute(&ReorderTasks {
            active: active.id,
            over: over.id,
        });
    }

    pub fn on_drag_end(&mut self, active: DragTarget, over: Option<DragTarget>) {
        let Some(over) = over else {
            tracing::trace!("Drop outside any target ignored for {}", active.id);
            return;
        };
        if active.id == over.id {
            tracing::trace!("Drop on self ignored for {}", active.id);
            return;
        }

        let reorder_tasks = match self.config.drop_routing {
            DropRouting::ColumnsOnly => false,
            DropRouting::ByDraggedKind => active.is(DragKind::Task),
        };
        if reorder_tasks {
            self.execute(&ReorderTasks {
                active: active.id,
                over: over.id,
            });
        } else {
            self.execute(&ReorderColumns {
                active: active.id,
                over: over.id,
            });
        }
    }

    pub fn on_drag_cancel(&mut self) {
        if !self.session.is_idle() {
            tracing::debug!("Drag cancelled");
        }
        self.session = DragSession::Idle;
    }
}

impl BoardOperations for BoardController {
    fn create_column(&mut self) -> ColumnId {
        let column_id = self.fresh_id();
        self.execute(&CreateColumn { column_id });
        column_id
    }

    fn delete_column(&mut self, id: ColumnId) {
        self.execute(&DeleteColumn {
            column_id: id,
            cascade: self.config.cascade_column_delete,
        });
    }

    fn rename_column(&mut self, id: ColumnId, title: String) {
        self.execute(&RenameColumn {
            column_id: id,
            title,
        });
    }

    fn create_task(&mut self, column_id: ColumnId) -> TaskId {
        let task_id = self.fresh_id();
        self.execute(&CreateTask { task_id, column_id });
        task_id
    }

    fn delete_task(&mut self, id: TaskId) {
        self.execute(&DeleteTask { task_id: id });
    }

    fn edit_task(&mut self, id: TaskId, content: String) {
        self.execute(&EditTask {
            task_id: id,
            content,
        });
    }
}
