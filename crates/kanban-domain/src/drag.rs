//! Drag session state and the notifications that drive it.
//!
//! The gesture layer reports each phase of a drag as a [`DragNotification`].
//! Payload kinds are a closed enum with one canonical wire casing
//! (`"column"` / `"task"`); parsing a tag is case-sensitive. When decoding
//! notifications, unrecognised tags degrade to "untyped" instead of failing.

use kanban_core::{KanbanError, KanbanResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::id::Id;
use crate::{Column, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragKind {
    Column,
    Task,
}

impl DragKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DragKind::Column => "column",
            DragKind::Task => "task",
        }
    }
}

impl fmt::Display for DragKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DragKind {
    type Err = KanbanError;

    fn from_str(s: &str) -> KanbanResult<Self> {
        match s {
            "column" => Ok(DragKind::Column),
            "task" => Ok(DragKind::Task),
            other => Err(KanbanError::Validation(format!(
                "Unknown drag kind: '{}'",
                other
            ))),
        }
    }
}

/// Entity attached to the element where a drag began.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DragPayload {
    Column { column: Column },
    Task { task: Task },
}

impl DragPayload {
    pub fn kind(&self) -> DragKind {
        match self {
            DragPayload::Column { .. } => DragKind::Column,
            DragPayload::Task { .. } => DragKind::Task,
        }
    }

    pub fn id(&self) -> Id {
        match self {
            DragPayload::Column { column } => column.id,
            DragPayload::Task { task } => task.id,
        }
    }
}

impl From<Column> for DragPayload {
    fn from(column: Column) -> Self {
        DragPayload::Column { column }
    }
}

impl From<Task> for DragPayload {
    fn from(task: Task) -> Self {
        DragPayload::Task { task }
    }
}

/// One side of an over/end notification: the dragged element or the
/// droppable under the pointer. `kind` is absent when the element carries no
/// payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragTarget {
    pub id: Id,
    #[serde(default, deserialize_with = "lenient_kind")]
    pub kind: Option<DragKind>,
}

impl DragTarget {
    pub fn new(id: Id, kind: Option<DragKind>) -> Self {
        Self { id, kind }
    }

    pub fn column(id: Id) -> Self {
        Self::new(id, Some(DragKind::Column))
    }

    pub fn task(id: Id) -> Self {
        Self::new(id, Some(DragKind::Task))
    }

    pub fn untyped(id: Id) -> Self {
        Self::new(id, None)
    }

    pub fn is(&self, kind: DragKind) -> bool {
        self.kind == Some(kind)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DragNotification {
    Start {
        #[serde(default, deserialize_with = "lenient_payload")]
        payload: Option<DragPayload>,
    },
    Over {
        active: DragTarget,
        #[serde(default)]
        over: Option<DragTarget>,
    },
    End {
        active: DragTarget,
        #[serde(default)]
        over: Option<DragTarget>,
    },
    Cancel,
}

/// Unknown or miscased kind tags decode to `None`, i.e. "not a column or task".
fn lenient_kind<'de, D>(deserializer: D) -> Result<Option<DragKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.as_str().map(str::parse::<DragKind>) {
        Some(Ok(kind)) => Ok(Some(kind)),
        _ => {
            tracing::trace!("Treating drag target with kind {} as untyped", raw);
            Ok(None)
        }
    }
}

/// Payloads that do not decode as a column or task become `None` so the
/// start notification is ignored rather than rejected.
fn lenient_payload<'de, D>(deserializer: D) -> Result<Option<DragPayload>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match serde_json::from_value(value) {
        Ok(payload) => Some(payload),
        Err(e) => {
            tracing::trace!("Dropping unrecognised drag payload: {}", e);
            None
        }
    }))
}

/// What, if anything, is currently being dragged. Drives the overlay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "entity", rename_all = "snake_case")]
pub enum DragSession {
    #[default]
    Idle,
    DraggingColumn(Column),
    DraggingTask(Task),
}

impl DragSession {
    pub fn begin(payload: DragPayload) -> Self {
        match payload {
            DragPayload::Column { column } => DragSession::DraggingColumn(column),
            DragPayload::Task { task } => DragSession::DraggingTask(task),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DragSession::Idle)
    }

    pub fn kind(&self) -> Option<DragKind> {
        match self {
            DragSession::Idle => None,
            DragSession::DraggingColumn(_) => Some(DragKind::Column),
            DragSession::DraggingTask(_) => Some(DragKind::Task),
        }
    }

    pub fn active_column(&self) -> Option<&Column> {
        match self {
            DragSession::DraggingColumn(column) => Some(column),
            _ => None,
        }
    }

    pub fn active_task(&self) -> Option<&Task> {
        match self {
            DragSession::DraggingTask(task) => Some(task),
            _ => None,
        }
    }
}
