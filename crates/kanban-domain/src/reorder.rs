//! Move-element reordering shared by columns and tasks.
//!
//! The engine is pure: it never mutates its input and reports "nothing to do"
//! with `None`, so callers can keep their current snapshot untouched.

use crate::id::Id;
use crate::{Column, Task};

/// Anything that can be located in a sequence by identifier.
pub trait Identified {
    fn id(&self) -> Id;
}

impl Identified for Column {
    fn id(&self) -> Id {
        self.id
    }
}

impl Identified for Task {
    fn id(&self) -> Id {
        self.id
    }
}

/// Index of the first element carrying `id`.
pub fn position_of<T: Identified>(items: &[T], id: Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Remove the element at `from` and insert it at `to` in the shortened sequence.
///
/// `to` is clamped to the last valid index. Returns `None` when `from` is out
/// of range or when the move would leave the order unchanged.
pub fn move_element<T: Clone>(items: &[T], from: usize, to: usize) -> Option<Vec<T>> {
    if from >= items.len() {
        return None;
    }
    let to = to.min(items.len() - 1);
    if from == to {
        return None;
    }

    let mut moved = items.to_vec();
    let element = moved.remove(from);
    moved.insert(to, element);
    Some(moved)
}

/// Relocate the element identified by `active` to the index held by `over`.
///
/// Returns `None` if either id is absent or both name the same element.
pub fn reorder<T: Identified + Clone>(items: &[T], active: Id, over: Id) -> Option<Vec<T>> {
    let Some(active_index) = position_of(items, active) else {
        tracing::trace!("Reorder skipped: active {} not in sequence", active);
        return None;
    };
    let Some(over_index) = position_of(items, over) else {
        tracing::trace!("Reorder skipped: target {} not in sequence", over);
        return None;
    };
    move_element(items, active_index, over_index)
}
