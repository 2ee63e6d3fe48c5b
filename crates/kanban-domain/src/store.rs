//! Ordered column and task sequences with copy-on-write updates.
//!
//! Both sequences are held as shared `Arc<[T]>` snapshots. Every mutation
//! builds a new sequence and swaps it in, so a snapshot handed to a renderer
//! never changes under it. Mutations that find nothing to change keep the
//! current snapshot, which stays pointer-equal to earlier reads.

use std::sync::Arc;

use crate::column::ColumnId;
use crate::id::Id;
use crate::reorder::{self, Identified};
use crate::task::TaskId;
use crate::{Column, Task};

#[derive(Debug, Clone)]
pub struct EntityStore {
    columns: Arc<[Column]>,
    tasks: Arc<[Task]>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            columns: Arc::from(Vec::new()),
            tasks: Arc::from(Vec::new()),
        }
    }

    pub fn from_parts(columns: Vec<Column>, tasks: Vec<Task>) -> Self {
        Self {
            columns: columns.into(),
            tasks: tasks.into(),
        }
    }

    pub fn columns(&self) -> Arc<[Column]> {
        Arc::clone(&self.columns)
    }

    pub fn tasks(&self) -> Arc<[Task]> {
        Arc::clone(&self.tasks)
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks referencing `column_id`, in board order.
    pub fn tasks_in_column(&self, column_id: ColumnId) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.belongs_to(column_id))
            .cloned()
            .collect()
    }

    pub fn contains_id(&self, id: Id) -> bool {
        self.column(id).is_some() || self.task(id).is_some()
    }

    /// Largest id in use across both sequences.
    pub fn max_id(&self) -> Option<Id> {
        let column_ids = self.columns.iter().map(|c| c.id);
        let task_ids = self.tasks.iter().map(|t| t.id);
        column_ids.chain(task_ids).max()
    }

    pub fn create_column(&mut self, id: ColumnId) -> Column {
        let column = Column::new(id, Column::default_title(self.columns.len()));
        self.columns = appended(&self.columns, column.clone());
        column
    }

    pub fn delete_column(&mut self, id: ColumnId) -> bool {
        match without(&self.columns, |c| c.id == id) {
            Some(next) => {
                self.columns = next;
                true
            }
            None => false,
        }
    }

    pub fn update_column_title(&mut self, id: ColumnId, title: String) -> bool {
        match updated(&self.columns, id, |c| c.update_title(title)) {
            Some(next) => {
                self.columns = next;
                true
            }
            None => false,
        }
    }

    /// Content numbering counts every task on the board, not just this column's.
    pub fn create_task(&mut self, id: TaskId, column_id: ColumnId) -> Task {
        let task = Task::new(id, column_id, Task::default_content(self.tasks.len()));
        self.tasks = appended(&self.tasks, task.clone());
        task
    }

    pub fn delete_task(&mut self, id: TaskId) -> bool {
        match without(&self.tasks, |t| t.id == id) {
            Some(next) => {
                self.tasks = next;
                true
            }
            None => false,
        }
    }

    /// Remove every task referencing `column_id`, returning how many went.
    pub fn delete_tasks_in_column(&mut self, column_id: ColumnId) -> usize {
        let before = self.tasks.len();
        match without(&self.tasks, |t| t.belongs_to(column_id)) {
            Some(next) => {
                self.tasks = next;
                before - self.tasks.len()
            }
            None => 0,
        }
    }

    pub fn update_task_content(&mut self, id: TaskId, content: String) -> bool {
        match updated(&self.tasks, id, |t| t.update_content(content)) {
            Some(next) => {
                self.tasks = next;
                true
            }
            None => false,
        }
    }

    pub fn reorder_columns(&mut self, active: ColumnId, over: ColumnId) -> bool {
        match reorder::reorder(&self.columns, active, over) {
            Some(next) => {
                self.columns = next.into();
                true
            }
            None => false,
        }
    }

    pub fn reorder_tasks(&mut self, active: TaskId, over: TaskId) -> bool {
        match reorder::reorder(&self.tasks, active, over) {
            Some(next) => {
                self.tasks = next.into();
                true
            }
            None => false,
        }
    }
}

fn appended<T: Clone>(items: &[T], item: T) -> Arc<[T]> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(item);
    next.into()
}

fn without<T: Clone>(items: &[T], remove: impl Fn(&T) -> bool) -> Option<Arc<[T]>> {
    if !items.iter().any(&remove) {
        return None;
    }
    Some(items.iter().filter(|&item| !remove(item)).cloned().collect())
}

fn updated<T: Identified + Clone>(
    items: &[T],
    id: Id,
    apply: impl FnOnce(&mut T),
) -> Option<Arc<[T]>> {
    let index = reorder::position_of(items, id)?;
    let mut next = items.to_vec();
    apply(&mut next[index]);
    Some(next.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(store: &EntityStore) -> Vec<String> {
        store.columns().iter().map(|c| c.title.clone()).collect()
    }

    #[test]
    fn test_create_column_titles_follow_count() {
        let mut store = EntityStore::new();
        store.create_column(Id::new(1));
        store.create_column(Id::new(2));
        store.create_column(Id::new(3));
        assert_eq!(titles(&store), vec!["column 1", "column 2", "column 3"]);
    }

    #[test]
    fn test_titles_count_after_deletion() {
        let mut store = EntityStore::new();
        store.create_column(Id::new(1));
        store.create_column(Id::new(2));
        store.delete_column(Id::new(1));
        store.create_column(Id::new(3));
        // Count-based naming can repeat a title once columns are deleted
        assert_eq!(titles(&store), vec!["column 2", "column 2"]);
    }

    #[test]
    fn test_task_content_uses_board_wide_count() {
        let mut store = EntityStore::new();
        store.create_column(Id::new(1));
        store.create_column(Id::new(2));
        store.create_task(Id::new(10), Id::new(1));
        let task = store.create_task(Id::new(11), Id::new(2));
        assert_eq!(task.content, "Task 2");
    }

    #[test]
    fn test_create_task_does_not_validate_column() {
        let mut store = EntityStore::new();
        let task = store.create_task(Id::new(5), Id::new(404));
        assert_eq!(task.column_id, Id::new(404));
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn test_delete_column_keeps_its_tasks() {
        let mut store = EntityStore::new();
        store.create_column(Id::new(1));
        store.create_task(Id::new(2), Id::new(1));
        assert!(store.delete_column(Id::new(1)));

        assert!(store.columns().is_empty());
        let orphans = store.tasks_in_column(Id::new(1));
        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].id, Id::new(2));
    }

    #[test]
    fn test_delete_tasks_in_column() {
        let mut store = EntityStore::new();
        store.create_task(Id::new(1), Id::new(100));
        store.create_task(Id::new(2), Id::new(200));
        store.create_task(Id::new(3), Id::new(100));
        assert_eq!(store.delete_tasks_in_column(Id::new(100)), 2);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.delete_tasks_in_column(Id::new(100)), 0);
    }

    #[test]
    fn test_unknown_ids_leave_snapshots_untouched() {
        let mut store = EntityStore::new();
        store.create_column(Id::new(1));
        store.create_task(Id::new(2), Id::new(1));
        let columns = store.columns();
        let tasks = store.tasks();

        assert!(!store.delete_column(Id::new(9)));
        assert!(!store.update_column_title(Id::new(9), "x".to_string()));
        assert!(!store.delete_task(Id::new(9)));
        assert!(!store.update_task_content(Id::new(9), "x".to_string()));
        assert!(!store.reorder_columns(Id::new(1), Id::new(9)));

        assert!(Arc::ptr_eq(&columns, &store.columns()));
        assert!(Arc::ptr_eq(&tasks, &store.tasks()));
    }

    #[test]
    fn test_mutation_does_not_leak_into_old_snapshot() {
        let mut store = EntityStore::new();
        store.create_column(Id::new(1));
        let before = store.columns();

        store.update_column_title(Id::new(1), "Backlog".to_string());
        store.create_column(Id::new(2));

        assert_eq!(before.len(), 1);
        assert_eq!(before[0].title, "column 1");
        assert_eq!(store.columns()[0].title, "Backlog");
    }

    #[test]
    fn test_update_task_content() {
        let mut store = EntityStore::new();
        store.create_task(Id::new(1), Id::new(7));
        assert!(store.update_task_content(Id::new(1), "Ship it".to_string()));
        assert_eq!(store.task(Id::new(1)).unwrap().content, "Ship it");
    }

    #[test]
    fn test_tasks_in_column_preserves_board_order() {
        let mut store = EntityStore::new();
        store.create_task(Id::new(1), Id::new(100));
        store.create_task(Id::new(2), Id::new(200));
        store.create_task(Id::new(3), Id::new(100));
        store.reorder_tasks(Id::new(3), Id::new(1));

        let ids: Vec<Id> = store
            .tasks_in_column(Id::new(100))
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![Id::new(3), Id::new(1)]);
    }

    #[test]
    fn test_max_id() {
        let mut store = EntityStore::new();
        assert_eq!(store.max_id(), None);
        store.create_column(Id::new(4));
        store.create_task(Id::new(9), Id::new(4));
        assert_eq!(store.max_id(), Some(Id::new(9)));
        assert!(store.contains_id(Id::new(4)));
        assert!(store.contains_id(Id::new(9)));
        assert!(!store.contains_id(Id::new(5)));
    }
}
