//! In-memory task collection.
//!
//! Tasks are kept newest first. Every mutation addresses a task by its
//! [`TaskId`]; the positional helpers resolve an index to an id at call time
//! so a stale position can never silently hit a different task.

use crate::task::{Task, TaskDraft, TaskId};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Task {0} not found")]
    TaskNotFound(TaskId),
    #[error("Index {index} is out of bounds for {len} task(s)")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// A mutation request for the [`TaskStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    Add(TaskDraft),
    Update(TaskId, TaskDraft),
    Remove(TaskId),
    /// Carries the answer of the confirmation prompt.
    ClearAll { confirmed: bool },
}

/// What an applied [`TaskAction`] changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Added(TaskId),
    Updated(TaskId),
    Removed(Task),
    Cleared { removed: usize },
    ClearDeclined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u32,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Applies a single action. Failed actions leave the store untouched.
    pub fn apply(&mut self, action: TaskAction) -> Result<ActionOutcome, StoreError> {
        match action {
            TaskAction::Add(draft) => Ok(ActionOutcome::Added(self.add(draft))),
            TaskAction::Update(id, draft) => {
                self.update(id, draft)?;
                Ok(ActionOutcome::Updated(id))
            }
            TaskAction::Remove(id) => self.remove(id).map(ActionOutcome::Removed),
            TaskAction::ClearAll { confirmed } => {
                let removed = self.tasks.len();
                if self.clear(confirmed) {
                    Ok(ActionOutcome::Cleared { removed })
                } else {
                    Ok(ActionOutcome::ClearDeclined)
                }
            }
        }
    }

    /// Inserts a new task at the front and returns its id. Duplicates are allowed.
    pub fn add(&mut self, draft: TaskDraft) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.insert(0, Task::new(id, draft));
        debug!(%id, count = self.tasks.len(), "Task added");
        id
    }

    /// Replaces the fields of the task with `id`, keeping its position.
    pub fn update(&mut self, id: TaskId, draft: TaskDraft) -> Result<(), StoreError> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            warn!(%id, "Cannot update unknown task");
            return Err(StoreError::TaskNotFound(id));
        };
        task.replace_fields(draft);
        debug!(%id, "Task updated");
        Ok(())
    }

    /// Replaces the fields of the task currently at `index`.
    pub fn update_at(&mut self, index: usize, draft: TaskDraft) -> Result<TaskId, StoreError> {
        let id = self.id_at(index)?;
        self.update(id, draft)?;
        Ok(id)
    }

    /// Removes the task with `id`; later tasks shift down by one position.
    pub fn remove(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let Some(index) = self.position_of(id) else {
            warn!(%id, "Cannot remove unknown task");
            return Err(StoreError::TaskNotFound(id));
        };
        let task = self.tasks.remove(index);
        debug!(%id, count = self.tasks.len(), "Task removed");
        Ok(task)
    }

    /// Removes the task currently at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Task, StoreError> {
        let id = self.id_at(index)?;
        self.remove(id)
    }

    /// Empties the collection if the confirmation was accepted.
    /// Returns whether the collection was cleared.
    pub fn clear(&mut self, confirmed: bool) -> bool {
        if !confirmed {
            debug!("Delete-all declined");
            return false;
        }
        info!(removed = self.tasks.len(), "All tasks deleted");
        self.tasks.clear();
        true
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn get_at(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    fn id_at(&self, index: usize) -> Result<TaskId, StoreError> {
        self.get_at(index)
            .map(|task| task.id)
            .ok_or(StoreError::IndexOutOfBounds {
                index,
                len: self.tasks.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> TaskDraft {
        TaskDraft::new(title, "chore", "something to do")
    }

    fn titles(store: &TaskStore) -> Vec<&str> {
        store.tasks().iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn can_create_empty_store() {
        let store = TaskStore::new();

        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn can_add_task_to_empty_store() {
        let mut store = TaskStore::new();

        let id = store.add(draft("Buy milk"));

        assert_eq!(store.tasks(), &[Task::new(id, draft("Buy milk"))]);
    }

    #[test]
    fn new_tasks_are_prepended() {
        let mut store = TaskStore::new();

        store.add(draft("first"));
        store.add(draft("second"));
        store.add(draft("third"));

        assert_eq!(titles(&store), ["third", "second", "first"]);
    }

    #[test]
    fn allows_duplicate_tasks() {
        let mut store = TaskStore::new();

        let a = store.add(draft("same"));
        let b = store.add(draft("same"));

        assert_eq!(store.len(), 2);
        assert_ne!(a, b);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut store = TaskStore::new();
        let first = store.add(draft("first"));
        store.remove(first).unwrap();

        let second = store.add(draft("second"));

        assert_eq!(first, TaskId(1));
        assert_eq!(second, TaskId(2));
    }

    #[test]
    fn update_replaces_only_the_target() {
        let mut store = TaskStore::new();
        store.add(draft("a"));
        let b = store.add(draft("b"));
        store.add(draft("c"));

        store.update(b, draft("b2")).unwrap();

        assert_eq!(titles(&store), ["c", "b2", "a"]);
        assert_eq!(store.get(b).unwrap().title, "b2");
        assert_eq!(store.position_of(b), Some(1));
    }

    #[test]
    fn update_at_resolves_position() {
        let mut store = TaskStore::new();
        let a = store.add(draft("a"));
        store.add(draft("b"));

        let id = store.update_at(1, draft("a2")).unwrap();

        assert_eq!(id, a);
        assert_eq!(titles(&store), ["b", "a2"]);
    }

    #[test]
    fn cannot_update_unknown_task() {
        let mut store = TaskStore::new();
        store.add(draft("a"));
        let before = store.clone();

        let result = store.update(TaskId(99), draft("x"));

        assert_eq!(result, Err(StoreError::TaskNotFound(TaskId(99))));
        assert_eq!(store, before);
    }

    #[test]
    fn cannot_update_out_of_bounds_index() {
        let mut store = TaskStore::new();
        store.add(draft("a"));

        let result = store.update_at(1, draft("x"));

        assert_eq!(result, Err(StoreError::IndexOutOfBounds { index: 1, len: 1 }));
        assert_eq!(titles(&store), ["a"]);
    }

    #[test]
    fn remove_shifts_later_tasks_down() {
        let mut store = TaskStore::new();
        store.add(draft("a"));
        store.add(draft("b"));
        store.add(draft("c"));

        let removed = store.remove_at(1).unwrap();

        assert_eq!(removed.title, "b");
        assert_eq!(titles(&store), ["c", "a"]);
        assert_eq!(store.get_at(1).unwrap().title, "a");
    }

    #[test]
    fn cannot_remove_unknown_task() {
        let mut store = TaskStore::new();
        store.add(draft("a"));

        assert_eq!(
            store.remove(TaskId(42)),
            Err(StoreError::TaskNotFound(TaskId(42)))
        );
        assert_eq!(
            store.remove_at(3),
            Err(StoreError::IndexOutOfBounds { index: 3, len: 1 })
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_requires_confirmation() {
        let mut store = TaskStore::new();
        store.add(draft("a"));
        store.add(draft("b"));

        assert!(!store.clear(false));
        assert_eq!(store.len(), 2);

        assert!(store.clear(true));
        assert!(store.is_empty());
    }

    #[test]
    fn stale_id_is_rejected_after_clear() {
        let mut store = TaskStore::new();
        let id = store.add(draft("a"));
        store.clear(true);
        store.add(draft("b"));

        assert_eq!(
            store.update(id, draft("a2")),
            Err(StoreError::TaskNotFound(id))
        );
        assert_eq!(titles(&store), ["b"]);
    }

    #[test]
    fn apply_dispatches_actions() {
        let mut store = TaskStore::new();

        let added = store.apply(TaskAction::Add(draft("a"))).unwrap();
        let ActionOutcome::Added(id) = added else {
            panic!("expected Added, got {added:?}");
        };

        assert_eq!(
            store.apply(TaskAction::Update(id, draft("a2"))),
            Ok(ActionOutcome::Updated(id))
        );
        assert_eq!(
            store.apply(TaskAction::ClearAll { confirmed: false }),
            Ok(ActionOutcome::ClearDeclined)
        );
        assert_eq!(
            store.apply(TaskAction::Remove(id)),
            Ok(ActionOutcome::Removed(Task::new(id, draft("a2"))))
        );
        assert_eq!(
            store.apply(TaskAction::Remove(id)),
            Err(StoreError::TaskNotFound(id))
        );
    }

    #[test]
    fn apply_clear_reports_removed_count() {
        let mut store = TaskStore::new();
        store.add(draft("a"));
        store.add(draft("b"));

        let outcome = store.apply(TaskAction::ClearAll { confirmed: true });

        assert_eq!(outcome, Ok(ActionOutcome::Cleared { removed: 2 }));
        assert!(store.is_empty());
    }
}
