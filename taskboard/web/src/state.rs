//! Client-side task state shared through the Dioxus context.
//!
//! The store lives in a single signal provided by the root component. Nothing
//! is persisted: reloading the page starts from an empty board.

use dioxus::prelude::*;
use taskboard_core::{TaskAction, TaskStore};
use tracing::{debug, warn};

/// Installs an empty task store into the context of the calling component.
pub fn provide_task_store() -> Signal<TaskStore> {
    use_context_provider(|| Signal::new(TaskStore::new()))
}

/// Returns the task store provided by an ancestor component.
pub fn use_task_store() -> Signal<TaskStore> {
    use_context::<Signal<TaskStore>>()
}

/// Applies `action` to the store, logging the outcome. Rejected actions
/// (e.g. a task removed while its edit form was open) leave the store as is.
pub fn dispatch(mut store: Signal<TaskStore>, action: TaskAction) {
    let result = store.write().apply(action);
    match result {
        Ok(outcome) => debug!(?outcome, "Task action applied"),
        Err(err) => warn!(%err, "Task action rejected"),
    }
}
