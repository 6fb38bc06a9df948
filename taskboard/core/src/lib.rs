//! Core task model, validation rules and in-memory store for Taskboard.
pub mod form;
pub mod store;
pub mod task;
pub mod validation;

pub use form::{FormMode, TaskForm};
pub use store::{ActionOutcome, StoreError, TaskAction, TaskStore};
pub use task::{Field, Task, TaskDraft, TaskId};
pub use validation::{FieldError, FieldErrors, FieldRule};
