use crate::store::TaskAction;
use crate::task::{Field, Task, TaskDraft, TaskId};
use crate::validation::{FieldError, FieldErrors};
use tracing::debug;

/// Whether a submission inserts a new task or replaces an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(TaskId),
}

/// State of the add/update task modal, independent of any renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    mode: FormMode,
    open: bool,
    values: TaskDraft,
    errors: FieldErrors,
    submitted: bool,
}

impl TaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn values(&self) -> &TaskDraft {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Task",
            FormMode::Edit(_) => "Update Task",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add",
            FormMode::Edit(_) => "Update",
        }
    }

    /// Shows an empty form that will add a new task.
    pub fn open_create(&mut self) {
        self.reset();
        self.mode = FormMode::Create;
        self.open = true;
    }

    /// Shows the form pre-filled from `task`; submitting replaces that task.
    pub fn open_edit(&mut self, task: &Task) {
        self.reset();
        self.mode = FormMode::Edit(task.id);
        self.values = task.to_draft();
        self.open = true;
        debug!(id = %task.id, "Editing task");
    }

    /// Updates a field. Once a submit has been attempted the field is
    /// re-checked on every change.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        if self.submitted {
            self.errors
                .record(field, field.rule().check(self.values.get(field)));
        }
    }

    /// Resets values and errors without closing the form or leaving edit mode.
    pub fn clear(&mut self) {
        self.reset();
    }

    /// Dismisses the form, discarding unsaved input.
    pub fn close(&mut self) {
        self.reset();
        self.mode = FormMode::Create;
        self.open = false;
    }

    /// Validates the current values. On success the form closes and the
    /// action to apply to the store is returned; on failure the form stays
    /// open with its errors set.
    pub fn submit(&mut self) -> Result<TaskAction, FieldErrors> {
        self.submitted = true;
        if let Err(errors) = self.values.validate() {
            debug!(failed = errors.len(), "Task form rejected");
            self.errors = errors.clone();
            return Err(errors);
        }

        let draft = std::mem::take(&mut self.values);
        let action = match self.mode {
            FormMode::Create => TaskAction::Add(draft),
            FormMode::Edit(id) => TaskAction::Update(id, draft),
        };
        self.close();
        Ok(action)
    }

    fn reset(&mut self) {
        self.values = TaskDraft::default();
        self.errors.clear();
        self.submitted = false;
    }
}
