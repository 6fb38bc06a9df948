use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable identifier assigned to a task by the [`TaskStore`](crate::TaskStore).
///
/// Ids increase monotonically and are never reused, even after the task they
/// named was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaskId(pub u32);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The three text fields that make up a task, exactly as the user typed them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaskDraft {
    pub title: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    pub description: String,
}

impl TaskDraft {
    pub fn new(
        title: impl Into<String>,
        kind: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            kind: kind.into(),
            description: description.into(),
        }
    }

    /// Returns the value currently held for `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Type => &self.kind,
            Field::Description => &self.description,
        }
    }

    /// Replaces the value held for `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Type => &mut self.kind,
            Field::Description => &mut self.description,
        };
        *slot = value.into();
    }
}

/// A task held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    pub description: String,
}

impl Task {
    pub fn new(id: TaskId, draft: TaskDraft) -> Self {
        Self {
            id,
            title: draft.title,
            kind: draft.kind,
            description: draft.description,
        }
    }

    /// Copies the task's fields back into a draft, e.g. to pre-fill the edit form.
    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            kind: self.kind.clone(),
            description: self.description.clone(),
        }
    }

    /// Overwrites the text fields while keeping the id.
    pub(crate) fn replace_fields(&mut self, draft: TaskDraft) {
        self.title = draft.title;
        self.kind = draft.kind;
        self.description = draft.description;
    }
}

/// The user-editable fields of a task, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Field {
    Title,
    Type,
    Description,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Type, Field::Description];

    /// Human readable label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Task Title",
            Field::Type => "Task Type",
            Field::Description => "Task Description",
        }
    }

    /// Stable name used for DOM ids and logging.
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Type => "type",
            Field::Description => "description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_read_and_write_draft_fields() {
        let mut draft = TaskDraft::default();

        draft.set(Field::Title, "Buy milk");
        draft.set(Field::Type, "errand");
        draft.set(Field::Description, "2% milk");

        assert_eq!(draft, TaskDraft::new("Buy milk", "errand", "2% milk"));
        assert_eq!(draft.get(Field::Type), "errand");
    }

    #[test]
    fn task_round_trips_through_draft() {
        let draft = TaskDraft::new("Walk dog", "chore", "evening walk");
        let task = Task::new(TaskId(7), draft.clone());

        assert_eq!(task.id, TaskId(7));
        assert_eq!(task.to_draft(), draft);
    }

    #[test]
    fn fields_are_listed_in_form_order() {
        let labels: Vec<_> = Field::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["Task Title", "Task Type", "Task Description"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn kind_serializes_as_type() {
        let task = Task::new(TaskId(1), TaskDraft::new("Buy milk", "errand", "2% milk"));

        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["type"], "errand");
        assert!(json.get("kind").is_none());
    }
}
