use crate::components::{ConfirmDialog, TaskList, TaskModal};
use crate::config::AppConfig;
use crate::state::{dispatch, use_task_store};
use dioxus::prelude::*;
use taskboard_core::{TaskAction, TaskForm, TaskId};
use tracing::warn;

/// The task board: add button, add/update modal, and the task table.
#[component]
pub fn Home() -> Element {
    let config = use_context::<AppConfig>();
    let store = use_task_store();
    let mut form = use_signal(TaskForm::new);
    let mut confirming_delete_all = use_signal(|| false);

    let handle_update = move |id: TaskId| match store.read().get(id) {
        Some(task) => form.write().open_edit(task),
        None => warn!(%id, "Update requested for a task that no longer exists"),
    };

    let handle_delete_all_answer = move |confirmed: bool| {
        confirming_delete_all.set(false);
        dispatch(store, TaskAction::ClearAll { confirmed });
    };

    rsx! {
        div { class: "flex justify-center mt-12",
            button {
                r#type: "button",
                class: "w-[90%] bg-blue-600 text-white font-bold px-6 py-3 rounded hover:scale-105 transition-transform duration-150 active:bg-blue-700",
                onclick: move |_| form.write().open_create(),
                "Add New Task"
            }
        }

        TaskModal { form, on_submit: move |action: TaskAction| dispatch(store, action) }

        TaskList {
            tasks: store.read().tasks().to_vec(),
            empty_message: config.empty_message.clone(),
            on_update: handle_update,
            on_delete: move |id: TaskId| dispatch(store, TaskAction::Remove(id)),
            on_delete_all: move |_| confirming_delete_all.set(true),
        }

        if confirming_delete_all() {
            ConfirmDialog {
                message: config.delete_all_prompt.clone(),
                on_answer: handle_delete_all_answer,
            }
        }
    }
}
