use dioxus::prelude::*;
use taskboard_core::{Task, TaskId};

const HEADERS: [&str; 4] = ["Title", "Type", "Description", "Actions"];

/// Table of the current tasks with per-row update/delete actions.
#[component]
pub fn TaskList(
    tasks: Vec<Task>,
    empty_message: String,
    on_update: EventHandler<TaskId>,
    on_delete: EventHandler<TaskId>,
    on_delete_all: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "p-6",
            h3 { class: "text-center p-6 text-2xl font-semibold", "Tasks" }

            if tasks.is_empty() {
                p { class: "text-center text-gray-500", "{empty_message}" }
            } else {
                button {
                    class: "mb-4 bg-red-500 text-white font-bold px-6 py-3 rounded hover:scale-110 transition-transform duration-150 active:bg-red-600",
                    onclick: move |_| on_delete_all.call(()),
                    "Delete All Tasks"
                }
                table { class: "min-w-full border border-gray-300",
                    thead {
                        tr { class: "bg-gray-200",
                            for header in HEADERS {
                                th { key: "{header}", class: "py-2 px-2 border", "{header}" }
                            }
                        }
                    }
                    tbody {
                        for task in tasks.iter() {
                            TaskRow {
                                key: "{task.id}",
                                task: task.clone(),
                                on_update,
                                on_delete,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TaskRow(task: Task, on_update: EventHandler<TaskId>, on_delete: EventHandler<TaskId>) -> Element {
    let id = task.id;

    rsx! {
        tr { class: "text-center hover:bg-gray-50",
            td { class: "py-2 px-2 border", "{task.title}" }
            td { class: "py-2 px-2 border", "{task.kind}" }
            td { class: "py-2 px-2 border max-w-[480px] break-words", "{task.description}" }
            td { class: "py-2 px-2 border flex justify-center items-center gap-2",
                button {
                    class: "text-white px-3 py-1.5 bg-blue-600 rounded hover:scale-110 transition-transform duration-150 active:bg-blue-700",
                    onclick: move |_| on_update.call(id),
                    "Update"
                }
                button {
                    class: "text-white px-3 py-1.5 bg-red-500 rounded hover:scale-110 transition-transform duration-150 active:bg-red-600",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}
