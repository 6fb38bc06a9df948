use dioxus::prelude::*;
use taskboard_core::{Field, FormMode, TaskAction, TaskForm};
use tracing::debug;

/// Modal form for adding a task or updating an existing one.
///
/// The form state lives in the caller's signal so list rows can open it in
/// edit mode. A valid submission is handed to `on_submit` and the form closes.
#[component]
pub fn TaskModal(form: Signal<TaskForm>, on_submit: EventHandler<TaskAction>) -> Element {
    let mut form = form;

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = form.write().submit();
        match result {
            Ok(action) => on_submit.call(action),
            Err(errors) => debug!(%errors, "Blocked invalid task submission"),
        }
    };

    if !form.read().is_open() {
        return rsx! { div {} };
    }

    let (heading, submit_label, editing) = {
        let state = form.read();
        (
            state.heading(),
            state.submit_label(),
            matches!(state.mode(), FormMode::Edit(_)),
        )
    };
    let submit_class = if editing {
        "text-white px-6 py-3 bg-blue-600 active:bg-blue-700 rounded hover:scale-110 ease-linear transition-all duration-150"
    } else {
        "text-white px-6 py-3 bg-emerald-500 active:bg-emerald-600 rounded hover:scale-110 ease-linear transition-all duration-150"
    };

    rsx! {
        div { class: "justify-center items-center flex overflow-x-hidden overflow-y-auto fixed inset-0 z-50 outline-none focus:outline-none",
            div { class: "relative w-auto my-6 mx-auto max-w-3xl",
                div { class: "border-0 rounded-lg shadow-lg relative flex flex-col w-full bg-white outline-none focus:outline-none",
                    div { class: "flex items-start justify-between p-5 border-b-2 border-solid",
                        h3 { class: "text-3xl font-semibold", "{heading}" }
                        button {
                            r#type: "button",
                            class: "p-1 ml-auto bg-red-500 rounded float-right text-3xl leading-none font-semibold outline-none focus:outline-none",
                            onclick: move |_| form.write().close(),
                            span { class: "text-white size-7 block text-xl scale-110", "X" }
                        }
                    }

                    form { onsubmit: handle_submit,
                        div { class: "relative p-6 flex-auto",
                            for field in Field::ALL {
                                FieldInput {
                                    key: "{field.name()}",
                                    field,
                                    value: form.read().value(field).to_string(),
                                    error: form.read().error(field).map(ToString::to_string),
                                    on_input: move |value: String| form.write().set_field(field, value),
                                }
                            }
                        }

                        div { class: "flex items-center justify-end gap-3 p-6 border-t border-solid rounded-b",
                            button {
                                r#type: "button",
                                class: "bg-red-500 text-white active:bg-red-600 px-6 py-3 rounded hover:scale-110 ease-linear transition-all duration-150",
                                onclick: move |_| form.write().clear(),
                                "Clear"
                            }
                            button { r#type: "submit", class: submit_class, "{submit_label}" }
                        }
                    }
                }
            }
        }
        div { class: "opacity-50 fixed inset-0 z-40 bg-black" }
    }
}

/// A labeled text input with its inline validation message.
#[component]
fn FieldInput(
    field: Field,
    value: String,
    error: Option<String>,
    on_input: EventHandler<String>,
) -> Element {
    let label = field.label();

    rsx! {
        div { class: "mb-[10px]",
            label { class: "p-2", r#for: "task-{field.name()}", "{label}" }
            input {
                id: "task-{field.name()}",
                name: field.name(),
                r#type: "text",
                placeholder: label,
                value: "{value}",
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
                class: "p-2 hover:bg-gray-50 border border-gray-300 rounded",
            }
            if let Some(message) = error {
                p { class: "p-2 text-red-500", "{message}" }
            }
        }
    }
}
