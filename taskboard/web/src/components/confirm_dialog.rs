use dioxus::prelude::*;

/// Yes/no prompt rendered over the page. Clicking the backdrop counts as "no".
#[component]
pub fn ConfirmDialog(message: String, on_answer: EventHandler<bool>) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50",
            onclick: move |_| on_answer.call(false),

            div {
                class: "bg-white rounded-lg shadow-xl p-6 w-full max-w-md mx-4",
                onclick: move |evt| evt.stop_propagation(),

                p { class: "text-gray-800 mb-6 text-center text-lg", "{message}" }

                div { class: "flex space-x-3",
                    button {
                        r#type: "button",
                        class: "flex-1 px-4 py-2 border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-50 transition-colors",
                        onclick: move |_| on_answer.call(false),
                        "Cancel"
                    }
                    button {
                        r#type: "button",
                        class: "flex-1 px-4 py-2 bg-red-500 text-white rounded-lg hover:bg-red-600 transition-colors font-medium",
                        autofocus: true,
                        onclick: move |_| on_answer.call(true),
                        "OK"
                    }
                }
            }
        }
    }
}
