use crate::Route;
use dioxus::prelude::*;

/// Shown for account pages. There are no accounts: tasks are never stored
/// beyond the current page session.
#[component]
fn AccountPlaceholder(title: String) -> Element {
    rsx! {
        main { class: "min-h-[60vh] flex items-center justify-center",
            div { class: "text-center px-6",
                h1 { class: "text-4xl font-bold text-gray-800 mb-4", "{title}" }
                p { class: "text-lg text-gray-600 mb-8", "Accounts are not available yet." }
                Link {
                    to: Route::Home {},
                    class: "inline-block bg-blue-600 hover:bg-blue-700 text-white font-bold py-3 px-6 rounded transition-colors duration-200",
                    "Back to Tasks"
                }
            }
        }
    }
}

#[component]
pub fn SignIn() -> Element {
    rsx! { AccountPlaceholder { title: "Sign In" } }
}

#[component]
pub fn SignUp() -> Element {
    rsx! { AccountPlaceholder { title: "Sign Up" } }
}
