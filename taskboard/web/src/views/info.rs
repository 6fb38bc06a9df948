use dioxus::prelude::*;

#[component]
fn InfoPage(title: String, children: Element) -> Element {
    rsx! {
        main { class: "max-w-3xl mx-auto px-6 py-12",
            h1 { class: "text-4xl font-bold text-gray-900 mb-6", "{title}" }
            div { class: "text-lg text-gray-600 space-y-4", {children} }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        InfoPage { title: "About",
            p { "Tasks CRUD is a small board for jotting down tasks and keeping them in order." }
            p { "Everything lives in your browser tab. Reloading the page starts a fresh board." }
        }
    }
}

#[component]
pub fn Services() -> Element {
    rsx! {
        InfoPage { title: "Services",
            ul { class: "list-disc list-inside",
                li { "Add tasks with a title, a type and a short description" }
                li { "Update or delete any task from the list" }
                li { "Clear the whole board in one go" }
            }
        }
    }
}

#[component]
pub fn ContactUs() -> Element {
    rsx! {
        InfoPage { title: "Contact Us",
            p { "We'd love to hear from you. Open an issue on the project repository with questions or ideas." }
        }
    }
}
