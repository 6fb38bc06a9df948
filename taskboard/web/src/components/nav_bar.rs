use crate::config::AppConfig;
use crate::Route;
use dioxus::prelude::*;

const LINK_CLASS: &str = "hover:scale-110 hover:ease-in-out duration-150 active:text-blue-800";
const BUTTON_CLASS: &str = "text-white px-3 py-1.5 bg-blue-600 rounded hover:scale-110 hover:ease-in-out duration-150 active:bg-blue-700";

fn nav_links() -> [(&'static str, Route); 4] {
    [
        ("Home", Route::Home {}),
        ("About", Route::About {}),
        ("Services", Route::Services {}),
        ("Contact Us", Route::ContactUs {}),
    ]
}

/// Top navigation shared by every page. The sign-in and sign-up buttons only
/// lead to placeholder pages.
#[component]
pub fn NavBar() -> Element {
    let config = use_context::<AppConfig>();

    rsx! {
        nav { class: "flex justify-between items-center h-12 px-10 text-blue-600 hover:shadow-lg",
            Link {
                to: Route::Home {},
                class: "flex items-center gap-3 {LINK_CLASS}",
                img { src: "{config.logo_url}", alt: "Logo" }
                span { "{config.brand}" }
            }

            div { class: "flex gap-5",
                for (name, route) in nav_links() {
                    Link {
                        key: "{name}",
                        to: route,
                        class: "{LINK_CLASS}",
                        active_class: "underline underline-offset-[5px]",
                        "{name}"
                    }
                }
            }

            div { class: "flex gap-5",
                Link { to: Route::SignIn {},
                    button { class: BUTTON_CLASS, "Sign In" }
                }
                Link { to: Route::SignUp {},
                    button { class: BUTTON_CLASS, "Sign Up" }
                }
            }
        }

        Outlet::<Route> {}
    }
}
