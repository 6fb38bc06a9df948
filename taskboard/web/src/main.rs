use dioxus::prelude::*;
use tracing::{error, info};

mod components;
mod config;
mod state;
mod views;

use components::NavBar;
use config::AppConfig;
use views::{About, ContactUs, Home, NotFound, Services, SignIn, SignUp};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/services")]
        Services {},
        #[route("/contact-us")]
        ContactUs {},
        #[route("/sign-in")]
        SignIn {},
        #[route("/sign-up")]
        SignUp {},
        #[route("/:..route")]
        NotFound { route: Vec<String> },
}

// The `asset!` macro resolves the path relative to the crate root and bundles the file with the app.
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    let loaded = AppConfig::load();
    let level = loaded
        .as_ref()
        .map(AppConfig::log_level)
        .unwrap_or(tracing::Level::INFO);
    dioxus::logger::init(level).expect("Failed to initialize logger");

    let config = loaded.unwrap_or_else(|err| {
        error!("Failed to load embedded configuration, using defaults: {err:#}");
        AppConfig::default()
    });
    info!(brand = %config.brand, "Starting task board");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

/// Root component. Owns the task store for the whole session; every route
/// below it reads the same store from context.
#[component]
fn App() -> Element {
    state::provide_task_store();

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    const STYLESHEET: &str = include_str!("../assets/tailwind.css");

    #[test]
    fn stylesheet_defines_overlay_utilities() {
        for rule in [
            ".fixed { position: fixed; }",
            ".inset-0 { inset: 0; }",
            ".z-40 { z-index: 40; }",
            ".z-50 { z-index: 50; }",
            ".opacity-50 { opacity: 0.5; }",
            ".bg-black {",
        ] {
            assert!(STYLESHEET.contains(rule), "missing rule: {rule}");
        }
    }
}
