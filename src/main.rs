use dioxus::prelude::*;
use theme_preference::use_theme_provider;
use theme_preference::Route;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap();

        // Style the page before the app mounts.
        match theme_preference::ThemePreferenceManager::browser() {
            Ok(manager) => {
                if let Err(e) = theme_preference::theme::init_when_ready(manager) {
                    log::error!("Failed to initialise theme: {}", e);
                }
            }
            Err(e) => log::error!("Theme preference unavailable: {}", e),
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let theme = use_theme_provider();
    let applied = theme.state().class_name().to_string();

    rsx! {
        div {
            "data-theme": applied.clone(),
            class: applied,
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            Router::<Route> {}
        }
    }
}
