use crate::utils::use_theme;
use dioxus::prelude::*;
use crate::routes::Route;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let mut theme = use_theme();
    let is_dark = theme.state().is_dark();

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                class: "navbar shadow-lg transition-colors duration-200",
                div {
                    id: "navbar",
                    class: "container mx-auto px-4 py-3 flex justify-between items-center",
                    div {
                        class: "flex items-center space-x-6",
                        Link {
                            class: "nav-link transition-colors",
                            to: Route::Home,
                            "Home"
                        }
                    }
                    button {
                        class: "theme-toggle p-2 rounded-lg transition-colors",
                        title: if is_dark { "Switch to light mode" } else { "Switch to dark mode" },
                        onclick: move |_| theme.toggle(),
                        if is_dark {
                            "🌞"
                        } else {
                            "🌙"
                        }
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}
