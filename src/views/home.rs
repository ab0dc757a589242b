use dioxus::prelude::*;
use crate::theme::Theme;
use crate::utils::use_theme;

#[component]
pub fn Home() -> Element {
    let theme = use_theme();
    let current = theme.state();
    let mode = current.class_name().to_string();

    rsx! {
        div {
            class: "container mx-auto p-4",
            h1 {
                class: "text-2xl font-bold mb-4",
                "Appearance"
            }
            p {
                class: "mb-4",
                "Current mode: {mode}"
            }
            div {
                class: "flex gap-4",
                for option in Theme::ALL {
                    ThemeButton { theme: option, active: current.is(option) }
                }
            }
        }
    }
}

#[component]
fn ThemeButton(theme: Theme, active: bool) -> Element {
    let mut handle = use_theme();

    rsx! {
        button {
            class: if active { "button button-active" } else { "button" },
            disabled: active,
            onclick: move |_| handle.set(theme),
            if theme == Theme::Dark { "Dark" } else { "Light" }
        }
    }
}
