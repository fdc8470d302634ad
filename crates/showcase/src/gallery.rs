use dioxus::prelude::*;
use style_core::{ButtonFill, ButtonSize, Theme};
use styled_ui::components::Button;
use styled_ui::theme::{use_theme, use_theme_context};

const FILLS: [(ButtonFill, &str); 3] = [
    (ButtonFill::Solid, "Solid"),
    (ButtonFill::Outlined, "Outlined"),
    (ButtonFill::Ghost, "Ghost"),
];

#[component]
pub fn Gallery() -> Element {
    let colors: Vec<String> = use_theme()
        .map(|theme| theme.palette.keys().cloned().collect())
        .unwrap_or_default();

    rsx! {
        section {
            h2 { "Sizes" }
            div { class: "row",
                for size in ButtonSize::ALL {
                    Button { key: "{size}", size, "{size}" }
                }
            }
        }
        for (fill, label) in FILLS {
            section { key: "{label}",
                h2 { "{label}" }
                div { class: "row",
                    for color in colors.iter().cloned() {
                        Button { key: "{color}", color: color.clone(), fill, "{color}" }
                    }
                }
            }
        }
        section {
            h2 { "Full width" }
            div { style: "width: 24rem;",
                Button { size: ButtonSize::Large, full_width: true, "Continue" }
                Button { size: ButtonSize::Large, full_width: true, fill: ButtonFill::Outlined, color: "gray", "Cancel" }
            }
        }
        ClickCounter {}
        PaletteSwitcher {}
    }
}

#[component]
fn ClickCounter() -> Element {
    let mut clicks = use_signal(|| 0u32);

    rsx! {
        section {
            h2 { "Events" }
            Button { color: "pink", onclick: move |_| clicks += 1, "Clicked {clicks} times" }
            Button { color: "gray", disabled: true, "Disabled" }
        }
    }
}

/// Swaps `blue` between the stock and a darker shade to show live re-theming.
#[component]
fn PaletteSwitcher() -> Element {
    let Some(mut ctx) = use_theme_context() else {
        return rsx! {};
    };
    let dark_blue = ctx.theme.read().color("blue").ok() == Some("#1864ab");

    rsx! {
        section {
            h2 { "Theme" }
            Button {
                fill: ButtonFill::Outlined,
                onclick: move |_| {
                    let mut theme: Theme = ctx.theme.read().clone();
                    let next = if dark_blue { "#228be6" } else { "#1864ab" };
                    theme.palette.insert("blue".to_string(), next.to_string());
                    tracing::info!(blue = next, "switching palette");
                    ctx.set(theme);
                },
                if dark_blue { "Use stock blue" } else { "Use dark blue" }
            }
        }
    }
}
