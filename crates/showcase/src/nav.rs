use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPalette;
use dioxus_free_icons::Icon;
use style_core::{ButtonFill, ButtonSize};
use styled_ui::components::Button;

#[component]
pub fn Logo() -> Element {
    rsx! {
        a { class: "logo", href: "#", style: "display: flex; align-items: center; gap: 0.5rem; font-weight: bold; color: #3c64b1; text-decoration: none;",
            Icon::<LdPalette> { icon: LdPalette, width: 24, height: 24 }
            "Palette Kit"
        }
    }
}

/// Sign-in / sign-up actions on the trailing side of the header.
#[component]
pub fn NavActions() -> Element {
    rsx! {
        nav { class: "nav-actions", style: "display: flex; align-items: center;",
            Button { fill: ButtonFill::Ghost, size: ButtonSize::Small, "Log in" }
            Button { fill: ButtonFill::Outlined, size: ButtonSize::Small, "Sign up" }
        }
    }
}
