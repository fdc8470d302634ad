use dioxus::prelude::*;
use style_core::{header_style, HEADER_BLOCK_CLASS, HEADER_CLASS};

/// Fixed banner pinned to the top of the viewport.
///
/// Renders the `logo` slot followed by the `actions` slot in a row aligned
/// to the trailing edge.
#[component]
pub fn Header(logo: Element, actions: Element) -> Element {
    let css = match header_style() {
        Ok(style) => style.to_css(),
        Err(err) => {
            tracing::error!(error = %err, "header style could not be resolved");
            String::new()
        }
    };

    rsx! {
        document::Style { "{css}" }
        header { class: HEADER_CLASS,
            div { class: HEADER_BLOCK_CLASS,
                {logo}
                {actions}
            }
        }
    }
}
