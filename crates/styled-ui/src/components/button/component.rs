use dioxus::prelude::*;
use style_core::{compute_button_style, ButtonFill, ButtonSize, ButtonVariant, DEFAULT_BUTTON_COLOR};

use crate::theme::{use_style_registry, use_theme};

/// A palette-colored button.
///
/// The style is computed from `color`, `size`, `fill` and `full_width`
/// against the active theme and injected as a scoped stylesheet, once per
/// class across all buttons under the same provider. Any other
/// button attributes (`disabled`, `type`, `aria-*`, ...) are passed through
/// to the `<button>` element untouched.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    /// Palette key, e.g. `"blue"`.
    #[props(into, default = DEFAULT_BUTTON_COLOR.to_string())]
    pub color: String,
    #[props(default)]
    pub size: ButtonSize,
    #[props(default)]
    pub fill: ButtonFill,
    #[props(default = false)]
    pub full_width: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let registry = use_style_registry();
    let owner = use_hook({
        let registry = registry.clone();
        move || registry.map(|r| r.register())
    });
    use_drop({
        let registry = registry.clone();
        move || {
            if let (Some(registry), Some(owner)) = (registry, owner) {
                registry.release(owner);
            }
        }
    });

    let variant = ButtonVariant {
        color: props.color.clone(),
        size: props.size,
        fill: props.fill,
        full_width: props.full_width,
    };

    let (css, base) = match use_theme().and_then(|theme| compute_button_style(&variant, &theme)) {
        Ok(style) => {
            let emit = match (&registry, owner) {
                (Some(registry), Some(owner)) => registry.claim(&style.class_name, owner),
                _ => true,
            };
            (
                emit.then(|| style.to_css()),
                vec![Attribute::new("class", style.class_name, None, false)],
            )
        }
        Err(err) => {
            // Still render the button so the host page keeps working.
            tracing::error!(
                error = %err,
                color = %variant.color,
                size = %variant.size,
                "button style could not be resolved"
            );
            (
                None,
                vec![Attribute::new("data-style-error", err.to_string(), None, false)],
            )
        }
    };
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        if let Some(css) = css {
            // head styles are inserted once per mount; remount when the palette changes
            document::Style { key: "{css}", "{css}" }
        }
        button {
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}
