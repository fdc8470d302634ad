use dioxus::prelude::*;
use style_core::{StyleError, Theme};

use crate::registry::StyleRegistry;

/// Theme state provided as context by [`ThemeProvider`].
///
/// Components read the palette through [`use_theme`]; writing the signal
/// re-renders every component that resolved a style from it.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
}

impl ThemeContext {
    pub fn set(&mut self, theme: Theme) {
        self.theme.set(theme);
    }
}

/// Provide `theme` to every component below this one, along with the
/// [`StyleRegistry`] its buttons share.
///
/// Place this once at the application root. The initial `theme` is captured
/// on first render; swap palettes afterwards through [`use_theme_context`].
#[component]
pub fn ThemeProvider(theme: Theme, children: Element) -> Element {
    use_context_provider(move || ThemeContext {
        theme: Signal::new(theme),
    });
    use_context_provider(StyleRegistry::default);

    rsx! {
        {children}
    }
}

/// The nearest [`ThemeContext`], if any.
pub fn use_theme_context() -> Option<ThemeContext> {
    try_consume_context::<ThemeContext>()
}

pub fn use_style_registry() -> Option<StyleRegistry> {
    try_consume_context::<StyleRegistry>()
}

/// Read the active theme, failing with [`StyleError::MissingTheme`] when no
/// [`ThemeProvider`] is mounted above the caller.
pub fn use_theme() -> Result<Theme, StyleError> {
    use_theme_context()
        .map(|ctx| ctx.theme.read().clone())
        .ok_or(StyleError::MissingTheme)
}
