use dioxus::prelude::*;
use style_core::Theme;
use styled_ui::components::Header;
use styled_ui::theme::ThemeProvider;

mod gallery;
mod nav;

use gallery::Gallery;
use nav::{Logo, NavActions};

/// Palette bundled with the binary; see `theme.toml`.
const BUNDLED_THEME: &str = include_str!("../theme.toml");

/// Env var pointing at a theme file that replaces the bundled palette.
const THEME_PATH_VAR: &str = "SHOWCASE_THEME";

fn main() {
    dioxus::launch(App);
}

/// Resolve the palette once at startup.
///
/// Desktop builds honor `SHOWCASE_THEME`; otherwise the bundled file is
/// used, falling back to the stock palette if it fails to validate.
fn initial_theme() -> Theme {
    if cfg!(not(target_arch = "wasm32")) {
        if let Ok(path) = std::env::var(THEME_PATH_VAR) {
            return style_core::load_theme(path);
        }
    }
    Theme::from_toml_str(BUNDLED_THEME).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "bundled theme rejected, using default palette");
        Theme::default()
    })
}

#[component]
fn App() -> Element {
    let theme = use_hook(initial_theme);

    rsx! {
        ThemeProvider { theme,
            Header {
                logo: rsx! { Logo {} },
                actions: rsx! { NavActions {} },
            }
            main { style: "padding: 120px 8rem 4rem;",
                Gallery {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_theme_extends_stock_palette() {
        let theme = Theme::from_toml_str(BUNDLED_THEME).unwrap();
        assert_eq!(theme.color("blue").unwrap(), "#228be6");
        assert_eq!(theme.color("teal").unwrap(), "#12b886");
        assert_eq!(theme.color("orange").unwrap(), "#fd7e14");
    }

    #[test]
    fn app_renders_header_and_gallery() {
        let mut dom = VirtualDom::new(App);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"class="site-header""#), "{html}");
        assert!(html.contains("btn-teal-"), "{html}");
        assert!(!html.contains("data-style-error"), "{html}");
    }
}
