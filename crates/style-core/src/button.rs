use std::fmt;
use std::str::FromStr;

use crate::color::{darken, lighten};
use crate::css::{class_token, Declarations, StyleSheet};
use crate::error::StyleError;
use crate::theme::Theme;

/// Palette key used when a button does not name a color.
pub const DEFAULT_BUTTON_COLOR: &str = "blue";

/// Lightness shift for hover/active on solid and outlined buttons.
const FILL_SHIFT: f64 = 0.1;
/// Lightness shift for hover/active text on ghost buttons.
const GHOST_SHIFT: f64 = 0.3;

/// Button height / font-size presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonSize {
    Large,
    #[default]
    Medium,
    Small,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Large, ButtonSize::Medium, ButtonSize::Small];

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Large => "large",
            ButtonSize::Medium => "medium",
            ButtonSize::Small => "small",
        }
    }

    pub fn height(&self) -> &'static str {
        match self {
            ButtonSize::Large => "3rem",
            ButtonSize::Medium => "2.25rem",
            ButtonSize::Small => "1.75rem",
        }
    }

    pub fn font_size(&self) -> &'static str {
        match self {
            ButtonSize::Large => "1.25rem",
            ButtonSize::Medium => "1rem",
            ButtonSize::Small => "0.875rem",
        }
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonSize {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ButtonSize::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| StyleError::UnknownSize { size: s.to_string() })
    }
}

/// How the palette color is applied to the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonFill {
    /// Filled background, white text.
    #[default]
    Solid,
    /// Colored text and 1px border; fills on hover/active.
    Outlined,
    /// Colored text only; never fills, never bordered.
    Ghost,
}

impl ButtonFill {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonFill::Solid => "solid",
            ButtonFill::Outlined => "outlined",
            ButtonFill::Ghost => "ghost",
        }
    }
}

/// Maps the tri-state `outline` flag: unset is solid, `true` is outlined,
/// `false` is ghost.
impl From<Option<bool>> for ButtonFill {
    fn from(outline: Option<bool>) -> Self {
        match outline {
            None => ButtonFill::Solid,
            Some(true) => ButtonFill::Outlined,
            Some(false) => ButtonFill::Ghost,
        }
    }
}

/// The combination of inputs that determines a button's appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonVariant {
    pub color: String,
    pub size: ButtonSize,
    pub fill: ButtonFill,
    pub full_width: bool,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self {
            color: DEFAULT_BUTTON_COLOR.to_string(),
            size: ButtonSize::default(),
            fill: ButtonFill::default(),
            full_width: false,
        }
    }
}

impl ButtonVariant {
    /// Class prefix shared by every theme; [`compute_button_style`] appends
    /// a digest of the resolved color.
    pub fn class_name(&self) -> String {
        let mut color = class_token(&self.color);
        if color != self.color {
            // keep distinct keys that sanitize to the same token apart
            color.push_str(&format!("-{:08x}", fnv1a(&self.color)));
        }
        let mut name = format!(
            "btn-{color}-{}-{}",
            self.size.as_str(),
            self.fill.as_str()
        );
        if self.full_width {
            name.push_str("-full");
        }
        name
    }
}

/// Resolved declarations for every interaction state of a button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    pub class_name: String,
    pub base: Declarations,
    pub hover: Declarations,
    pub active: Declarations,
    /// Applied to every button that follows a sibling.
    pub sibling: Declarations,
}

impl ButtonStyle {
    pub fn sheet(&self) -> StyleSheet {
        let class = &self.class_name;
        StyleSheet::new()
            .rule(format!(".{class}"), &self.base)
            .rule(format!(".{class}:hover"), &self.hover)
            .rule(format!(".{class}:active"), &self.active)
            .rule(format!(".{class}:not(:first-child)"), &self.sibling)
    }

    pub fn to_css(&self) -> String {
        self.sheet().render()
    }
}

/// Compute the full style of a button from its variant and the theme.
///
/// Fails when the color is not in the palette or its value is not a
/// parseable color.
pub fn compute_button_style(
    variant: &ButtonVariant,
    theme: &Theme,
) -> Result<ButtonStyle, StyleError> {
    let selected = theme.color(&variant.color)?;

    let mut base = Declarations::new()
        .with("display", "inline-flex")
        .with("outline", "none")
        .with("border", "none")
        .with("border-radius", "4px")
        .with("color", "white")
        .with("font-weight", "bold")
        .with("cursor", "pointer")
        .with("padding-left", "1rem")
        .with("padding-right", "1rem")
        .with("align-items", "center")
        .with("height", variant.size.height())
        .with("font-size", variant.size.font_size());
    let mut hover = Declarations::new();
    let mut active = Declarations::new();

    match variant.fill {
        ButtonFill::Solid => {
            base.set("background", selected);
            hover.set("background", lighten(FILL_SHIFT, selected)?);
            active.set("background", darken(FILL_SHIFT, selected)?);
        }
        ButtonFill::Outlined => {
            base.set("color", selected)
                .set("background", "none")
                .set("border", format!("1px solid {selected}"));
            hover
                .set("background", lighten(FILL_SHIFT, selected)?)
                .set("color", "white");
            active
                .set("background", darken(FILL_SHIFT, selected)?)
                .set("color", "white");
        }
        ButtonFill::Ghost => {
            base.set("color", selected)
                .set("background", "none")
                .set("border", "none");
            hover
                .set("background", "none")
                .set("color", lighten(GHOST_SHIFT, selected)?);
            active
                .set("background", "none")
                .set("color", darken(GHOST_SHIFT, selected)?);
        }
    }

    let mut sibling = Declarations::new().with("margin-left", "1rem");
    if variant.full_width {
        base.set("display", "flex")
            .set("width", "100%")
            .set("justify-content", "center");
        sibling.set("margin-left", "0").set("margin-top", "1rem");
    }

    let style = ButtonStyle {
        class_name: format!("{}-{:08x}", variant.class_name(), fnv1a(selected)),
        base,
        hover,
        active,
        sibling,
    };
    tracing::debug!(class = %style.class_name, color = selected, "computed button style");
    Ok(style)
}

fn fnv1a(s: &str) -> u32 {
    s.bytes().fold(0x811c_9dc5, |hash, b| {
        (hash ^ u32::from(b)).wrapping_mul(0x0100_0193)
    })
}
