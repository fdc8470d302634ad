use crate::color::lighten;
use crate::css::{Declarations, StyleSheet};
use crate::error::StyleError;

/// Navy tone the banner background is derived from.
pub const HEADER_BASE_COLOR: &str = "#3c64b1";
pub const HEADER_HEIGHT: &str = "88px";
pub const HEADER_CLASS: &str = "site-header";
pub const HEADER_BLOCK_CLASS: &str = "site-header-block";

/// Fixed page banner and its inner trailing-aligned row.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderStyle {
    pub banner: Declarations,
    pub block: Declarations,
}

impl HeaderStyle {
    pub fn sheet(&self) -> StyleSheet {
        StyleSheet::new()
            .rule(format!(".{HEADER_CLASS}"), &self.banner)
            .rule(format!(".{HEADER_BLOCK_CLASS}"), &self.block)
    }

    pub fn to_css(&self) -> String {
        self.sheet().render()
    }
}

pub fn header_style() -> Result<HeaderStyle, StyleError> {
    let banner = Declarations::new()
        .with("width", "100%")
        .with("height", HEADER_HEIGHT)
        .with("position", "fixed")
        .with("top", "0")
        .with("left", "0")
        .with("background-color", lighten(0.5, HEADER_BASE_COLOR)?);

    let block = Declarations::new()
        .with("width", "100%")
        .with("height", "100%")
        .with("display", "flex")
        .with("justify-content", "flex-end")
        .with("align-items", "center")
        .with("padding", "0 8rem");

    Ok(HeaderStyle { banner, block })
}
