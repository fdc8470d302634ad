pub mod components;
pub mod registry;
pub mod theme;

pub use style_core::{ButtonFill, ButtonSize, StyleError, Theme};
