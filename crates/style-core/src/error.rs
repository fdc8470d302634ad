use std::fmt;

/// Failures that can occur while resolving a style.
///
/// None of these are fatal to the host application: components report them
/// and keep rendering, but callers of the pure style functions get a
/// descriptive error instead of a silently broken declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleError {
    /// The requested color name is not a key of the active palette.
    UnknownColor {
        color: String,
        available: Vec<String>,
    },
    /// The requested size name is not one of the known button sizes.
    UnknownSize { size: String },
    /// A color string could not be parsed.
    InvalidColor { value: String },
    /// No theme was provided to the render tree.
    MissingTheme,
    /// The theme configuration could not be read or parsed.
    Config { message: String },
}

impl StyleError {
    pub fn unknown_color<'a>(
        color: impl Into<String>,
        available: impl IntoIterator<Item = &'a String>,
    ) -> Self {
        Self::UnknownColor {
            color: color.into(),
            available: available.into_iter().cloned().collect(),
        }
    }

    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::UnknownColor { color, available } => write!(
                f,
                "unknown color `{color}` (palette has: {})",
                available.join(", ")
            ),
            StyleError::UnknownSize { size } => {
                write!(f, "unknown size `{size}` (expected large, medium or small)")
            }
            StyleError::InvalidColor { value } => write!(f, "invalid color value `{value}`"),
            StyleError::MissingTheme => {
                write!(f, "no theme provided; wrap the tree in a ThemeProvider")
            }
            StyleError::Config { message } => write!(f, "theme configuration error: {message}"),
        }
    }
}

impl std::error::Error for StyleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_color_lists_palette() {
        let available = vec!["blue".to_string(), "gray".to_string()];
        let err = StyleError::unknown_color("teal", &available);
        assert_eq!(
            err.to_string(),
            "unknown color `teal` (palette has: blue, gray)"
        );
    }

    #[test]
    fn missing_theme_message_names_provider() {
        assert!(StyleError::MissingTheme.to_string().contains("ThemeProvider"));
    }

    #[test]
    fn unknown_size_message() {
        let err = StyleError::UnknownSize {
            size: "huge".into(),
        };
        assert!(err.to_string().contains("`huge`"));
    }
}
