use std::fmt::Write as _;

/// An ordered set of CSS declarations.
///
/// Setting a property that is already present replaces its value in place,
/// so later style layers override earlier ones the way a stylesheet cascade
/// would.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations(Vec<(&'static str, String)>);

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: &'static str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.0.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.0.push((property, value)),
        }
        self
    }

    /// Builder-style variant of [`Declarations::set`].
    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(p, v)| (*p, v.as_str()))
    }

    /// Apply every declaration of `other` on top of `self`.
    pub fn merge(&mut self, other: &Declarations) {
        for (property, value) in other.iter() {
            self.set(property, value);
        }
    }

    /// Render as an inline `style` attribute value.
    pub fn to_inline(&self) -> String {
        let mut out = String::new();
        for (property, value) in self.iter() {
            let _ = write!(out, "{property}:{value};");
        }
        out
    }
}

/// A selector with its declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub selector: String,
    pub declarations: Declarations,
}

impl StyleRule {
    pub fn new(selector: impl Into<String>, declarations: Declarations) -> Self {
        Self {
            selector: selector.into(),
            declarations,
        }
    }
}

/// Ordered list of rules rendered to compact CSS text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    rules: Vec<StyleRule>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, selector: impl Into<String>, declarations: &Declarations) -> Self {
        self.rules
            .push(StyleRule::new(selector, declarations.clone()));
        self
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// Render the sheet. Rules without declarations are skipped.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for rule in self.rules.iter().filter(|r| !r.declarations.is_empty()) {
            let _ = write!(out, "{}{{{}}}", rule.selector, rule.declarations.to_inline());
        }
        out
    }
}

/// Lower-case `raw` and replace anything outside `[a-z0-9-]` with `-`,
/// so arbitrary palette keys can be embedded in class names.
pub fn class_token(raw: &str) -> String {
    raw.chars()
        .map(|c| match c.to_ascii_lowercase() {
            c @ ('a'..='z' | '0'..='9' | '-') => c,
            _ => '-',
        })
        .collect()
}
