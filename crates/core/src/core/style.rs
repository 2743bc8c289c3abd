//! Inline style writes.

use std::fmt::Display;

/// One inline style property and its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDeclaration {
    pub property: &'static str,
    pub value: String,
}

impl StyleDeclaration {
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

/// An element's inline style (`el.style`).
pub trait InlineStyle {
    type Error: Display;

    fn set_property(&self, property: &str, value: &str) -> Result<(), Self::Error>;
}

/// Sets one property. A failure is logged at `warn` and reported as `false`.
pub fn set_property_logged<S: InlineStyle>(style: &S, property: &str, value: &str) -> bool {
    match style.set_property(property, value) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("style: setting {property} failed: {e}");
            false
        }
    }
}

/// Writes every declaration, continuing past failures. Returns how many stuck.
pub fn apply_declarations<S: InlineStyle>(style: &S, decls: &[StyleDeclaration]) -> usize {
    decls
        .iter()
        .filter(|d| set_property_logged(style, d.property, &d.value))
        .count()
}
