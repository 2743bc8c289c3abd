//! Required-field validation.

use crate::config::ValidationColors;

/// A required `input` or `textarea`.
pub trait RequiredField {
    fn value(&self) -> String;
    fn set_border_color(&self, color: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Valid,
    Invalid,
}

impl FieldStatus {
    pub fn of(value: &str) -> Self {
        if value.trim().is_empty() {
            FieldStatus::Invalid
        } else {
            FieldStatus::Valid
        }
    }

    pub fn border_color(self, colors: &ValidationColors) -> &str {
        match self {
            FieldStatus::Valid => &colors.valid_border,
            FieldStatus::Invalid => &colors.invalid_border,
        }
    }
}

/// Marks every field and returns `true` iff none is blank.
///
/// All fields are visited, so every blank one gets the invalid border, not
/// just the first.
pub fn validate_fields<F, I>(fields: I, colors: &ValidationColors) -> bool
where
    F: RequiredField,
    I: IntoIterator<Item = F>,
{
    let mut all_valid = true;
    for field in fields {
        let status = FieldStatus::of(&field.value());
        field.set_border_color(status.border_color(colors));
        if status == FieldStatus::Invalid {
            all_valid = false;
        }
    }
    all_valid
}
