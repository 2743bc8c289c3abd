//! Fade-in on first viewport entry.

use crate::config::RevealSettings;
use crate::fmt::fmt_css_number;
use crate::style::{apply_declarations, InlineStyle};

pub use crate::style::StyleDeclaration;

/// Per-element reveal state. Only ever moves from `Hidden` to `Revealed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Feeds one intersection report. Returns `true` when this report is the
    /// one that reveals the element.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if *self == RevealState::Hidden && is_intersecting {
            *self = RevealState::Revealed;
            return true;
        }
        false
    }
}

/// Elements handed to the observer, each with its reveal state.
#[derive(Debug)]
pub struct RevealTargets<E> {
    entries: Vec<(E, RevealState)>,
}

impl<E> Default for RevealTargets<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E: PartialEq> RevealTargets<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hides `el` and starts tracking it. An element without an inline style
    /// could never be revealed, so it is not tracked; returns whether it was.
    pub fn hide_and_track<S: InlineStyle>(
        &mut self,
        el: E,
        style: Option<S>,
        hidden: &[StyleDeclaration],
    ) -> bool {
        let Some(style) = style else {
            return false;
        };
        apply_declarations(&style, hidden);
        self.entries.push((el, RevealState::Hidden));
        true
    }

    /// Feeds one intersection report for `target`. Returns `true` when the
    /// caller should apply the revealed styles now.
    pub fn report(&mut self, target: &E, is_intersecting: bool) -> bool {
        self.entries
            .iter_mut()
            .find(|(el, _)| el == target)
            .is_some_and(|(_, state)| state.observe(is_intersecting))
    }
}

/// Inline styles applied before an element is registered with the observer.
pub fn hidden_declarations(settings: &RevealSettings) -> Vec<StyleDeclaration> {
    let duration = fmt_css_number(settings.duration_s);
    let easing = settings.easing.trim();
    vec![
        StyleDeclaration::new("opacity", "0"),
        StyleDeclaration::new(
            "transform",
            format!("translateY({}px)", fmt_css_number(settings.offset_px)),
        ),
        StyleDeclaration::new(
            "transition",
            format!("opacity {duration}s {easing}, transform {duration}s {easing}"),
        ),
    ]
}

/// Inline styles applied when an element first intersects.
pub fn revealed_declarations() -> Vec<StyleDeclaration> {
    vec![
        StyleDeclaration::new("opacity", "1"),
        StyleDeclaration::new("transform", "translateY(0)"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::fake::FakeStyle;

    fn value_of<'a>(decls: &'a [StyleDeclaration], property: &str) -> Option<&'a str> {
        decls
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    #[test]
    fn hidden_styles_match_defaults() {
        let decls = hidden_declarations(&RevealSettings::default());
        assert_eq!(value_of(&decls, "opacity"), Some("0"));
        assert_eq!(value_of(&decls, "transform"), Some("translateY(30px)"));
        assert_eq!(
            value_of(&decls, "transition"),
            Some("opacity 0.6s ease, transform 0.6s ease")
        );
    }

    #[test]
    fn revealed_styles_clear_the_offset() {
        let decls = revealed_declarations();
        assert_eq!(value_of(&decls, "opacity"), Some("1"));
        assert_eq!(value_of(&decls, "transform"), Some("translateY(0)"));
    }

    #[test]
    fn unstyleable_targets_are_not_tracked() {
        let hidden = hidden_declarations(&RevealSettings::default());
        let card = FakeStyle::default();
        let mut targets = RevealTargets::new();

        assert!(targets.hide_and_track("card", Some(&card), &hidden));
        assert!(!targets.hide_and_track("math", None::<&FakeStyle>, &hidden));
        assert_eq!(targets.len(), 1);
        assert_eq!(card.get("opacity").as_deref(), Some("0"));
        assert_eq!(card.get("transform").as_deref(), Some("translateY(30px)"));

        // Reports for untracked elements are ignored.
        assert!(!targets.report(&"math", true));
    }

    #[test]
    fn tracked_target_reveals_once() {
        let hidden = hidden_declarations(&RevealSettings::default());
        let card = FakeStyle::default();
        let mut targets = RevealTargets::new();
        targets.hide_and_track("card", Some(&card), &hidden);

        assert!(!targets.report(&"card", false));
        assert!(targets.report(&"card", true));
        assert!(!targets.report(&"card", false));
        assert!(!targets.report(&"card", true));
    }

    #[test]
    fn reveal_is_one_way() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert_eq!(state, RevealState::Hidden);

        assert!(state.observe(true));
        assert_eq!(state, RevealState::Revealed);

        // Leaving and re-entering the viewport changes nothing.
        assert!(!state.observe(false));
        assert!(!state.observe(true));
        assert_eq!(state, RevealState::Revealed);
    }
}
