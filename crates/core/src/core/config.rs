//! Page configuration.
//!
//! Every selector, class name, colour and timing the front-end uses lives
//! here. `Default` reproduces the stock page; a JSON document can override
//! any subset of fields.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::fmt::fmt_css_number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    /// Class toggled on the menu button and panel.
    pub active_class: String,
    pub navbar: NavbarTheme,
    pub reveal: RevealSettings,
    pub validation: ValidationColors,
    /// Property name of the global namespace object on `window`.
    pub namespace: String,
    /// Maximum `log` level forwarded to the browser console.
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            active_class: "active".to_string(),
            navbar: NavbarTheme::default(),
            reveal: RevealSettings::default(),
            validation: ValidationColors::default(),
            namespace: "PairProgrammingAI".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub hamburger: String,
    pub nav_menu: String,
    /// Matched inside the nav menu only.
    pub nav_link: String,
    pub navbar: String,
    pub anchor_links: String,
    pub reveal_targets: Vec<String>,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            hamburger: ".hamburger".to_string(),
            nav_menu: ".nav-menu".to_string(),
            nav_link: ".nav-link".to_string(),
            navbar: ".navbar".to_string(),
            anchor_links: "a[href^=\"#\"]".to_string(),
            reveal_targets: vec![
                ".problem-card".to_string(),
                ".quick-start-card".to_string(),
                ".solution-text".to_string(),
                ".solution-visual".to_string(),
            ],
        }
    }
}

impl Selectors {
    /// The reveal targets joined into one selector list for `querySelectorAll`.
    pub fn reveal_selector(&self) -> String {
        self.reveal_targets.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarTheme {
    /// Offsets strictly greater than this switch to the scrolled style.
    pub threshold_px: f64,
    pub scrolled_background: String,
    pub scrolled_backdrop_filter: String,
    pub resting_background: String,
    pub resting_backdrop_filter: String,
}

impl Default for NavbarTheme {
    fn default() -> Self {
        Self {
            threshold_px: 50.0,
            scrolled_background: "rgba(255, 255, 255, 0.95)".to_string(),
            scrolled_backdrop_filter: "blur(10px)".to_string(),
            resting_background: "#fff".to_string(),
            resting_backdrop_filter: "none".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// IntersectionObserver `threshold`, in `[0, 1]`.
    pub threshold: f64,
    /// IntersectionObserver `rootMargin`.
    pub root_margin: String,
    /// Downward offset of a hidden element.
    pub offset_px: f64,
    pub duration_s: f64,
    pub easing: String,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            offset_px: 30.0,
            duration_s: 0.6,
            easing: "ease".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationColors {
    pub invalid_border: String,
    pub valid_border: String,
}

impl Default for ValidationColors {
    fn default() -> Self {
        Self {
            invalid_border: "#e74c3c".to_string(),
            valid_border: "#ddd".to_string(),
        }
    }
}

impl PageConfig {
    /// Parses a (possibly partial) JSON document and validates the result.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: PageConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.active_class.trim().is_empty() {
            return Err(ConfigError::invalid("active_class", "must not be empty"));
        }
        if self.active_class.chars().any(char::is_whitespace) {
            return Err(ConfigError::invalid(
                "active_class",
                "must be a single class name",
            ));
        }
        if self.namespace.trim().is_empty() {
            return Err(ConfigError::invalid("namespace", "must not be empty"));
        }
        if !self.navbar.threshold_px.is_finite() {
            return Err(ConfigError::invalid("navbar.threshold_px", "must be finite"));
        }
        let t = self.reveal.threshold;
        if !(0.0..=1.0).contains(&t) {
            return Err(ConfigError::invalid(
                "reveal.threshold",
                format!("{} is outside [0, 1]", fmt_css_number(t)),
            ));
        }
        if !self.reveal.offset_px.is_finite() || self.reveal.offset_px < 0.0 {
            return Err(ConfigError::invalid(
                "reveal.offset_px",
                "must be a non-negative number",
            ));
        }
        if !self.reveal.duration_s.is_finite() || self.reveal.duration_s <= 0.0 {
            return Err(ConfigError::invalid(
                "reveal.duration_s",
                "must be a positive number",
            ));
        }
        if self.selectors.reveal_targets.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::invalid(
                "selectors.reveal_targets",
                "selectors must not be empty",
            ));
        }
        Ok(())
    }

    /// `log_level` parsed into a filter; unknown names fall back to `Warn`.
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level
            .trim()
            .parse()
            .unwrap_or(log::LevelFilter::Warn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_page() {
        let cfg = PageConfig::default();

        let sel = &cfg.selectors;
        assert_eq!(sel.hamburger, ".hamburger");
        assert_eq!(sel.nav_menu, ".nav-menu");
        assert_eq!(sel.nav_link, ".nav-link");
        assert_eq!(sel.navbar, ".navbar");
        assert_eq!(sel.anchor_links, "a[href^=\"#\"]");
        assert_eq!(
            sel.reveal_selector(),
            ".problem-card, .quick-start-card, .solution-text, .solution-visual"
        );

        assert_eq!(cfg.active_class, "active");
        assert_eq!(cfg.namespace, "PairProgrammingAI");
        assert_eq!(cfg.log_level, "warn");

        assert_eq!(cfg.navbar.threshold_px, 50.0);
        assert_eq!(cfg.navbar.scrolled_background, "rgba(255, 255, 255, 0.95)");
        assert_eq!(cfg.navbar.scrolled_backdrop_filter, "blur(10px)");
        assert_eq!(cfg.navbar.resting_background, "#fff");
        assert_eq!(cfg.navbar.resting_backdrop_filter, "none");

        assert_eq!(cfg.reveal.threshold, 0.1);
        assert_eq!(cfg.reveal.root_margin, "0px 0px -50px 0px");
        assert_eq!(cfg.reveal.offset_px, 30.0);
        assert_eq!(cfg.reveal.duration_s, 0.6);
        assert_eq!(cfg.reveal.easing, "ease");

        assert_eq!(cfg.validation.invalid_border, "#e74c3c");
        assert_eq!(cfg.validation.valid_border, "#ddd");

        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn huge_negative_threshold_is_rejected_not_panicking() {
        let err = PageConfig::from_json(r#"{ "reveal": { "threshold": -9223372036854775.808 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "reveal.threshold",
                ..
            }
        ));
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let cfg = PageConfig::from_json(
            r#"{ "namespace": "SiteUtils", "navbar": { "threshold_px": 80 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.namespace, "SiteUtils");
        assert_eq!(cfg.navbar.threshold_px, 80.0);
        assert_eq!(cfg.navbar.scrolled_backdrop_filter, "blur(10px)");
        assert_eq!(cfg.selectors, Selectors::default());
        assert_eq!(cfg.reveal, RevealSettings::default());
    }

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = PageConfig::from_json(r#"{ "reveal": { "threshold": 1.5 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "reveal.threshold",
                ..
            }
        ));

        let err = PageConfig::from_json(r#"{ "reveal": { "duration_s": 0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "reveal.duration_s",
                ..
            }
        ));

        let err = PageConfig::from_json(r#"{ "active_class": "is open" }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "active_class",
                ..
            }
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = PageConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn log_level_parses_with_fallback() {
        let mut cfg = PageConfig::default();
        assert_eq!(cfg.log_level_filter(), log::LevelFilter::Warn);
        cfg.log_level = "debug".to_string();
        assert_eq!(cfg.log_level_filter(), log::LevelFilter::Debug);
        cfg.log_level = "chatty".to_string();
        assert_eq!(cfg.log_level_filter(), log::LevelFilter::Warn);
    }
}
