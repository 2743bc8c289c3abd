//! # page_interactions
//!
//! Interaction rules for the marketing page, kept free of any browser
//! dependency so they can be unit-tested on the host.
//!
//! The wasm front-end (`page_interactions_web`) owns the DOM wiring; this
//! crate decides *what* each event should do:
//!
//! - [`menu`]: mobile menu toggle, button and panel kept in sync
//! - [`fragment`]: anchor-link fragment resolution and smooth-scroll requests
//! - [`navbar`]: scroll-offset threshold and the two navbar styles
//! - [`reveal`]: fade-in declarations and the one-way reveal state
//! - [`style`]: inline style writes that log instead of dropping failures
//! - [`validate`]: required-field validation
//! - [`element`]: element-creation specs for the exported factory
//! - [`config`]: selectors, colours and timings, overridable from JSON
//!
//! DOM nodes are reached through small traits ([`menu::ActiveMarker`],
//! [`validate::RequiredField`], [`fragment::FragmentHost`]) so tests can use
//! in-memory fakes.

#[path = "core/config.rs"]
pub mod config;

#[path = "core/element.rs"]
pub mod element;

#[path = "core/error.rs"]
pub mod error;

#[path = "core/fmt.rs"]
pub mod fmt;

#[path = "core/fragment.rs"]
pub mod fragment;

#[path = "core/menu.rs"]
pub mod menu;

#[path = "core/navbar.rs"]
pub mod navbar;

#[path = "core/reveal.rs"]
pub mod reveal;

#[path = "core/style.rs"]
pub mod style;

#[path = "core/validate.rs"]
pub mod validate;

pub use config::PageConfig;
pub use error::ConfigError;

/// Message traced by the collaboration demo placeholder.
pub const COLLABORATION_DEMO_MESSAGE: &str = "AI Collaboration Demo would be implemented here";

/// Commonly used types.
pub mod prelude {
    pub use crate::config::{NavbarTheme, PageConfig, RevealSettings, Selectors, ValidationColors};
    pub use crate::element::ElementSpec;
    pub use crate::error::ConfigError;
    pub use crate::fragment::{fragment_id, navigate_to_fragment, FragmentHost};
    pub use crate::menu::{ActiveMarker, MenuController, MenuState};
    pub use crate::navbar::NavbarStyle;
    pub use crate::reveal::{RevealState, RevealTargets};
    pub use crate::style::{apply_declarations, InlineStyle, StyleDeclaration};
    pub use crate::validate::{validate_fields, FieldStatus, RequiredField};
}
