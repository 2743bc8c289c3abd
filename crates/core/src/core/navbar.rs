use crate::config::NavbarTheme;

/// Navbar appearance, a pure function of the vertical scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarStyle {
    Resting,
    Scrolled,
}

impl NavbarStyle {
    /// Strictly above the threshold counts as scrolled.
    pub fn for_offset(scroll_y: f64, theme: &NavbarTheme) -> Self {
        if scroll_y > theme.threshold_px {
            NavbarStyle::Scrolled
        } else {
            NavbarStyle::Resting
        }
    }

    pub fn background(self, theme: &NavbarTheme) -> &str {
        match self {
            NavbarStyle::Resting => &theme.resting_background,
            NavbarStyle::Scrolled => &theme.scrolled_background,
        }
    }

    pub fn backdrop_filter(self, theme: &NavbarTheme) -> &str {
        match self {
            NavbarStyle::Resting => &theme.resting_backdrop_filter,
            NavbarStyle::Scrolled => &theme.scrolled_backdrop_filter,
        }
    }
}
