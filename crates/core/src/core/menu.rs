//! Mobile menu toggle.
//!
//! The open/closed state is mirrored on two nodes (button and panel). The
//! controller reads the state from the button and always writes both, so the
//! pair can never drift apart.

/// A node that can carry the menu's active marker.
pub trait ActiveMarker {
    fn is_active(&self) -> bool;
    fn set_active(&self, active: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn from_active(active: bool) -> Self {
        if active {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }
}

pub struct MenuController<M: ActiveMarker> {
    button: M,
    panel: M,
}

impl<M: ActiveMarker> MenuController<M> {
    /// `None` unless both nodes exist; the feature is skipped otherwise.
    pub fn new(button: Option<M>, panel: Option<M>) -> Option<Self> {
        Some(Self {
            button: button?,
            panel: panel?,
        })
    }

    pub fn state(&self) -> MenuState {
        MenuState::from_active(self.button.is_active())
    }

    /// Button click.
    pub fn toggle(&self) -> MenuState {
        let next = self.state().toggled();
        self.apply(next);
        next
    }

    /// Click on a link inside the panel.
    pub fn close(&self) {
        self.apply(MenuState::Closed);
    }

    fn apply(&self, state: MenuState) {
        self.button.set_active(state.is_open());
        self.panel.set_active(state.is_open());
    }

    pub fn button(&self) -> &M {
        &self.button
    }

    pub fn panel(&self) -> &M {
        &self.panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeNode {
        active: Cell<bool>,
    }

    impl ActiveMarker for &FakeNode {
        fn is_active(&self) -> bool {
            self.active.get()
        }

        fn set_active(&self, active: bool) {
            self.active.set(active);
        }
    }

    #[test]
    fn missing_node_skips_the_feature() {
        let node = FakeNode::default();
        assert!(MenuController::new(Some(&node), None).is_none());
        assert!(MenuController::<&FakeNode>::new(None, Some(&node)).is_none());
        assert!(MenuController::<&FakeNode>::new(None, None).is_none());
    }

    #[test]
    fn toggle_is_a_two_step_cycle() {
        let (button, panel) = (FakeNode::default(), FakeNode::default());
        let menu = MenuController::new(Some(&button), Some(&panel)).unwrap();

        assert_eq!(menu.toggle(), MenuState::Open);
        assert!(button.active.get());
        assert!(panel.active.get());

        assert_eq!(menu.toggle(), MenuState::Closed);
        assert!(!button.active.get());
        assert!(!panel.active.get());
    }

    #[test]
    fn link_click_always_closes() {
        let (button, panel) = (FakeNode::default(), FakeNode::default());
        let menu = MenuController::new(Some(&button), Some(&panel)).unwrap();

        menu.toggle();
        menu.close();
        assert_eq!(menu.state(), MenuState::Closed);
        assert!(!panel.active.get());

        // Already closed stays closed.
        menu.close();
        assert!(!button.active.get());
        assert!(!panel.active.get());
    }

    #[test]
    fn disagreeing_nodes_resync_on_toggle() {
        let (button, panel) = (FakeNode::default(), FakeNode::default());
        panel.active.set(true);
        let menu = MenuController::new(Some(&button), Some(&panel)).unwrap();

        menu.toggle();
        assert_eq!(button.active.get(), panel.active.get());
    }
}
