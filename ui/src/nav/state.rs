use super::NavLink;

/// Local state of the navigation header: the highlighted path and whether
/// the mobile dropdown is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    active: String,
    menu_open: bool,
}

impl HeaderState {
    /// Seeds the active path from the route the header was mounted on. The
    /// dropdown starts closed.
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            active: current_path.into(),
            menu_open: false,
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, path: &str) -> bool {
        self.active == path
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// A link was clicked: it becomes active and the dropdown flips.
    ///
    /// On wide viewports the dropdown is hidden, so the flip has no visible
    /// effect there.
    pub fn click_link(&mut self, path: &str) {
        self.active = path.to_owned();
        self.menu_open = !self.menu_open;
    }

    /// The hamburger control was clicked.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Resyncs the active path with the router after navigation that did not
    /// go through a header link (history, typed URL, in-page links).
    ///
    /// Returns whether the active path changed.
    pub fn follow_route(&mut self, current_path: &str) -> bool {
        if self.active == current_path {
            return false;
        }
        self.active = current_path.to_owned();
        true
    }

    /// How many of `links` are drawn with the selected style.
    pub fn selected_count(&self, links: &[NavLink]) -> usize {
        links.iter().filter(|l| self.is_active(&l.path)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> Vec<NavLink> {
        vec![NavLink::new("/", "Home"), NavLink::new("/menu", "Menu")]
    }

    #[test]
    fn mount_selects_current_route_with_menu_closed() {
        let state = HeaderState::new("/menu");
        assert!(state.is_active("/menu"));
        assert!(!state.is_active("/"));
        assert!(!state.is_menu_open());
        assert_eq!(state.selected_count(&links()), 1);
    }

    #[test]
    fn clicking_a_link_selects_it_and_opens_closed_menu() {
        let mut state = HeaderState::new("/menu");
        state.click_link("/");
        assert_eq!(state.active(), "/");
        assert!(state.is_menu_open());
        assert_eq!(state.selected_count(&links()), 1);
    }

    #[test]
    fn clicking_a_link_closes_open_menu() {
        let mut state = HeaderState::new("/");
        state.toggle_menu();
        state.click_link("/menu");
        assert_eq!(state.active(), "/menu");
        assert!(!state.is_menu_open());
    }

    #[test]
    fn clicking_the_active_link_still_flips_menu() {
        let mut state = HeaderState::new("/");
        state.click_link("/");
        assert_eq!(state.active(), "/");
        assert!(state.is_menu_open());
    }

    #[test]
    fn hamburger_only_flips_menu() {
        let mut state = HeaderState::new("/menu");
        state.toggle_menu();
        assert!(state.is_menu_open());
        state.toggle_menu();
        assert!(!state.is_menu_open());
        assert_eq!(state.active(), "/menu");
    }

    #[test]
    fn unknown_route_selects_nothing() {
        let state = HeaderState::new("/reservations");
        assert_eq!(state.selected_count(&links()), 0);
    }

    #[test]
    fn follow_route_resyncs_after_history_navigation() {
        let mut state = HeaderState::new("/");
        state.click_link("/menu");
        assert!(state.follow_route("/"));
        assert_eq!(state.active(), "/");
        // the dropdown is untouched by route changes
        assert!(state.is_menu_open());
        assert!(!state.follow_route("/"));
    }

    #[test]
    fn duplicate_paths_are_all_selected() {
        let state = HeaderState::new("/");
        let links = vec![NavLink::new("/", "Home"), NavLink::new("/", "Start")];
        assert_eq!(state.selected_count(&links), 2);
    }
}
