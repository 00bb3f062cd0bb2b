//! Navigation state: which page is showing.
//!
//! Two transports implement [`Navigator`]. [`FragmentNavigator`] keeps a
//! route fragment such as `#/task-boards` and notifies subscribers when it
//! changes. [`MemoryNavigator`] keeps the page value directly. Neither
//! validates what it is given: an unknown fragment simply reads as Home.

mod fragment;
mod memory;

pub use fragment::{FragmentNavigator, SubscriptionId};
pub use memory::MemoryNavigator;

use serde::Serialize;

use crate::model::NavigationKind;

/// A logical page of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Projects,
    Contacts,
    TaskBoards,
    Users,
    Plans,
}

impl Page {
    /// Sidebar order
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Projects,
        Page::Contacts,
        Page::TaskBoards,
        Page::Users,
        Page::Plans,
    ];

    /// Route slug, e.g. `task-boards`
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Projects => "projects",
            Page::Contacts => "contacts",
            Page::TaskBoards => "task-boards",
            Page::Users => "users",
            Page::Plans => "plans",
        }
    }

    /// Full route fragment, e.g. `#/task-boards`
    pub fn fragment(self) -> String {
        format!("#/{}", self.slug())
    }

    /// Sidebar label and page header title
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Projects => "Projects",
            Page::Contacts => "Contacts",
            Page::TaskBoards => "Task Boards",
            Page::Users => "Users",
            Page::Plans => "Plans",
        }
    }

    /// Parse a route fragment. Accepts `#/users`, `/users` and `users`.
    pub fn parse_fragment(fragment: &str) -> Option<Page> {
        let slug = fragment.trim();
        let slug = slug.strip_prefix('#').unwrap_or(slug);
        let slug = slug.strip_prefix('/').unwrap_or(slug);
        Page::ALL.into_iter().find(|p| p.slug() == slug)
    }

    /// Parse a route fragment, reading anything unrecognized as Home
    pub fn from_fragment(fragment: &str) -> Page {
        Page::parse_fragment(fragment).unwrap_or_default()
    }

    /// Parse a sidebar label ("Task Boards"), reading anything unrecognized as Home
    pub fn from_title(title: &str) -> Page {
        Page::ALL
            .into_iter()
            .find(|p| p.title() == title)
            .unwrap_or_default()
    }
}

/// Current-page state with a navigate operation
pub trait Navigator {
    /// The page to render. Reads are synchronous and never fail.
    fn current_page(&self) -> Page;

    /// Switch pages. The next `current_page()` returns `page`.
    fn navigate(&mut self, page: Page);
}

/// The transport picked from config at startup
pub enum AnyNavigator {
    Fragment(FragmentNavigator),
    Memory(MemoryNavigator),
}

impl AnyNavigator {
    /// Build the configured transport, starting at `initial` (a fragment)
    pub fn from_kind(kind: NavigationKind, initial: Option<&str>) -> Self {
        match kind {
            NavigationKind::Fragment => {
                AnyNavigator::Fragment(FragmentNavigator::new(initial.unwrap_or_default()))
            }
            NavigationKind::Memory => AnyNavigator::Memory(MemoryNavigator::new(
                initial.map(Page::from_fragment).unwrap_or_default(),
            )),
        }
    }

    /// Go to a typed location. The fragment transport keeps the raw text;
    /// the in-memory one keeps only the page it resolves to, and also takes
    /// sidebar labels such as "Task Boards".
    pub fn open_location(&mut self, raw: &str) {
        match self {
            AnyNavigator::Fragment(nav) => nav.set_fragment(raw),
            AnyNavigator::Memory(nav) => match Page::parse_fragment(raw) {
                Some(page) => nav.navigate(page),
                None => nav.navigate_to_title(raw.trim()),
            },
        }
    }

    /// What the location bar shows
    pub fn location(&self) -> String {
        match self {
            AnyNavigator::Fragment(nav) => nav.fragment().to_string(),
            AnyNavigator::Memory(nav) => nav.current_page().fragment(),
        }
    }
}

impl Navigator for AnyNavigator {
    fn current_page(&self) -> Page {
        match self {
            AnyNavigator::Fragment(nav) => nav.current_page(),
            AnyNavigator::Memory(nav) => nav.current_page(),
        }
    }

    fn navigate(&mut self, page: Page) {
        match self {
            AnyNavigator::Fragment(nav) => nav.navigate(page),
            AnyNavigator::Memory(nav) => nav.navigate(page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_fragment(&page.fragment()), page);
            assert_eq!(Page::from_title(page.title()), page);
        }
    }

    #[test]
    fn fragment_prefix_is_optional() {
        assert_eq!(Page::from_fragment("#/users"), Page::Users);
        assert_eq!(Page::from_fragment("/users"), Page::Users);
        assert_eq!(Page::from_fragment("users"), Page::Users);
        assert_eq!(Page::from_fragment("  #/plans "), Page::Plans);
    }

    #[test]
    fn unknown_fragment_reads_as_home() {
        assert_eq!(Page::parse_fragment("#/bogus"), None);
        assert_eq!(Page::from_fragment("#/bogus"), Page::Home);
        assert_eq!(Page::from_fragment(""), Page::Home);
        assert_eq!(Page::from_fragment("#/Projects"), Page::Home);
        assert_eq!(Page::from_title("Resources"), Page::Home);
    }

    #[test]
    fn both_transports_honour_navigate_then_read() {
        for kind in [NavigationKind::Fragment, NavigationKind::Memory] {
            let mut nav = AnyNavigator::from_kind(kind, Some("#/users"));
            assert_eq!(nav.current_page(), Page::Users);
            nav.navigate(Page::Plans);
            assert_eq!(nav.current_page(), Page::Plans);
            nav.open_location("#/bogus");
            assert_eq!(nav.current_page(), Page::Home);
        }
    }

    #[test]
    fn location_bar_shows_raw_fragment_only_for_fragment_transport() {
        let mut frag = AnyNavigator::from_kind(NavigationKind::Fragment, None);
        frag.open_location("#/bogus");
        assert_eq!(frag.location(), "#/bogus");

        let mut mem = AnyNavigator::from_kind(NavigationKind::Memory, None);
        mem.open_location("#/bogus");
        assert_eq!(mem.location(), "#/home");
    }

    #[test]
    fn memory_transport_takes_sidebar_labels() {
        let mut nav = AnyNavigator::from_kind(NavigationKind::Memory, None);
        nav.open_location(" Task Boards ");
        assert_eq!(nav.current_page(), Page::TaskBoards);
        assert_eq!(nav.location(), "#/task-boards");
        nav.open_location("Resources");
        assert_eq!(nav.current_page(), Page::Home);

        let mut frag = AnyNavigator::from_kind(NavigationKind::Fragment, None);
        frag.open_location("Task Boards");
        assert_eq!(frag.current_page(), Page::Home);
    }
}
