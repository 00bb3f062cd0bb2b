//! Page router: maps the current page to the view model a page renders.
//!
//! `route` is pure. It borrows what each page needs out of the [`Store`] and
//! never mutates anything, so it can run on every frame and always reflects
//! the latest navigation and store state.

use std::collections::VecDeque;

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::{ActivityEntry, Contact, FeatureConfig, PLANS, PageSet, Plan, Project, Task, User};
use crate::nav::Page;
use crate::ops::Store;

/// How many projects the dashboard's Recent Projects card shows
pub const RECENT_PROJECTS: usize = 3;

/// The pages a dashboard variant can route to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSet {
    pages: Vec<Page>,
}

impl RouteSet {
    pub fn full() -> Self {
        RouteSet {
            pages: Page::ALL.to_vec(),
        }
    }

    pub fn minimal() -> Self {
        RouteSet {
            pages: vec![Page::Home, Page::Projects],
        }
    }

    pub fn from_features(features: &FeatureConfig) -> Self {
        match features.pages {
            PageSet::Full => RouteSet::full(),
            PageSet::Minimal => RouteSet::minimal(),
        }
    }

    /// Enabled pages in sidebar order. Home is always first.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn contains(&self, page: Page) -> bool {
        self.pages.contains(&page)
    }

    /// The page that actually renders: disabled pages fall back to Home.
    pub fn resolve(&self, page: Page) -> Page {
        if self.contains(page) { page } else { Page::Home }
    }
}

/// One row of the route table (`nexus routes`)
#[derive(Debug, Clone, Serialize)]
pub struct RouteInfo {
    pub page: Page,
    pub fragment: String,
    pub title: &'static str,
    pub enabled: bool,
}

/// Every known page with whether this variant routes to it
pub fn route_table(routes: &RouteSet) -> Vec<RouteInfo> {
    Page::ALL
        .into_iter()
        .map(|page| RouteInfo {
            page,
            fragment: page.fragment(),
            title: page.title(),
            enabled: routes.contains(page),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView<'a> {
    pub actor: &'a str,
    pub recent_projects: &'a [Project],
    pub my_tasks: Vec<&'a Task>,
    pub activity: &'a VecDeque<ActivityEntry>,
    pub team: &'a [User],
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectsView<'a> {
    pub projects: &'a [Project],
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactsView<'a> {
    pub contacts: &'a [Contact],
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskBoardsView<'a> {
    pub boards: &'a IndexMap<String, Vec<Task>>,
    pub users: &'a [User],
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsersView<'a> {
    pub users: &'a [User],
    pub seat_limit: usize,
    pub can_invite: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlansView {
    pub plans: &'static [Plan],
}

/// A page with the slice of shared state it renders
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedPage<'a> {
    Dashboard(DashboardView<'a>),
    Projects(ProjectsView<'a>),
    Contacts(ContactsView<'a>),
    TaskBoards(TaskBoardsView<'a>),
    Users(UsersView<'a>),
    Plans(PlansView),
}

impl RenderedPage<'_> {
    pub fn page(&self) -> Page {
        match self {
            RenderedPage::Dashboard(_) => Page::Home,
            RenderedPage::Projects(_) => Page::Projects,
            RenderedPage::Contacts(_) => Page::Contacts,
            RenderedPage::TaskBoards(_) => Page::TaskBoards,
            RenderedPage::Users(_) => Page::Users,
            RenderedPage::Plans(_) => Page::Plans,
        }
    }

    pub fn title(&self) -> &'static str {
        self.page().title()
    }
}

/// Select the page component for `page` and hand it its state.
pub fn route<'a>(page: Page, store: &'a Store, routes: &RouteSet) -> RenderedPage<'a> {
    match routes.resolve(page) {
        Page::Home => {
            let projects = store.projects();
            let my_tasks = match store.current_user() {
                Some(user) => store.tasks_assigned_to(user.id).collect(),
                None => Vec::new(),
            };
            RenderedPage::Dashboard(DashboardView {
                actor: store.actor_name(),
                recent_projects: &projects[..projects.len().min(RECENT_PROJECTS)],
                my_tasks,
                activity: store.activity(),
                team: store.users(),
            })
        }
        Page::Projects => RenderedPage::Projects(ProjectsView {
            projects: store.projects(),
        }),
        Page::Contacts => RenderedPage::Contacts(ContactsView {
            contacts: store.contacts(),
        }),
        Page::TaskBoards => RenderedPage::TaskBoards(TaskBoardsView {
            boards: store.boards(),
            users: store.users(),
        }),
        Page::Users => RenderedPage::Users(UsersView {
            users: store.users(),
            seat_limit: store.seat_limit(),
            can_invite: store.can_invite(),
        }),
        Page::Plans => RenderedPage::Plans(PlansView { plans: &PLANS }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AppConfig, Identity};

    fn store() -> Store {
        let mut store = Store::new(&AppConfig::default());
        store.login(Identity {
            name: "Justin Wilson".into(),
            email: "justinwilson@gmail.com".into(),
        });
        store
    }

    #[test]
    fn each_page_maps_to_its_own_view() {
        let store = store();
        let routes = RouteSet::full();
        for page in Page::ALL {
            assert_eq!(route(page, &store, &routes).page(), page);
        }
    }

    #[test]
    fn unknown_fragment_renders_home() {
        let store = store();
        let routes = RouteSet::full();
        let bogus = route(Page::from_fragment("#/bogus"), &store, &routes);
        let home = route(Page::from_fragment("#/home"), &store, &routes);
        assert_eq!(bogus, home);
        assert_eq!(bogus.title(), "Home");
    }

    #[test]
    fn disabled_pages_render_home() {
        let store = store();
        let routes = RouteSet::minimal();
        assert_eq!(route(Page::Users, &store, &routes).page(), Page::Home);
        assert_eq!(route(Page::Projects, &store, &routes).page(), Page::Projects);
    }

    #[test]
    fn dashboard_shows_three_most_recent_projects_and_my_tasks() {
        let mut store = store();
        for name in ["A", "B", "C", "D"] {
            store.create_project(name, "").unwrap();
        }
        let me = store.users()[0].id;
        store.create_task("General", "Mine", Some(me)).unwrap();
        store.create_task("General", "Nobody's", None).unwrap();

        let RenderedPage::Dashboard(view) = route(Page::Home, &store, &RouteSet::full()) else {
            panic!("expected dashboard");
        };
        let names: Vec<&str> = view.recent_projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(view.my_tasks.len(), 1);
        assert_eq!(view.my_tasks[0].name, "Mine");
        assert_eq!(view.activity.len(), 6);
    }

    #[test]
    fn views_reflect_store_updates_without_invalidation() {
        let mut store = store();
        let routes = RouteSet::full();
        match route(Page::Users, &store, &routes) {
            RenderedPage::Users(view) => assert!(!view.can_invite),
            other => panic!("unexpected {:?}", other.page()),
        }
        store.add_seat();
        match route(Page::Users, &store, &routes) {
            RenderedPage::Users(view) => {
                assert!(view.can_invite);
                assert_eq!(view.seat_limit, 2);
            }
            other => panic!("unexpected {:?}", other.page()),
        }
    }

    #[test]
    fn route_table_lists_every_page() {
        let table = route_table(&RouteSet::minimal());
        assert_eq!(table.len(), 6);
        assert_eq!(table[3].fragment, "#/task-boards");
        assert_eq!(table[3].title, "Task Boards");
        assert!(!table[3].enabled);
        assert!(table[1].enabled);
    }
}
