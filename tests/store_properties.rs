//! Behaviour of the shared store and router through the public API.

use pretty_assertions::assert_eq;

use nexus::model::{AppConfig, Identity, PageSet, TaskStatus, UserStatus};
use nexus::nav::Page;
use nexus::ops::names::display_name_from_email;
use nexus::ops::{Store, StoreError};
use nexus::router::{RenderedPage, RouteSet, route};

fn signed_in(config: &AppConfig) -> Store {
    let mut store = Store::new(config);
    store.login(Identity {
        name: "Justin Wilson".into(),
        email: "justinwilson@gmail.com".into(),
    });
    store
}

fn with_seats(limit: usize) -> Store {
    let mut config = AppConfig::default();
    config.workspace.seat_limit = limit;
    signed_in(&config)
}

// ---------------------------------------------------------------------------
// Identifiers and validation
// ---------------------------------------------------------------------------

#[test]
fn rapid_creates_get_distinct_ids() {
    let mut store = signed_in(&AppConfig::default());
    let mut ids: Vec<_> = (0..50)
        .map(|i| store.create_project(&format!("P{}", i), "").unwrap())
        .collect();
    let created = ids.clone();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50);
    assert_eq!(ids, created);
}

#[test]
fn empty_names_change_nothing() {
    let mut store = signed_in(&AppConfig::default());
    assert_eq!(
        store.create_project("   ", "desc"),
        Err(StoreError::EmptyField("name"))
    );
    assert_eq!(
        store.create_task("General", "", None),
        Err(StoreError::EmptyField("name"))
    );
    assert!(store.projects().is_empty());
    assert!(store.board_tasks("General").is_empty());
    assert!(store.activity().is_empty());
}

// ---------------------------------------------------------------------------
// Seats
// ---------------------------------------------------------------------------

#[test]
fn single_seat_is_taken_by_the_owner() {
    let mut store = with_seats(1);
    assert_eq!(store.users().len(), 1);
    assert_eq!(store.users()[0].role, "Owner");
    assert_eq!(store.users()[0].status, UserStatus::Active);
    assert!(!store.can_invite());
    assert_eq!(
        store.invite_user("jane.doe@x.com", "Member"),
        Err(StoreError::SeatLimitReached { used: 1, limit: 1 })
    );
    assert_eq!(store.users().len(), 1);
}

#[test]
fn two_seats_allow_exactly_one_invite() {
    let mut store = with_seats(2);
    store.invite_user("jane.doe@x.com", "Member").unwrap();
    assert!(store.invite_user("bob@x.com", "Member").is_err());

    let users = store.users();
    assert_eq!(users.len(), 2);
    assert_eq!(users[1].name, "Jane Doe");
    assert_eq!(users[1].status, UserStatus::Pending);
}

#[test]
fn buying_a_seat_reopens_invites() {
    let mut store = with_seats(1);
    assert_eq!(store.add_seat(), 2);
    assert!(store.can_invite());
    store.invite_user("sam@x.com", "Admin").unwrap();
    assert!(!store.can_invite());
}

#[test]
fn invitee_names_come_from_the_email() {
    assert_eq!(display_name_from_email("jane.doe@x.com"), "Jane Doe");
    assert_eq!(display_name_from_email("sam@x.com"), "Sam");
    assert_eq!(display_name_from_email("john.a.smith@x.com"), "John A.Smith");
}

// ---------------------------------------------------------------------------
// Boards
// ---------------------------------------------------------------------------

#[test]
fn tasks_move_between_any_columns() {
    let mut store = signed_in(&AppConfig::default());
    let id = store.create_task("General", "Scout", None).unwrap();
    assert_eq!(store.task(id).unwrap().status, TaskStatus::Todo);

    for status in [TaskStatus::Doing, TaskStatus::Done, TaskStatus::Todo] {
        store.move_task(id, status).unwrap();
        assert_eq!(store.task(id).unwrap().status, status);
    }
}

#[test]
fn comments_append_in_order() {
    let mut store = signed_in(&AppConfig::default());
    let id = store.create_task("General", "Scout", None).unwrap();
    store.add_comment(id, "first").unwrap();
    store.add_comment(id, "second").unwrap();

    let texts: Vec<&str> = store
        .task(id)
        .unwrap()
        .comments
        .iter()
        .map(|c| c.text.as_str())
        .collect();
    assert_eq!(texts, vec!["first", "second"]);
    assert_eq!(store.task(id).unwrap().comments[0].user, "Justin Wilson");
}

// ---------------------------------------------------------------------------
// Routing and the feed
// ---------------------------------------------------------------------------

#[test]
fn unknown_fragment_routes_like_home() {
    let store = signed_in(&AppConfig::default());
    let routes = RouteSet::full();
    let bogus = route(Page::from_fragment("#/bogus"), &store, &routes);
    let home = route(Page::from_fragment("#/home"), &store, &routes);
    assert_eq!(bogus, home);
    assert!(matches!(bogus, RenderedPage::Dashboard(_)));
}

#[test]
fn minimal_variant_routes_disabled_pages_home() {
    let mut config = AppConfig::default();
    config.features.pages = PageSet::Minimal;
    let store = signed_in(&config);
    let routes = RouteSet::from_features(&config.features);

    assert_eq!(route(Page::Users, &store, &routes).page(), Page::Home);
    assert_eq!(route(Page::Projects, &store, &routes).page(), Page::Projects);
}

#[test]
fn feed_is_newest_first() {
    let mut store = with_seats(2);
    store.create_project("Pilot", "").unwrap();
    store.invite_user("jane.doe@x.com", "Member").unwrap();

    let feed: Vec<_> = store.activity().iter().collect();
    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0].action, "invited a new user");
    assert_eq!(feed[0].target, "\"jane.doe@x.com\"");
    assert_eq!(feed[1].action, "created the project");
    assert_eq!(feed[1].target, "\"Pilot\"");
    assert_eq!(feed[1].user, "Justin Wilson");
}
