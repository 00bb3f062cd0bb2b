use crossterm::event::{KeyCode, KeyEvent};

use crate::nav::Page;
use crate::tui::app::App;
use crate::tui::modal::Modal;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Resources menu intercepts Esc and its own toggle
    if app.show_resources && matches!(key.code, KeyCode::Esc | KeyCode::Char('r')) {
        app.show_resources = false;
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.navigate_to_index(index);
        }
        KeyCode::Tab => app.cycle_page(1),
        KeyCode::BackTab => app.cycle_page(-1),
        KeyCode::Char('b') => app.sidebar_expanded = !app.sidebar_expanded,
        KeyCode::Char('r') => app.show_resources = true,
        KeyCode::Char('g') => app.open_location_prompt(),
        KeyCode::Esc => app.status = None,
        _ => handle_page_key(app, key),
    }
}

/// Keys that only mean something on one page
fn handle_page_key(app: &mut App, key: KeyEvent) {
    match (app.current_page(), key.code) {
        (Page::Home, KeyCode::Char('n')) | (Page::Projects, KeyCode::Char('n')) => {
            app.open_modal(Modal::create_project())
        }
        (Page::Home, KeyCode::Char('t')) => app.navigate(Page::TaskBoards),
        (Page::Home, KeyCode::Char('i')) | (Page::Users, KeyCode::Char('i')) => app.open_invite(),
        (Page::Contacts, KeyCode::Char('n')) => app.open_modal(Modal::create_contact()),
        (Page::Users, KeyCode::Char('s')) => app.add_seat(),
        (Page::Plans, KeyCode::Char('t')) => app.plan_audience = app.plan_audience.toggled(),
        (Page::TaskBoards, code) => handle_board_key(app, code),
        _ => {}
    }
}

fn handle_board_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('h') | KeyCode::Left => app.move_board_column(-1),
        KeyCode::Char('l') | KeyCode::Right => app.move_board_column(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_board_row(-1),
        KeyCode::Char('j') | KeyCode::Down => app.move_board_row(1),
        KeyCode::Char('H') => app.move_selected_task(-1),
        KeyCode::Char('L') => app.move_selected_task(1),
        KeyCode::Char('[') => app.cycle_board(-1),
        KeyCode::Char(']') => app.cycle_board(1),
        KeyCode::Char('n') => app.open_new_task(),
        KeyCode::Enter => app.open_task_details(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use crate::model::{AppConfig, PageSet, TaskStatus};
    use crate::nav::Page;
    use crate::tui::app::{App, Mode, SEAT_LIMIT_REACHED};
    use crate::tui::input::test_keys::*;
    use crate::tui::modal::ModalKind;

    fn app() -> App {
        let mut config = AppConfig::default();
        config.features.auth = false;
        config.workspace.boards = vec!["General".into(), "Launch".into()];
        App::new(config, None)
    }

    #[test]
    fn number_keys_jump_to_enabled_pages() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.current_page(), Page::TaskBoards);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.current_page(), Page::Home);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.current_page(), Page::Plans);
    }

    #[test]
    fn minimal_build_ignores_numbers_past_its_pages() {
        let mut config = AppConfig::default();
        config.features.auth = false;
        config.features.pages = PageSet::Minimal;
        let mut app = App::new(config, None);
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.current_page(), Page::Home);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.current_page(), Page::Projects);
    }

    #[test]
    fn resources_menu_opens_and_closes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('r'));
        assert!(app.show_resources);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_resources);
        assert!(!app.should_quit);
    }

    #[test]
    fn sidebar_toggles() {
        let mut app = app();
        assert!(app.sidebar_expanded);
        press(&mut app, KeyCode::Char('b'));
        assert!(!app.sidebar_expanded);
    }

    #[test]
    fn dashboard_shortcuts() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.modal.as_ref().map(|m| &m.kind), Some(&ModalKind::CreateProject));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);

        press(&mut app, KeyCode::Char('i'));
        assert_eq!(
            app.status.as_ref().map(|s| s.text.as_str()),
            Some(SEAT_LIMIT_REACHED)
        );

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.current_page(), Page::TaskBoards);
    }

    #[test]
    fn users_page_adds_seat_then_invites() {
        let mut app = app();
        app.navigate(Page::Users);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.store.seat_limit(), 2);
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.mode, Mode::Modal);
        type_str(&mut app, "jane.doe@x.com");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.store.users().len(), 2);
        assert_eq!(app.store.users()[1].name, "Jane Doe");
    }

    #[test]
    fn plans_toggle_audience() {
        let mut app = app();
        app.navigate(Page::Plans);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.plan_audience.label(), "For Organizations");
    }

    #[test]
    fn board_keys_create_and_move_tasks() {
        let mut app = app();
        app.navigate(Page::TaskBoards);
        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "Storyboard");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.board_tasks("General").len(), 1);

        press(&mut app, KeyCode::Char('L'));
        assert_eq!(app.store.board_tasks("General")[0].status, TaskStatus::Doing);
        press(&mut app, KeyCode::Char('H'));
        assert_eq!(app.store.board_tasks("General")[0].status, TaskStatus::Todo);

        press(&mut app, KeyCode::Enter);
        assert!(matches!(
            app.modal.as_ref().map(|m| &m.kind),
            Some(ModalKind::TaskDetails { .. })
        ));
    }

    #[test]
    fn brackets_switch_boards() {
        let mut app = app();
        app.navigate(Page::TaskBoards);
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.selected_board(), Some("Launch"));
        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "Trailer");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.board_tasks("Launch").len(), 1);
        assert!(app.store.board_tasks("General").is_empty());
    }
}
