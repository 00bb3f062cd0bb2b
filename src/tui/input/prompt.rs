use crossterm::event::KeyEvent;

use crate::tui::app::{App, Mode};

use super::*;

/// Location bar: type a fragment, Enter goes there, Esc leaves it
pub(super) fn handle_location(app: &mut App, key: KeyEvent) {
    match edit_form(&mut app.location, key) {
        FormKey::Submit => app.submit_location(),
        FormKey::Cancel => app.mode = Mode::Navigate,
        FormKey::Edited | FormKey::Cycled | FormKey::Ignored => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::model::AppConfig;
    use crate::nav::Page;
    use crate::tui::app::{App, Mode};
    use crate::tui::input::test_keys::*;
    use crossterm::event::KeyCode;

    fn app() -> App {
        let mut config = AppConfig::default();
        config.features.auth = false;
        App::new(config, None)
    }

    #[test]
    fn typed_location_is_opened() {
        let mut app = app();
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.mode, Mode::Location);
        for _ in 0.."#/home".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "task-boards");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_page(), Page::TaskBoards);
    }

    #[test]
    fn esc_keeps_current_page() {
        let mut app = app();
        press(&mut app, KeyCode::Char('g'));
        type_str(&mut app, "x");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.current_page(), Page::Home);
    }
}
