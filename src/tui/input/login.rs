use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

use super::*;

pub(super) fn handle_login(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('t') => app.toggle_login_mode(),
            KeyCode::Char('c') => app.should_quit = true,
            _ => {}
        }
        return;
    }
    match edit_form(&mut app.login.form, key) {
        FormKey::Submit => app.submit_login(),
        FormKey::Cancel => app.should_quit = true,
        FormKey::Edited => app.login.error = None,
        FormKey::Cycled | FormKey::Ignored => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::model::AppConfig;
    use crate::ops::auth::AuthMode;
    use crate::tui::app::{App, Mode};
    use crate::tui::input::test_keys::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn typing_then_enter_signs_in() {
        let mut app = App::new(AppConfig::default(), None);
        type_str(&mut app, "me@x.com");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "secret");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.store.session().is_some());
    }

    #[test]
    fn ctrl_t_switches_to_sign_up() {
        let mut app = App::new(AppConfig::default(), None);
        crate::tui::input::handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.login.mode, AuthMode::SignUp);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.login.error.as_deref(), Some("full name is required"));
        type_str(&mut app, "J");
        assert_eq!(app.login.error, None);
    }

    #[test]
    fn esc_quits_from_login() {
        let mut app = App::new(AppConfig::default(), None);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
