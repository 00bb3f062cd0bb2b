mod common;
mod login;
mod modal;
mod navigate;
mod prompt;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

use common::*;
use login::handle_login;
use modal::handle_modal;
use navigate::handle_navigate;
use prompt::handle_location;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Login => handle_login(app, key),
        Mode::Navigate => handle_navigate(app, key),
        Mode::Modal => handle_modal(app, key),
        Mode::Location => handle_location(app, key),
    }
}
