use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::form::FormState;

/// Result of feeding a key to a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FormKey {
    Submit,
    Cancel,
    /// A choice field changed value
    Cycled,
    Edited,
    Ignored,
}

/// Shared editing keys for every form: Tab/↑/↓ move focus, ←/→ cycle a
/// choice, Enter submits, Esc cancels, anything printable is typed.
pub(super) fn edit_form(form: &mut FormState, key: KeyEvent) -> FormKey {
    match key.code {
        KeyCode::Enter => FormKey::Submit,
        KeyCode::Esc => FormKey::Cancel,
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            FormKey::Edited
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_prev();
            FormKey::Edited
        }
        KeyCode::Left if form.cycle(-1) => FormKey::Cycled,
        KeyCode::Right if form.cycle(1) => FormKey::Cycled,
        KeyCode::Backspace => {
            form.backspace();
            FormKey::Edited
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.insert_char(c);
            FormKey::Edited
        }
        _ => FormKey::Ignored,
    }
}

/// Shift+letter arrives as lowercase with SHIFT on some terminals
pub(super) fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}
