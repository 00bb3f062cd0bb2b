use crossterm::event::KeyEvent;

use crate::tui::app::App;
use crate::tui::modal::DETAILS_STATUS;

use super::*;

pub(super) fn handle_modal(app: &mut App, key: KeyEvent) {
    let Some(modal) = app.modal.as_mut() else {
        app.mode = crate::tui::app::Mode::Navigate;
        return;
    };
    let on_status = modal.task_id().is_some() && modal.form.focus == DETAILS_STATUS;
    match edit_form(&mut modal.form, key) {
        FormKey::Submit => app.submit_modal(),
        FormKey::Cancel => app.close_modal(),
        FormKey::Cycled if on_status => app.apply_details_status(),
        FormKey::Edited => modal.error = None,
        FormKey::Cycled | FormKey::Ignored => {}
    }
}
