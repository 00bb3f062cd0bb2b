pub mod board_view;
pub mod contacts_view;
pub mod dashboard_view;
pub mod header;
mod helpers;
pub mod login_view;
pub mod modal_view;
pub mod plans_view;
pub mod projects_view;
pub mod resources_menu;
pub mod sidebar;
pub mod status_row;
pub mod users_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::router::RenderedPage;

use super::app::{App, Mode};

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    if app.mode == Mode::Login {
        login_view::render_login_view(frame, app, area);
        return;
    }

    // Layout: sidebar | header (2 rows) / content / status row (1 row)
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar::sidebar_width(app)),
            Constraint::Min(1),
        ])
        .split(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header + rule
            Constraint::Min(1),    // page content
            Constraint::Length(1), // status row
        ])
        .split(columns[1]);

    sidebar::render_sidebar(frame, app, columns[0]);
    header::render_header(frame, app, chunks[0]);

    let content = chunks[1];
    match &app.rendered() {
        RenderedPage::Dashboard(view) => {
            dashboard_view::render_dashboard_view(frame, app, view, content)
        }
        RenderedPage::Projects(view) => {
            projects_view::render_projects_view(frame, app, view, content)
        }
        RenderedPage::Contacts(view) => {
            contacts_view::render_contacts_view(frame, app, view, content)
        }
        RenderedPage::TaskBoards(view) => board_view::render_board_view(frame, app, view, content),
        RenderedPage::Users(view) => users_view::render_users_view(frame, app, view, content),
        RenderedPage::Plans(view) => plans_view::render_plans_view(frame, app, view, content),
    }

    status_row::render_status_row(frame, app, chunks[2]);

    // Overlays (rendered on top of everything)
    if app.show_resources {
        let anchor = (
            columns[0].right().saturating_sub(1),
            columns[0].y + sidebar::resources_row(app),
        );
        resources_menu::render_resources_menu(frame, app, area, anchor);
    }
    if let Some(modal) = &app.modal {
        modal_view::render_modal(frame, app, modal, area);
    }
}
