use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

pub const EXPANDED_WIDTH: u16 = 20;
pub const COLLAPSED_WIDTH: u16 = 5;

pub fn sidebar_width(app: &App) -> u16 {
    if app.sidebar_expanded {
        EXPANDED_WIDTH
    } else {
        COLLAPSED_WIDTH
    }
}

/// Row of the "Resources" entry within the sidebar, for anchoring its menu
pub fn resources_row(app: &App) -> u16 {
    2 + app.routes.pages().len() as u16
}

/// Render the sidebar: app name, enabled pages, Resources
pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.sidebar_bg;
    let width = area.width as usize;
    let current = app.current_page();
    let mut lines: Vec<Line> = Vec::new();

    let title = if app.sidebar_expanded { " Nexus" } else { " \u{2261}" };
    lines.push(Line::from(Span::styled(
        unicode::fit_to_width(title, width),
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    for (i, page) in app.routes.pages().iter().enumerate() {
        let label = if app.sidebar_expanded {
            format!(" {} {}", i + 1, page.title())
        } else {
            format!(" {} ", i + 1)
        };
        let style = if *page == current {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        lines.push(Line::from(Span::styled(
            unicode::fit_to_width(&label, width),
            style,
        )));
    }

    let resources = if app.sidebar_expanded {
        "   Resources \u{25B8}"
    } else {
        " r "
    };
    let resources_style = if app.show_resources {
        Style::default().fg(app.theme.text_bright).bg(app.theme.selection_bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    lines.push(Line::from(Span::styled(
        unicode::fit_to_width(resources, width),
        resources_style,
    )));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
