use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::names::initials;
use crate::tui::app::{App, Mode};

use super::helpers::split_line;

/// Page title on the left; location and the signed-in user on the right.
/// Second row is a rule.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let left = vec![Span::styled(
        format!(" {}", app.current_page().title()),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];

    let mut right = Vec::new();
    if app.mode == Mode::Location {
        right.push(Span::styled(
            format!("Go to: {}", app.location.value(0)),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
        right.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    } else {
        right.push(Span::styled(
            app.nav.location(),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    let name = app.store.actor_name();
    right.push(Span::styled("  ", Style::default().bg(bg)));
    right.push(Span::styled(
        format!(" {} ", initials(name)),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.highlight)
            .add_modifier(Modifier::BOLD),
    ));
    right.push(Span::styled(
        format!(" {} ", name),
        Style::default().fg(app.theme.text).bg(bg),
    ));

    let lines = vec![
        split_line(left, right, width, bg),
        Line::from(Span::styled(
            "\u{2500}".repeat(width),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
