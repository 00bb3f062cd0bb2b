use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::router::UsersView;
use crate::tui::app::App;
use crate::util::unicode::fit_to_width;

use super::helpers::{blank, split_line};

const COLUMNS: [(&str, usize); 4] = [("NAME", 22), ("EMAIL", 28), ("PHONE", 12), ("ROLE", 10)];

/// "Your account currently has 1 out of 2 user seat(s)."
pub fn seat_summary(used: usize, limit: usize) -> String {
    format!(
        "Your account currently has {} out of {} user seat(s).",
        used, limit
    )
}

/// Render the users page: seat summary, users table, seat actions
pub fn render_users_view(frame: &mut Frame, app: &App, view: &UsersView, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let width = area.width as usize;
    let mut lines = Vec::new();

    lines.push(split_line(
        vec![Span::styled(
            format!(" {}", seat_summary(view.users.len(), view.seat_limit)),
            Style::default().fg(theme.text).bg(bg),
        )],
        vec![Span::styled(
            " + Add Seats (s) ",
            Style::default()
                .fg(theme.text_bright)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )],
        width,
        bg,
    ));
    lines.push(blank());

    let mut header = String::from(" ");
    for (title, w) in COLUMNS {
        header.push_str(&fit_to_width(title, w));
    }
    header.push_str("STATUS");
    lines.push(Line::from(Span::styled(
        header,
        Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!(" {}", "\u{2500}".repeat(width.saturating_sub(2))),
        Style::default().fg(theme.dim).bg(bg),
    )));

    for user in view.users {
        let text = Style::default().fg(theme.text).bg(bg);
        lines.push(Line::from(vec![
            Span::styled(" ", Style::default().bg(bg)),
            Span::styled(
                fit_to_width(&user.name, COLUMNS[0].1),
                Style::default().fg(theme.text_bright).bg(bg),
            ),
            Span::styled(fit_to_width(&user.email, COLUMNS[1].1), text),
            Span::styled(fit_to_width(&user.phone, COLUMNS[2].1), text),
            Span::styled(fit_to_width(&user.role, COLUMNS[3].1), text),
            Span::styled(
                format!(" {} ", user.status.label()),
                Style::default()
                    .fg(theme.background)
                    .bg(theme.user_status_color(user.status))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    lines.push(blank());
    let invite_style = if view.can_invite {
        Style::default().fg(theme.cyan).bg(bg)
    } else {
        Style::default().fg(theme.dim).bg(bg)
    };
    lines.push(Line::from(Span::styled(" + Add User Seat (i)", invite_style)));

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
