use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::nav::Page;
use crate::tui::app::{App, Mode, StatusKind};

use super::helpers::split_line;

/// Key hints for the current mode and page
pub fn key_hints(app: &App) -> &'static str {
    match app.mode {
        Mode::Login => "Enter submit  Tab next  ^T switch  Esc quit",
        Mode::Modal => "Enter submit  Tab next  \u{2190}/\u{2192} choose  Esc close",
        Mode::Location => "Enter go  Esc cancel",
        Mode::Navigate if app.show_resources => "Esc close menu",
        Mode::Navigate => match app.current_page() {
            Page::Home => "n project  i invite  t boards  g go  q quit",
            Page::Projects => "n new project  g go  q quit",
            Page::Contacts => "n new contact  g go  q quit",
            Page::TaskBoards => "hjkl select  H/L move  \u{23CE} details  n new  [] board",
            Page::Users => "s add seat  i invite  g go  q quit",
            Page::Plans => "t audience  g go  q quit",
        },
    }
}

/// Render the status row (bottom of screen): message left, hints right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut left = vec![Span::styled(" ", Style::default().bg(bg))];
    if let Some(status) = &app.status {
        let color = match status.kind {
            StatusKind::Info => app.theme.green,
            StatusKind::Alert => app.theme.red,
        };
        left.push(Span::styled(
            status.text.clone(),
            Style::default()
                .fg(color)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
    }
    let right = vec![
        Span::styled(key_hints(app), Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(" ", Style::default().bg(bg)),
    ];

    let line = split_line(left, right, width, bg);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::SEAT_LIMIT_REACHED;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn alert_is_shown_left_of_hints() {
        let mut app = app_no_auth();
        app.navigate(Page::Users);
        app.alert(SEAT_LIMIT_REACHED);
        let output = render_to_string(100, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.starts_with(" You have reached your seat limit."));
        assert!(output.ends_with("s add seat  i invite  g go  q quit"));
    }

    #[test]
    fn hints_follow_mode() {
        let mut app = app_no_auth();
        app.open_location_prompt();
        assert_eq!(key_hints(&app), "Enter go  Esc cancel");
        app.mode = Mode::Navigate;
        app.show_resources = true;
        assert_eq!(key_hints(&app), "Esc close menu");
    }
}
