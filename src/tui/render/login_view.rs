use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ops::auth::AuthMode;
use crate::tui::app::App;

use super::helpers::{blank, centered_rect_fixed};
use super::modal_view::form_lines;

const LOGIN_W: u16 = 48;

/// Full-screen auth form shown before a session exists
pub fn render_login_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let login = &app.login;
    let inner_w = LOGIN_W.min(area.width).saturating_sub(2) as usize;

    let mut lines = vec![
        Line::from(Span::styled(
            " Nexus",
            Style::default()
                .fg(theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", login.form.title),
            Style::default().fg(theme.text_bright).bg(bg),
        )),
        blank(),
    ];
    lines.extend(form_lines(&login.form, theme, inner_w));
    lines.push(blank());

    let (button, prompt, other) = match login.mode {
        AuthMode::Login => ("Login", "Don't have an account?", "Sign Up"),
        AuthMode::SignUp => ("Sign Up", "Already have an account?", "Login"),
    };
    lines.push(Line::from(Span::styled(
        format!(" [ {} (Enter) ]", button),
        Style::default()
            .fg(theme.text_bright)
            .bg(theme.highlight)
            .add_modifier(Modifier::BOLD),
    )));
    if let Some(error) = &login.error {
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(theme.red).bg(bg),
        )));
    }
    lines.push(blank());
    lines.push(Line::from(vec![
        Span::styled(format!(" {} ", prompt), Style::default().fg(theme.dim).bg(bg)),
        Span::styled(
            format!("{} (^T)", other),
            Style::default().fg(theme.cyan).bg(bg),
        ),
    ]));

    let height = lines.len() as u16 + 2;
    let panel = centered_rect_fixed(LOGIN_W, height, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.selection_border).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), panel);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppConfig;
    use crate::tui::render::test_helpers::*;

    fn render(app: &App) -> String {
        render_to_string(TERM_W, TERM_H, |frame, area| {
            render_login_view(frame, app, area);
        })
    }

    #[test]
    fn login_form_masks_password() {
        let mut app = app_with_config(AppConfig::default());
        app.login.form.focus = 1;
        for c in "abc".chars() {
            app.login.form.insert_char(c);
        }
        let output = render(&app);
        assert!(output.contains("Welcome back!"));
        assert!(output.contains("Email Address *"));
        assert!(output.contains("\u{2022}\u{2022}\u{2022}"));
        assert!(!output.contains("abc"));
        assert!(output.contains("Don't have an account? Sign Up"));
    }

    #[test]
    fn sign_up_form_asks_for_name() {
        let mut app = app_with_config(AppConfig::default());
        app.toggle_login_mode();
        app.submit_login();
        let output = render(&app);
        assert!(output.contains("Create your account"));
        assert!(output.contains("Full Name *"));
        assert!(output.contains("[ Sign Up (Enter) ]"));
        assert!(output.contains("full name is required"));
        assert!(output.contains("Already have an account? Login"));
    }
}
