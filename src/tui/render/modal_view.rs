use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::Task;
use crate::ops::names::initials;
use crate::tui::app::App;
use crate::tui::form::FormState;
use crate::tui::modal::Modal;
use crate::tui::theme::Theme;
use crate::util::unicode;

use super::helpers::{blank, centered_rect_fixed, wrap_text};

const MODAL_W: u16 = 60;

/// Label and input line for every field; the focused one gets a cursor
pub(super) fn form_lines<'a>(form: &FormState, theme: &Theme, inner_w: usize) -> Vec<Line<'a>> {
    let bg = theme.background;
    let mut lines = Vec::new();
    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focus;
        let label = if field.required {
            format!(" {} *", field.label)
        } else {
            format!(" {}", field.label)
        };
        lines.push(Line::from(Span::styled(
            label,
            Style::default()
                .fg(if focused { theme.highlight } else { theme.dim })
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )));

        let value_bg = if focused { theme.selection_bg } else { bg };
        let shown = unicode::truncate_to_width(&field.display(), inner_w.saturating_sub(3));
        let mut spans = vec![Span::styled(
            format!(" {}", shown),
            Style::default().fg(theme.text_bright).bg(value_bg),
        )];
        if focused && !field.is_choice() {
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(theme.highlight).bg(value_bg),
            ));
        }
        let used = super::helpers::spans_width(&spans);
        spans.push(Span::styled(
            " ".repeat(inner_w.saturating_sub(used)),
            Style::default().bg(value_bg),
        ));
        lines.push(Line::from(spans));
    }
    lines
}

/// Render the open modal centered over everything
pub fn render_modal(frame: &mut Frame, app: &App, modal: &Modal, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let inner_w = MODAL_W.min(area.width).saturating_sub(2) as usize;

    let mut lines = Vec::new();
    if let Some(task) = modal.task_id().and_then(|id| app.store.task(id)) {
        lines.extend(details_lines(app, task, inner_w));
    }
    lines.push(blank());
    lines.extend(form_lines(&modal.form, theme, inner_w));
    if let Some(error) = &modal.error {
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(theme.red).bg(bg),
        )));
    }

    let height = (lines.len() as u16 + 2).min(area.height);
    let popup = centered_rect_fixed(MODAL_W, height, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", modal.form.title),
            Style::default()
                .fg(theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(theme.selection_border).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().bg(bg)),
        popup,
    );
}

/// Assignee and comment thread of a task
fn details_lines<'a>(app: &App, task: &Task, inner_w: usize) -> Vec<Line<'a>> {
    let theme = &app.theme;
    let bg = theme.background;
    let label = Style::default()
        .fg(theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled(" Assignee", label))];

    match task.assignee_id.and_then(|id| app.store.user(id)) {
        Some(user) => lines.push(Line::from(vec![
            Span::styled("  ", Style::default().bg(bg)),
            Span::styled(
                format!(" {} ", initials(&user.name)),
                Style::default().fg(theme.text_bright).bg(theme.highlight),
            ),
            Span::styled(
                format!(" {}", user.name),
                Style::default().fg(theme.text).bg(bg),
            ),
        ])),
        None => lines.push(Line::from(Span::styled(
            "   Unassigned",
            Style::default().fg(theme.dim).bg(bg),
        ))),
    }

    lines.push(blank());
    lines.push(Line::from(Span::styled(" Comments", label)));
    if task.comments.is_empty() {
        lines.push(Line::from(Span::styled(
            "   No comments yet",
            Style::default().fg(theme.dim).bg(bg),
        )));
    }
    for comment in &task.comments {
        lines.push(Line::from(vec![
            Span::styled(
                format!("   {}", comment.user),
                Style::default()
                    .fg(theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", comment.timestamp),
                Style::default().fg(theme.dim).bg(bg),
            ),
        ]));
        for row in wrap_text("   ", &comment.text, inner_w) {
            lines.push(Line::from(Span::styled(
                row,
                Style::default().fg(theme.text).bg(bg),
            )));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn render(app: &App) -> String {
        render_to_string(TERM_W, TERM_H, |frame, area| {
            if let Some(modal) = &app.modal {
                render_modal(frame, app, modal, area);
            }
        })
    }

    #[test]
    fn project_modal_shows_fields_and_error() {
        let mut app = app_no_auth();
        app.open_modal(Modal::create_project());
        app.submit_modal();
        let output = render(&app);
        assert!(output.contains("Create New Project"));
        assert!(output.contains("Project Name *"));
        assert!(output.contains("Description"));
        assert!(output.contains("name is required"));
    }

    #[test]
    fn invite_modal_shows_role_choice() {
        let mut app = app_no_auth();
        app.open_modal(Modal::invite_user());
        let output = render(&app);
        assert!(output.contains("Invite New User"));
        assert!(output.contains("\u{25C2} Member \u{25B8}"));
    }

    #[test]
    fn details_modal_shows_unassigned_and_comments() {
        let mut app = app_no_auth();
        let id = app.store.create_task("General", "Storyboard", None).unwrap();
        app.store.add_comment(id, "Frames 1-12 sketched").unwrap();
        app.open_task_details();
        let output = render(&app);
        assert!(output.contains("Storyboard"));
        assert!(output.contains("Unassigned"));
        assert!(output.contains("Justin Wilson  03:45 PM"));
        assert!(output.contains("Frames 1-12 sketched"));
        assert!(output.contains("\u{25C2} To Do \u{25B8}"));
        assert!(output.contains("Comment"));
    }

    #[test]
    fn details_modal_shows_assignee_name() {
        let mut app = app_no_auth();
        let owner = app.store.users()[0].id;
        app.store
            .create_task("General", "Storyboard", Some(owner))
            .unwrap();
        app.open_task_details();
        let output = render(&app);
        assert!(output.contains(" JW  Justin Wilson"));
        assert!(!output.contains("Unassigned"));
    }
}
