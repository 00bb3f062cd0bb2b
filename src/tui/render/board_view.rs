use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Task, TaskStatus};
use crate::ops::names::initials;
use crate::router::TaskBoardsView;
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::split_line;

/// Render the task board: board tabs over three status columns
pub fn render_board_view(frame: &mut Frame, app: &App, view: &TaskBoardsView, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let mut tabs = vec![Span::styled(" Boards: ", Style::default().fg(theme.dim).bg(bg))];
    for (i, name) in view.boards.keys().enumerate() {
        let style = if i == app.board_cursor.board {
            Style::default()
                .fg(theme.text_bright)
                .bg(theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text).bg(bg)
        };
        tabs.push(Span::styled(format!(" {} ", name), style));
        tabs.push(Span::styled(" ", Style::default().bg(bg)));
    }
    let intro = vec![
        Line::from(Span::styled(
            " Collaborate on tasks",
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(tabs),
    ];
    frame.render_widget(Paragraph::new(intro).style(Style::default().bg(bg)), rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

    for (col, status) in TaskStatus::ALL.into_iter().enumerate() {
        let tasks = app.column_tasks(status);
        render_column(frame, app, view, status, &tasks, columns[col]);
    }
}

fn render_column(
    frame: &mut Frame,
    app: &App,
    view: &TaskBoardsView,
    status: TaskStatus,
    tasks: &[&Task],
    area: Rect,
) {
    let theme = &app.theme;
    let bg = theme.background;
    let is_current_column = app.board_cursor.column == status.column();
    let inner_w = area.width.saturating_sub(2) as usize;

    let mut lines = Vec::new();
    for (row, task) in tasks.iter().enumerate() {
        let selected = is_current_column && row == app.board_cursor.row;
        let row_bg = if selected { theme.selection_bg } else { bg };
        let assignee = task
            .assignee_id
            .and_then(|id| view.users.iter().find(|u| u.id == id))
            .map(|u| initials(&u.name));
        let badge_w = assignee.as_ref().map_or(0, |a| unicode::display_width(a) + 3);
        let name = unicode::truncate_to_width(&task.name, inner_w.saturating_sub(badge_w + 1));
        let name_style = if selected {
            Style::default()
                .fg(theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text).bg(row_bg)
        };
        let left = vec![Span::styled(format!(" {}", name), name_style)];
        let right = match assignee {
            Some(a) => vec![
                Span::styled(
                    format!(" {} ", a),
                    Style::default()
                        .fg(theme.text_bright)
                        .bg(theme.highlight),
                ),
                Span::styled(" ", Style::default().bg(row_bg)),
            ],
            None => Vec::new(),
        };
        lines.push(split_line(left, right, inner_w, row_bg));
        if !task.comments.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("   {} comment(s)", task.comments.len()),
                Style::default().fg(theme.dim).bg(bg),
            )));
        }
    }

    let border_color = if is_current_column {
        theme.selection_border
    } else {
        theme.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ({}) ", status.label(), tasks.len()),
            Style::default()
                .fg(theme.status_color(status))
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Page;
    use crate::router::RenderedPage;
    use crate::tui::render::test_helpers::*;

    fn render(app: &App) -> String {
        render_to_string(TERM_W, 16, |frame, area| {
            if let RenderedPage::TaskBoards(view) = app.rendered() {
                render_board_view(frame, app, &view, area);
            }
        })
    }

    fn board_app() -> App {
        let mut app = app_no_auth();
        app.navigate(Page::TaskBoards);
        app
    }

    #[test]
    fn empty_board_has_three_columns() {
        let app = board_app();
        let output = render(&app);
        assert!(output.contains("Collaborate on tasks"));
        assert!(output.contains("Boards:  General"));
        assert!(output.contains("To Do (0)"));
        assert!(output.contains("Doing (0)"));
        assert!(output.contains("Done (0)"));
    }

    #[test]
    fn tasks_sit_in_their_status_column() {
        let mut app = board_app();
        let owner = app.store.users()[0].id;
        let a = app.store.create_task("General", "Storyboard", Some(owner)).unwrap();
        app.store.create_task("General", "Casting", None).unwrap();
        app.store.move_task(a, TaskStatus::Doing).unwrap();
        app.store.add_comment(a, "on it").unwrap();
        let output = render(&app);
        assert!(output.contains("To Do (1)"));
        assert!(output.contains("Doing (1)"));
        assert!(output.contains("Casting"));
        assert!(output.contains("Storyboard"));
        assert!(output.contains(" JW "));
        assert!(output.contains("1 comment(s)"));

        // Storyboard is drawn in the middle third of the screen
        let row = output.lines().find(|l| l.contains("Storyboard")).unwrap();
        let col = row[..row.find("Storyboard").unwrap()].chars().count();
        assert!(col > (TERM_W / 3) as usize && col < (2 * TERM_W / 3) as usize);
    }
}
