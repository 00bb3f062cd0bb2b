use chrono::{DateTime, Local, Timelike};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::ActivityEntry;
use crate::ops::names::initials;
use crate::router::DashboardView;
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::{blank, empty_state, heading, split_line};

/// "Wednesday, May 14, 2025"
pub fn long_date(at: &DateTime<Local>) -> String {
    at.format("%A, %B %-d, %Y").to_string()
}

pub fn greeting(at: &DateTime<Local>) -> &'static str {
    match at.hour() {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

/// Render the home dashboard
pub fn render_dashboard_view(frame: &mut Frame, app: &App, view: &DashboardView, area: Rect) {
    let bg = app.theme.background;
    let now = app.store.now();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let intro = vec![
        Line::from(Span::styled(
            format!(" {}", long_date(&now)),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
        Line::from(Span::styled(
            format!(" {}, {}", greeting(&now), view.actor),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(intro).style(Style::default().bg(bg)), rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[1]);

    let left = overview_lines(app, view, columns[0].width as usize);
    frame.render_widget(Paragraph::new(left).style(Style::default().bg(bg)), columns[0]);

    let team = team_lines(app, view);
    frame.render_widget(Paragraph::new(team).style(Style::default().bg(bg)), columns[1]);
}

/// Recent Projects, My Tasks and Recent Activity, stacked
fn overview_lines<'a>(app: &App, view: &DashboardView, width: usize) -> Vec<Line<'a>> {
    let theme = &app.theme;
    let bg = theme.background;
    let text = Style::default().fg(theme.text).bg(bg);
    let bright = Style::default().fg(theme.text_bright).bg(bg);
    let dim = Style::default().fg(theme.dim).bg(bg);
    let mut lines = Vec::new();

    lines.push(heading("Recent Projects", theme));
    if view.recent_projects.is_empty() {
        lines.push(empty_state("No active projects", theme));
    } else {
        for project in view.recent_projects {
            lines.push(Line::from(Span::styled(
                format!("   \u{25AA} {}", project.name),
                bright.add_modifier(Modifier::BOLD),
            )));
            if let Some(description) = &project.description {
                let max = width.saturating_sub(5);
                lines.push(Line::from(Span::styled(
                    format!("     {}", unicode::truncate_to_width(description, max)),
                    dim,
                )));
            }
        }
    }
    lines.push(Line::from(Span::styled(
        "   + Create Project (n)",
        Style::default().fg(theme.cyan).bg(bg),
    )));
    lines.push(blank());

    lines.push(heading("My Tasks", theme));
    if view.my_tasks.is_empty() {
        lines.push(empty_state("No tasks assigned", theme));
        lines.push(Line::from(Span::styled(
            "   View Task Boards (t)",
            Style::default().fg(theme.cyan).bg(bg),
        )));
    } else {
        for task in &view.my_tasks {
            lines.push(split_line(
                vec![Span::styled(format!("   \u{25AA} {}", task.name), text)],
                vec![Span::styled(format!("{} ", task.status.label()), dim)],
                width,
                bg,
            ));
        }
    }
    lines.push(blank());

    lines.push(heading("Recent Activity", theme));
    if view.activity.is_empty() {
        lines.push(empty_state("No recent activity", theme));
    } else {
        for entry in view.activity {
            lines.push(activity_line(app, entry, width));
        }
    }
    lines
}

/// "JW Justin Wilson created the project "Launch".     03:45 PM"
fn activity_line<'a>(app: &App, entry: &ActivityEntry, width: usize) -> Line<'a> {
    let theme = &app.theme;
    let bg = theme.background;
    let left = vec![
        Span::styled("   ", Style::default().bg(bg)),
        Span::styled(
            format!("{:<2}", initials(&entry.user)),
            Style::default()
                .fg(theme.text_bright)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            entry.user.clone(),
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", entry.action),
            Style::default().fg(theme.text).bg(bg),
        ),
        Span::styled(
            format!("{}.", entry.target),
            Style::default().fg(theme.text_bright).bg(bg),
        ),
    ];
    let right = vec![Span::styled(
        format!("{} ", entry.timestamp),
        Style::default().fg(theme.dim).bg(bg),
    )];
    split_line(left, right, width, bg)
}

fn team_lines<'a>(app: &App, view: &DashboardView) -> Vec<Line<'a>> {
    let theme = &app.theme;
    let bg = theme.background;
    let mut lines = vec![heading("My Team", theme)];
    for user in view.team {
        lines.push(Line::from(vec![
            Span::styled("   ", Style::default().bg(bg)),
            Span::styled(
                format!(" {} ", initials(&user.name)),
                Style::default()
                    .fg(theme.text_bright)
                    .bg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", user.name),
                Style::default().fg(theme.text_bright).bg(bg),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("       {}", user.role),
            Style::default().fg(theme.dim).bg(bg),
        )));
    }
    lines.push(Line::from(vec![
        Span::styled("   ", Style::default().bg(bg)),
        Span::styled(" + ", Style::default().fg(theme.dim).bg(bg)),
        Span::styled(" Invite User (i)", Style::default().fg(theme.cyan).bg(bg)),
    ]));
    lines
}
