use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::router::ProjectsView;
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::{blank, heading, wrap_text};

const HOW_IT_WORKS: [(&str, &str); 3] = [
    (
        "Create projects",
        "Customize project features to best match your needs.",
    ),
    (
        "Assign team",
        "Manage which team members can access projects.",
    ),
    (
        "Organize projects",
        "Group your projects to keep them neatly organized.",
    ),
];

/// Render the projects page: intro, the project list, and how-to steps
pub fn render_projects_view(frame: &mut Frame, app: &App, view: &ProjectsView, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let width = area.width as usize;
    let text = Style::default().fg(theme.text).bg(bg);
    let dim = Style::default().fg(theme.dim).bg(bg);
    let mut lines = Vec::new();

    lines.push(blank());
    lines.push(heading("Create a project", theme));
    lines.push(Line::from(Span::styled(
        " All of your work will live inside a project.",
        text,
    )));
    lines.push(Line::from(Span::styled(
        " [ + New Project (n) ]",
        Style::default()
            .fg(theme.text_bright)
            .bg(theme.highlight)
            .add_modifier(Modifier::BOLD),
    )));

    if !view.projects.is_empty() {
        lines.push(blank());
        lines.push(heading("Your Projects", theme));
        for project in view.projects {
            lines.push(Line::from(Span::styled(
                format!("   \u{25AA} {}", project.name),
                Style::default()
                    .fg(theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            )));
            if let Some(description) = &project.description {
                for row in wrap_text("     ", description, width) {
                    lines.push(Line::from(Span::styled(row, dim)));
                }
            }
        }
    }

    lines.push(blank());
    lines.push(heading("Here's how it works", theme));
    for (step, detail) in HOW_IT_WORKS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("   {}", unicode::fit_to_width(step, 20)),
                Style::default().fg(theme.cyan).bg(bg),
            ),
            Span::styled(detail, dim),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(bg))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Page;
    use crate::router::RenderedPage;
    use crate::tui::render::test_helpers::*;

    fn render(app: &App) -> String {
        render_to_string(TERM_W, TERM_H, |frame, area| {
            if let RenderedPage::Projects(view) = app.rendered() {
                render_projects_view(frame, app, &view, area);
            }
        })
    }

    #[test]
    fn empty_projects_page_skips_list() {
        let mut app = app_no_auth();
        app.navigate(Page::Projects);
        let output = render(&app);
        assert!(output.contains("Create a project"));
        assert!(!output.contains("Your Projects"));
        assert!(output.contains("Here's how it works"));
        assert!(output.contains("Organize projects"));
    }

    #[test]
    fn projects_are_listed_with_descriptions() {
        let mut app = app_no_auth();
        app.navigate(Page::Projects);
        app.store
            .create_project("Launch", "Spring campaign shoot")
            .unwrap();
        app.store.create_project("Pilot", "").unwrap();
        let output = render(&app);
        assert!(output.contains("Your Projects"));
        assert!(output.contains("\u{25AA} Launch"));
        assert!(output.contains("Spring campaign shoot"));
        assert!(output.contains("\u{25AA} Pilot"));
    }
}
