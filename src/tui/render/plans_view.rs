use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Plan, PlanAudience};
use crate::router::PlansView;
use crate::tui::app::App;
use crate::util::unicode;

/// Render the plans page: audience toggle over one card per plan
pub fn render_plans_view(frame: &mut Frame, app: &App, view: &PlansView, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(4)])
        .split(area);

    let mut toggle = vec![Span::styled(" ", Style::default().bg(bg))];
    for audience in [PlanAudience::SmallTeams, PlanAudience::Organizations] {
        let style = if audience == app.plan_audience {
            Style::default()
                .fg(theme.text_bright)
                .bg(theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim).bg(bg)
        };
        toggle.push(Span::styled(format!(" {} ", audience.label()), style));
        toggle.push(Span::styled(" ", Style::default().bg(bg)));
    }
    let intro = vec![
        Line::from(""),
        Line::from(Span::styled(
            " A plan for every production",
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(toggle),
    ];
    frame.render_widget(Paragraph::new(intro).style(Style::default().bg(bg)), rows[0]);

    let count = view.plans.len().max(1) as u32;
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(view.plans.iter().map(|_| Constraint::Ratio(1, count)))
        .split(rows[1]);
    for (plan, card) in view.plans.iter().zip(cards.iter()) {
        render_plan_card(frame, app, plan, *card);
    }
}

fn render_plan_card(frame: &mut Frame, app: &App, plan: &Plan, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let inner_w = area.width.saturating_sub(2) as usize;
    let mut lines = Vec::new();

    if plan.popular {
        lines.push(Line::from(Span::styled(
            " Most Popular ",
            Style::default()
                .fg(theme.text_bright)
                .bg(theme.purple)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled(
            format!(" ${}", plan.price),
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("/mo", Style::default().fg(theme.dim).bg(bg)),
    ]));
    lines.push(Line::from(""));
    for feature in plan.features {
        lines.push(Line::from(vec![
            Span::styled(" \u{2713} ", Style::default().fg(theme.green).bg(bg)),
            Span::styled(
                unicode::truncate_to_width(feature, inner_w.saturating_sub(3)),
                Style::default().fg(theme.text).bg(bg),
            ),
        ]));
    }
    lines.push(Line::from(""));
    let action = if plan.current {
        Span::styled(
            " \u{2713} CURRENT PLAN",
            Style::default().fg(theme.dim).bg(bg),
        )
    } else {
        Span::styled(
            unicode::truncate_to_width(&format!(" Upgrade to {}", plan.name), inner_w),
            Style::default().fg(theme.cyan).bg(bg),
        )
    };
    lines.push(Line::from(action));

    let border = if plan.popular { theme.purple } else { theme.dim };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", plan.name),
            Style::default()
                .fg(theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(border).bg(bg))
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
        render_to_string(120, TERM_H, |frame, area| {
            if let RenderedPage::Plans(view) = app.rendered() {
                render_plans_view(frame, app, &view, area);
            }
        })
    }

    #[test]
    fn every_plan_gets_a_card() {
        let mut app = app_no_auth();
        app.navigate(Page::Plans);
        let output = render(&app);
        assert!(output.contains("A plan for every production"));
        assert!(output.contains("For Small Teams"));
        for name in ["Free", "Starter", "Indie", "Professional"] {
            assert!(output.contains(name), "missing {name}");
        }
        assert!(output.contains("$149/mo"));
        assert!(output.contains("Most Popular"));
        assert!(output.contains("CURRENT PLAN"));
        assert!(output.contains("Upgrade to Indie"));
    }
}
