use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, RESOURCES};

const MENU_W: u16 = 24;

/// Popup menu anchored beside the sidebar's Resources entry
pub fn render_resources_menu(frame: &mut Frame, app: &App, area: Rect, anchor: (u16, u16)) {
    let bg = app.theme.background;
    let height = RESOURCES.len() as u16 + 2;
    let (x, y) = anchor;
    let x = x.min(area.right().saturating_sub(MENU_W));
    let y = y.min(area.bottom().saturating_sub(height));
    let menu = Rect::new(x, y, MENU_W.min(area.width), height.min(area.height));
    frame.render_widget(Clear, menu);

    let lines: Vec<Line> = RESOURCES
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!(" {}", item),
                Style::default().fg(app.theme.text).bg(bg),
            ))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Resources ",
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), menu);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn menu_lists_every_resource() {
        let app = app_no_auth();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_resources_menu(frame, &app, area, (20, 8));
        });
        for item in RESOURCES {
            assert!(output.contains(item), "missing {item}");
        }
    }

    #[test]
    fn menu_is_kept_on_screen() {
        let app = app_no_auth();
        let output = render_to_string(30, 8, |frame, area| {
            render_resources_menu(frame, &app, area, (20, 6));
        });
        assert!(output.contains("Partners"));
    }
}
