use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Contact;
use crate::router::ContactsView;
use crate::tui::app::App;
use crate::util::unicode::fit_to_width;

use super::helpers::blank;

/// Address-book filters. Only "All Contacts" holds anyone.
const FILTERS: [&str; 5] = ["All Contacts", "Crew", "Talent", "Extras", "Clients"];

/// (header, width) per table column; notes take the rest
const COLUMNS: [(&str, usize); 5] = [
    ("NAME", 18),
    ("ROLE", 14),
    ("EMAIL", 26),
    ("PHONE", 16),
    ("RATE", 16),
];

/// Render the contacts page: filters, count, and the contact table
pub fn render_contacts_view(frame: &mut Frame, app: &App, view: &ContactsView, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let count = view.contacts.len();
    let mut lines = Vec::new();

    let mut filters = vec![Span::styled(
        " Filter By: ",
        Style::default().fg(theme.dim).bg(bg),
    )];
    for (i, filter) in FILTERS.iter().enumerate() {
        let n = if i == 0 { count } else { 0 };
        let style = if i == 0 {
            Style::default()
                .fg(theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text).bg(bg)
        };
        filters.push(Span::styled(format!("{} ({})", filter, n), style));
        filters.push(Span::styled("  ", Style::default().bg(bg)));
    }
    lines.push(Line::from(filters));
    lines.push(blank());

    lines.push(Line::from(vec![
        Span::styled(
            " Active Lists: ",
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("All Contacts", Style::default().fg(theme.text).bg(bg)),
        Span::styled(
            format!("    {} contacts", count),
            Style::default().fg(theme.dim).bg(bg),
        ),
    ]));
    lines.push(blank());

    let mut header = String::from(" ");
    for (title, w) in COLUMNS {
        header.push_str(&fit_to_width(title, w));
    }
    header.push_str("NOTES");
    lines.push(Line::from(Span::styled(
        header,
        Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!(" {}", "\u{2500}".repeat((area.width as usize).saturating_sub(2))),
        Style::default().fg(theme.dim).bg(bg),
    )));

    for contact in view.contacts {
        lines.push(contact_row(app, contact));
    }

    lines.push(blank());
    lines.push(Line::from(Span::styled(
        " + New Contact (n)",
        Style::default().fg(theme.cyan).bg(bg),
    )));

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn contact_row<'a>(app: &App, contact: &Contact) -> Line<'a> {
    let bg = app.theme.background;
    let strong = Style::default().fg(app.theme.text_bright).bg(bg);
    let weak = Style::default().fg(app.theme.dim).bg(bg);
    let cells = [
        (&contact.name, strong),
        (&contact.role, weak),
        (&contact.email, strong),
        (&contact.phone, weak),
        (&contact.rate, weak),
    ];
    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    for ((value, style), (_, w)) in cells.into_iter().zip(COLUMNS) {
        spans.push(Span::styled(fit_to_width(value, w), style));
    }
    spans.push(Span::styled(contact.notes.clone(), weak));
    Line::from(spans)
}
