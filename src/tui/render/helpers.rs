use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::theme::Theme;
use crate::util::unicode;

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Left spans, then right spans pushed against the right edge. The right
/// side is dropped when both do not fit.
pub(super) fn split_line<'a>(
    mut left: Vec<Span<'a>>,
    right: Vec<Span<'a>>,
    width: usize,
    bg: Color,
) -> Line<'a> {
    let used = spans_width(&left);
    let right_w = spans_width(&right);
    if used + right_w < width {
        left.push(Span::styled(
            " ".repeat(width - used - right_w),
            Style::default().bg(bg),
        ));
        left.extend(right);
    }
    Line::from(left)
}

/// Bold card heading, e.g. "Recent Projects"
pub(super) fn heading<'a>(text: &str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(
        format!(" {}", text),
        Style::default()
            .fg(theme.text_bright)
            .bg(theme.background)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Dim one-liner for empty lists
pub(super) fn empty_state<'a>(text: &str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(
        format!("   {}", text),
        Style::default().fg(theme.dim).bg(theme.background),
    ))
}

pub(super) fn blank<'a>() -> Line<'a> {
    Line::from("")
}

/// Word-wrap `text` into lines of at most `max_width` characters.
/// Every line (including the first) is prefixed with `indent`.
pub(super) fn wrap_text(indent: &str, text: &str, max_width: usize) -> Vec<String> {
    let indent_len = unicode::display_width(indent);
    let mut lines = Vec::new();
    let mut current = indent.to_string();
    let mut current_w = indent_len;

    for word in text.split_whitespace() {
        let word_w = unicode::display_width(word);
        let space = if current_w == indent_len { 0 } else { 1 };
        if current_w + space + word_w > max_width && current_w > indent_len {
            lines.push(current);
            current = indent.to_string();
            current_w = indent_len;
        }
        if current_w > indent_len {
            current.push(' ');
            current_w += 1;
        }
        current.push_str(word);
        current_w += word_w;
    }
    if current_w > indent_len || lines.is_empty() {
        lines.push(current);
    }
    lines
}

pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
