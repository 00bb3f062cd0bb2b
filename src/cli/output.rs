use crate::router::RouteInfo;

/// Render the route table as aligned text, one page per line:
/// `#/task-boards  Task Boards  enabled`
pub fn format_route_table(rows: &[RouteInfo]) -> String {
    let frag_w = rows.iter().map(|r| r.fragment.len()).max().unwrap_or(0);
    let title_w = rows.iter().map(|r| r.title.len()).max().unwrap_or(0);
    let mut out = String::new();
    for row in rows {
        let state = if row.enabled { "enabled" } else { "disabled" };
        out.push_str(&format!(
            "{:<frag_w$}  {:<title_w$}  {}\n",
            row.fragment,
            row.title,
            state,
            frag_w = frag_w,
            title_w = title_w,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{RouteSet, route_table};

    #[test]
    fn table_is_aligned_and_marks_disabled_pages() {
        let text = format_route_table(&route_table(&RouteSet::minimal()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "#/home         Home         enabled");
        assert_eq!(lines[3], "#/task-boards  Task Boards  disabled");
    }
}
