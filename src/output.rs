//! Text output helpers: aligned tables, CSV lines and pretty JSON.

use serde::Serialize;

use crate::error::Result;

/// Print a value as pretty-printed JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render rows as a left-aligned table with a header and separator line.
///
/// Column widths fit the widest cell of each column; columns are separated
/// by two spaces.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();

    for row in rows {
        for (index, cell) in row.iter().enumerate().take(columns) {
            widths[index] = widths[index].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().map(|h| h.to_string()), &widths);

    let total: usize = widths.iter().sum::<usize>() + 2 * (columns.saturating_sub(1));
    out.push_str(&"-".repeat(total));
    out.push('\n');

    for row in rows {
        push_row(&mut out, row.iter().cloned(), &widths);
    }

    out
}

fn push_row(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let cells: Vec<String> = cells.collect();
    let last = cells.len().saturating_sub(1);
    for (index, cell) in cells.iter().enumerate() {
        if index == last {
            // No trailing padding on the last column.
            out.push_str(cell);
        } else {
            let pad = widths[index].saturating_sub(cell.chars().count());
            out.push_str(cell);
            out.push_str(&" ".repeat(pad + 2));
        }
    }
    out.push('\n');
}

/// Render one CSV line, quoting fields that need it.
pub fn csv_line(fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| csv_field(field))
        .collect::<Vec<_>>()
        .join(",")
}

fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Shorten a string to at most `max` characters, appending `...` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{cut}...")
}

/// Strip the highlight markup Redmine embeds in search snippets.
pub fn strip_highlight(text: &str) -> String {
    text.replace("<strong class=\"highlight\">", "")
        .replace("</strong>", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_aligns_columns() {
        let table = render_table(
            &["ID", "Subject"],
            &[
                vec!["1".to_string(), "Short".to_string()],
                vec!["1234".to_string(), "A longer subject".to_string()],
            ],
        );

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "ID    Subject");
        assert_eq!(lines[2], "1     Short");
        assert_eq!(lines[3], "1234  A longer subject");
        assert!(lines[1].chars().all(|c| c == '-'));
    }

    #[test]
    fn test_render_table_no_rows() {
        let table = render_table(&["ID", "Name"], &[]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "ID  Name");
    }

    #[test]
    fn test_csv_line_quotes_only_when_needed() {
        let line = csv_line(&[
            "1".to_string(),
            "plain".to_string(),
            "with, comma".to_string(),
            "with \"quote\"".to_string(),
        ]);
        assert_eq!(line, "1,plain,\"with, comma\",\"with \"\"quote\"\"\"");
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_string_adds_ellipsis() {
        let out = truncate("a very long subject line indeed", 10);
        assert_eq!(out, "a very ...");
        assert_eq!(out.chars().count(), 10);
    }

    #[test]
    fn test_truncate_is_char_safe() {
        // Multi-byte characters must not be split.
        let out = truncate("日本語のとても長い件名です", 6);
        assert_eq!(out, "日本語...");
    }

    #[test]
    fn test_strip_highlight() {
        let snippet = "crash in <strong class=\"highlight\">login</strong> handler";
        assert_eq!(strip_highlight(snippet), "crash in login handler");
    }
}
