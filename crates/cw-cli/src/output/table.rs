#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN_WIDTH: usize = 6;
const SEPARATOR: &str = "  ";

/// Render an aligned table: header, divider, one line per row.
///
/// Widths are measured in characters. When `max_width` is set, the widest
/// columns give up space first and overflowing cells end in `…`. Numeric
/// cells are right-aligned.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths = column_widths(headers, rows);
    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, divider];
    for row in rows {
        let cells = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let text = truncate_text(row.get(index).map_or("-", String::as_str), *width);
                let padded = pad(&text, *width, looks_numeric(&text));
                match colorize_cell(&text).filter(|_| options.color) {
                    Some(colored) => padded.replacen(&text, &colored, 1),
                    None => padded,
                }
            })
            .collect::<Vec<_>>();
        lines.push(cells.join(SEPARATOR));
    }
    lines.join("\n")
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN_WIDTH])
                .max()
                .unwrap_or(MIN_COLUMN_WIDTH)
        })
        .collect()
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].len().max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        match widest {
            Some(index) => widths[index] -= 1,
            None => break,
        }
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out = value.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

/// ANSI color for risk levels and feed sources; `None` for everything else.
fn colorize_cell(value: &str) -> Option<String> {
    let code = match value.to_ascii_lowercase().as_str() {
        "low" | "live" => "32",
        "medium" | "fallback" | "bookmarked" => "33",
        "high" => "31",
        _ => return None,
    };
    Some(format!("\u{1b}[{code}m{value}\u{1b}[0m"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(line: &str) -> String {
        ["\u{1b}[31m", "\u{1b}[32m", "\u{1b}[33m", "\u{1b}[0m"]
            .iter()
            .fold(line.to_string(), |acc, code| acc.replace(code, ""))
    }

    #[test]
    fn risk_levels_are_colored() {
        assert_eq!(colorize_cell("HIGH").unwrap(), "\u{1b}[31mHIGH\u{1b}[0m");
        assert_eq!(colorize_cell("LOW").unwrap(), "\u{1b}[32mLOW\u{1b}[0m");
        assert!(colorize_cell("(2024 AA)").is_none());
    }

    #[test]
    fn colored_cells_keep_alignment() {
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let rows = vec![vec!["MEDIUM".to_string()], vec!["HIGH".to_string()]];
        let table = render_entity_table(&["risk_level"], &rows, options);
        let widths: Vec<usize> = table.lines().map(|line| strip_ansi(line).len()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn narrow_terminal_truncates_long_cells() {
        let options = TableOptions {
            max_width: Some(40),
            color: false,
        };
        let rows = vec![vec!["1".to_string(), "x".repeat(80)]];
        let table = render_entity_table(&["id", "name"], &rows, options);
        assert!(table.lines().all(|line| line.chars().count() <= 40));
        assert!(table.contains('…'));
    }
}
