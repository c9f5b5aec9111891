const MIN_COLUMN_WIDTH: usize = 4;
const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Plain aligned text table: header line, dash divider, one line per row.
///
/// Cells wider than the column are cut with `…`. Missing cells render as `-`.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn render(&self, options: TableOptions) -> String {
        let mut widths = self.natural_widths();
        shrink_to_fit(&mut widths, options.max_width);

        let header_line = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(header, width)| pad(&truncate(header, *width), *width, 0))
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        let divider = "-".repeat(header_line.trim_end().chars().count());

        let mut lines = vec![header_line.trim_end().to_string(), divider];
        for row in &self.rows {
            let line = widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let cell = truncate(row.get(index).map_or("-", String::as_str), *width);
                    let visible = cell.chars().count();
                    let shown = if options.color {
                        colorize(&cell)
                    } else {
                        cell
                    };
                    pad(&shown, *width, visible)
                })
                .collect::<Vec<_>>()
                .join(SEPARATOR);
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    fn natural_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
                    .max(MIN_COLUMN_WIDTH)
            })
            .collect()
    }
}

/// Narrow the widest column one char at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();

    while widths.iter().sum::<usize>() + separators > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_COLUMN_WIDTH)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Left-align `value` in `width` columns. `visible` is the printed length
/// when `value` carries ANSI codes, or 0 to measure `value` itself.
fn pad(value: &str, width: usize, visible: usize) -> String {
    let len = if visible == 0 {
        value.chars().count()
    } else {
        visible
    };
    format!("{value}{}", " ".repeat(width.saturating_sub(len)))
}

fn colorize(value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "active" | "accepted" | "true" => "32",
        "pending" | "draft" => "33",
        "archived" | "flagged" | "deleted" => "31",
        _ => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}
