//! Template rendering for CLI output using outstanding

use console::Style;
use logcodeslib::{
    CodeQuerySet, CodeTable, DateRange, QueryItem, ScanResult, ScanStats, StatusCodeCounts, TableRow,
};
use outstanding::Theme;
use serde::Serialize;

/// Include template at compile time
const CODES_TABLE_TEMPLATE: &str = include_str!("../templates/codes_table.jinja");

/// Width of the count and share columns
const CELL_WIDTH: usize = 10;

/// Bounds for the label column width
const MIN_NAME_WIDTH: usize = 12;
const MAX_NAME_WIDTH: usize = 60;

/// A pre-padded table line and the theme style applied to it
#[derive(Debug, Serialize)]
struct TemplateRow {
    text: String,
    style: String,
}

/// Data context for the codes table template. Every line is pre-formatted.
#[derive(Debug, Serialize)]
struct CodesTableContext {
    title: Option<String>,
    header: String,
    separator: String,
    rows: Vec<TemplateRow>,
    footer: String,
}

/// JSON document printed by `--output json`
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    range: &'a DateRange,
    file_count: usize,
    stats: &'a ScanStats,
    total: u64,
    /// Status code to count, in first-seen order
    counts: &'a StatusCodeCounts,
    /// Rows after grouping and sorting
    rows: &'a [QueryItem],
}

/// Style names attached to rows by status class
const CLASS_STYLES: [&str; 5] = ["success", "redirect", "client_error", "server_error", "other"];

/// Style for rows without a status class (per-file rows)
const PLAIN_STYLE: &str = "plain";

/// Create the theme with styles, one per status class plus table chrome
fn create_theme() -> Theme {
    let theme = Theme::new()
        .add("header", Style::new().bold())
        .add("footer", Style::new().bold())
        .add(PLAIN_STYLE, Style::new());
    CLASS_STYLES
        .iter()
        .fold(theme, |theme, name| theme.add(*name, class_style(name)))
}

fn class_style(name: &str) -> Style {
    match name {
        "success" => Style::new().green(),
        "redirect" => Style::new().yellow(),
        "client_error" => Style::new().red(),
        "server_error" => Style::new().magenta(),
        _ => Style::new().cyan(),
    }
}

/// Theme style for a row, falling back to plain for unknown names
fn row_style(style: Option<&str>) -> &str {
    match style {
        Some(name) if CLASS_STYLES.contains(&name) => name,
        _ => PLAIN_STYLE,
    }
}

/// Truncate a name to fit within max_len, adding ".." prefix if needed
fn truncate_name(name: &str, max_len: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() > max_len {
        let tail: String = chars[chars.len() - max_len + 2..].iter().collect();
        format!("..{}", tail)
    } else {
        name.to_string()
    }
}

fn name_width(table: &CodeTable) -> usize {
    let widest = table
        .rows
        .iter()
        .chain(std::iter::once(&table.footer))
        .map(|row| row.label.chars().count())
        .chain(table.headers.first().map(|h| h.chars().count()))
        .max()
        .unwrap_or(0);
    (widest + 2).clamp(MIN_NAME_WIDTH, MAX_NAME_WIDTH)
}

fn format_line(row: &TableRow, name_width: usize) -> String {
    let name = truncate_name(&row.label, name_width - 2);
    let mut line = format!("{:<width$}", name, width = name_width);
    for value in &row.values {
        line.push_str(&format!(" {:>width$}", value, width = CELL_WIDTH));
    }
    line
}

fn build_context(table: &CodeTable) -> CodesTableContext {
    let width = name_width(table);

    let mut header = format!(
        "{:<width$}",
        table.headers.first().map(String::as_str).unwrap_or(""),
        width = width
    );
    for name in table.headers.iter().skip(1) {
        header.push_str(&format!(" {:>width$}", name, width = CELL_WIDTH));
    }

    let columns = table.headers.len().saturating_sub(1);
    let separator = "-".repeat(width + (CELL_WIDTH + 1) * columns);

    let rows = table
        .rows
        .iter()
        .map(|row| TemplateRow {
            text: format_line(row, width),
            style: row_style(row.style.as_deref()).to_string(),
        })
        .collect();

    CodesTableContext {
        title: table.title.clone(),
        header,
        separator,
        rows,
        footer: format_line(&table.footer, width),
    }
}

/// Render a query set as a text table
pub fn render_table(qs: &CodeQuerySet) -> anyhow::Result<String> {
    let table = CodeTable::from_queryset(qs);
    let value = serde_json::to_value(build_context(&table))?;
    let theme = create_theme();
    outstanding::render(CODES_TABLE_TEMPLATE, &value, &theme)
        .map_err(|e| anyhow::anyhow!("failed to render table: {e}"))
}

/// Render a scan result and its query set as pretty JSON
pub fn render_json(result: &ScanResult, qs: &CodeQuerySet) -> anyhow::Result<String> {
    let report = JsonReport {
        range: &result.range,
        file_count: result.file_count,
        stats: &result.total.stats,
        total: qs.total,
        counts: &result.total.counts,
        rows: &qs.items,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
