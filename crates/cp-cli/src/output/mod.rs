use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{Table, TableOptions};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render a collection. JSON and raw output serialize `items` as-is; table
/// output maps each item through `row` and prints `empty` for no items.
pub fn render_list<T, R, F>(
    items: &[T],
    format: OutputFormat,
    empty: &str,
    row: F,
) -> anyhow::Result<String>
where
    T: Serialize,
    R: Serialize,
    F: Fn(&T) -> R,
{
    match format {
        OutputFormat::Table if items.is_empty() => Ok(empty.to_string()),
        OutputFormat::Table => {
            let rows = items.iter().map(row).collect::<Vec<_>>();
            render_table(&serde_json::to_value(rows)?)
        }
        OutputFormat::Json | OutputFormat::Raw => render(&items, format),
    }
}

/// Print a collection, see [`render_list`].
pub fn output_list<T, R, F>(items: &[T], format: OutputFormat, empty: &str, row: F) -> anyhow::Result<()>
where
    T: Serialize,
    R: Serialize,
    F: Fn(&T) -> R,
{
    let rendered = render_list(items, format, empty, row)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> TableOptions {
    let prefs = ui::prefs();
    TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(value: &Value) -> anyhow::Result<String> {
    match value {
        Value::Array(items) => Ok(render_array_table(items)),
        Value::Object(map) => {
            let mut table = Table::new(["field", "value"]);
            for (key, value) in map {
                table.push_row(vec![key.clone(), value_to_cell(value)]);
            }
            Ok(table.render(table_options()))
        }
        scalar => Ok(value_to_cell(scalar)),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let mut table = Table::new(["value"]);
        for item in items {
            table.push_row(vec![value_to_cell(item)]);
        }
        return table.render(table_options());
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let mut table = Table::new(headers.iter().map(String::as_str));
    for map in items.iter().filter_map(Value::as_object) {
        table.push_row(
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect(),
        );
    }
    table.render(table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
