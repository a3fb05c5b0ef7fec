use pref_api::screen::Field;
use pref_api::{Notice, NoticeKind, RenderedList, View};
use pref_core::sanitize::display_text;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render a resource list. Tables keep the list's own column order; JSON
/// turns each row into an object keyed by header.
pub fn render_list(list: &RenderedList, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(list.placeholder.clone().unwrap_or_else(|| {
            let headers = list.headers.iter().map(String::as_str).collect::<Vec<_>>();
            table::render_entity_table(&headers, &list.rows, table_options())
        })),
        OutputFormat::Json | OutputFormat::Raw => render(&list_to_json(list), format),
    }
}

pub fn print_list(list: &RenderedList, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_list(list, format)?);
    Ok(())
}

/// Render label/value fields: a two-column table or a flat JSON object.
pub fn render_fields(fields: &[Field], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => {
            let rows = fields
                .iter()
                .map(|field| vec![field.label.clone(), display_text(&field.value).into_owned()])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&["field", "value"], &rows, table_options()))
        }
        OutputFormat::Json | OutputFormat::Raw => {
            let map = fields
                .iter()
                .map(|field| (field.label.clone(), Value::String(field.value.clone())))
                .collect::<Map<_, _>>();
            render(&Value::Object(map), format)
        }
    }
}

pub fn print_fields(fields: &[Field], format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_fields(fields, format)?);
    Ok(())
}

pub fn render_view(view: &View, format: OutputFormat) -> anyhow::Result<String> {
    match view {
        View::List(list) => render_list(list, format),
        View::Panel(fields) => render_fields(fields, format),
        View::Json(value) => render(value, format),
        View::Text(text) => match format {
            OutputFormat::Table => Ok(display_text(text).into_owned()),
            OutputFormat::Json | OutputFormat::Raw => render(text, format),
        },
    }
}

pub fn print_view(view: &View, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_view(view, format)?);
    Ok(())
}

/// Notices go to stderr so stdout stays machine-readable. Success notices
/// are dropped in quiet mode.
pub fn print_notice(notice: &Notice) {
    match notice.kind {
        NoticeKind::Success if ui::prefs().quiet => {}
        NoticeKind::Success => eprintln!("{}", display_text(&notice.text)),
        NoticeKind::Error => eprintln!("error: {}", display_text(&notice.text)),
    }
}

fn list_to_json(list: &RenderedList) -> Value {
    let items = list
        .rows
        .iter()
        .map(|row| {
            let map = list
                .headers
                .iter()
                .zip(row)
                .map(|(header, cell)| (header.to_lowercase(), Value::String(cell.clone())))
                .collect::<Map<_, _>>();
            Value::Object(map)
        })
        .collect::<Vec<_>>();

    serde_json::json!({
        "items": items,
        "placeholder": list.placeholder,
        "actions": list.actions,
    })
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

fn render_array_table(items: &[Value]) -> String {
    let options = table_options();

    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => display_text(v).into_owned(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
