//! Table Markup
//!
//! Pure renderers from the cached model to `<tbody>` markup. Row buttons carry
//! `data-action`/`data-key` and are handled by one delegated listener per table.

use crate::crud::LoadState;
use crate::filter::LabelFilter;
use crate::models::{format_price, Form, Label};

/// Escape text for element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Rendered table body. Rows and the empty-state element never show together.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub body: String,
    pub show_empty: bool,
}

/// Action requested by a click inside a rendered row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
    TogglePrint,
}

impl RowAction {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "edit" => Some(RowAction::Edit),
            "delete" => Some(RowAction::Delete),
            "toggle-print" => Some(RowAction::TogglePrint),
            _ => None,
        }
    }
}

const FORM_COLUMNS: usize = 4;
const LABEL_COLUMNS: usize = 7;

fn render_table<E>(
    load: &LoadState<E>,
    columns: usize,
    rows: impl FnOnce(&[E]) -> Vec<String>,
) -> TableView {
    match load {
        LoadState::Loading => TableView {
            body: format!(r#"<tr><td colspan="{}" class="table-loading">Načítání…</td></tr>"#, columns),
            show_empty: false,
        },
        LoadState::Failed(message) => TableView {
            body: format!(
                r#"<tr><td colspan="{}" class="table-error">❌ {}</td></tr>"#,
                columns,
                escape_html(message)
            ),
            show_empty: false,
        },
        LoadState::Ready(entities) => {
            let rows = rows(entities);
            TableView {
                show_empty: rows.is_empty(),
                body: rows.concat(),
            }
        }
    }
}

fn action_buttons(key: &str) -> String {
    format!(
        concat!(
            r#"<div class="table-actions">"#,
            r#"<button type="button" class="btn btn-small btn-primary" data-action="edit" data-key="{key}">✏️ Upravit</button>"#,
            r#"<button type="button" class="btn btn-small btn-danger" data-action="delete" data-key="{key}">🗑️ Smazat</button>"#,
            "</div>"
        ),
        key = key
    )
}

pub fn form_row(form: &Form) -> String {
    let key = escape_html(&form.name);
    format!(
        "<tr><td><strong>{}</strong></td><td><code>{}</code></td><td>{}</td><td>{}</td></tr>",
        key,
        escape_html(&form.short_name),
        escape_html(form.unit.display_name()),
        action_buttons(&key)
    )
}

pub fn label_row(label: &Label) -> String {
    let key = label.id.to_string();
    let checked = if label.marked_to_print { " checked" } else { "" };
    format!(
        concat!(
            r#"<tr data-label-id="{key}">"#,
            "<td><strong>{name}</strong></td>",
            "<td>{form}</td>",
            "<td>{amount}</td>",
            "<td>{price}</td>",
            "<td>{unit_price}</td>",
            r#"<td class="print-toggle-container"><label class="print-toggle">"#,
            r#"<input type="checkbox" data-action="toggle-print" data-key="{key}"{checked}>"#,
            r#"<span class="print-toggle-slider"></span></label></td>"#,
            "<td>{actions}</td>",
            "</tr>"
        ),
        key = key,
        name = escape_html(&label.product_name),
        form = escape_html(&label.form),
        amount = label.amount,
        price = format_price(Some(label.price)),
        unit_price = format_price(label.unit_price),
        checked = checked,
        actions = action_buttons(&key),
    )
}

pub fn render_forms(load: &LoadState<Form>) -> TableView {
    render_table(load, FORM_COLUMNS, |forms| forms.iter().map(form_row).collect())
}

/// Labels passing `filter`, in cache order
pub fn render_labels(load: &LoadState<Label>, filter: &LabelFilter) -> TableView {
    render_table(load, LABEL_COLUMNS, |labels| {
        filter.apply(labels).iter().map(label_row).collect()
    })
}
