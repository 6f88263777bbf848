//! Data Table Component
//!
//! Injects pre-rendered row markup and dispatches row actions through one
//! delegated listener on the table body.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::markup::{RowAction, TableView};

/// Find the `[data-action]` element an event came from
fn row_action(ev: &web_sys::Event) -> Option<(RowAction, String, web_sys::Element)> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let el = target.closest("[data-action]").ok()??;
    let action = RowAction::from_attr(&el.get_attribute("data-action")?)?;
    let key = el.get_attribute("data-key")?;
    Some((action, key, el))
}

#[component]
pub fn DataTable(
    columns: &'static [&'static str],
    table: Signal<TableView>,
    #[prop(into)] empty_text: TextProp,
    #[prop(into)] on_action: Callback<(RowAction, String)>,
) -> impl IntoView {
    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some((action, key, _)) = row_action(&ev) {
            // Checkboxes report through `change`
            if action != RowAction::TogglePrint {
                on_action.run((action, key));
            }
        }
    };

    let on_change = move |ev: web_sys::Event| {
        if let Some((RowAction::TogglePrint, key, el)) = row_action(&ev) {
            // Keep showing the cached flag until the server confirms
            if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
                input.set_checked(!input.checked());
            }
            on_action.run((RowAction::TogglePrint, key));
        }
    };

    view! {
        <div class="table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>
                        {columns.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody
                    inner_html=move || table.with(|v| v.body.clone())
                    on:click=on_click
                    on:change=on_change
                ></tbody>
            </table>
            <div
                class="empty-state"
                style:display=move || if table.with(|v| v.show_empty) { "block" } else { "none" }
            >
                <p>{move || empty_text.get()}</p>
            </div>
        </div>
    }
}
