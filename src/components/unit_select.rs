//! Unit Selector Component
//!
//! `<select>` over the known units of measure.

use leptos::prelude::*;

use crate::models::UNITS;

#[component]
pub fn UnitSelect(
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            id="formUnit"
            required
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {UNITS.iter().map(|&(val, label)| {
                view! {
                    <option value=val prop:selected=move || value.with(|v| v == val)>
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
