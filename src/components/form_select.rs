//! Form Selector Component
//!
//! `<select>` over the forms known to the server, used by label editors.

use leptos::prelude::*;

use crate::models::Form;

/// Options for `forms`; a current value missing from the list is still offered
#[component]
pub fn FormSelect(
    forms: Signal<Vec<Form>>,
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] id: Option<&'static str>,
) -> impl IntoView {
    let options = move || {
        let current = value.get();
        let mut names: Vec<(String, String)> = forms.with(|forms| {
            forms
                .iter()
                .map(|f| (f.name.clone(), format!("{} ({})", f.name, f.short_name)))
                .collect()
        });
        if !current.is_empty() && !names.iter().any(|(name, _)| *name == current) {
            names.push((current.clone(), current));
        }
        names
    };

    view! {
        <select
            id=id.unwrap_or("form")
            required
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">"-- Vyberte formu --"</option>
            {move || options().into_iter().map(|(name, text)| {
                let selected = name.clone();
                view! {
                    <option value=name prop:selected=move || value.with(|v| *v == selected)>
                        {text}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
