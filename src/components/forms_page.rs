//! Forms Page
//!
//! Sortable list of forms with create/edit dialog and delete confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::{query_param, with_query_param};
use crate::context::use_app_context;
use crate::crud::{CrudState, Editor};
use crate::draft::FormDraft;
use crate::markup::{render_forms, RowAction};
use crate::models::Form;
use crate::page::{current_search, replace_search};
use super::{DataTable, DeleteModal, Modal, UnitSelect};

/// Sort options as (query value, display name)
const SORT_KEYS: &[(&str, &str)] = &[
    ("name", "Název"),
    ("short_name", "Zkratka"),
    ("unit", "Jednotka"),
];

const DEFAULT_SORT: &str = "name";

const COLUMNS: &[&str] = &["Název", "Zkratka", "Jednotka", "Akce"];

fn initial_sort() -> String {
    query_param(&current_search(), "sort")
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SORT.to_string())
}

/// Create/edit dialog for one form
#[component]
fn FormEditor(
    editor: Signal<Editor<String>>,
    draft: RwSignal<FormDraft>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let open = Signal::derive(move || editor.with(|e| e.is_open()));
    let is_edit = move || editor.with(|e| e.editing().is_some());
    let title = move || if is_edit() { "Upravit formu" } else { "Vytvořit novou formu" };

    view! {
        <Modal title=title open=open on_close=on_close>
            <form
                id="formForm"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <div class="form-group">
                    <label for="formName">"Název"</label>
                    // Name is the key; renaming would address another record
                    <input
                        id="formName"
                        type="text"
                        required
                        readonly=is_edit
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="formShortName">"Zkratka"</label>
                    <input
                        id="formShortName"
                        type="text"
                        required
                        prop:value=move || draft.with(|d| d.short_name.clone())
                        on:input=move |ev| draft.update(|d| d.short_name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="formUnit">"Jednotka"</label>
                    <UnitSelect
                        value=Signal::derive(move || draft.with(|d| d.unit.clone()))
                        on_change=move |unit: String| draft.update(|d| d.unit = unit)
                    />
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        "Zrušit"
                    </button>
                    <button type="submit" id="submitBtn" class="btn btn-primary">
                        {move || if is_edit() { "Uložit změny" } else { "Vytvořit" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
pub fn FormsPage() -> impl IntoView {
    let ctx = use_app_context();

    let state = RwSignal::new(CrudState::<Form>::new());
    let draft = RwSignal::new(FormDraft::blank());
    let (sort, set_sort) = signal(initial_sort());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let reload = move || set_reload_trigger.update(|v| *v += 1);

    // Load forms when sort or trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let sort = sort.get();
        tracing::info!(%sort, trigger, "loading forms");
        spawn_local(async move {
            let result = ctx.api().list_forms(&sort).await;
            state.update(|s| s.finish_load(result));
        });
    });

    let on_sort = move |ev: web_sys::Event| {
        let key = event_target_value(&ev);
        replace_search(&with_query_param(&current_search(), "sort", &key));
        set_sort.set(key);
    };

    let open_create = move |_| {
        state.update(|s| s.open_create());
        draft.set(FormDraft::blank());
    };

    let on_action = move |(action, key): (RowAction, String)| match action {
        RowAction::Edit => match state.try_update(|s| s.open_edit(&key)) {
            Some(Ok(form)) => draft.set(FormDraft::from_form(&form)),
            Some(Err(notice)) => ctx.notify(notice),
            None => {}
        },
        RowAction::Delete => {
            if let Some(Err(notice)) = state.try_update(|s| s.request_delete(&key)) {
                ctx.notify(notice);
            }
        }
        RowAction::TogglePrint => {}
    };

    let close_editor = move |_: ()| {
        state.update(|s| s.close_editor());
        draft.set(FormDraft::blank());
    };

    let submit = move |_: ()| {
        let target = state.with_untracked(|s| s.editor.clone());
        if !target.is_open() {
            return;
        }
        let form = draft.get_untracked().to_form();
        spawn_local(async move {
            let api = ctx.api();
            let result = match target {
                Editor::Editing(_) => api.update_form(&form).await,
                _ => api.create_form(&form).await,
            };
            if let Some(settlement) = state.try_update(|s| s.settle_submit(&target, result)) {
                ctx.settle(settlement, reload);
            }
        });
    };

    let confirm_delete = move |_: ()| {
        let Some(pending) = state.with_untracked(|s| s.pending_delete.clone()) else {
            return;
        };
        spawn_local(async move {
            let result = ctx.api().delete_form(&pending.key).await;
            if let Some(settlement) = state.try_update(|s| s.settle_delete(&pending.key, result)) {
                ctx.settle(settlement, reload);
            }
        });
    };

    let table = Signal::derive(move || state.with(|s| render_forms(&s.load)));

    view! {
        <div class="page forms-page">
            <div class="page-header">
                <h1>"Formy"</h1>
                <div class="page-actions">
                    <label for="sortSelect">"Řadit podle: "</label>
                    <select id="sortSelect" on:change=on_sort>
                        {SORT_KEYS.iter().map(|&(key, label)| {
                            view! {
                                <option value=key prop:selected=move || sort.with(|s| s == key)>
                                    {label}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    <button type="button" class="btn btn-primary" on:click=open_create>
                        "➕ Nová forma"
                    </button>
                </div>
            </div>

            <DataTable
                columns=COLUMNS
                table=table
                empty_text="Zatím nejsou vytvořeny žádné formy."
                on_action=on_action
            />

            <FormEditor
                editor=Signal::derive(move || state.with(|s| s.editor.clone()))
                draft=draft
                on_submit=submit
                on_close=close_editor
            />

            <DeleteModal
                pending=Signal::derive(move || state.with(|s| s.pending_delete.as_ref().map(|p| p.name.clone())))
                on_confirm=confirm_delete
                on_cancel=move |_: ()| state.update(|s| s.cancel_delete())
            />
        </div>
    }
}
