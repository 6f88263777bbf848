//! Labels Page
//!
//! Filterable list of labels with edit dialog, delete confirmation and the
//! print-flag toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::crud::{CrudState, Editor};
use crate::draft::LabelDraft;
use crate::filter::{LabelFilter, PrintFilter, PRINT_FILTERS};
use crate::markup::{render_labels, RowAction};
use crate::models::{Form, Label};
use super::{DataTable, DeleteModal, FormSelect, Modal};

const COLUMNS: &[&str] = &[
    "Produkt",
    "Forma",
    "Množství",
    "Cena",
    "Jednotková cena",
    "Tisk",
    "Akce",
];

/// Edit dialog for one label
#[component]
fn LabelEditor(
    editor: Signal<Editor<u32>>,
    draft: RwSignal<LabelDraft>,
    forms: Signal<Vec<Form>>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let open = Signal::derive(move || editor.with(|e| e.is_open()));

    view! {
        <Modal title="Upravit cenovku" open=open on_close=on_close>
            <form
                id="editLabelForm"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <div class="form-group">
                    <label for="editProductName">"Název produktu"</label>
                    <input
                        id="editProductName"
                        type="text"
                        required
                        prop:value=move || draft.with(|d| d.product_name.clone())
                        on:input=move |ev| draft.update(|d| d.product_name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="editForm">"Forma"</label>
                    <FormSelect
                        id="editForm"
                        forms=forms
                        value=Signal::derive(move || draft.with(|d| d.form.clone()))
                        on_change=move |form: String| draft.update(|d| d.form = form)
                    />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="editAmount">"Množství"</label>
                        <input
                            id="editAmount"
                            type="text"
                            inputmode="decimal"
                            required
                            prop:value=move || draft.with(|d| d.amount.clone())
                            on:input=move |ev| draft.update(|d| d.amount = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="editPrice">"Cena (Kč)"</label>
                        <input
                            id="editPrice"
                            type="text"
                            inputmode="decimal"
                            required
                            prop:value=move || draft.with(|d| d.price.clone())
                            on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        "Zrušit"
                    </button>
                    <button type="submit" class="btn btn-primary">"Uložit změny"</button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
pub fn LabelsPage() -> impl IntoView {
    let ctx = use_app_context();

    let state = RwSignal::new(CrudState::<Label>::new());
    let filter = RwSignal::new(LabelFilter::default());
    let draft = RwSignal::new(LabelDraft::default());
    let forms = RwSignal::new(Vec::<Form>::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let reload = move || set_reload_trigger.update(|v| *v += 1);

    // Load labels on mount and after every full-reload mutation
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        tracing::info!(trigger, "loading labels");
        spawn_local(async move {
            let result = ctx.api().list_labels().await;
            state.update(|s| s.finish_load(result));
        });
    });

    // Form names for the edit dialog; the list still works without them
    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.api().list_forms("name").await {
                Ok(loaded) => forms.set(loaded),
                Err(err) => tracing::warn!(%err, "loading forms for label editor failed"),
            }
        });
    });

    let toggle_print = move |id: u32| {
        spawn_local(async move {
            let result = ctx.api().toggle_print(id).await;
            if let Some(settlement) = state.try_update(|s| s.settle_print_toggle(id, result)) {
                ctx.settle(settlement, reload);
            }
        });
    };

    let on_action = move |(action, key): (RowAction, String)| {
        let Ok(id) = key.parse::<u32>() else {
            tracing::warn!(%key, "row key is not a label id");
            return;
        };
        match action {
            RowAction::Edit => match state.try_update(|s| s.open_edit(&id)) {
                Some(Ok(label)) => draft.set(LabelDraft::from_label(&label)),
                Some(Err(notice)) => ctx.notify(notice),
                None => {}
            },
            RowAction::Delete => {
                if let Some(Err(notice)) = state.try_update(|s| s.request_delete(&id)) {
                    ctx.notify(notice);
                }
            }
            RowAction::TogglePrint => toggle_print(id),
        }
    };

    let close_editor = move |_: ()| {
        state.update(|s| s.close_editor());
    };

    let submit = move |_: ()| {
        let target = state.with_untracked(|s| s.editor.clone());
        let Some(&id) = target.editing() else {
            return;
        };
        let update = draft.with_untracked(|d| d.to_update());
        spawn_local(async move {
            let result = match update {
                Ok(update) => ctx.api().update_label(id, &update).await,
                Err(err) => Err(err),
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
            let result = ctx.api().delete_label(pending.key).await;
            if let Some(settlement) = state.try_update(|s| s.settle_delete(&pending.key, result)) {
                ctx.settle(settlement, reload);
            }
        });
    };

    let table = Signal::derive(move || state.with(|s| filter.with(|f| render_labels(&s.load, f))));

    view! {
        <div class="page labels-page">
            <div class="page-header">
                <h1>"Cenovky"</h1>
                <a class="btn btn-primary" href="/labels/new">"➕ Nová cenovka"</a>
            </div>

            <div class="filters">
                <input
                    id="searchInput"
                    type="search"
                    placeholder="Hledat produkt..."
                    prop:value=move || filter.with(|f| f.query.clone())
                    on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
                />
                <select
                    id="printFilter"
                    on:change=move |ev| filter.update(|f| f.print = PrintFilter::from_value(&event_target_value(&ev)))
                >
                    {PRINT_FILTERS.iter().map(|&(value, label)| {
                        view! {
                            <option
                                value=value
                                prop:selected=move || filter.with(|f| f.print.value() == value)
                            >
                                {label}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>

            <DataTable
                columns=COLUMNS
                table=table
                empty_text="Žádné cenovky neodpovídají filtru."
                on_action=on_action
            />

            <LabelEditor
                editor=Signal::derive(move || state.with(|s| s.editor.clone()))
                draft=draft
                forms=forms.into()
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
