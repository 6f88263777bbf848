//! New Label Page
//!
//! Standalone create form with a live unit price preview.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

use crate::context::use_app_context;
use crate::crud::{Entity, Notice, LOAD_FAILED, SUBMIT_FAILED};
use crate::draft::{try_number, LabelDraft};
use crate::models::{format_price, unit_price_preview, Form, Label};
use super::FormSelect;

/// Delay before the form clears after a successful create
const RESET_DELAY_MS: u32 = 1500;

#[component]
pub fn NewLabelPage() -> impl IntoView {
    let ctx = use_app_context();

    let draft = RwSignal::new(LabelDraft::default());
    let forms = RwSignal::new(Vec::<Form>::new());
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.api().list_forms("name").await {
                Ok(loaded) => forms.set(loaded),
                Err(err) => {
                    tracing::error!(%err, "loading forms failed");
                    ctx.notify(Notice::error(err.user_message(LOAD_FAILED)));
                }
            }
        });
    });

    let preview = move || {
        draft.with(|d| format_price(unit_price_preview(try_number(&d.amount), try_number(&d.price))))
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let label = match draft.with_untracked(|d| d.to_new()) {
            Ok(label) => label,
            Err(err) => {
                ctx.notify(Notice::error(err.user_message(SUBMIT_FAILED)));
                return;
            }
        };
        set_submitting.set(true);
        spawn_local(async move {
            match ctx.api().create_label(&label).await {
                Ok(()) => {
                    ctx.notify(Notice::success(Label::CREATED));
                    TimeoutFuture::new(RESET_DELAY_MS).await;
                    // Keep the chosen form for the next entry
                    draft.update(|d| {
                        *d = LabelDraft {
                            form: std::mem::take(&mut d.form),
                            ..Default::default()
                        }
                    });
                }
                Err(err) => {
                    tracing::error!(%err, "creating label failed");
                    ctx.notify(Notice::error(err.user_message(SUBMIT_FAILED)));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page new-label-page">
            <div class="page-header">
                <h1>"Nová cenovka"</h1>
                <a class="btn btn-secondary" href="/labels">"← Zpět na cenovky"</a>
            </div>

            <form id="labelForm" class="card" on:submit=on_submit>
                <div class="form-group">
                    <label for="productName">"Název produktu"</label>
                    <input
                        id="productName"
                        type="text"
                        required
                        prop:value=move || draft.with(|d| d.product_name.clone())
                        on:input=move |ev| draft.update(|d| d.product_name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="form">"Forma"</label>
                    <FormSelect
                        forms=forms.into()
                        value=Signal::derive(move || draft.with(|d| d.form.clone()))
                        on_change=move |form: String| draft.update(|d| d.form = form)
                    />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="amount">"Množství"</label>
                        <input
                            id="amount"
                            type="text"
                            inputmode="decimal"
                            required
                            prop:value=move || draft.with(|d| d.amount.clone())
                            on:input=move |ev| draft.update(|d| d.amount = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="price">"Cena (Kč)"</label>
                        <input
                            id="price"
                            type="text"
                            inputmode="decimal"
                            required
                            prop:value=move || draft.with(|d| d.price.clone())
                            on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form-group unit-price-preview">
                    "Jednotková cena: "
                    <strong id="unitPricePreview">{preview}</strong>
                </div>
                <div class="form-group">
                    <label class="checkbox">
                        <input
                            id="markedToPrint"
                            type="checkbox"
                            prop:checked=move || draft.with(|d| d.marked_to_print)
                            on:change=move |ev| draft.update(|d| d.marked_to_print = event_target_checked(&ev))
                        />
                        " Označit k tisku"
                    </label>
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Ukládání…" } else { "💾 Vytvořit cenovku" }}
                </button>
            </form>
        </div>
    }
}
