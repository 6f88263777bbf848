//! Delete Confirmation Dialog
//!
//! Names the entity about to be deleted and waits for confirm/cancel.

use leptos::prelude::*;

use super::Modal;

/// Open while `pending` holds a display name
#[component]
pub fn DeleteModal(
    pending: Signal<Option<String>>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let open = Signal::derive(move || pending.with(|p| p.is_some()));

    view! {
        <Modal title="Potvrdit smazání" open=open on_close=on_cancel>
            <div class="modal-body">
                <p>
                    "Opravdu chcete smazat "
                    <strong>{move || pending.get().unwrap_or_default()}</strong>
                    "?"
                </p>
                <p class="text-muted">"Tuto akci nelze vrátit zpět."</p>
            </div>
            <div class="modal-footer">
                <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    "Zrušit"
                </button>
                <button type="button" class="btn btn-danger" on:click=move |_| on_confirm.run(())>
                    "🗑️ Smazat"
                </button>
            </div>
        </Modal>
    }
}
