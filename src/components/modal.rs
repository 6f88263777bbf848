//! Modal Dialog Shell
//!
//! Backdrop plus content box. A click on the backdrop itself, or Escape,
//! closes the dialog without side effects.

use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: TextProp,
    open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div
            class="modal"
            class:active=move || open.get()
            on:click=move |ev| {
                // Only the backdrop, not clicks bubbling up from the content
                if ev.target() == ev.current_target() {
                    on_close.run(());
                }
            }
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h2>{move || title.get()}</h2>
                    <button type="button" class="modal-close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
