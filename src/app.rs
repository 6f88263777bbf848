//! Labelmaker Frontend App
//!
//! Provides shared services and mounts the page matching the current URL.

use leptos::prelude::*;
use leptos_toast::{provide_toaster, ToastHost};

use crate::api::Api;
use crate::components::{FormsPage, LabelsPage, NewLabelPage};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::page::Page;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let toaster = provide_toaster(config.toast);
    provide_context(AppContext::new(Api::new(&config), toaster));

    let page = Page::current();
    tracing::info!(?page, api_base = %config.api_base, "mounting page");

    view! {
        <main class="container">
            {match page {
                Page::Forms => view! { <FormsPage/> }.into_any(),
                Page::Labels => view! { <LabelsPage/> }.into_any(),
                Page::NewLabel => view! { <NewLabelPage/> }.into_any(),
                Page::NotFound => view! {
                    <div class="page not-found">
                        <h1>"Stránka nenalezena"</h1>
                        <a href="/labels">"Zpět na cenovky"</a>
                    </div>
                }.into_any(),
            }}
        </main>
        <ToastHost/>
    }
}
