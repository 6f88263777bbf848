//! Application Context
//!
//! Shared services provided via Leptos Context API. Page state is not kept
//! here; every page owns its own view-model.

use leptos::prelude::*;
use leptos_toast::Toaster;

use crate::api::Api;
use crate::crud::{Notice, Settlement};

#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<Api>,
    pub toaster: Toaster,
}

impl AppContext {
    pub fn new(api: Api, toaster: Toaster) -> Self {
        Self {
            api: StoredValue::new(api),
            toaster,
        }
    }

    pub fn api(&self) -> Api {
        self.api.get_value()
    }

    pub fn notify(&self, notice: Notice) {
        self.toaster.notify(notice.message, notice.severity);
    }

    /// Act on a settled mutation: reload if asked, then show its notice
    pub fn settle(&self, settlement: Settlement, reload: impl FnOnce()) {
        if settlement.reload {
            reload();
        }
        self.notify(settlement.notice);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
