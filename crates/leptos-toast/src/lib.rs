//! Leptos Toast Notifications
//!
//! Transient, auto-dismissing messages stacked in a shared container.
//! One `Toaster` is provided per page; any component can push to it.

use std::time::Duration;

use leptos::prelude::*;

/// Toast severity, selects icon and CSS modifier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✗",
            Severity::Info => "ℹ",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Severity::Success => "toast toast-success",
            Severity::Error => "toast toast-error",
            Severity::Info => "toast toast-info",
        }
    }
}

/// Timing of a toast's life
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastConfig {
    /// Delay before the entrance transition starts
    pub enter: Duration,
    /// How long a toast stays visible
    pub display: Duration,
    /// Exit transition length; the element is removed afterwards
    pub exit: Duration,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            enter: Duration::from_millis(10),
            display: Duration::from_millis(3000),
            exit: Duration::from_millis(300),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Shown,
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
}

/// Live toasts in push order
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: String, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message,
            severity,
            phase: Phase::Entering,
        });
        id
    }

    /// Entering -> Shown. A toast already leaving stays leaving.
    pub fn show(&mut self, id: u64) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            if toast.phase == Phase::Entering {
                toast.phase = Phase::Shown;
            }
        }
    }

    /// Start the exit transition. Returns false if the toast is gone or already leaving.
    pub fn leave(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if toast.phase != Phase::Leaving => {
                toast.phase = Phase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

fn millis(d: Duration) -> u32 {
    d.as_millis().min(u32::MAX as u128) as u32
}

/// Handle to the page's toast queue
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
    config: ToastConfig,
}

impl Toaster {
    pub fn new(config: ToastConfig) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            config,
        }
    }

    /// Push a toast and schedule its entrance, exit and removal
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        tracing::debug!(?severity, %message, "toast");
        let Some(id) = self.queue.try_update(|q| q.push(message, severity)) else {
            return;
        };

        let queue = self.queue;
        gloo_timers::callback::Timeout::new(millis(self.config.enter), move || {
            queue.try_update(|q| q.show(id));
        })
        .forget();

        let this = *self;
        gloo_timers::callback::Timeout::new(millis(self.config.display), move || {
            this.dismiss(id);
        })
        .forget();
    }

    /// Run the exit transition, then drop the toast
    pub fn dismiss(&self, id: u64) {
        let leaving = self.queue.try_update(|q| q.leave(id)).unwrap_or(false);
        if !leaving {
            return;
        }
        let queue = self.queue;
        gloo_timers::callback::Timeout::new(millis(self.config.exit), move || {
            queue.try_update(|q| q.remove(id));
        })
        .forget();
    }

    fn class_of(&self, id: u64) -> String {
        self.queue.with(|q| match q.get(id) {
            Some(t) if t.phase == Phase::Shown => format!("{} show", t.severity.class()),
            Some(t) => t.severity.class().to_string(),
            None => String::new(),
        })
    }
}

/// Create a toaster and provide it to all children
pub fn provide_toaster(config: ToastConfig) -> Toaster {
    let toaster = Toaster::new(config);
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Renders the toast container while at least one toast is alive
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let queue = toaster.queue;

    view! {
        <Show when=move || queue.with(|q| !q.is_empty())>
            <div id="toastContainer" class="toast-container">
                <For
                    each=move || queue.with(|q| q.toasts().to_vec())
                    key=|toast| toast.id
                    children=move |toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=move || toaster.class_of(id)
                                on:click=move |_| toaster.dismiss(id)
                            >
                                <span class="toast-icon">{toast.severity.icon()}</span>
                                <span class="toast-message">{toast.message.clone()}</span>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let config = ToastConfig::default();
        assert_eq!(config.display, Duration::from_millis(3000));
        assert_eq!(config.exit, Duration::from_millis(300));
    }

    #[test]
    fn test_lifecycle() {
        let mut queue = ToastQueue::default();
        let id = queue.push("Uloženo".to_string(), Severity::Success);
        assert_eq!(queue.get(id).unwrap().phase, Phase::Entering);

        queue.show(id);
        assert_eq!(queue.get(id).unwrap().phase, Phase::Shown);

        assert!(queue.leave(id));
        assert!(!queue.leave(id));
        queue.show(id);
        assert_eq!(queue.get(id).unwrap().phase, Phase::Leaving);

        queue.remove(id);
        assert!(queue.is_empty());
        assert!(!queue.leave(id));
    }

    #[test]
    fn test_toasts_stack_independently() {
        let mut queue = ToastQueue::default();
        let a = queue.push("a".to_string(), Severity::Info);
        let b = queue.push("a".to_string(), Severity::Error);
        assert_ne!(a, b);
        assert_eq!(queue.toasts().len(), 2);

        queue.leave(a);
        queue.remove(a);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, b);
        assert_eq!(queue.toasts()[0].phase, Phase::Entering);
    }

    #[test]
    fn test_push_keeps_severity() {
        let mut queue = ToastQueue::default();
        for severity in [Severity::Success, Severity::Error, Severity::Info] {
            let id = queue.push(severity.icon().to_string(), severity);
            assert_eq!(queue.get(id).unwrap().severity, severity);
        }
        let classes: Vec<&str> = queue.toasts().iter().map(|t| t.severity.class()).collect();
        assert_eq!(classes, vec!["toast toast-success", "toast toast-error", "toast toast-info"]);
    }

    #[test]
    fn test_severity_icons() {
        assert_eq!(Severity::default(), Severity::Info);
        assert_eq!(Severity::Success.icon(), "✓");
        assert_eq!(Severity::Error.icon(), "✗");
        assert_eq!(Severity::Info.icon(), "ℹ");
        assert_eq!(Severity::Error.class(), "toast toast-error");
    }
}
