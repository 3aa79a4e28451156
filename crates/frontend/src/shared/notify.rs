//! Toast notifications.
//!
//! The notifier is an injected capability provided through Leptos context,
//! so view models stay decoupled from the rendering of the toasts. Toasts
//! stack newest-on-top and auto-dismiss after three seconds; clicking one
//! dismisses it immediately.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

const TOAST_DISMISS_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast--success",
            ToastLevel::Info => "toast--info",
            ToastLevel::Warning => "toast--warning",
            ToastLevel::Error => "toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// User-facing notification channel.
#[derive(Clone, Copy)]
pub struct NotifierService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl NotifierService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message.into());
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(ToastLevel::Warning, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.toasts.update(|toasts| {
            toasts.insert(0, Toast { id, level, message });
        });

        let toasts = self.toasts;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            toasts.update(|toasts| toasts.retain(|t| t.id != id));
        });
    }
}

impl Default for NotifierService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the toast stack for the [`NotifierService`] found in context.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notifier =
        use_context::<NotifierService>().expect("NotifierService not found in context");

    view! {
        <div class="toast-stack">
            <For
                each=move || notifier.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.level.class())
                            on:click=move |_| notifier.dismiss(id)
                        >
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
