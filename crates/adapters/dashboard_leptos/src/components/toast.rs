//! Toast notification stack.
//!
//! Every toast lives for [`DISPLAY_DURATION`] on its own timer; a burst of
//! notifications stacks instead of replacing the visible one.

use leptos::prelude::*;
use leptos::task::spawn_local;
use meterdash_app::ports::Notifier;
use meterdash_domain::notification::{DISPLAY_DURATION, Notification, ToastColor};

/// A single toast message.
#[derive(Debug, Clone)]
pub struct ToastMessage {
    /// Unique id for keyed rendering.
    pub id: u32,
    pub text: String,
    pub color: ToastColor,
}

/// Reactive context providing toast mutation methods.
#[derive(Clone, Copy)]
pub struct ToastProvider {
    set_toasts: WriteSignal<Vec<ToastMessage>>,
    next_id: ReadSignal<u32>,
    set_next_id: WriteSignal<u32>,
}

impl ToastProvider {
    /// Push a new toast and schedule its removal.
    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.set_next_id.set(id.wrapping_add(1));

        let Notification { text, color } = notification;
        self.set_toasts.update(|list| {
            list.push(ToastMessage { id, text, color });
        });

        let set_toasts = self.set_toasts;
        let millis = u32::try_from(DISPLAY_DURATION.as_millis()).unwrap_or(u32::MAX);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(millis).await;
            set_toasts.update(|list| {
                list.retain(|t| t.id != id);
            });
        });
    }
}

impl Notifier for ToastProvider {
    fn notify(&self, notification: Notification) {
        self.push(notification);
    }
}

/// Access the toast provider from Leptos context.
///
/// Must be called within a component tree that has a [`ToastContainer`] ancestor.
pub fn use_toasts() -> ToastProvider {
    use_context::<ToastProvider>().expect("ToastProvider not found in context")
}

/// Container component that provides toast context and renders active toasts.
///
/// Place this once near the root of the component tree (e.g. inside `<App/>`).
#[component]
pub fn ToastContainer(children: Children) -> impl IntoView {
    let (toasts, set_toasts) = signal(Vec::<ToastMessage>::new());
    let (next_id, set_next_id) = signal(0_u32);

    provide_context(ToastProvider {
        set_toasts,
        next_id,
        set_next_id,
    });

    view! {
        {children()}
        <div class="toast-container">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=|toast| {
                    view! {
                        <div
                            class=format!("toast toast-{}", toast.color)
                            style:background-color=toast.color.as_css()
                        >
                            {toast.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
