//! Transient success/error toast.
//!
//! Shown by the state machine, hidden by the close button or the
//! auto-dismiss timer. Clicks on the toast itself stop propagating so they
//! never count as click-away.

use leptos::*;

use crate::state::{DismissReason, Msg, Toast, ToastKind};
use crate::Dispatcher;

#[component]
pub fn ToastHost(dispatcher: Dispatcher) -> impl IntoView {
    let state = dispatcher.state();

    let css_class = move || {
        state.with(|s| match &s.toast {
            Toast::Shown {
                kind: ToastKind::Success,
                ..
            } => "toast toast-success",
            Toast::Shown {
                kind: ToastKind::Error,
                ..
            } => "toast toast-error",
            Toast::Hidden => "",
        })
    };

    let message = move || {
        state.with(|s| match &s.toast {
            Toast::Shown { message, .. } => message.clone(),
            Toast::Hidden => String::new(),
        })
    };

    view! {
        <Show
            when=move || state.with(|s| s.toast.is_shown())
            fallback=|| view! { }
        >
            <div class=css_class role="status" on:click=|ev| ev.stop_propagation()>
                <span class="toast-message">{message}</span>
                <button
                    class="toast-close"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        dispatcher.send(Msg::ToastDismissed {
                            reason: DismissReason::CloseButton,
                        });
                    }
                >
                    "✕"
                </button>
            </div>
        </Show>
    }
}
