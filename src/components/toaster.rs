//! Toast viewport rendering [`ToastState`] with dismiss buttons.

use leptos::prelude::*;

use crate::state::toast::{ToastState, ToastVariant};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let destructive = toast.notice.variant == ToastVariant::Destructive;
                    view! {
                        <li class="toast" class:toast--destructive=destructive>
                            <div class="toast__body">
                                <p class="toast__title">{toast.notice.title}</p>
                                <p class="toast__description">{toast.notice.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|s| s.dismiss(id))
                            >
                                "x"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
