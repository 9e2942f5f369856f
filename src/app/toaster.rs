use leptos::prelude::*;

use crate::content::Icon;
use crate::toast::{ToastQueue, TOAST_LIFETIME};

use super::icon::IconGlyph;

/// Handle to the page-wide toast queue.
#[derive(Clone, Copy)]
pub struct Toasts(RwSignal<ToastQueue>);

impl Toasts {
    /// Shows a toast and schedules its removal after [`TOAST_LIFETIME`].
    pub fn push(self, title: &str, description: &str) {
        let Some(id) = self.0.try_update(|q| q.push(title, description)) else {
            return;
        };
        set_timeout(move || self.dismiss(id), TOAST_LIFETIME);
    }

    pub fn dismiss(self, id: u64) {
        self.0.update(|q| {
            q.dismiss(id);
        });
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts(RwSignal::new(ToastQueue::new()));
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <Show when=move || !toasts.0.with(ToastQueue::is_empty)>
            <ol class="fixed bottom-0 right-0 z-[100] flex flex-col gap-2 p-4 w-full sm:max-w-sm">
                {move || {
                    toasts
                        .0
                        .with(|q| q.toasts().to_vec())
                        .into_iter()
                        .map(|toast| {
                            let id = toast.id;
                            view! {
                                <li
                                    role="status"
                                    class="relative rounded-md border border-border/20 bg-card p-4 pr-8 shadow-lg slide-up"
                                >
                                    <div class="text-sm font-semibold">{toast.title}</div>
                                    <div class="text-sm opacity-90">{toast.description}</div>
                                    <button
                                        class="absolute right-2 top-2 text-muted-foreground hover:text-foreground"
                                        aria-label="Close"
                                        on:click=move |_| toasts.dismiss(id)
                                    >
                                        <IconGlyph icon=Icon::Close />
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ol>
        </Show>
    }
}
