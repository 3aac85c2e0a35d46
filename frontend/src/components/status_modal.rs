//! Blocking dialog showing the submission status.
//!
//! While `loading` the dialog shows the progress bar; otherwise it shows
//! the final message and a close button. Overlay clicks and the Escape key
//! also close it.

use leptos::ev::{self, MouseEvent};
use leptos::*;

use super::ProgressBar;

#[component]
pub fn StatusModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] progress: Signal<u8>,
    on_close: Callback<()>,
) -> impl IntoView {
    let escape_listener = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && open.get_untracked() {
            on_close.call(());
        }
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        <Show
            when=move || open.get()
            fallback=|| view! { }
        >
            <div class="modal-overlay" on:click=move |_| on_close.call(())>
                <div
                    class="modal-panel"
                    role="dialog"
                    aria-modal="true"
                    on:click=|event: MouseEvent| event.stop_propagation()
                >
                    <h2 class="modal-title">
                        {move || if loading.get() { "Procesando Solicitud" } else { "Notificación" }}
                    </h2>
                    <p class="modal-message">{move || message.get()}</p>

                    <Show
                        when=move || loading.get()
                        fallback=move || view! {
                            <button class="modal-close" on:click=move |_| on_close.call(())>
                                "Cerrar"
                            </button>
                        }
                    >
                        <ProgressBar progress=progress/>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
