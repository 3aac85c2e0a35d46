use leptos::*;

/// Horizontal bar filled to `progress` percent.
#[component]
pub fn ProgressBar(#[prop(into)] progress: Signal<u8>) -> impl IntoView {
    view! {
        <div
            class="progress-bar"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || progress.get().to_string()
        >
            <div
                class="progress-fill"
                style=move || format!("width: {}%;", progress.get())
            ></div>
        </div>
    }
}
