//! Report upload form.
//!
//! Handles file selection, the four text fields, submission to the
//! backend and the status modal.

use leptos::*;
use web_sys::{Event as DomEvent, File, HtmlInputElement};

use super::{Hero, StatusModal};
use crate::services::{generate_report, report_file_name, run_progress_ticker, save_pdf};
use crate::state::{Event, Submission, UploadState};
use crate::types::AppResult;
use crate::{FormField, ACCEPTED_FILES};

#[component]
pub fn UploadPage() -> impl IntoView {
    let state = create_rw_signal(UploadState::<File>::default());
    let file_input = create_node_ref::<html::Input>();

    let on_file_change = move |ev: DomEvent| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        state.update(|s| s.select_file(file));
    };

    let on_submit = move |_| {
        let Some(submission) = state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };
        log::info!("📤 Generating report for {}", submission.file.name());
        spawn_local(submit_report(state, file_input, submission));
    };

    let loading = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <div class="container">
            <div class="card">
                <Hero/>

                <div class="form-grid">
                    <label for="file-upload" class="file-picker">
                        {move || match state.with(|s| s.file_name()) {
                            Some(name) => format!("📄 {}", name),
                            None => "Haz clic aquí para seleccionar un archivo PDF".to_string(),
                        }}
                    </label>
                    <input
                        id="file-upload"
                        type="file"
                        accept=ACCEPTED_FILES
                        class="hidden"
                        node_ref=file_input
                        on:change=on_file_change
                    />

                    {FormField::ALL
                        .into_iter()
                        .map(|field| view! {
                            <input
                                class="text-input"
                                placeholder=field.placeholder()
                                prop:value=move || state.with(|s| s.form.get(field).to_string())
                                on:input=move |ev| state.update(|s| s.edit(field, event_target_value(&ev)))
                            />
                        })
                        .collect_view()}

                    <button
                        class="submit-button"
                        on:click=on_submit
                        disabled=move || loading.get()
                    >
                        {move || if loading.get() {
                            "Procesando..."
                        } else {
                            "Generar y Descargar Reporte PDF"
                        }}
                    </button>
                </div>

                <Show
                    when=move || state.with(|s| s.summary.is_some())
                    fallback=|| view! { }
                >
                    <div class="summary">
                        {move || state.with(|s| s.summary.clone().unwrap_or_default())}
                    </div>
                </Show>
            </div>

            <StatusModal
                open=Signal::derive(move || state.with(|s| s.modal_open))
                loading=loading
                message=Signal::derive(move || state.with(|s| s.modal_message.clone()))
                progress=Signal::derive(move || state.with(|s| s.progress))
                on_close=Callback::new(move |_| state.update(|s| s.close_modal()))
            />
        </div>
    }
}

/// Drive one validated submission: progress ticker, request, download.
async fn submit_report(
    state: RwSignal<UploadState<File>>,
    file_input: NodeRef<html::Input>,
    submission: Submission<File>,
) {
    let Submission { attempt, params, file } = submission;
    let dispatch = move |event: Event| state.try_update(|s| s.apply(event)).unwrap_or(false);

    spawn_local(run_progress_ticker(attempt, dispatch));

    let fetched = generate_report(&file, &params).await;
    let event = completion_event(attempt, &file.name(), fetched, save_pdf);
    let succeeded = matches!(event, Event::Completed { result: Ok(()), .. });
    dispatch(event);

    if succeeded {
        // The picker keeps its own value; clear it so the same file can be picked again.
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    }
}

/// Save the fetched report as `reporte_<name>.pdf` and wrap the outcome
/// in the completion event. A failed save fails the attempt.
fn completion_event<S>(attempt: u64, file_name: &str, fetched: AppResult<Vec<u8>>, save: S) -> Event
where
    S: FnOnce(&[u8], &str) -> AppResult<()>,
{
    let result = fetched.and_then(|bytes| save(&bytes, &report_file_name(file_name)));
    match &result {
        Ok(()) => log::info!("✅ Report for {} downloaded", file_name),
        Err(err) => log::error!("❌ Report generation failed: {}", err),
    }
    Event::Completed { attempt, result }
}
