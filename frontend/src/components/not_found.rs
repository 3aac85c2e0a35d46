//! Not-found page

use leptos::*;
use leptos_router::A;

use crate::UPLOAD_PATH;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p class="subtitle">"La página solicitada no existe."</p>
            <A href=UPLOAD_PATH class="modal-close">"Volver al formulario"</A>
        </div>
    }
}
