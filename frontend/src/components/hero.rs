//! Hero section component

use leptos::*;

use crate::APP_TITLE;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_TITLE}</h1>
            <p class="subtitle">
                "Sube el documento en PDF, completa los datos del abogado y del cliente, "
                "y descarga el reporte generado."
            </p>
        </div>
    }
}
