// ============================================================================
// STATUS FORM VIEW - Actualización de estado vía formulario oculto
// ============================================================================
// El envío provoca una navegación completa: el servidor valida la transición
// y responde con la página renderizada (flash incluido). Este componente no
// maneja la respuesta; su estado muere con la navegación.
// ============================================================================

use crate::dom::{append_child, document, ElementBuilder};
use crate::models::{DeliveryStatus, StatusUpdate};
use crate::state::DashboardState;
use crate::utils::i18n::confirm_status_update_message;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

/// Actualizar el estado de una entrega, previa confirmación del usuario.
/// Si el usuario cancela, no hay ningún efecto secundario.
pub fn update_delivery_status(
    state: &DashboardState,
    delivery_id: &str,
    status: &str,
) -> Result<(), JsValue> {
    // Los estados desconocidos se envían igual: el servidor es quien valida
    if DeliveryStatus::parse(status).is_none() {
        log::warn!("⚠️ [STATUS] Estado desconocido '{}' en el trigger", status);
    }

    if !confirm_status_update(status, &state.language) {
        log::info!("🚫 [STATUS] Actualización de {} cancelada por el usuario", delivery_id);
        return Ok(());
    }

    let update = StatusUpdate::new(delivery_id, status);
    log::info!("📦 [STATUS] Entrega {} → {}", delivery_id, status);
    submit_status_update(state, &update)
}

/// Diálogo de confirmación bloqueante nombrando el estado destino
fn confirm_status_update(status: &str, lang: &str) -> bool {
    let message = confirm_status_update_message(status, lang);
    match crate::dom::window() {
        Some(win) => win.confirm_with_message(&message).unwrap_or(false),
        None => false,
    }
}

/// Construir el formulario oculto (csrf_token, delivery_id, status),
/// adjuntarlo al documento y enviarlo. Dispara navegación de página completa.
fn submit_status_update(state: &DashboardState, update: &StatusUpdate) -> Result<(), JsValue> {
    let form = ElementBuilder::new("form")?
        .attr("method", "POST")?
        .attr("action", &state.config.update_status_url)?
        .build();

    for (name, value) in update.form_fields(&state.config.csrf_token) {
        let input = ElementBuilder::new("input")?
            .attr("type", "hidden")?
            .attr("name", name)?
            .attr("value", value)?
            .build();
        append_child(&form, &input)?;
    }

    let body = document()
        .and_then(|doc| doc.body())
        .ok_or_else(|| JsValue::from_str("No document body"))?;
    append_child(&body, &form)?;

    form.dyn_into::<HtmlFormElement>()?.submit()
}
