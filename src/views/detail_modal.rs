// ============================================================================
// DETAIL MODAL VIEW - Modal de detalle de entrega
// ============================================================================
// El fragmento HTML viene pre-renderizado del servidor y se inyecta tal cual
// (servidor confiable, sin sanitización). El modal no cachea nada: cada
// apertura vuelve a pedir el fragmento.
//
// Concurrencia: dos aperturas seguidas no se cancelan entre sí; gana la
// respuesta que resuelve última, no la última petición. Con un solo modal y
// un solo usuario es una limitación aceptada.
// ============================================================================

use crate::dom::{add_class, remove_class, set_display, set_inner_html};
use crate::state::DashboardState;
use crate::utils::i18n::t;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Abrir el modal de detalle
pub fn open_modal(modal: &Element) -> Result<(), JsValue> {
    add_class(modal, "show")?;
    set_display(modal, "block")
}

/// Cerrar el modal de detalle
pub fn close_modal(modal: &Element) -> Result<(), JsValue> {
    remove_class(modal, "show")?;
    set_display(modal, "none")
}

/// Mostrar el detalle de una entrega: placeholder de carga primero (siempre
/// observable antes de que resuelva la red), luego fetch fire-and-forget.
pub fn show_delivery_detail(state: &DashboardState, delivery_id: String) -> Result<(), JsValue> {
    set_inner_html(&state.modal_content, &loading_markup(&state.language));
    open_modal(&state.modal)?;

    let api = state.api.clone();
    let content = state.modal_content.clone();
    let lang = state.language.to_string();

    wasm_bindgen_futures::spawn_local(async move {
        match api.fetch_delivery_details(&delivery_id).await {
            Ok(html) => {
                set_inner_html(&content, &html);
            }
            Err(e) => {
                // Cualquier causa (red, HTTP no-OK, parseo) colapsa en el
                // mismo mensaje; la causa real solo va al log
                log::error!("❌ [DETAIL] Error cargando entrega {}: {}", delivery_id, e);
                set_inner_html(&content, &error_markup(&lang));
            }
        }
    });

    Ok(())
}

/// Placeholder de carga (spinner Bootstrap)
pub fn loading_markup(lang: &str) -> String {
    format!(
        r#"<div class="text-center py-4"><div class="spinner-border" role="status"><span class="visually-hidden">{}</span></div><p class="mt-2">{}</p></div>"#,
        t("loading", lang),
        t("loading_details", lang)
    )
}

/// Mensaje de error genérico del modal
pub fn error_markup(lang: &str) -> String {
    format!(
        r#"<div class="alert alert-danger"><i class="fas fa-exclamation-triangle"></i> {}</div>"#,
        t("error_loading_details", lang)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_markup_has_spinner_and_text() {
        let markup = loading_markup("EN");
        assert!(markup.contains("spinner-border"));
        assert!(markup.contains("Loading delivery details..."));
    }

    #[test]
    fn test_error_markup_is_the_fixed_message() {
        let markup = error_markup("EN");
        assert!(markup.contains("alert-danger"));
        assert!(markup.contains("Error loading delivery details. Please try again."));
    }

    #[test]
    fn test_markup_is_localized() {
        assert!(loading_markup("ES").contains("Cargando detalles de la entrega..."));
        assert!(error_markup("ES").contains("Error cargando los detalles de la entrega."));
    }
}
