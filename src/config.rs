// ============================================================================
// CONFIG - Configuración inyectada por el servidor en la página
// ============================================================================
// La plantilla del servidor define dos globales antes de cargar el WASM:
//   window.csrfTokenValue  - token CSRF para formularios que mutan estado
//   window.updateStatusUrl - endpoint POST de actualización de estado
// Se leen UNA VEZ al inicio y se pasan como objeto explícito (nada de
// globales ambiente dentro del crate).
// ============================================================================

use wasm_bindgen::prelude::*;

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub csrf_token: String,
    pub update_status_url: String,
}

impl DashboardConfig {
    /// Leer los globales de la página
    pub fn from_page() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;

        let csrf_token = read_global(&window, "csrfTokenValue")?;
        let update_status_url = read_global(&window, "updateStatusUrl")?;

        if csrf_token.is_empty() {
            log::warn!("⚠️ [CONFIG] csrfTokenValue vacío - el servidor rechazará los POST");
        }

        Ok(Self {
            csrf_token,
            update_status_url,
        })
    }
}

/// Leer un global de window como String (cadena vacía si falta o no es string)
fn read_global(window: &web_sys::Window, name: &str) -> Result<String, JsValue> {
    let value = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(name))?;
    Ok(value.as_string().unwrap_or_default())
}
