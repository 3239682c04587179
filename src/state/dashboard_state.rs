// ============================================================================
// DASHBOARD STATE - Referencias DOM + configuración compartidas
// ============================================================================
// No hay estado de negocio en el cliente: el atributo data-status de cada
// fila es la única fuente de verdad para el filtro. Aquí solo viven la
// config inyectada por el servidor y los elementos resueltos una vez al
// inicio, clonados dentro de los closures de eventos.
// ============================================================================

use crate::config::DashboardConfig;
use crate::dom::require_element_by_id;
use crate::services::DeliveryApi;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// IDs que la plantilla del servidor garantiza en el dashboard
const FILTER_SELECT_ID: &str = "statusFilter";
const MODAL_ID: &str = "deliveryDetailModal";
const MODAL_CONTENT_ID: &str = "deliveryDetailContent";

#[derive(Clone)]
pub struct DashboardState {
    pub config: Rc<DashboardConfig>,
    pub api: DeliveryApi,
    pub filter_select: Element,
    pub modal: Element,
    pub modal_content: Element,
    pub language: Rc<String>,
}

impl DashboardState {
    /// Resolver los elementos del dashboard una sola vez
    pub fn new(config: DashboardConfig) -> Result<Self, JsValue> {
        let filter_select = require_element_by_id(FILTER_SELECT_ID)?;
        let modal = require_element_by_id(MODAL_ID)?;
        let modal_content = require_element_by_id(MODAL_CONTENT_ID)?;

        Ok(Self {
            config: Rc::new(config),
            api: DeliveryApi::new(),
            filter_select,
            modal,
            modal_content,
            language: Rc::new(page_language()),
        })
    }
}

/// Idioma de la página según el atributo lang de <html> (default EN)
fn page_language() -> String {
    crate::dom::document()
        .and_then(|doc| doc.document_element())
        .and_then(|html| html.get_attribute("lang"))
        .map(|lang| lang.to_uppercase())
        .filter(|lang| !lang.is_empty())
        .unwrap_or_else(|| "EN".to_string())
}
