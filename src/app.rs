// ============================================================================
// APP - Wiring de eventos del dashboard
// ============================================================================
// Corre una sola vez por carga de página. Las filas insertadas después de la
// carga no quedan cableadas (limitación conocida: el servidor re-renderiza la
// página completa en cada mutación, así que en la práctica no ocurre).
// ============================================================================

use crate::config::DashboardConfig;
use crate::dom::{get_attribute, on_change, on_click, query_selector_all, query_selector_all_within};
use crate::state::DashboardState;
use crate::views::detail_modal::close_modal;
use crate::views::{apply_filter, show_delivery_detail, update_delivery_status};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;

/// Triggers que la plantilla marca con clases y atributos data-*
const DETAIL_TRIGGER_SELECTOR: &str = ".view-delivery-detail";
const STATUS_TRIGGER_SELECTOR: &str = ".update-delivery-status";
const MODAL_DISMISS_SELECTOR: &str = r#"[data-bs-dismiss="modal"]"#;

/// Aplicación del dashboard
pub struct App {
    state: DashboardState,
}

impl App {
    /// Leer la config de la página y resolver los elementos del dashboard
    pub fn new() -> Result<Self, JsValue> {
        let config = DashboardConfig::from_page()?;
        let state = DashboardState::new(config)?;
        Ok(Self { state })
    }

    /// Registrar todos los listeners (exactamente una vez)
    pub fn mount(&self) -> Result<(), JsValue> {
        self.wire_filter()?;
        self.wire_detail_triggers()?;
        self.wire_status_triggers()?;
        self.wire_modal_dismiss()?;
        log::info!("✅ [APP] Dashboard montado");
        Ok(())
    }

    /// Select de filtro: cada cambio re-evalúa todas las filas
    fn wire_filter(&self) -> Result<(), JsValue> {
        let select = self.state.filter_select.clone();
        on_change(&self.state.filter_select, move |_e| {
            let value = select
                .dyn_ref::<HtmlSelectElement>()
                .map(|s| s.value())
                .unwrap_or_default();
            if let Err(e) = apply_filter(&value.to_lowercase()) {
                log::error!("❌ [FILTER] Error aplicando filtro: {:?}", e);
            }
        })
    }

    /// Botones de ver detalle: leen data-delivery-id al momento del click
    fn wire_detail_triggers(&self) -> Result<(), JsValue> {
        let triggers = query_selector_all(DETAIL_TRIGGER_SELECTOR)?;
        log::info!("🔗 [APP] {} triggers de detalle", triggers.len());

        for trigger in triggers {
            let state = self.state.clone();
            let element = trigger.clone();
            on_click(&trigger, move |_e| {
                let Some(delivery_id) = get_attribute(&element, "data-delivery-id") else {
                    log::warn!("⚠️ [DETAIL] Trigger sin data-delivery-id");
                    return;
                };
                if let Err(e) = show_delivery_detail(&state, delivery_id) {
                    log::error!("❌ [DETAIL] Error abriendo modal: {:?}", e);
                }
            })?;
        }
        Ok(())
    }

    /// Botones de cambio de estado: leen data-delivery-id y data-status
    fn wire_status_triggers(&self) -> Result<(), JsValue> {
        let triggers = query_selector_all(STATUS_TRIGGER_SELECTOR)?;
        log::info!("🔗 [APP] {} triggers de estado", triggers.len());

        for trigger in triggers {
            let state = self.state.clone();
            let element = trigger.clone();
            on_click(&trigger, move |_e| {
                let delivery_id = get_attribute(&element, "data-delivery-id");
                let status = get_attribute(&element, "data-status");
                let (Some(delivery_id), Some(status)) = (delivery_id, status) else {
                    log::warn!("⚠️ [STATUS] Trigger sin data-delivery-id/data-status");
                    return;
                };
                if let Err(e) = update_delivery_status(&state, &delivery_id, &status) {
                    log::error!("❌ [STATUS] Error enviando formulario: {:?}", e);
                }
            })?;
        }
        Ok(())
    }

    /// Controles de cierre del modal (reemplazan al JS de Bootstrap)
    fn wire_modal_dismiss(&self) -> Result<(), JsValue> {
        let dismissers = query_selector_all_within(&self.state.modal, MODAL_DISMISS_SELECTOR)?;
        for dismisser in dismissers {
            let modal = self.state.modal.clone();
            on_click(&dismisser, move |_e| {
                if let Err(e) = close_modal(&modal) {
                    log::error!("❌ [MODAL] Error cerrando modal: {:?}", e);
                }
            })?;
        }
        Ok(())
    }
}
