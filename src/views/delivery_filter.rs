// ============================================================================
// DELIVERY FILTER VIEW - Visibilidad de filas por estado
// ============================================================================
// Se re-evalúa el conjunto completo de filas en cada cambio del select;
// nada incremental. La visibilidad es función pura de (filtro, data-status).
// ============================================================================

use crate::dom::{get_attribute, query_selector_all, set_display};
use crate::models::StatusFilter;
use wasm_bindgen::prelude::*;

/// Selector de las filas de entrega renderizadas por el servidor
const DELIVERY_ROW_SELECTOR: &str = ".delivery-row";

/// Aplicar el filtro de estado a todas las filas del documento
pub fn apply_filter(filter_value: &str) -> Result<(), JsValue> {
    let filter = StatusFilter::new(filter_value);
    let rows = query_selector_all(DELIVERY_ROW_SELECTOR)?;

    let mut visible = 0usize;
    for row in &rows {
        let status = get_attribute(row, "data-status");
        if filter.matches(status.as_deref()) {
            set_display(row, row_display(true))?;
            visible += 1;
        } else {
            set_display(row, row_display(false))?;
        }
    }

    log::info!(
        "🔍 [FILTER] '{}': {}/{} filas visibles",
        filter_value,
        visible,
        rows.len()
    );

    Ok(())
}

/// Valor CSS de display para una fila según su visibilidad
fn row_display(visible: bool) -> &'static str {
    if visible {
        "table-row"
    } else {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_display_values() {
        assert_eq!(row_display(true), "table-row");
        assert_eq!(row_display(false), "none");
    }
}
