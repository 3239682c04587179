// ============================================================================
// DELIVERY API - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct DeliveryApi {
    base_url: String,
}

impl DeliveryApi {
    /// Cliente contra el mismo origen que sirvió la página
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    #[cfg(test)]
    fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Endpoint del fragmento de detalle de una entrega
    pub fn details_url(&self, delivery_id: &str) -> String {
        format!("{}/rider/delivery/{}/details", self.base_url, delivery_id)
    }

    /// Obtener el fragmento HTML de detalle de una entrega.
    /// Cualquier fallo (red, status no-OK, JSON malformado) se reporta como
    /// Err con la causa; la vista lo colapsa en un único mensaje genérico.
    pub async fn fetch_delivery_details(&self, delivery_id: &str) -> Result<String, String> {
        let url = self.details_url(delivery_id);

        log::info!("📋 Obteniendo detalle de entrega: {}", delivery_id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let detail = response
            .json::<DeliveryDetailResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!("✅ Detalle recibido: {} bytes de HTML", detail.html.len());

        Ok(detail.html)
    }
}

/// Respuesta del servidor: fragmento pre-renderizado
#[derive(serde::Deserialize)]
pub struct DeliveryDetailResponse {
    pub html: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_url_same_origin() {
        let api = DeliveryApi::new();
        assert_eq!(api.details_url("42"), "/rider/delivery/42/details");
    }

    #[test]
    fn test_details_url_with_base() {
        let api = DeliveryApi::with_base_url("https://example.test");
        assert_eq!(
            api.details_url("7"),
            "https://example.test/rider/delivery/7/details"
        );
    }

    #[test]
    fn test_detail_response_parse() {
        let detail: DeliveryDetailResponse =
            serde_json::from_str(r#"{"html": "<p>X</p>"}"#).unwrap();
        assert_eq!(detail.html, "<p>X</p>");
    }

    #[test]
    fn test_detail_response_parse_rejects_missing_field() {
        // El endpoint de error del servidor responde {"error": ...}; debe
        // tratarse como fallo de parseo, no como fragmento vacío
        let result = serde_json::from_str::<DeliveryDetailResponse>(r#"{"error": "not found"}"#);
        assert!(result.is_err());
    }
}
