// ============================================================================
// DELIVERY MODELS - Estructuras puras del dashboard
// ============================================================================
// Sin DOM ni red: todo lo de aquí es testeable en host.
// ============================================================================

/// Ciclo de vida de una entrega según el backend.
/// El servidor es quien valida las transiciones; los valores desconocidos
/// se pasan tal cual (ver `StatusUpdate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Assigned,
    PickedUp,
    OnTheWay,
    Delivered,
    Failed,
}

impl DeliveryStatus {
    /// Parsear el valor del atributo `data-status` (case-insensitive)
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "assigned" => Some(Self::Assigned),
            "picked_up" => Some(Self::PickedUp),
            "on_the_way" => Some(Self::OnTheWay),
            "delivered" => Some(Self::Delivered),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    /// Valor tal como viaja en el wire (form POST, atributos data-*)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::PickedUp => "picked_up",
            Self::OnTheWay => "on_the_way",
            Self::Delivered => "delivered",
            Self::Failed => "failed",
        }
    }
}

/// Filtro de estado seleccionado en el dashboard.
/// Cadena vacía = comodín (mostrar todas las filas).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFilter(String);

impl StatusFilter {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn is_wildcard(&self) -> bool {
        self.0.is_empty()
    }

    /// La visibilidad de una fila es función pura de (filtro, atributo).
    /// Un atributo ausente nunca casa con un filtro no vacío.
    pub fn matches(&self, row_status: Option<&str>) -> bool {
        if self.is_wildcard() {
            return true;
        }
        match row_status {
            Some(status) => status.to_lowercase() == self.0,
            None => false,
        }
    }
}

/// Payload transitorio de una actualización de estado.
/// Vive solo hasta que el formulario se envía y la página navega.
#[derive(Debug, Clone)]
pub struct StatusUpdate {
    pub delivery_id: String,
    pub status: String,
}

impl StatusUpdate {
    pub fn new(delivery_id: &str, status: &str) -> Self {
        Self {
            delivery_id: delivery_id.to_string(),
            status: status.to_string(),
        }
    }

    /// Los tres campos ocultos del formulario POST, en orden de inserción
    pub fn form_fields<'a>(&'a self, csrf_token: &'a str) -> [(&'static str, &'a str); 3] {
        [
            ("csrf_token", csrf_token),
            ("delivery_id", &self.delivery_id),
            ("status", &self.status),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_case_insensitive() {
        assert_eq!(DeliveryStatus::parse("delivered"), Some(DeliveryStatus::Delivered));
        assert_eq!(DeliveryStatus::parse("DELIVERED"), Some(DeliveryStatus::Delivered));
        assert_eq!(DeliveryStatus::parse("On_The_Way"), Some(DeliveryStatus::OnTheWay));
        assert_eq!(DeliveryStatus::parse("lost_in_space"), None);
        assert_eq!(DeliveryStatus::parse(""), None);
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            DeliveryStatus::Assigned,
            DeliveryStatus::PickedUp,
            DeliveryStatus::OnTheWay,
            DeliveryStatus::Delivered,
            DeliveryStatus::Failed,
        ] {
            assert_eq!(DeliveryStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = StatusFilter::new("");
        assert!(filter.is_wildcard());
        assert!(filter.matches(Some("delivered")));
        assert!(filter.matches(Some("anything")));
        assert!(filter.matches(None));
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let filter = StatusFilter::new("Delivered");
        assert!(filter.matches(Some("delivered")));
        assert!(filter.matches(Some("DELIVERED")));
        assert!(!filter.matches(Some("assigned")));
    }

    #[test]
    fn test_missing_attribute_fails_non_empty_filter() {
        let filter = StatusFilter::new("delivered");
        assert!(!filter.matches(None));
        assert!(!filter.matches(Some("")));
    }

    #[test]
    fn test_filter_is_idempotent() {
        // Misma entrada, misma visibilidad: no hay estado interno
        let filter = StatusFilter::new("picked_up");
        let rows = [Some("picked_up"), Some("delivered"), None];
        let first: Vec<bool> = rows.iter().map(|r| filter.matches(*r)).collect();
        let second: Vec<bool> = rows.iter().map(|r| filter.matches(*r)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_form_fields_exact_payload() {
        let update = StatusUpdate::new("42", "delivered");
        let fields = update.form_fields("tok-abc");
        assert_eq!(
            fields,
            [
                ("csrf_token", "tok-abc"),
                ("delivery_id", "42"),
                ("status", "delivered"),
            ]
        );
    }
}
