// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    if lang_upper.starts_with("ES") {
        // Detail Modal
        translations.insert("loading", "Cargando...");
        translations.insert("loading_details", "Cargando detalles de la entrega...");
        translations.insert(
            "error_loading_details",
            "Error cargando los detalles de la entrega. Inténtelo de nuevo.",
        );

        // Status updater
        translations.insert(
            "confirm_status_update",
            "¿Seguro que desea marcar esta entrega como {status}?",
        );
    } else {
        // EN por defecto
        translations.insert("loading", "Loading...");
        translations.insert("loading_details", "Loading delivery details...");
        translations.insert(
            "error_loading_details",
            "Error loading delivery details. Please try again.",
        );

        translations.insert(
            "confirm_status_update",
            "Are you sure you want to mark this delivery as {status}?",
        );
    }

    translations
}

/// Traducir una clave (fallback: la propia clave)
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);
    translations.get(key).unwrap_or(&key).to_string()
}

/// Mensaje de confirmación del cambio de estado, con el estado interpolado
pub fn confirm_status_update_message(status: &str, lang: &str) -> String {
    t("confirm_status_update", lang).replace("{status}", status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(t("loading", "EN"), "Loading...");
        assert_eq!(t("loading", "FR"), "Loading...");
        assert_eq!(t("loading", ""), "Loading...");
    }

    #[test]
    fn test_spanish_variants() {
        assert_eq!(t("loading", "ES"), "Cargando...");
        assert_eq!(t("loading", "es-MX"), "Cargando...");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t("no_such_key", "EN"), "no_such_key");
    }

    #[test]
    fn test_confirm_message_names_the_status() {
        let msg = confirm_status_update_message("delivered", "EN");
        assert_eq!(
            msg,
            "Are you sure you want to mark this delivery as delivered?"
        );
        assert!(confirm_status_update_message("failed", "ES").contains("failed"));
    }
}
