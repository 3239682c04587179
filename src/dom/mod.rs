// ============================================================================
// DOM MODULE - Helpers para manipulación DOM
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Para listeners en elementos del DOM: cuando el elemento se destruye,
//   el navegador automáticamente limpia los listeners asociados, por lo que
//   closure.forget() es seguro para listeners locales.
// - El wiring de App::mount() corre UNA sola vez por carga de página, así que
//   no hay acumulación de listeners globales.
// ============================================================================

pub mod builder;
pub mod element;
pub mod events;

pub use builder::*;
pub use element::*;
pub use events::*;
