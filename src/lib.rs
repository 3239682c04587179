// ============================================================================
// RIDER DASHBOARD - FRONTEND (RUST PURO)
// ============================================================================
// Glue del dashboard de repartidores sobre plantillas renderizadas en servidor:
// - Views: Funciones que manipulan DOM (sin lógica de negocio)
// - Services: SOLO comunicación API
// - State: Config + referencias DOM resueltas una vez al inicio
// - Models: Estructuras puras (filtro, estados, payload del formulario)
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod views;

use crate::app::App;
use console_error_panic_hook;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(Config::default());
    log::info!("🛵 Rider Dashboard - Rust Puro");

    // Crear app y registrar listeners (una sola vez por carga de página)
    let app = App::new()?;
    app.mount()?;

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}
