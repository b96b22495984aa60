// ============================================================================
// DOCTOR BOOKING WEB - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Login, navbar
// - Services: HTTP, token storage, toasts
// - State: SessionStore + AppState con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

mod app;
pub mod config;
mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
mod views;

#[cfg(test)]
mod testing;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;
use crate::state::AppState;
use crate::utils::router;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 Doctor Booking Web ({}) → {}",
        CONFIG.environment,
        CONFIG.backend_url
    );

    let mut app = App::new()?;
    app.render()?;
    app.start();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Listener global: se registra UNA SOLA VEZ
    dom::on_window_event("hashchange", |_| {
        if let Some(state) = app_state() {
            state.set_route(router::current_route());
        }
    })?;

    Ok(())
}

/// Clon del estado sin mantener el borrow de APP
fn app_state() -> Option<AppState> {
    APP.with(|app_cell| app_cell.borrow().as_ref().map(|app| app.state().clone()))
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref mut app) = *app_cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ [APP] Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ [APP] App no está inicializada");
        }
    });
}
