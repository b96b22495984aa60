// ============================================================================
// APP - Aplicación principal (composición + render completo)
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::services::{ApiClient, Backend, LocalTokenStorage, Notifier, ToastNotifier, TokenStorage};
use crate::state::{AppState, SessionStore};
use crate::utils::router;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación montada en `#app`
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let backend: Rc<dyn Backend> = Rc::new(ApiClient::new());
        let storage: Rc<dyn TokenStorage> = Rc::new(LocalTokenStorage::new());
        let notifier: Rc<dyn Notifier> = Rc::new(ToastNotifier::new());

        let store = SessionStore::new(backend.clone(), storage, notifier.clone());

        let state = AppState::new(store, backend, notifier);
        *state.route.borrow_mut() = router::current_route();

        // Varios cambios seguidos producen un solo re-render
        let pending = Rc::new(Cell::new(false));
        state.subscribe_to_changes(move || {
            if pending.replace(true) {
                return;
            }
            let pending = pending.clone();
            Timeout::new(0, move || {
                pending.set(false);
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    /// Efecto de arranque: doctores y, si hay token, perfil
    pub fn start(&self) {
        let store = self.state.store.clone();
        spawn_local(async move {
            store.bootstrap().await;
        });
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        clear_children(&self.root);
        let app_view = render_app(&self.state)?;
        append_child(&self.root, &app_view)?;
        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
