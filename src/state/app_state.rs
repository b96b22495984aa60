// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::services::{Backend, Notifier};
use crate::state::SessionStore;
use crate::utils::router::{resolve_route, Route};
use crate::viewmodels::{LoginForm, LoginViewModel, SubmitOutcome};

/// Estado global de la aplicación (raíz de composición)
#[derive(Clone)]
pub struct AppState {
    pub store: SessionStore,
    pub backend: Rc<dyn Backend>,
    pub notifier: Rc<dyn Notifier>,

    // UI State
    pub route: Rc<RefCell<Route>>,
    pub show_mobile_menu: Rc<RefCell<bool>>,

    /// El formulario vive aquí para sobrevivir a los re-renders
    pub login_form: Rc<RefCell<LoginForm>>,
    pub login_submitting: Rc<RefCell<bool>>,

    // Reactivity: Callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new(store: SessionStore, backend: Rc<dyn Backend>, notifier: Rc<dyn Notifier>) -> Self {
        let state = Self {
            store,
            backend,
            notifier,
            route: Rc::new(RefCell::new(Route::Home)),
            show_mobile_menu: Rc::new(RefCell::new(false)),
            login_form: Rc::new(RefCell::new(LoginForm::default())),
            login_submitting: Rc::new(RefCell::new(false)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        };

        // Los cambios del store se propagan a los subscribers de la app
        let subscribers = state.change_subscribers.clone();
        state.store.subscribe(move || {
            let callbacks: Vec<Rc<dyn Fn()>> = subscribers.borrow().clone();
            for callback in callbacks {
                callback();
            }
        });

        state
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify_subscribers(&self) {
        let callbacks: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in callbacks {
            callback();
        }
    }

    pub fn login_viewmodel(&self) -> LoginViewModel {
        LoginViewModel::new(self.backend.clone(), self.notifier.clone(), self.store.clone())
    }

    /// Enviar el formulario actual. Con éxito el formulario vuelve a su
    /// estado inicial y no conserva la contraseña.
    pub async fn submit_login(&self) -> SubmitOutcome {
        let form = self.login_form.borrow().clone();
        self.set_login_submitting(true);

        let outcome = self.login_viewmodel().submit(&form).await;

        if outcome == SubmitOutcome::Authenticated {
            self.login_form.replace(LoginForm::default());
        }
        self.set_login_submitting(false);
        outcome
    }

    /// Ruta a renderizar, con el guard del login aplicado
    pub fn current_route(&self) -> Route {
        resolve_route(self.route.borrow().clone(), self.store.is_authenticated())
    }

    /// Establecer ruta (desde `hashchange`); cierra el menú móvil
    pub fn set_route(&self, route: Route) {
        *self.route.borrow_mut() = route;
        *self.show_mobile_menu.borrow_mut() = false;
        self.notify_subscribers();
    }

    pub fn set_show_mobile_menu(&self, show: bool) {
        *self.show_mobile_menu.borrow_mut() = show;
        self.notify_subscribers();
    }

    pub fn set_login_submitting(&self, submitting: bool) {
        *self.login_submitting.borrow_mut() = submitting;
        self.notify_subscribers();
    }

    /// Cambiar login ↔ signup conservando lo ya escrito
    pub fn toggle_login_mode(&self) {
        self.login_form.borrow_mut().toggle_mode();
        self.notify_subscribers();
    }

    pub fn toggle_show_password(&self) {
        self.login_form.borrow_mut().toggle_show_password();
        self.notify_subscribers();
    }
}
