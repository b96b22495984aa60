// ============================================================================
// LOGIN VIEWMODEL - Formulario login/signup y envío
// ============================================================================
// Un solo formulario con dos modos. `request()` resuelve el modo en el tipo
// suma `AuthRequest`, así cada variante lleva exactamente sus campos.
// ============================================================================

use std::rc::Rc;

use thiserror::Error;

use crate::error::server_message;
use crate::models::{AuthMode, AuthRequest, LoginRequest, SignupRequest};
use crate::services::{Backend, Notifier};
use crate::state::SessionStore;
use crate::utils::constants::MIN_PASSWORD_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Name,
    Email,
    Password,
}

impl LoginField {
    pub fn id(self) -> &'static str {
        match self {
            LoginField::Name => "name",
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LoginField::Name => "Full Name",
            LoginField::Email => "Email",
            LoginField::Password => "Password",
        }
    }
}

/// Mismas restricciones que `required` / `minlength` en los inputs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Missing(LoginField),

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub show_password: bool,
}

impl LoginForm {
    /// Cambiar de modo; los valores escritos se conservan
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn set_field(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Name => self.name = value,
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
    }

    pub fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Name => &self.name,
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    /// Campos visibles en el modo actual, en orden
    pub fn fields(&self) -> &'static [LoginField] {
        match self.mode {
            AuthMode::Login => &[LoginField::Email, LoginField::Password],
            AuthMode::Signup => &[LoginField::Name, LoginField::Email, LoginField::Password],
        }
    }

    pub fn is_required(&self, field: LoginField) -> bool {
        self.fields().contains(&field)
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Create Account",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Please log in to book appointment",
            AuthMode::Signup => "Please sign up to book appointment",
        }
    }

    pub fn submit_label(&self, busy: bool) -> &'static str {
        if busy {
            "Processing..."
        } else {
            self.title()
        }
    }

    /// Texto y enlace para cambiar de modo
    pub fn switch_prompt(&self) -> (&'static str, &'static str) {
        match self.mode {
            AuthMode::Login => ("Create a new account? ", "click here"),
            AuthMode::Signup => ("Already have an account? ", "Login here"),
        }
    }

    pub fn password_input_type(&self) -> &'static str {
        if self.show_password {
            "text"
        } else {
            "password"
        }
    }

    pub fn password_toggle_label(&self) -> &'static str {
        if self.show_password {
            "Hide"
        } else {
            "Show"
        }
    }

    /// Validar y construir el cuerpo de la petición
    pub fn request(&self) -> Result<AuthRequest, FormError> {
        for &field in self.fields() {
            if self.value(field).trim().is_empty() {
                return Err(FormError::Missing(field));
            }
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort(MIN_PASSWORD_LEN));
        }

        let email = self.email.trim().to_string();
        let password = self.password.clone();
        Ok(match self.mode {
            AuthMode::Login => AuthRequest::Login(LoginRequest { email, password }),
            AuthMode::Signup => AuthRequest::Signup(SignupRequest {
                name: self.name.trim().to_string(),
                email,
                password,
            }),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Token entregado al store; la vista navega a Home
    Authenticated,
    /// El backend rechazó o falló; el formulario queda como estaba
    Rejected(String),
    Invalid(FormError),
}

/// ViewModel de login - SOLO lógica, sin DOM
pub struct LoginViewModel {
    backend: Rc<dyn Backend>,
    notifier: Rc<dyn Notifier>,
    store: SessionStore,
}

impl LoginViewModel {
    pub fn new(backend: Rc<dyn Backend>, notifier: Rc<dyn Notifier>, store: SessionStore) -> Self {
        Self { backend, notifier, store }
    }

    pub async fn submit(&self, form: &LoginForm) -> SubmitOutcome {
        let request = match form.request() {
            Ok(request) => request,
            Err(e) => {
                self.notifier.error(&e.to_string());
                return SubmitOutcome::Invalid(e);
            }
        };

        log::info!("🔐 [LOGIN] Enviando {} para {}", request.endpoint(), request.email());

        let response = match self.backend.authenticate(&request).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("❌ [LOGIN] {:?}", e);
                let message = e.user_message();
                self.notifier.error(&message);
                return SubmitOutcome::Rejected(message);
            }
        };

        let Some(token) = response.session_token().map(str::to_string) else {
            let message = server_message(response.message.as_deref());
            log::warn!("⚠️ [LOGIN] Rechazado: {}", message);
            self.notifier.error(&message);
            return SubmitOutcome::Rejected(message);
        };

        let done = match request.mode() {
            AuthMode::Login => "Successfully logged in",
            AuthMode::Signup => "Successfully registered",
        };
        self.notifier.success(done);
        log::info!("✅ [LOGIN] {}", done);

        self.store.set_token(Some(token)).await;
        SubmitOutcome::Authenticated
    }
}
