use serde::{Deserialize, Serialize};

/// Modo del formulario de acceso
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    /// Segmento final de `/api/user/<endpoint>`
    pub fn endpoint(self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Signup => "register",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Cuerpo de login o de registro; cada variante lleva solo sus campos
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(untagged)]
pub enum AuthRequest {
    Login(LoginRequest),
    Signup(SignupRequest),
}

impl AuthRequest {
    pub fn mode(&self) -> AuthMode {
        match self {
            AuthRequest::Login(_) => AuthMode::Login,
            AuthRequest::Signup(_) => AuthMode::Signup,
        }
    }

    pub fn endpoint(&self) -> &'static str {
        self.mode().endpoint()
    }

    pub fn email(&self) -> &str {
        match self {
            AuthRequest::Login(req) => &req.email,
            AuthRequest::Signup(req) => &req.email,
        }
    }
}

/// Respuesta de login/registro
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthResponse {
    /// Token utilizable: solo si `success` y no vacío
    pub fn session_token(&self) -> Option<&str> {
        if !self.success {
            return None;
        }
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}
