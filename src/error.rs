// ============================================================================
// ERRORES - Fallos de transporte y de storage
// ============================================================================
// Los fallos lógicos (`success: false`) no son errores: llegan como respuesta
// normal y el llamador muestra el `message` del servidor tal cual.
// ============================================================================

use serde::Deserialize;
use thiserror::Error;

/// Texto genérico cuando no hay ningún mensaje utilizable
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No se pudo enviar la petición o no hubo respuesta
    #[error("Network error: {0}")]
    Network(String),

    /// Respuesta no-2xx
    #[error("{message}")]
    Http { status: u16, message: String },

    /// El cuerpo no es el JSON esperado
    #[error("Parse error: {0}")]
    Parse(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Construye un `Http` extrayendo `message` del cuerpo si es JSON,
    /// si no `HTTP <status>: <status text>`
    pub fn from_http_response(status: u16, status_text: &str, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                if status_text.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    format!("HTTP {}: {}", status, status_text)
                }
            });
        ApiError::Http { status, message }
    }

    /// Mensaje para el toast
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Mensaje de un fallo lógico, con fallback si el servidor no mandó nada
pub fn server_message(message: Option<&str>) -> String {
    match message {
        Some(m) if !m.trim().is_empty() => m.to_string(),
        _ => GENERIC_ERROR_MESSAGE.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("localStorage no disponible")]
    Unavailable,

    #[error("Error escribiendo '{0}' en localStorage")]
    Write(String),

    #[error("Error eliminando '{0}' de localStorage")]
    Remove(String),
}
