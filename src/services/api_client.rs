// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP. El store y el login
// dependen del trait `Backend`, no de `ApiClient` directamente.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{AuthRequest, AuthResponse, DoctorListResponse, ProfileResponse};

pub const DOCTOR_LIST_PATH: &str = "/api/doctor/list";
pub const PROFILE_PATH: &str = "/api/user/get-profile";

/// Header con el que el backend espera el token
pub const TOKEN_HEADER: &str = "token";

/// Superficie del backend que consume el frontend
#[async_trait(?Send)]
pub trait Backend {
    async fn list_doctors(&self) -> Result<DoctorListResponse, ApiError>;

    async fn get_profile(&self, token: &str) -> Result<ProfileResponse, ApiError>;

    /// Login o registro según la variante
    async fn authenticate(&self, request: &AuthRequest) -> Result<AuthResponse, ApiError>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.backend_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn auth_path(request: &AuthRequest) -> String {
        format!("/api/user/{}", request.endpoint())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Convierte la respuesta en `T` o en `ApiError::Http` con el mensaje del cuerpo
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_http_response(status, &status_text, &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[async_trait(?Send)]
impl Backend for ApiClient {
    async fn list_doctors(&self) -> Result<DoctorListResponse, ApiError> {
        let url = self.url(DOCTOR_LIST_PATH);
        log::info!("🩺 [API] GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(response).await
    }

    async fn get_profile(&self, token: &str) -> Result<ProfileResponse, ApiError> {
        let url = self.url(PROFILE_PATH);
        log::info!("👤 [API] GET {}", url);

        let response = Request::get(&url)
            .header(TOKEN_HEADER, token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(response).await
    }

    async fn authenticate(&self, request: &AuthRequest) -> Result<AuthResponse, ApiError> {
        let url = self.url(&Self::auth_path(request));
        log::info!("🔐 [API] POST {} ({})", url, request.email());

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(response).await
    }
}
