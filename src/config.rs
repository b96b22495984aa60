use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_URL: &str = "http://localhost:4000";
const DEFAULT_CURRENCY_SYMBOL: &str = "$";
const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub currency_symbol: String,
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("CURRENCY_SYMBOL"),
            option_env!("TOAST_DURATION_MS"),
        )
    }

    /// Construye la config a partir de valores opcionales; lo que falte o no
    /// parsee toma el valor por defecto
    pub fn from_values(
        backend_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        currency_symbol: Option<&str>,
        toast_duration_ms: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.backend_url),
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            currency_symbol: currency_symbol
                .map(str::to_string)
                .unwrap_or(defaults.currency_symbol),
            toast_duration_ms: toast_duration_ms
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.toast_duration_ms),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel para wasm_logger: debug solo fuera de producción
    pub fn log_level(&self) -> log::Level {
        match (self.is_logging_enabled(), self.is_production()) {
            (false, _) => log::Level::Warn,
            (true, true) => log::Level::Info,
            (true, false) => log::Level::Debug,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
