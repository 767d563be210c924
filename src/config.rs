use serde::{Deserialize, Serialize};

pub const DEFAULT_MOUNT_SELECTOR: &str = "#app";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub mount_selector: String,
    pub router_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            mount_selector: DEFAULT_MOUNT_SELECTOR.to_string(),
            router_base: String::new(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
            option_env!("APP_MOUNT_SELECTOR"),
            option_env!("ROUTER_BASE_PATH"),
        )
    }

    fn from_values(
        environment: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
        mount_selector: Option<&str>,
        router_base: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            environment: environment.map(str::to_string).unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level.map(str::to_string).unwrap_or(defaults.log_level),
            mount_selector: mount_selector
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.mount_selector),
            router_base: router_base.map(str::to_string).unwrap_or(defaults.router_base),
        }
    }

    /// Nivel de log; valores desconocidos caen a Info
    pub fn level(&self) -> log::Level {
        self.log_level.trim().parse().unwrap_or(log::Level::Info)
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
