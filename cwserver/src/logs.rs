//! Initialisation du logging applicatif.
//!
//! Installe un subscriber `tracing` sur la console. Le niveau minimum
//! vient de la configuration (`host.logger.min_level`) ; la variable
//! d'environnement `RUST_LOG` a priorité quand elle est définie.

use cwconfig::get_config;
use tracing_subscriber::EnvFilter;

/// Options de configuration du logging
#[derive(Debug, Clone, Default)]
pub struct LoggingOptions {
    /// Niveau minimum explicite ; `None` lit la configuration.
    pub min_level: Option<String>,
}

/// Initialise le système de logging
///
/// Idempotent : un second appel (typiquement dans les tests) est ignoré.
pub fn init_logging(options: LoggingOptions) {
    let min_level = match options.min_level {
        Some(level) => level,
        None => get_config()
            .get_log_min_level()
            .unwrap_or_else(|_| "INFO".to_string()),
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(min_level.to_lowercase()));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
