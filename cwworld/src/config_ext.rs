//! Extension de `cwconfig::Config` pour les paramètres du monde.
//!
//! Donne accès aux dimensions du monde et au répertoire des couvertures,
//! avec création automatique des répertoires gérés.

use crate::placement::WorldConfig;
use anyhow::Result;
use cwconfig::Config;
use serde_yaml::Value;
use std::path::Path;

fn get_f64(config: &Config, path: &[&str], default: f64) -> f64 {
    match config.get_value(path) {
        Ok(Value::Number(n)) => n.as_f64().unwrap_or(default),
        _ => default,
    }
}

fn get_usize(config: &Config, path: &[&str], default: usize) -> usize {
    match config.get_value(path) {
        Ok(Value::Number(n)) if n.is_u64() => n.as_u64().unwrap() as usize,
        _ => default,
    }
}

/// Accès typé aux paramètres du monde dans la configuration.
pub trait WorldConfigExt {
    /// Construit le [`WorldConfig`] depuis la section `world` de la
    /// configuration, en retombant sur les valeurs par défaut clé par clé.
    fn get_world_config(&self) -> WorldConfig;

    /// Répertoire des couvertures (créé s'il n'existe pas).
    fn get_covers_dir(&self) -> Result<String>;

    /// Sous-répertoire des vignettes, `thumbs/` dans le répertoire des
    /// couvertures (créé s'il n'existe pas).
    fn get_thumbs_dir(&self) -> Result<String>;
}

impl WorldConfigExt for Config {
    fn get_world_config(&self) -> WorldConfig {
        let d = WorldConfig::default();
        WorldConfig {
            world_w: get_f64(self, &["world", "width"], d.world_w),
            world_h: get_f64(self, &["world", "height"], d.world_h),
            cover_w: get_f64(self, &["world", "cover_width"], d.cover_w),
            cover_h: get_f64(self, &["world", "cover_height"], d.cover_h),
            gap: get_f64(self, &["world", "gap"], d.gap),
            edge_margin: get_f64(self, &["world", "edge_margin"], d.edge_margin),
            min_distance: get_f64(self, &["world", "min_distance"], d.min_distance),
            max_tries: get_usize(self, &["world", "max_tries"], d.max_tries),
        }
    }

    fn get_covers_dir(&self) -> Result<String> {
        self.get_managed_dir(&["world", "covers", "directory"], "covers")
    }

    fn get_thumbs_dir(&self) -> Result<String> {
        let covers = self.get_covers_dir()?;
        let thumbs = Path::new(&covers).join("thumbs");
        if !thumbs.exists() {
            std::fs::create_dir_all(&thumbs)?;
        }
        Ok(thumbs.to_string_lossy().to_string())
    }
}
