//! Extension de `cwconfig::Config` pour les paramètres des vignettes.

use cwconfig::Config;
use serde_yaml::Value;

/// Taille par défaut des vignettes (50 % d'une couverture de 280).
pub const DEFAULT_THUMB_SIZE: u32 = 140;

/// Qualité WebP par défaut.
pub const DEFAULT_THUMB_QUALITY: f32 = 80.0;

/// Accès typé aux paramètres des vignettes dans la configuration.
pub trait ThumbsConfigExt {
    /// Côté des vignettes carrées, section `thumbs.size`.
    fn get_thumb_size(&self) -> u32;

    /// Qualité d'encodage WebP, section `thumbs.quality`.
    fn get_thumb_quality(&self) -> f32;
}

impl ThumbsConfigExt for Config {
    fn get_thumb_size(&self) -> u32 {
        match self.get_value(&["thumbs", "size"]) {
            Ok(Value::Number(n)) if n.is_u64() => n.as_u64().unwrap() as u32,
            _ => DEFAULT_THUMB_SIZE,
        }
    }

    fn get_thumb_quality(&self) -> f32 {
        match self.get_value(&["thumbs", "quality"]) {
            Ok(Value::Number(n)) => n.as_f64().map(|q| q as f32).unwrap_or(DEFAULT_THUMB_QUALITY),
            _ => DEFAULT_THUMB_QUALITY,
        }
    }
}
