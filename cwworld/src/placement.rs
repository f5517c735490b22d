//! Placement aléatoire sans chevauchement.
//!
//! Échantillonnage par acceptation-rejet : pour chaque couverture on tire
//! jusqu'à `max_tries` rectangles uniformes dans la zone utile (monde moins
//! la marge de bord) et on garde le premier qui respecte l'écart minimal
//! avec tous les rectangles déjà placés. En cas d'épuisement des essais, le
//! dernier candidat est conservé tel quel : le placement est best-effort,
//! pas une garantie. Complexité O(N²), suffisante pour quelques dizaines
//! d'items — pas d'index spatial.

use crate::geometry::{min_gap, Rect};
use rand::Rng;
use serde::Serialize;
use tracing::warn;

/// Dimensions et contraintes du monde.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WorldConfig {
    /// Largeur du monde en pixels.
    pub world_w: f64,
    /// Hauteur du monde en pixels.
    pub world_h: f64,
    /// Largeur d'une couverture.
    pub cover_w: f64,
    /// Hauteur d'une couverture.
    pub cover_h: f64,
    /// Marge interne ajoutée autour de chaque couverture lors du placement.
    pub gap: f64,
    /// Marge inviolable le long des bords du monde.
    pub edge_margin: f64,
    /// Écart minimal entre deux rectangles placés.
    pub min_distance: f64,
    /// Nombre maximal d'essais par couverture.
    pub max_tries: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_w: 8000.0,
            world_h: 8000.0,
            cover_w: 280.0,
            cover_h: 280.0,
            gap: 24.0,
            edge_margin: 500.0,
            min_distance: 100.0,
            max_tries: 5000,
        }
    }
}

impl WorldConfig {
    /// Taille du rectangle de placement (couverture plus marge interne).
    pub fn slot_size(&self) -> (f64, f64) {
        (self.cover_w + self.gap, self.cover_h + self.gap)
    }

    /// Place `count` rectangles dans le monde.
    ///
    /// Le résultat contient toujours exactement `count` rectangles, positions
    /// figées pour la session. Les placements forcés (essais épuisés) sont
    /// comptés et signalés dans les logs.
    pub fn place<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Rect> {
        let (rw, rh) = self.slot_size();
        let span_x = self.world_w - rw - self.edge_margin * 2.0;
        let span_y = self.world_h - rh - self.edge_margin * 2.0;

        let mut placed: Vec<Rect> = Vec::with_capacity(count);
        let mut forced = 0usize;

        for _ in 0..count {
            let mut candidate = Rect::new(self.edge_margin, self.edge_margin, rw, rh);
            let mut accepted = false;

            for _ in 0..self.max_tries {
                let x = rng.random::<f64>() * span_x + self.edge_margin;
                let y = rng.random::<f64>() * span_y + self.edge_margin;
                candidate = Rect::new(x, y, rw, rh);

                if placed
                    .iter()
                    .all(|other| min_gap(&candidate, other, self.min_distance))
                {
                    accepted = true;
                    break;
                }
            }

            if !accepted {
                forced += 1;
            }
            placed.push(candidate);
        }

        if forced > 0 {
            warn!(
                forced,
                total = count,
                "Retry budget exhausted, kept last candidates as-is"
            );
        }

        placed
    }

    /// Compte les paires de rectangles violant l'écart minimal.
    ///
    /// Zéro pour un placement réussi ; non nul seulement après des
    /// placements forcés.
    pub fn violations(&self, rects: &[Rect]) -> usize {
        let mut count = 0;
        for i in 0..rects.len() {
            for j in (i + 1)..rects.len() {
                if !min_gap(&rects[i], &rects[j], self.min_distance) {
                    count += 1;
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn placement_stays_inside_inset_bounds() {
        let config = WorldConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let rects = config.place(46, &mut rng);

        assert_eq!(rects.len(), 46);
        for r in &rects {
            assert!(r.x >= config.edge_margin);
            assert!(r.y >= config.edge_margin);
            assert!(r.x + r.w <= config.world_w - config.edge_margin);
            assert!(r.y + r.h <= config.world_h - config.edge_margin);
        }
    }

    #[test]
    fn sparse_world_has_no_violations() {
        let config = WorldConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let rects = config.place(46, &mut rng);
        assert_eq!(config.violations(&rects), 0);
    }

    #[test]
    fn saturated_world_still_returns_every_item() {
        // Monde trop petit pour 30 items : le placement force les derniers.
        let config = WorldConfig {
            world_w: 2000.0,
            world_h: 2000.0,
            max_tries: 50,
            ..WorldConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let rects = config.place(30, &mut rng);
        assert_eq!(rects.len(), 30);
    }
}
