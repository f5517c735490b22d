//! Géométrie du monde : rectangles et prédicat d'écart minimal.
//!
//! Le monde est un grand canvas virtuel sur lequel chaque couverture occupe
//! un rectangle fixe. Le seul invariant relationnel est l'écart minimal entre
//! deux rectangles placés, vérifié par [`min_gap`].

use serde::Serialize;

/// Rectangle axis-aligned dans les coordonnées du monde (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Centre du rectangle.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Vérifie que deux rectangles sont séparés d'au moins `min_distance`.
///
/// L'écart horizontal est `max(b.x - (a.x + a.w), a.x - (b.x + b.w))` et
/// l'écart vertical son analogue. Si les deux sont négatifs, les rectangles
/// se chevauchent. Sinon l'écart retenu est celui qui est positif, ou le
/// plus petit des deux quand les rectangles sont séparés sur les deux axes.
pub fn min_gap(a: &Rect, b: &Rect, min_distance: f64) -> bool {
    let h_gap = (b.x - (a.x + a.w)).max(a.x - (b.x + b.w));
    let v_gap = (b.y - (a.y + a.h)).max(a.y - (b.y + b.h));
    if h_gap < 0.0 && v_gap < 0.0 {
        return false;
    }
    let gap = if h_gap < 0.0 {
        v_gap
    } else if v_gap < 0.0 {
        h_gap
    } else {
        h_gap.min(v_gap)
    };
    gap >= min_distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rects_never_meet_gap() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert!(!min_gap(&a, &b, 0.0));
    }

    #[test]
    fn horizontal_gap_is_measured_between_edges() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(250.0, 0.0, 100.0, 100.0);
        // Bords verticaux distants de 150.
        assert!(min_gap(&a, &b, 150.0));
        assert!(!min_gap(&a, &b, 151.0));
    }

    #[test]
    fn diagonal_separation_uses_smaller_axis_gap() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(220.0, 260.0, 100.0, 100.0);
        // h_gap = 120, v_gap = 160 : l'écart retenu est 120.
        assert!(min_gap(&a, &b, 120.0));
        assert!(!min_gap(&a, &b, 121.0));
    }

    #[test]
    fn overlap_on_one_axis_uses_the_other() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 180.0, 100.0, 100.0);
        // Chevauchement horizontal, écart vertical de 80.
        assert!(min_gap(&a, &b, 80.0));
        assert!(!min_gap(&a, &b, 81.0));
    }
}
