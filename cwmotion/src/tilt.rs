//! Tilt targets and specular highlight derived from the pointer.
//!
//! The cursor position over the enlarged cover is normalized to the item,
//! power-curved for edge emphasis, and turned into rotation/lift targets.
//! The rendered rotation then feeds the specular highlight position.

use crate::spring::Spring;

/// Maximum rotation around either axis, in degrees.
pub const MAX_TILT: f64 = 24.0;

/// Maximum Z lift, in pixels.
pub const MAX_LIFT: f64 = 34.0;

/// Exponent of the non-linear edge response curve.
pub const EDGE_EXPONENT: f64 = 1.35;

pub(crate) fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    v.max(lo).min(hi)
}

/// Rotation/lift targets for one pointer sample.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltTargets {
    /// Target rotation around X, degrees.
    pub rx: f64,
    /// Target rotation around Y, degrees.
    pub ry: f64,
    /// Target Z lift, pixels.
    pub z: f64,
    /// Radial distance of the cursor from the center, 0..1.
    pub hyp: f64,
}

/// Derives tilt targets from a pointer position, given in fractions of the
/// item (0..1 inside; values outside mean the cursor left the item).
///
/// Outside the item all targets return to rest. Inside, the normalized
/// offset is power-curved (`|n|^1.35`, sign kept) so the response grows
/// faster towards the edges, and the lift follows the radial distance.
pub fn pointer_targets(rel_x: f64, rel_y: f64) -> TiltTargets {
    let over = (0.0..=1.0).contains(&rel_x) && (0.0..=1.0).contains(&rel_y);
    if !over {
        return TiltTargets::default();
    }

    let x = clamp(rel_x, 0.0, 1.0);
    let y = clamp(rel_y, 0.0, 1.0);

    // normalized position -1..1
    let nx = (x - 0.5) * 2.0;
    let ny = (y - 0.5) * 2.0;

    let r = nx.hypot(ny).min(1.0);

    let ex = nx.signum() * nx.abs().powf(EDGE_EXPONENT);
    let ey = ny.signum() * ny.abs().powf(EDGE_EXPONENT);

    TiltTargets {
        rx: -ey * MAX_TILT,
        ry: ex * MAX_TILT,
        z: r * MAX_LIFT,
        hyp: r,
    }
}

/// Specular highlight parameters derived from the rendered tilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Specular {
    /// Highlight X position, percent of the item width.
    pub x_pct: f64,
    /// Highlight Y position, percent of the item height.
    pub y_pct: f64,
    /// Highlight intensity, 0..1.
    pub intensity: f64,
}

/// The three springs backing the tilt of the active item.
#[derive(Debug, Clone, Copy, Default)]
pub struct TiltState {
    pub rx: Spring,
    pub ry: Spring,
    pub z: Spring,
}

impl TiltState {
    /// Retargets the springs from a pointer sample.
    pub fn set_targets(&mut self, targets: TiltTargets) {
        self.rx.target = targets.rx;
        self.ry.target = targets.ry;
        self.z.target = targets.z;
    }

    /// Returns the tilt to rest (pointer left the item).
    pub fn release(&mut self) {
        self.set_targets(TiltTargets::default());
    }

    /// Advances all three springs by one frame.
    pub fn step(&mut self) {
        self.rx.step();
        self.ry.step();
        self.z.step();
    }

    /// Specular highlight for the current rendered rotation.
    ///
    /// The highlight slides opposite the tilt and its intensity grows with
    /// the tilt amount.
    pub fn specular(&self) -> Specular {
        let nx = clamp(self.ry.value / MAX_TILT, -1.0, 1.0);
        let ny = clamp(self.rx.value / MAX_TILT, -1.0, 1.0);
        let mag = nx.hypot(ny).min(1.0);
        Specular {
            x_pct: 50.0 + nx * 30.0,
            y_pct: 50.0 - ny * 30.0,
            intensity: 0.12 + mag * 0.40,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_pointer_is_neutral() {
        let t = pointer_targets(0.5, 0.5);
        assert_eq!(t, TiltTargets::default());
    }

    #[test]
    fn corner_pointer_reaches_full_tilt_and_lift() {
        let t = pointer_targets(1.0, 1.0);
        assert!((t.ry - MAX_TILT).abs() < 1e-9);
        assert!((t.rx + MAX_TILT).abs() < 1e-9);
        assert!((t.z - MAX_LIFT).abs() < 1e-9);
        assert!((t.hyp - 1.0).abs() < 1e-9);
    }

    #[test]
    fn edge_curve_underscales_mid_offsets() {
        // |0.5|^1.35 < 0.5 : mid offsets tilt less than linear.
        let t = pointer_targets(0.75, 0.5);
        assert!(t.ry > 0.0);
        assert!(t.ry < 0.5 * MAX_TILT);
    }

    #[test]
    fn leaving_the_item_resets_targets() {
        assert_eq!(pointer_targets(1.2, 0.5), TiltTargets::default());
        assert_eq!(pointer_targets(0.5, -0.1), TiltTargets::default());
    }

    #[test]
    fn specular_at_rest_is_centered_and_dim() {
        let state = TiltState::default();
        let s = state.specular();
        assert!((s.x_pct - 50.0).abs() < 1e-9);
        assert!((s.y_pct - 50.0).abs() < 1e-9);
        assert!((s.intensity - 0.12).abs() < 1e-9);
    }

    #[test]
    fn specular_follows_settled_tilt() {
        let mut state = TiltState::default();
        state.set_targets(pointer_targets(1.0, 0.5));
        for _ in 0..200 {
            state.step();
        }
        let s = state.specular();
        // Full right tilt pushes the highlight to 80%.
        assert!((s.x_pct - 80.0).abs() < 0.1);
        assert!(s.intensity > 0.5);
    }
}
