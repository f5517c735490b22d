//! Open/close lifecycle of the active (enlarged) item.
//!
//! Opening a cover computes the translation taking it from its on-screen
//! position to the viewport center, plus the enlarge scale. While open, a
//! per-frame loop advances the tilt springs and layers a slow floating
//! oscillation on top. Closing cancels the loop and drops the state.

use crate::tilt::{Specular, TiltState, TiltTargets, pointer_targets};
use crate::viewport::enlarge_scale;

/// Floating oscillation amplitude, pixels.
pub const FLOAT_AMP: f64 = 6.0;

/// Floating oscillation angular speed, radians per millisecond.
pub const FLOAT_SPEED: f64 = 0.003;

/// Fully resolved transform for one rendered frame of the active item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Translation from the resting position, pixels.
    pub dx: f64,
    /// Translation from the resting position, pixels (float included).
    pub dy: f64,
    /// Z lift, pixels.
    pub z: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Rotation around X, degrees.
    pub rx: f64,
    /// Rotation around Y, degrees.
    pub ry: f64,
    /// Specular highlight for this frame.
    pub specular: Specular,
}

/// State of the enlarged cover.
#[derive(Debug, Clone)]
pub struct ActiveItem {
    tilt: TiltState,
    dx: f64,
    dy: f64,
    scale: f64,
}

impl ActiveItem {
    /// Opens a cover whose on-screen center is `(origin_cx, origin_cy)`.
    ///
    /// The intrinsic cover size is used so the enlarged view has the same
    /// size regardless of the current zoom level.
    pub fn open(
        origin_cx: f64,
        origin_cy: f64,
        view_w: f64,
        view_h: f64,
        cover_w: f64,
        cover_h: f64,
    ) -> Self {
        let center_x = view_w / 2.0 - cover_w / 2.0;
        let center_y = view_h / 2.0 - cover_h / 2.0;
        Self {
            tilt: TiltState::default(),
            dx: center_x - (origin_cx - cover_w / 2.0),
            dy: center_y - (origin_cy - cover_h / 2.0),
            scale: enlarge_scale(view_w, view_h, cover_w, cover_h),
        }
    }

    /// Feeds a pointer sample, in fractions of the item.
    pub fn pointer(&mut self, rel_x: f64, rel_y: f64) -> TiltTargets {
        let targets = pointer_targets(rel_x, rel_y);
        self.tilt.set_targets(targets);
        targets
    }

    /// Pointer left the item: the tilt returns to rest.
    pub fn release(&mut self) {
        self.tilt.release();
    }

    /// Recomputes the centering translation after a viewport resize.
    pub fn resize(
        &mut self,
        origin_cx: f64,
        origin_cy: f64,
        view_w: f64,
        view_h: f64,
        cover_w: f64,
        cover_h: f64,
    ) {
        let next = Self::open(origin_cx, origin_cy, view_w, view_h, cover_w, cover_h);
        self.dx = next.dx;
        self.dy = next.dy;
        self.scale = next.scale;
    }

    /// Advances the springs one frame and resolves the transform at time
    /// `t_ms` (milliseconds, for the floating oscillation).
    pub fn frame(&mut self, t_ms: f64) -> Frame {
        self.tilt.step();
        let float_y = FLOAT_AMP * (t_ms * FLOAT_SPEED).sin();
        Frame {
            dx: self.dx,
            dy: self.dy + float_y,
            z: self.tilt.z.value,
            scale: self.scale,
            rx: self.tilt.rx.value,
            ry: self.tilt.ry.value,
            specular: self.tilt.specular(),
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

/// At most one item is active at a time; opening another closes the first.
#[derive(Debug, Default)]
pub struct ActiveController {
    active: Option<(String, ActiveItem)>,
}

impl ActiveController {
    /// Opens `cover_id`, replacing any previously active item.
    pub fn open(&mut self, cover_id: &str, item: ActiveItem) {
        self.active = Some((cover_id.to_string(), item));
    }

    /// Closes the active item, cancelling its animation state.
    pub fn close(&mut self) -> Option<String> {
        self.active.take().map(|(id, _)| id)
    }

    pub fn is_active(&self, cover_id: &str) -> bool {
        matches!(&self.active, Some((id, _)) if id == cover_id)
    }

    pub fn item_mut(&mut self) -> Option<&mut ActiveItem> {
        self.active.as_mut().map(|(_, item)| item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_centers_the_cover() {
        // Cover sitting at screen center: no translation needed.
        let item = ActiveItem::open(600.0, 400.0, 1200.0, 800.0, 280.0, 280.0);
        assert_eq!(item.dx, 0.0);
        assert_eq!(item.dy, 0.0);

        // Cover off to the top-left: translated right and down.
        let item = ActiveItem::open(100.0, 100.0, 1200.0, 800.0, 280.0, 280.0);
        assert_eq!(item.dx, 500.0);
        assert_eq!(item.dy, 300.0);
    }

    #[test]
    fn float_oscillation_is_bounded_by_amplitude() {
        let mut item = ActiveItem::open(600.0, 400.0, 1200.0, 800.0, 280.0, 280.0);
        for t in 0..2000 {
            let frame = item.frame(t as f64);
            assert!(frame.dy.abs() <= FLOAT_AMP + 1e-9);
        }
    }

    #[test]
    fn controller_keeps_a_single_active_item() {
        let mut ctrl = ActiveController::default();
        let item = ActiveItem::open(0.0, 0.0, 1200.0, 800.0, 280.0, 280.0);
        ctrl.open("a", item.clone());
        assert!(ctrl.is_active("a"));

        ctrl.open("b", item);
        assert!(!ctrl.is_active("a"));
        assert!(ctrl.is_active("b"));

        assert_eq!(ctrl.close(), Some("b".to_string()));
        assert_eq!(ctrl.close(), None);
    }

    #[test]
    fn close_cancels_animation_state() {
        let mut ctrl = ActiveController::default();
        let mut item = ActiveItem::open(0.0, 0.0, 1200.0, 800.0, 280.0, 280.0);
        item.pointer(1.0, 1.0);
        ctrl.open("a", item);
        ctrl.item_mut().unwrap().frame(16.0);

        ctrl.close();
        assert!(ctrl.item_mut().is_none());
    }

    #[test]
    fn pointer_then_frames_tilt_towards_target() {
        let mut item = ActiveItem::open(600.0, 400.0, 1200.0, 800.0, 280.0, 280.0);
        item.pointer(1.0, 0.5);
        let mut last = 0.0;
        for t in 0..200 {
            last = item.frame(t as f64 * 16.0).ry;
        }
        assert!((last - crate::tilt::MAX_TILT).abs() < 0.01);
    }
}
