//! Viewport math: pan, zoom and the enlarge scale.
//!
//! The viewport is a scrollable window onto the world. Zooming is anchored:
//! the world point under the given screen anchor stays fixed while the zoom
//! changes. Panning comes in two flavors, wheel deltas and pointer drags,
//! plus a two-finger pinch that rescales against the gesture start.

use crate::tilt::clamp;

/// Zoom upper bound: 100%, the world cannot be magnified.
pub const ZOOM_IN_LIMIT: f64 = 1.0;

/// Zoom lower bound: 35%, seeing roughly three times more world.
pub const ZOOM_OUT_LIMIT: f64 = 0.35;

/// Enlarge scale clamp.
pub const ENLARGE_SCALE_MIN: f64 = 1.1;
pub const ENLARGE_SCALE_MAX: f64 = 2.3;

/// Maximum screen padding around an enlarged cover, pixels.
pub const ENLARGE_PAD_MAX: f64 = 48.0;

/// Padding as a fraction of each viewport dimension.
pub const ENLARGE_PAD_FRACTION: f64 = 0.06;

/// Scrollable window onto the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub zoom: f64,
    pub view_w: f64,
    pub view_h: f64,
}

impl Viewport {
    pub fn new(view_w: f64, view_h: f64) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            zoom: 1.0,
            view_w,
            view_h,
        }
    }

    /// Applies a zoom change anchored at `(center_x, center_y)` in screen
    /// coordinates: the world point under the anchor stays put.
    pub fn apply_zoom(&mut self, new_zoom: f64, center_x: f64, center_y: f64) {
        let old_zoom = self.zoom;
        let new_zoom = clamp(new_zoom, ZOOM_OUT_LIMIT, ZOOM_IN_LIMIT);
        self.zoom = new_zoom;

        let world_x = (center_x + self.scroll_x) / old_zoom;
        let world_y = (center_y + self.scroll_y) / old_zoom;

        self.scroll_x = world_x * new_zoom - center_x;
        self.scroll_y = world_y * new_zoom - center_y;
    }

    /// Zoom step anchored at the viewport center (zoom buttons, ctrl+wheel).
    pub fn zoom_by(&mut self, delta: f64) {
        let cx = self.view_w / 2.0;
        let cy = self.view_h / 2.0;
        self.apply_zoom(self.zoom + delta, cx, cy);
    }

    /// Wheel pan: deltas add to the scroll offset directly.
    pub fn wheel_pan(&mut self, delta_x: f64, delta_y: f64) {
        self.scroll_x += delta_x;
        self.scroll_y += delta_y;
    }

    /// Centers the viewport on a cover rectangle given in world coordinates.
    pub fn center_on(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.scroll_x = x + w / 2.0 - self.view_w / 2.0;
        self.scroll_y = y + h / 2.0 - self.view_h / 2.0;
    }
}

/// An in-progress drag pan: scroll follows the pointer against the grab point.
#[derive(Debug, Clone, Copy)]
pub struct DragPan {
    start_x: f64,
    start_y: f64,
    scroll_start_x: f64,
    scroll_start_y: f64,
}

impl DragPan {
    /// Starts a drag at the given pointer position.
    pub fn begin(viewport: &Viewport, pointer_x: f64, pointer_y: f64) -> Self {
        Self {
            start_x: pointer_x,
            start_y: pointer_y,
            scroll_start_x: viewport.scroll_x,
            scroll_start_y: viewport.scroll_y,
        }
    }

    /// Updates the viewport for the current pointer position.
    pub fn update(&self, viewport: &mut Viewport, pointer_x: f64, pointer_y: f64) {
        viewport.scroll_x = self.scroll_start_x + self.start_x - pointer_x;
        viewport.scroll_y = self.scroll_start_y + self.start_y - pointer_y;
    }
}

/// An in-progress two-finger pinch.
#[derive(Debug, Clone, Copy)]
pub struct Pinch {
    start_dist: f64,
    start_zoom: f64,
    center_x: f64,
    center_y: f64,
}

impl Pinch {
    /// Starts a pinch from two touch points in screen coordinates.
    pub fn begin(viewport: &Viewport, a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            start_dist: (b.0 - a.0).hypot(b.1 - a.1),
            start_zoom: viewport.zoom,
            center_x: (a.0 + b.0) / 2.0,
            center_y: (a.1 + b.1) / 2.0,
        }
    }

    /// Rescales against the gesture start for the current touch points.
    pub fn update(&self, viewport: &mut Viewport, a: (f64, f64), b: (f64, f64)) {
        if self.start_dist <= 0.0 {
            return;
        }
        let dist = (b.0 - a.0).hypot(b.1 - a.1);
        let scale = dist / self.start_dist;
        viewport.apply_zoom(self.start_zoom * scale, self.center_x, self.center_y);
    }
}

/// Scale applied to the active cover so it fills the viewport minus padding.
///
/// The padding is 6% of each viewport dimension, capped at 48 px; the
/// resulting scale is clamped to [1.1, 2.3].
pub fn enlarge_scale(view_w: f64, view_h: f64, cover_w: f64, cover_h: f64) -> f64 {
    let pad = ENLARGE_PAD_MAX
        .min(view_w * ENLARGE_PAD_FRACTION)
        .min(view_h * ENLARGE_PAD_FRACTION);
    let max_w = view_w - pad * 2.0;
    let max_h = view_h - pad * 2.0;
    let scale = (max_w / cover_w).min(max_h / cover_h);
    clamp(scale, ENLARGE_SCALE_MIN, ENLARGE_SCALE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_under(viewport: &Viewport, screen_x: f64, screen_y: f64) -> (f64, f64) {
        (
            (screen_x + viewport.scroll_x) / viewport.zoom,
            (screen_y + viewport.scroll_y) / viewport.zoom,
        )
    }

    #[test]
    fn zoom_is_clamped() {
        let mut v = Viewport::new(1200.0, 800.0);
        v.zoom_by(10.0);
        assert_eq!(v.zoom, ZOOM_IN_LIMIT);
        v.zoom_by(-10.0);
        assert_eq!(v.zoom, ZOOM_OUT_LIMIT);
    }

    #[test]
    fn zoom_keeps_anchor_point_fixed() {
        let mut v = Viewport::new(1200.0, 800.0);
        v.scroll_x = 3000.0;
        v.scroll_y = 2000.0;

        let anchor = (600.0, 400.0);
        let before = world_under(&v, anchor.0, anchor.1);
        v.apply_zoom(0.5, anchor.0, anchor.1);
        let after = world_under(&v, anchor.0, anchor.1);

        assert!((before.0 - after.0).abs() < 1e-9);
        assert!((before.1 - after.1).abs() < 1e-9);
    }

    #[test]
    fn drag_pan_moves_against_the_pointer() {
        let mut v = Viewport::new(1200.0, 800.0);
        v.scroll_x = 100.0;
        v.scroll_y = 100.0;

        let drag = DragPan::begin(&v, 500.0, 500.0);
        drag.update(&mut v, 450.0, 520.0);

        assert_eq!(v.scroll_x, 150.0);
        assert_eq!(v.scroll_y, 80.0);
    }

    #[test]
    fn pinch_scales_against_gesture_start() {
        let mut v = Viewport::new(1200.0, 800.0);
        let pinch = Pinch::begin(&v, (500.0, 400.0), (700.0, 400.0));
        // Fingers moved to half the distance: zoom halves, then clamps.
        pinch.update(&mut v, (550.0, 400.0), (650.0, 400.0));
        assert_eq!(v.zoom, 0.5);
    }

    #[test]
    fn center_on_targets_the_cover_center() {
        let mut v = Viewport::new(1200.0, 800.0);
        v.center_on(4000.0, 3000.0, 280.0, 280.0);
        assert_eq!(v.scroll_x, 4000.0 + 140.0 - 600.0);
        assert_eq!(v.scroll_y, 3000.0 + 140.0 - 400.0);
    }

    #[test]
    fn enlarge_scale_is_clamped_on_both_ends() {
        // Tiny viewport: would shrink below 1.1.
        assert_eq!(enlarge_scale(300.0, 300.0, 280.0, 280.0), ENLARGE_SCALE_MIN);
        // Huge viewport: capped at 2.3.
        assert_eq!(
            enlarge_scale(4000.0, 3000.0, 280.0, 280.0),
            ENLARGE_SCALE_MAX
        );
    }

    #[test]
    fn enlarge_scale_honors_padding() {
        let vw = 1000.0;
        let vh = 700.0;
        let scale = enlarge_scale(vw, vh, 280.0, 280.0);
        let pad = 42.0; // min(48, 1000*0.06=60, 700*0.06=42)
        assert!((scale - (vh - 2.0 * pad) / 280.0).abs() < 1e-9);
    }
}
