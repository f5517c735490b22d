//! # cwmotion - Physics and viewport math for CoverWorld
//!
//! Pure, deterministic math backing the gallery interaction:
//!
//! - [`spring`] : per-frame spring-damper integrator
//! - [`tilt`] : pointer-to-tilt targets and the specular highlight
//! - [`viewport`] : pan, anchored zoom and the enlarge scale
//! - [`active`] : open/close lifecycle of the enlarged cover
//!
//! Everything here is side-effect free and frame-based: input events set
//! targets, one `step`/`frame` call advances the simulation, the caller
//! owns the render loop and its cancellation. [`MotionSpec`] bundles the
//! tuning constants so the web frontend renders with the same numbers the
//! tests verify.

pub mod active;
pub mod spring;
pub mod tilt;
pub mod viewport;

pub use active::{ActiveController, ActiveItem, FLOAT_AMP, FLOAT_SPEED, Frame};
pub use spring::{DAMPING, STIFFNESS, Spring};
pub use tilt::{EDGE_EXPONENT, MAX_LIFT, MAX_TILT, Specular, TiltState, TiltTargets, pointer_targets};
pub use viewport::{
    DragPan, ENLARGE_SCALE_MAX, ENLARGE_SCALE_MIN, Pinch, Viewport, ZOOM_IN_LIMIT, ZOOM_OUT_LIMIT,
    enlarge_scale,
};

use serde::Serialize;

/// Tuning constants of the interaction, as served to the frontend.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MotionSpec {
    pub stiffness: f64,
    pub damping: f64,
    pub max_tilt: f64,
    pub max_lift: f64,
    pub edge_exponent: f64,
    pub float_amp: f64,
    pub float_speed: f64,
    pub zoom_in_limit: f64,
    pub zoom_out_limit: f64,
    pub enlarge_scale_min: f64,
    pub enlarge_scale_max: f64,
    pub enlarge_pad_max: f64,
    pub enlarge_pad_fraction: f64,
}

impl Default for MotionSpec {
    fn default() -> Self {
        Self {
            stiffness: STIFFNESS,
            damping: DAMPING,
            max_tilt: MAX_TILT,
            max_lift: MAX_LIFT,
            edge_exponent: EDGE_EXPONENT,
            float_amp: FLOAT_AMP,
            float_speed: FLOAT_SPEED,
            zoom_in_limit: ZOOM_IN_LIMIT,
            zoom_out_limit: ZOOM_OUT_LIMIT,
            enlarge_scale_min: ENLARGE_SCALE_MIN,
            enlarge_scale_max: ENLARGE_SCALE_MAX,
            enlarge_pad_max: viewport::ENLARGE_PAD_MAX,
            enlarge_pad_fraction: viewport::ENLARGE_PAD_FRACTION,
        }
    }
}
