//! Per-frame spring-damper integrator.
//!
//! The tilt interaction decouples input sampling from rendering cadence:
//! pointer events only move the *target*, and the rendered value chases it
//! one [`Spring::step`] per animation frame. The constants are tuned for a
//! trading-card feel, heavily damped with a slight residual bounce.

/// Spring stiffness applied to the target error each frame.
pub const STIFFNESS: f64 = 0.16;

/// Velocity damping factor applied each frame.
pub const DAMPING: f64 = 0.80;

/// A one-dimensional damped spring advanced once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spring {
    pub value: f64,
    pub velocity: f64,
    pub target: f64,
}

impl Spring {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Advances the spring by one frame:
    /// `v = (v + (target - value) * K) * D; value += v`.
    pub fn step(&mut self) {
        self.velocity = (self.velocity + (self.target - self.value) * STIFFNESS) * DAMPING;
        self.value += self.velocity;
    }

    /// True once both the error and the velocity are below `epsilon`.
    pub fn is_settled(&self, epsilon: f64) -> bool {
        (self.target - self.value).abs() < epsilon && self.velocity.abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spring_converges_to_target() {
        let mut spring = Spring::new(0.0);
        spring.target = 24.0;
        for _ in 0..120 {
            spring.step();
        }
        assert!(spring.is_settled(1e-3));
        assert!((spring.value - 24.0).abs() < 1e-3);
    }

    #[test]
    fn spring_never_diverges() {
        let mut spring = Spring::new(0.0);
        spring.target = 1.0;
        let mut max = 0.0f64;
        for _ in 0..500 {
            spring.step();
            max = max.max(spring.value.abs());
        }
        // Heavily damped: the overshoot stays small.
        assert!(max < 1.5, "overshoot {max}");
    }

    #[test]
    fn retargeting_mid_flight_is_stable() {
        let mut spring = Spring::new(0.0);
        spring.target = 24.0;
        for _ in 0..10 {
            spring.step();
        }
        spring.target = -24.0;
        for _ in 0..200 {
            spring.step();
        }
        assert!((spring.value + 24.0).abs() < 1e-3);
    }
}
