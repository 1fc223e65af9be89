//! Touch ripple feedback.
//!
//! A ripple is a short-lived circle that grows out of the point where a
//! button was pressed while fading to nothing. [`RippleController`] owns the
//! ripples of one surface, [`RippleLayer`] keeps one controller per surface on
//! screen, and [`ripple_visual`] turns a ripple's progress into geometry
//! without touching any rendering backend.

mod controller;
mod layer;

pub use controller::{Ripple, RippleController};
pub use layer::RippleLayer;

/// Radius of the ripple circle before scaling, in cell widths.
pub const BASE_RADIUS: f32 = 2.0;
/// Scale of the circle once the animation has finished.
pub const MAX_SCALE: f32 = 4.0;
/// Opacity at the moment of the touch.
pub const START_OPACITY: f32 = 0.5;

/// Identifier of a ripple, unique among the active ripples of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RippleId(pub u64);

/// Cubic ease-out: fast start, slowing down as `t` approaches 1.
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// What to draw for a ripple at a given progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleVisual {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    pub opacity: f32,
}

impl RippleVisual {
    /// Whether the point lies inside the circle. `aspect` stretches the
    /// vertical axis, since terminal cells are about twice as tall as wide.
    pub fn covers(&self, x: f32, y: f32, aspect: f32) -> bool {
        let dx = x - self.center_x;
        let dy = (y - self.center_y) * aspect;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Radius grows and opacity drops linearly with `progress`.
pub fn ripple_visual(origin_x: f32, origin_y: f32, progress: f32) -> RippleVisual {
    let progress = progress.clamp(0.0, 1.0);
    RippleVisual {
        center_x: origin_x,
        center_y: origin_y,
        radius: BASE_RADIUS * MAX_SCALE * progress,
        opacity: START_OPACITY * (1.0 - progress),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
        assert_eq!(ease_out(-1.0), 0.0);
        assert_eq!(ease_out(2.0), 1.0);
    }

    #[test]
    fn test_visual_at_creation() {
        let v = ripple_visual(4.0, 1.0, 0.0);
        assert_eq!((v.center_x, v.center_y), (4.0, 1.0));
        assert_eq!(v.radius, 0.0);
        assert_eq!(v.opacity, START_OPACITY);
        assert!(v.opacity < 1.0);
    }

    #[test]
    fn test_visual_at_completion() {
        let v = ripple_visual(0.0, 0.0, 1.0);
        assert_eq!(v.radius, BASE_RADIUS * MAX_SCALE);
        assert_eq!(v.opacity, 0.0);
    }

    #[test]
    fn test_visual_is_linear_in_progress() {
        let half = ripple_visual(0.0, 0.0, 0.5);
        let full = ripple_visual(0.0, 0.0, 1.0);
        assert!((half.radius * 2.0 - full.radius).abs() < 1e-6);
        assert!((half.opacity - START_OPACITY / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_covers_respects_aspect() {
        let v = ripple_visual(0.0, 0.0, 0.5); // radius 4
        assert!(v.covers(4.0, 0.0, 2.0));
        assert!(!v.covers(0.0, 3.0, 2.0));
        assert!(v.covers(0.0, 2.0, 2.0));
    }
}
