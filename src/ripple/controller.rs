use super::{ease_out, RippleId};
use std::time::{Duration, Instant};
use tracing::trace;

/// Default time a ripple takes to grow and fade out.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);

/// Where a ripple is in its lifecycle. There are no backward transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RipplePhase {
    Created,
    Animating,
    Completed,
}

/// One touch-positioned feedback circle.
#[derive(Debug, Clone)]
pub struct Ripple {
    pub id: RippleId,
    /// Origin in the surface's local cell coordinates.
    pub origin_x: f32,
    pub origin_y: f32,
    pub started_at: Instant,
    progress: f32,
}

impl Ripple {
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn phase(&self) -> RipplePhase {
        if self.progress <= 0.0 {
            RipplePhase::Created
        } else if self.progress < 1.0 {
            RipplePhase::Animating
        } else {
            RipplePhase::Completed
        }
    }
}

/// Owns the active ripples of a single pressable surface.
///
/// A touch fires the surface's press callback first and then starts a new
/// ripple; the two never influence each other afterwards. Ripples are only
/// moved forward by [`advance`](Self::advance), which the host calls once per
/// animation frame, and are dropped as soon as they finish.
#[derive(Debug)]
pub struct RippleController {
    ripples: Vec<Ripple>,
    next_id: u64,
    duration: Duration,
    enabled: bool,
}

impl Default for RippleController {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

impl RippleController {
    pub fn new(duration: Duration) -> Self {
        Self {
            ripples: Vec::new(),
            next_id: 0,
            duration,
            enabled: true,
        }
    }

    /// A controller that still forwards presses but never draws anything.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Handle a touch at `(x, y)` relative to the surface.
    ///
    /// `on_press` runs exactly once, before the ripple exists. Coordinates
    /// outside the surface are accepted; the renderer clips them.
    pub fn on_touch(
        &mut self,
        x: f32,
        y: f32,
        now: Instant,
        on_press: Option<&mut dyn FnMut()>,
    ) -> Option<RippleId> {
        if let Some(callback) = on_press {
            callback();
        }

        if !self.enabled {
            return None;
        }

        let id = RippleId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.ripples.push(Ripple {
            id,
            origin_x: x,
            origin_y: y,
            started_at: now,
            progress: 0.0,
        });
        Some(id)
    }

    /// Move every ripple forward to `now` and drop the finished ones.
    /// Returns how many ripples completed.
    pub fn advance(&mut self, now: Instant) -> usize {
        let duration = self.duration.as_secs_f32();
        for ripple in &mut self.ripples {
            let elapsed = now.saturating_duration_since(ripple.started_at).as_secs_f32();
            let t = if duration > 0.0 {
                (elapsed / duration).clamp(0.0, 1.0)
            } else {
                1.0
            };
            // The eased curve rounds to 1.0 in f32 well before the end, so only
            // a fully elapsed duration may complete a ripple.
            let eased = if t < 1.0 {
                ease_out(t).min(1.0 - f32::EPSILON)
            } else {
                1.0
            };
            ripple.progress = ripple.progress.max(eased);
        }

        let before = self.ripples.len();
        self.ripples.retain(|r| {
            let done = r.phase() == RipplePhase::Completed;
            if done {
                trace!(id = r.id.0, "ripple finished");
            }
            !done
        });
        before - self.ripples.len()
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    #[cfg(test)]
    pub fn get(&self, id: RippleId) -> Option<&Ripple> {
        self.ripples.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_idle(&self) -> bool {
        self.ripples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_touch_creates_ripple_at_origin() {
        let mut ctl = RippleController::default();
        let t0 = Instant::now();
        let id = ctl.on_touch(3.0, 1.5, t0, None).unwrap();
        let ripple = ctl.get(id).unwrap();
        assert_eq!(ripple.origin_x, 3.0);
        assert_eq!(ripple.origin_y, 1.5);
        assert_eq!(ripple.progress(), 0.0);
        assert_eq!(ripple.phase(), RipplePhase::Created);
    }

    #[test]
    fn test_press_callback_fires_once() {
        let mut ctl = RippleController::default();
        let mut calls = 0;
        ctl.on_touch(0.0, 0.0, Instant::now(), Some(&mut || calls += 1));
        assert_eq!(calls, 1);
        assert_eq!(ctl.len(), 1);
    }

    #[test]
    fn test_missing_callback_is_noop() {
        let mut ctl = RippleController::default();
        assert!(ctl.on_touch(1.0, 1.0, Instant::now(), None).is_some());
        assert_eq!(ctl.len(), 1);
    }

    #[test]
    fn test_out_of_range_touch_is_accepted() {
        let mut ctl = RippleController::default();
        assert!(ctl.on_touch(-4.0, 900.0, Instant::now(), None).is_some());
    }

    #[test]
    fn test_disabled_controller_still_presses() {
        let mut ctl = RippleController::disabled();
        let mut pressed = false;
        let id = ctl.on_touch(0.0, 0.0, Instant::now(), Some(&mut || pressed = true));
        assert!(pressed);
        assert!(id.is_none());
        assert!(ctl.is_idle());
    }

    #[test]
    fn test_progress_is_monotonic_and_eases_out() {
        let mut ctl = RippleController::default();
        let t0 = Instant::now();
        let id = ctl.on_touch(0.0, 0.0, t0, None).unwrap();

        let mut last = 0.0;
        let mut last_step = f32::MAX;
        for step in 1..10u64 {
            ctl.advance(t0 + ms(step * 50));
            let p = ctl.get(id).unwrap().progress();
            assert!(p > last);
            assert!(p - last < last_step, "rate should decrease");
            last_step = p - last;
            last = p;
        }
        assert_eq!(ctl.get(id).unwrap().phase(), RipplePhase::Animating);

        // Going back in time never rewinds the animation.
        ctl.advance(t0 + ms(10));
        assert_eq!(ctl.get(id).unwrap().progress(), last);
    }

    #[test]
    fn test_ripple_removed_on_completion() {
        let mut ctl = RippleController::default();
        let t0 = Instant::now();
        ctl.on_touch(0.0, 0.0, t0, None);
        assert_eq!(ctl.advance(t0 + ms(499)), 0);
        assert_eq!(ctl.len(), 1);
        assert_eq!(ctl.advance(t0 + ms(500)), 1);
        assert!(ctl.is_idle());
    }

    #[test]
    fn test_sequential_touches_each_complete() {
        let mut ctl = RippleController::default();
        let mut now = Instant::now();
        let mut completed = 0;
        for _ in 0..5 {
            ctl.on_touch(1.0, 1.0, now, None);
            assert_eq!(ctl.len(), 1);
            now += ms(600);
            completed += ctl.advance(now);
            assert!(ctl.is_idle());
        }
        assert_eq!(completed, 5);
    }

    #[test]
    fn test_overlapping_touches_are_independent() {
        let mut ctl = RippleController::default();
        let t0 = Instant::now();
        let first = ctl.on_touch(0.0, 0.0, t0, None).unwrap();
        ctl.advance(t0 + ms(200));
        let p_first = ctl.get(first).unwrap().progress();

        let second = ctl.on_touch(5.0, 1.0, t0 + ms(200), None).unwrap();
        assert_ne!(first, second);
        assert_eq!(ctl.len(), 2);
        // The new touch does not restart the first ripple.
        assert_eq!(ctl.get(first).unwrap().progress(), p_first);

        assert_eq!(ctl.advance(t0 + ms(500)), 1);
        assert!(ctl.get(first).is_none());
        let p_second = ctl.get(second).unwrap().progress();
        assert!(p_second > 0.0 && p_second < 1.0);

        assert_eq!(ctl.advance(t0 + ms(700)), 1);
        assert!(ctl.is_idle());
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut ctl = RippleController::new(Duration::ZERO);
        let t0 = Instant::now();
        ctl.on_touch(0.0, 0.0, t0, None);
        assert_eq!(ctl.advance(t0), 1);
    }
}
