use super::{Ripple, RippleController, RippleId};
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// One [`RippleController`] per pressable surface, keyed by surface id.
///
/// Controllers are created lazily on the first touch and dropped again once
/// they are idle, so the map only ever holds surfaces with something to draw.
#[derive(Debug)]
pub struct RippleLayer<K> {
    controllers: HashMap<K, RippleController>,
    duration: Duration,
    enabled: bool,
}

impl<K: Copy + Eq + Hash> RippleLayer<K> {
    pub fn new(duration: Duration, enabled: bool) -> Self {
        Self {
            controllers: HashMap::new(),
            duration,
            enabled,
        }
    }

    /// Touch `surface` at its local `(x, y)`. See [`RippleController::on_touch`].
    pub fn touch(
        &mut self,
        surface: K,
        x: f32,
        y: f32,
        now: Instant,
        on_press: Option<&mut dyn FnMut()>,
    ) -> Option<RippleId> {
        let (duration, enabled) = (self.duration, self.enabled);
        let controller = self.controllers.entry(surface).or_insert_with(|| {
            if enabled {
                RippleController::new(duration)
            } else {
                RippleController::disabled()
            }
        });
        controller.on_touch(x, y, now, on_press)
    }

    /// Advance every surface's ripples. Returns whether anything is still
    /// animating.
    pub fn advance(&mut self, now: Instant) -> bool {
        for controller in self.controllers.values_mut() {
            controller.advance(now);
        }
        self.controllers.retain(|_, c| !c.is_idle());
        !self.controllers.is_empty()
    }

    /// Drop the controllers (and their ripples) of surfaces that fail `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) {
        self.controllers.retain(|surface, _| keep(surface));
    }

    /// Move controllers to the keys `map` gives them; `None` drops them.
    /// `map` must not send two surfaces to the same key.
    pub fn rekey(&mut self, mut map: impl FnMut(K) -> Option<K>) {
        self.controllers = self
            .controllers
            .drain()
            .filter_map(|(surface, c)| map(surface).map(|surface| (surface, c)))
            .collect();
    }

    pub fn ripples(&self, surface: &K) -> &[Ripple] {
        self.controllers
            .get(surface)
            .map(|c| c.ripples())
            .unwrap_or(&[])
    }

    pub fn is_animating(&self) -> bool {
        self.active_count() > 0
    }

    pub fn active_count(&self) -> usize {
        self.controllers.values().map(|c| c.len()).sum()
    }
}
