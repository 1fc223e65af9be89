//! Paints ripples over an already rendered surface.

use crate::ripple::{ripple_visual, Ripple};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;

/// Blends each ripple's color into the background of the cells it covers.
/// Drawing is clipped to the widget area.
pub struct RippleOverlay<'a> {
    ripples: &'a [Ripple],
    color: Color,
    /// Used where the cell background is not an RGB color.
    fallback_bg: Color,
}

impl<'a> RippleOverlay<'a> {
    pub fn new(ripples: &'a [Ripple], color: Color, fallback_bg: Color) -> Self {
        Self {
            ripples,
            color,
            fallback_bg,
        }
    }
}

impl Widget for RippleOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(over) = rgb(self.color) else {
            return;
        };
        let fallback = rgb(self.fallback_bg).unwrap_or((0, 0, 0));

        for ripple in self.ripples {
            let visual = ripple_visual(ripple.origin_x, ripple.origin_y, ripple.progress());
            if visual.radius <= 0.0 || visual.opacity <= 0.0 {
                continue;
            }
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    let lx = f32::from(x - area.x) + 0.5;
                    let ly = f32::from(y - area.y) + 0.5;
                    if !visual.covers(lx, ly, CELL_ASPECT) {
                        continue;
                    }
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        let base = rgb(cell.bg).unwrap_or(fallback);
                        let (r, g, b) = blend(base, over, visual.opacity);
                        cell.set_bg(Color::Rgb(r, g, b));
                    }
                }
            }
        }
    }
}

fn rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

/// Composite `over` onto `base` with the given opacity.
pub fn blend(base: (u8, u8, u8), over: (u8, u8, u8), opacity: f32) -> (u8, u8, u8) {
    let a = opacity.clamp(0.0, 1.0);
    let mix = |b: u8, o: u8| (f32::from(b) + (f32::from(o) - f32::from(b)) * a).round() as u8;
    (mix(base.0, over.0), mix(base.1, over.1), mix(base.2, over.2))
}
