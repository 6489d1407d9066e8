//! Animated gradient backdrop
//!
//! A three-stop gradient (edge, center, edge) six times wider than the window
//! slides from one end to the other and back over a twenty second cycle. The
//! animation state lives inside the create-user view, so it starts when the
//! form is mounted and is dropped with it; the tick subscription is only
//! requested while that view is on screen.

use std::time::{Duration, Instant};

use iced::{
    gradient::{ColorStop, Linear},
    Background, Color, Degrees,
};

use crate::ui::theme::{GRADIENT_CENTER, GRADIENT_EDGE};

/// Length of one full shift (there and back)
pub const CYCLE: Duration = Duration::from_secs(20);

/// How often the subscription asks for a redraw
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// The gradient is this many times wider than the visible area
const BACKGROUND_SCALE: f32 = 6.0;

/// Gradient direction, right to left
const ANGLE: Degrees = Degrees(270.0);

#[derive(Debug, Clone)]
pub struct GradientShift {
    started_at: Instant,
    position: f32,
}

impl GradientShift {
    /// Start the animation at position 0
    pub fn start(now: Instant) -> Self {
        Self {
            started_at: now,
            position: 0.0,
        }
    }

    /// Advance to `now`
    pub fn tick(&mut self, now: Instant) {
        self.position = position_at(now.saturating_duration_since(self.started_at));
    }

    /// Current background position in `0.0..=1.0`
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Gradient for the visible slice at the current position
    pub fn background(&self) -> Background {
        let visible = 1.0 / BACKGROUND_SCALE;
        let start = self.position * (1.0 - visible);

        let stops = [0.0, 0.5, 1.0].map(|offset| ColorStop {
            offset,
            color: sample(start + offset * visible),
        });

        Background::Gradient(Linear::new(ANGLE).add_stops(stops).into())
    }
}

/// Background position for an elapsed time: 0 → 1 over the first half of
/// the cycle, back to 0 over the second, eased at both ends.
pub fn position_at(elapsed: Duration) -> f32 {
    let cycle = CYCLE.as_secs_f32();
    let t = (elapsed.as_secs_f32() % cycle) / cycle;
    let linear = if t <= 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
    ease(linear)
}

fn ease(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Color of the full-width gradient at `x` in `0.0..=1.0`
fn sample(x: f32) -> Color {
    let x = x.clamp(0.0, 1.0);
    if x <= 0.5 {
        mix(GRADIENT_EDGE, GRADIENT_CENTER, x * 2.0)
    } else {
        mix(GRADIENT_CENTER, GRADIENT_EDGE, (x - 0.5) * 2.0)
    }
}

fn mix(a: Color, b: Color, t: f32) -> Color {
    Color {
        r: a.r + (b.r - a.r) * t,
        g: a.g + (b.g - a.g) * t,
        b: a.b + (b.b - a.b) * t,
        a: a.a + (b.a - a.a) * t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_position_over_cycle() {
        assert!(approx(position_at(Duration::ZERO), 0.0));
        assert!(approx(position_at(Duration::from_secs(5)), 0.5));
        assert!(approx(position_at(Duration::from_secs(10)), 1.0));
        assert!(approx(position_at(Duration::from_secs(15)), 0.5));
        assert!(approx(position_at(Duration::from_secs(20)), 0.0));
    }

    #[test]
    fn test_position_repeats() {
        let a = position_at(Duration::from_millis(3_250));
        let b = position_at(Duration::from_millis(23_250));
        assert!(approx(a, b));
    }

    #[test]
    fn test_tick_moves_position() {
        let start = Instant::now();
        let mut shift = GradientShift::start(start);
        assert_eq!(shift.position(), 0.0);

        shift.tick(start + Duration::from_secs(10));
        assert!(approx(shift.position(), 1.0));
    }

    fn same_color(a: Color, b: Color) -> bool {
        approx(a.r, b.r) && approx(a.g, b.g) && approx(a.b, b.b) && approx(a.a, b.a)
    }

    #[test]
    fn test_sample_endpoints() {
        assert!(same_color(sample(0.0), GRADIENT_EDGE));
        assert!(same_color(sample(0.5), GRADIENT_CENTER));
        assert!(same_color(sample(1.0), GRADIENT_EDGE));
        // Out of range input is clamped
        assert!(same_color(sample(1.5), GRADIENT_EDGE));
    }

    #[test]
    fn test_background_is_gradient() {
        let shift = GradientShift::start(Instant::now());
        assert!(matches!(shift.background(), Background::Gradient(_)));
    }
}
