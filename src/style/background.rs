//! Gradient and shadow background values.

use super::color::Color;

// ---------------------------------------------------------------------------
// Gradient
// ---------------------------------------------------------------------------

/// Gradient geometry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

/// A single color stop at a position in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GradientStop {
    pub color: Color,
    pub position: f32,
}

impl GradientStop {
    pub const fn new(color: Color, position: f32) -> Self {
        Self { color, position }
    }
}

/// A background gradient: kind, angle (degrees, linear only), and ordered
/// color stops.
///
/// Callers may add stops in any order; [`Gradient::sorted_stops`] yields them
/// sorted by position, which is what the paint backends consume. Stops at
/// equal positions keep insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gradient {
    pub kind: GradientKind,
    pub angle: f32,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// An empty gradient of the given kind.
    pub fn new(kind: GradientKind) -> Self {
        Self { kind, angle: 0.0, stops: Vec::new() }
    }

    /// Two-stop linear gradient from `start` to `end` at `angle` degrees.
    pub fn linear(start: Color, end: Color, angle: f32) -> Self {
        Self {
            kind: GradientKind::Linear,
            angle,
            stops: vec![GradientStop::new(start, 0.0), GradientStop::new(end, 1.0)],
        }
    }

    /// Add a stop (builder). Position is clamped into `[0, 1]`.
    pub fn with_stop(mut self, color: Color, position: f32) -> Self {
        self.add_stop(color, position);
        self
    }

    /// Add a stop. Position is clamped into `[0, 1]`.
    pub fn add_stop(&mut self, color: Color, position: f32) {
        self.stops.push(GradientStop::new(color, position.clamp(0.0, 1.0)));
    }

    /// Stops sorted ascending by position (stable).
    pub fn sorted_stops(&self) -> Vec<GradientStop> {
        let mut stops = self.stops.clone();
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        stops
    }

    /// Color at normalized position `t`, interpolating between the sorted
    /// stops. Positions outside the stop range clamp to the end colors.
    pub fn sample(&self, t: f32) -> Color {
        let stops = self.sorted_stops();
        let Some(first) = stops.first() else {
            return Color::TRANSPARENT;
        };
        if t <= first.position {
            return first.color;
        }
        for pair in stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.position {
                let span = b.position - a.position;
                if span <= f32::EPSILON {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.position) / span);
            }
        }
        stops.last().map(|s| s.color).unwrap_or(Color::TRANSPARENT)
    }

    // ── Presets ──────────────────────────────────────────────────────

    pub fn rainbow(angle: f32) -> Self {
        Self::new(GradientKind::Linear)
            .with_stop(Color::RED, 0.0)
            .with_stop(Color::ORANGE, 0.2)
            .with_stop(Color::YELLOW, 0.4)
            .with_stop(Color::GREEN, 0.6)
            .with_stop(Color::BLUE, 0.8)
            .with_stop(Color::PURPLE, 1.0)
            .with_angle(angle)
    }

    pub fn sunset() -> Self {
        Self::linear(Color::from_rgb8(255, 94, 77, 255), Color::from_rgb8(255, 195, 113, 255), 90.0)
    }

    pub fn ocean() -> Self {
        Self::linear(Color::from_rgb8(0, 105, 148, 255), Color::from_rgb8(127, 219, 255, 255), 90.0)
    }

    pub fn forest() -> Self {
        Self::linear(Color::from_rgb8(19, 78, 44, 255), Color::from_rgb8(134, 194, 50, 255), 90.0)
    }

    pub fn fire() -> Self {
        Self::new(GradientKind::Linear)
            .with_stop(Color::from_rgb8(178, 34, 34, 255), 0.0)
            .with_stop(Color::from_rgb8(255, 140, 0, 255), 0.6)
            .with_stop(Color::YELLOW, 1.0)
    }

    pub fn sky_blue() -> Self {
        Self::linear(Color::from_rgb8(135, 206, 250, 255), Color::from_rgb8(25, 118, 210, 255), 90.0)
    }

    fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }
}

// ---------------------------------------------------------------------------
// BoxShadow
// ---------------------------------------------------------------------------

/// A declared box shadow.
///
/// Carried and queryable through the style surface; the box paint path does
/// not currently draw it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxShadow {
    pub color: Color,
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur_radius: f32,
    pub spread_radius: f32,
    pub inset: bool,
}

impl Default for BoxShadow {
    fn default() -> Self {
        Self {
            color: Color::new(0.0, 0.0, 0.0, 0.5),
            offset_x: 0.0,
            offset_y: 0.0,
            blur_radius: 0.0,
            spread_radius: 0.0,
            inset: false,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_two_stops() {
        let g = Gradient::linear(Color::RED, Color::BLUE, 45.0);
        assert_eq!(g.kind, GradientKind::Linear);
        assert_eq!(g.angle, 45.0);
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.stops[0].position, 0.0);
        assert_eq!(g.stops[1].position, 1.0);
    }

    #[test]
    fn stops_sorted_by_position() {
        let g = Gradient::new(GradientKind::Linear)
            .with_stop(Color::RED, 1.0)
            .with_stop(Color::GREEN, 0.0)
            .with_stop(Color::BLUE, 0.5);
        let sorted = g.sorted_stops();
        assert_eq!(sorted[0].position, 0.0);
        assert_eq!(sorted[1].position, 0.5);
        assert_eq!(sorted[2].position, 1.0);
        // Original stop order is untouched.
        assert_eq!(g.stops[0].position, 1.0);
    }

    #[test]
    fn stop_position_clamped() {
        let g = Gradient::new(GradientKind::Linear).with_stop(Color::RED, 1.5);
        assert_eq!(g.stops[0].position, 1.0);
    }

    #[test]
    fn sample_endpoints_and_midpoint() {
        let g = Gradient::linear(Color::BLACK, Color::WHITE, 0.0);
        assert_eq!(g.sample(0.0), Color::BLACK);
        assert_eq!(g.sample(1.0), Color::WHITE);
        assert_eq!(g.sample(0.5).r, 0.5);
    }

    #[test]
    fn sample_clamps_outside_range() {
        let g = Gradient::linear(Color::RED, Color::BLUE, 0.0);
        assert_eq!(g.sample(-1.0), Color::RED);
        assert_eq!(g.sample(2.0), Color::BLUE);
    }

    #[test]
    fn sample_empty_is_transparent() {
        let g = Gradient::new(GradientKind::Radial);
        assert_eq!(g.sample(0.5), Color::TRANSPARENT);
    }

    #[test]
    fn presets_have_stops() {
        for g in [
            Gradient::rainbow(90.0),
            Gradient::sunset(),
            Gradient::ocean(),
            Gradient::forest(),
            Gradient::fire(),
            Gradient::sky_blue(),
        ] {
            assert!(g.stops.len() >= 2);
        }
        assert_eq!(Gradient::rainbow(90.0).angle, 90.0);
    }
}
