//! Easing curves for counter animations.

use serde::Deserialize;

/// Exponent of the ease-in/ease-out power curves.
const CURVE_EXPONENT: f32 = 3.0;

/// Maps a linear time fraction in `[0, 1]` to a perceptual progress fraction.
///
/// `EaseIn` accelerates from rest, `EaseOut` decelerates into rest. The two
/// mirror each other around the midpoint: `ease_out(t) == 1 - ease_in(1 - t)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
}

impl Easing {
    /// Apply the curve to a time fraction. Inputs outside `[0, 1]` are clamped.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t.powf(CURVE_EXPONENT),
            Easing::EaseOut => 1.0 - (1.0 - t).powf(CURVE_EXPONENT),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
        }
    }

    /// The next curve in display order, wrapping around.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Easing::Linear => Easing::EaseIn,
            Easing::EaseIn => Easing::EaseOut,
            Easing::EaseOut => Easing::Linear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < EPSILON, "{a} != {b}");
    }

    #[test]
    fn all_curves_fix_endpoints() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut] {
            assert_close(easing.apply(0.0), 0.0);
            assert_close(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn linear_is_identity() {
        assert_close(Easing::Linear.apply(0.25), 0.25);
        assert_close(Easing::Linear.apply(0.5), 0.5);
    }

    #[test]
    fn cubic_midpoints() {
        assert_close(Easing::EaseIn.apply(0.5), 0.125);
        assert_close(Easing::EaseOut.apply(0.5), 0.875);
    }

    #[test]
    fn ease_out_mirrors_ease_in() {
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            assert_close(Easing::EaseOut.apply(t), 1.0 - Easing::EaseIn.apply(1.0 - t));
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut] {
            let mut previous = easing.apply(0.0);
            for i in 1..=100 {
                let current = easing.apply(i as f32 / 100.0);
                assert!(current >= previous, "{easing:?} decreased at step {i}");
                previous = current;
            }
        }
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        assert_close(Easing::EaseIn.apply(-0.5), 0.0);
        assert_close(Easing::EaseIn.apply(1.5), 1.0);
    }

    #[test]
    fn cycling_visits_every_curve() {
        let start = Easing::Linear;
        assert_eq!(start.cycled(), Easing::EaseIn);
        assert_eq!(start.cycled().cycled(), Easing::EaseOut);
        assert_eq!(start.cycled().cycled().cycled(), start);
    }
}
