// src/animation/scale.rs
//
// Scale interpolation helpers.
// A node's scale runs 0..1 and is split into sub-phases: the pin grows,
// then its lines fan out. The per-tick step is fast for the first part of
// the sweep and slows down once the scale passes `sc_div`.

/// Remaining scale budget for the `i`-th of `n` sub-phases.
pub fn max_scale(scale: f32, i: usize, n: usize) -> f32 {
    (scale - i as f32 / n as f32).max(0.0)
}

/// Progress of sub-phase `i` of `n`, normalized to 0..1.
pub fn divide_scale(scale: f32, i: usize, n: usize) -> f32 {
    let n_f = n as f32;
    (1.0 / n_f).min(max_scale(scale, i, n)) * n_f
}

/// Per-tick increment parameters for a node's sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleStep {
    pub step_gap: f32,
    pub sc_div: f32,
}

impl ScaleStep {
    pub fn new(step_gap: f32, sc_div: f32) -> Self {
        Self { step_gap, sc_div }
    }

    /// Which half of the sweep `scale` sits in.
    pub fn scale_factor(&self, scale: f32) -> f32 {
        (scale / self.sc_div).floor()
    }

    /// Blends between the rates `1/a` and `1/b` depending on the half.
    pub fn mirror_value(&self, scale: f32, a: f32, b: f32) -> f32 {
        let k = self.scale_factor(scale);
        (1.0 - k) / a + k / b
    }

    /// Signed scale increment for one tick.
    pub fn update_value(&self, scale: f32, dir: f32, a: f32, b: f32) -> f32 {
        self.mirror_value(scale, a, b) * dir * self.step_gap
    }
}

impl Default for ScaleStep {
    fn default() -> Self {
        Self::new(0.05, 0.51)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_scale_clamps_at_zero() {
        assert_eq!(max_scale(0.2, 1, 2), 0.0);
        assert!((max_scale(0.8, 1, 2) - 0.3).abs() < 1e-6);
        assert_eq!(max_scale(0.8, 0, 2), 0.8);
    }

    #[test]
    fn test_divide_scale_stays_in_unit_range() {
        for n in 1..=6 {
            for i in 0..=n + 1 {
                for step in -10..=30 {
                    let scale = step as f32 * 0.05;
                    let value = divide_scale(scale, i, n);
                    assert!(
                        (0.0..=1.0).contains(&value),
                        "divide_scale({}, {}, {}) = {}",
                        scale,
                        i,
                        n,
                        value
                    );
                }
            }
        }
    }

    #[test]
    fn test_divide_scale_splits_phases() {
        // First half grows the pin, second half turns it
        assert!((divide_scale(0.25, 0, 2) - 0.5).abs() < 1e-6);
        assert_eq!(divide_scale(0.25, 1, 2), 0.0);
        assert!((divide_scale(0.75, 0, 2) - 1.0).abs() < 1e-6);
        assert!((divide_scale(0.75, 1, 2) - 0.5).abs() < 1e-6);
        assert!((divide_scale(1.0, 1, 2) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_scale_factor_is_monotonic() {
        let step = ScaleStep::default();
        let mut last = step.scale_factor(-0.5);
        for i in -50..=150 {
            let factor = step.scale_factor(i as f32 * 0.01);
            assert!(factor >= last);
            last = factor;
        }
        assert_eq!(step.scale_factor(0.5), 0.0);
        assert_eq!(step.scale_factor(0.51), 1.0);
        assert_eq!(step.scale_factor(1.0), 1.0);
    }

    #[test]
    fn test_update_value_switches_rate() {
        let step = ScaleStep::default();
        // Below sc_div the step runs at rate 1/a
        assert!((step.update_value(0.2, 1.0, 1.0, 3.0) - 0.05).abs() < 1e-6);
        // Above it, at rate 1/b
        assert!((step.update_value(0.8, 1.0, 1.0, 3.0) - 0.05 / 3.0).abs() < 1e-6);
        // Direction only flips the sign
        assert!((step.update_value(0.8, -1.0, 1.0, 3.0) + 0.05 / 3.0).abs() < 1e-6);
        assert_eq!(step.update_value(0.8, 0.0, 1.0, 3.0), 0.0);
    }

    #[test]
    fn test_update_value_is_finite() {
        let step = ScaleStep::new(0.1, 0.3);
        for i in -20..=40 {
            let scale = i as f32 * 0.05;
            for dir in [-1.0, 0.0, 1.0] {
                assert!(step.update_value(scale, dir, 1.0, 4.0).is_finite());
            }
        }
    }
}
