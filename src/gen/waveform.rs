use std::f32::consts::TAU;

/// The four periodic waveforms the renderer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Sawtooth,
    Square,
}

impl Waveform {
    /// Evaluate the waveform at time `t` (seconds) for the given frequency.
    ///
    /// Stateless and total: any finite `t >= 0` and finite frequency produce
    /// a value in [-1.0, 1.0]. A zero frequency degenerates to a constant
    /// signal rather than a domain error.
    pub fn eval(self, t: f32, frequency_hz: f32) -> f32 {
        let cycles = frequency_hz * t;
        match self {
            Waveform::Sine => (TAU * cycles).sin(),
            // Symmetric ramp: starts at +1, reaches -1 at the half period.
            Waveform::Triangle => ((2.0 * cycles).rem_euclid(2.0) - 1.0).abs() * 2.0 - 1.0,
            // Linear ramp from -1 to 1 with a discontinuous reset each period.
            Waveform::Sawtooth => (2.0 * cycles).rem_euclid(2.0) - 1.0,
            // High for the first half of each period, low for the second.
            Waveform::Square => {
                if cycles.rem_euclid(1.0) < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::Triangle,
        Waveform::Sawtooth,
        Waveform::Square,
    ];

    #[test]
    fn test_output_stays_in_range() {
        for waveform in ALL {
            for i in 0..10_000 {
                let t = i as f32 / 1000.0;
                let value = waveform.eval(t, 441.3);
                assert!(value.is_finite(), "{:?} produced non-finite at t={}", waveform, t);
                assert!(
                    (-1.0..=1.0).contains(&value),
                    "{:?} out of range at t={}: {}",
                    waveform,
                    t,
                    value
                );
            }
        }
    }

    #[test]
    fn test_periodicity() {
        let frequency = 50.0;
        let period = 1.0 / frequency;
        for waveform in ALL {
            for i in 0..200 {
                let t = i as f32 * 0.00131;
                let a = waveform.eval(t, frequency);
                let b = waveform.eval(t + period, frequency);
                assert!(
                    (a - b).abs() < 1e-3,
                    "{:?} not periodic at t={}: {} vs {}",
                    waveform,
                    t,
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_sine_reference_points() {
        assert_eq!(Waveform::Sine.eval(0.0, 50.0), 0.0);
        // Quarter period hits the positive peak.
        let peak = Waveform::Sine.eval(0.005, 50.0);
        assert!((peak - 1.0).abs() < 1e-6, "expected peak, got {}", peak);
    }

    #[test]
    fn test_triangle_shape() {
        let f = 1.0;
        assert!((Waveform::Triangle.eval(0.0, f) - 1.0).abs() < 1e-6);
        assert!(Waveform::Triangle.eval(0.25, f).abs() < 1e-6);
        assert!((Waveform::Triangle.eval(0.5, f) + 1.0).abs() < 1e-6);
        assert!(Waveform::Triangle.eval(0.75, f).abs() < 1e-6);
    }

    #[test]
    fn test_sawtooth_ramp() {
        let f = 1.0;
        assert!((Waveform::Sawtooth.eval(0.0, f) + 1.0).abs() < 1e-6);
        assert!(Waveform::Sawtooth.eval(0.5, f).abs() < 1e-6);
        // Just before the reset the ramp approaches +1.
        assert!(Waveform::Sawtooth.eval(0.999, f) > 0.99);
    }

    #[test]
    fn test_square_half_periods() {
        let f = 1.0;
        assert_eq!(Waveform::Square.eval(0.25, f), 1.0);
        assert_eq!(Waveform::Square.eval(0.75, f), -1.0);
    }

    #[test]
    fn test_zero_frequency_is_constant() {
        for waveform in ALL {
            let first = waveform.eval(0.0, 0.0);
            for i in 1..100 {
                let t = i as f32 * 0.37;
                assert_eq!(
                    waveform.eval(t, 0.0),
                    first,
                    "{:?} not constant at zero frequency",
                    waveform
                );
            }
            assert!(first.is_finite());
        }
        assert_eq!(Waveform::Sine.eval(1.0, 0.0), 0.0);
    }
}
