use std::f32::consts::{PI, TAU};

/// Easing curves used by the scene timelines.
///
/// `PowerNOut` follows the common naming where `Power1` is quadratic and
/// `Power3` is quartic.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Ease {
    #[default]
    Linear,
    SineInOut,
    Power1Out,
    Power3Out,
    ElasticOut { amplitude: f32, period: f32 },
}

impl Ease {
    /// Map linear progress `t` (clamped to `[0, 1]`) onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Ease::Linear => t,
            Ease::SineInOut => -((PI * t).cos() - 1.0) * 0.5,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }
}

fn elastic_out(t: f32, amplitude: f32, period: f32) -> f32 {
    if t >= 1.0 {
        return 1.0;
    }
    let p1 = amplitude.max(1.0);
    let period = if period > 0.0 { period } else { 0.3 };
    let span = period / amplitude.clamp(f32::EPSILON, 1.0);
    let phase = span / TAU * (1.0 / p1).asin();
    p1 * 2.0_f32.powf(-10.0 * t) * ((t - phase) * (TAU / span)).sin() + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 5] = [
        Ease::Linear,
        Ease::SineInOut,
        Ease::Power1Out,
        Ease::Power3Out,
        Ease::ElasticOut {
            amplitude: 1.0,
            period: 0.31,
        },
    ];

    #[test]
    fn endpoints_are_fixed() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-5, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-5, "{ease:?} at 1");
        }
    }

    #[test]
    fn elastic_overshoots_before_settling() {
        let e = Ease::ElasticOut {
            amplitude: 1.0,
            period: 0.31,
        };
        let peak = (1..100)
            .map(|i| e.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn out_curves_lead_linear() {
        assert!(Ease::Power1Out.apply(0.5) > 0.5);
        assert!(Ease::Power3Out.apply(0.5) > Ease::Power1Out.apply(0.5));
        assert!((Ease::SineInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn default_is_linear() {
        assert_eq!(Ease::default(), Ease::Linear);
        assert_eq!(Ease::default().apply(0.25), 0.25);
    }
}
