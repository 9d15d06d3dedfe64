/// Easing curves used by the menu timelines.
///
/// `PowerN` follows the usual animation-library naming: power2 is cubic,
/// power3 quartic and power4 quintic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    Power2Out,
    Power3In,
    Power3Out,
    Power3InOut,
    #[default]
    Power4Out,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power2Out => ease_out(t, 3),
            Self::Power3In => t.powi(4),
            Self::Power3Out => ease_out(t, 4),
            Self::Power3InOut => {
                if t < 0.5 {
                    (2.0 * t).powi(4) / 2.0
                } else {
                    1.0 - (2.0 * (1.0 - t)).powi(4) / 2.0
                }
            }
            Self::Power4Out => ease_out(t, 5),
        }
    }
}

fn ease_out(t: f64, exponent: i32) -> f64 {
    1.0 - (1.0 - t).powi(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_fixed() {
        for ease in [
            Ease::Linear,
            Ease::Power2Out,
            Ease::Power3In,
            Ease::Power3Out,
            Ease::Power3InOut,
            Ease::Power4Out,
        ] {
            assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
            assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Ease::Power4Out.apply(-1.0), 0.0);
        assert_eq!(Ease::Power4Out.apply(3.0), 1.0);
    }

    #[test]
    fn test_out_curves_lead_in_curves() {
        assert!(Ease::Power4Out.apply(0.3) > Ease::Linear.apply(0.3));
        assert!(Ease::Power3In.apply(0.3) < Ease::Linear.apply(0.3));
        assert!((Ease::Power3InOut.apply(0.5) - 0.5).abs() < 1e-12);
    }
}
