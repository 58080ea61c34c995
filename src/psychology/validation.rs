/// Upper bound of every 0-100 psychology scale.
pub const SCALE_MAX: f64 = 100.0;

/// Neutral midpoint reported when there is nothing to score.
pub const NEUTRAL_MIDPOINT: f64 = 50.0;

/// Accepts a magnitude only if it is a finite number inside [0, 100];
/// anything else (missing, NaN, negative, above 100) scores as 0.
pub fn sanitize_magnitude(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && (0.0..=SCALE_MAX).contains(&v) => v,
        _ => 0.0,
    }
}

pub fn clamp_scale(x: f64) -> f64 {
    if x.is_nan() {
        return NEUTRAL_MIDPOINT;
    }
    x.clamp(0.0, SCALE_MAX)
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_rejects_out_of_range() {
        assert_eq!(sanitize_magnitude(Some(42.5)), 42.5);
        assert_eq!(sanitize_magnitude(Some(0.0)), 0.0);
        assert_eq!(sanitize_magnitude(Some(100.0)), 100.0);
        assert_eq!(sanitize_magnitude(Some(100.01)), 0.0);
        assert_eq!(sanitize_magnitude(Some(-3.0)), 0.0);
        assert_eq!(sanitize_magnitude(Some(f64::NAN)), 0.0);
        assert_eq!(sanitize_magnitude(Some(f64::INFINITY)), 0.0);
        assert_eq!(sanitize_magnitude(None), 0.0);
    }

    #[test]
    fn clamp_scale_bounds() {
        assert_eq!(clamp_scale(-5.0), 0.0);
        assert_eq!(clamp_scale(150.0), 100.0);
        assert_eq!(clamp_scale(f64::NAN), NEUTRAL_MIDPOINT);
    }

    #[test]
    fn round2_known_values() {
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(-33.333333), -33.33);
        assert_eq!(round2(66.666666), 66.67);
    }
}
