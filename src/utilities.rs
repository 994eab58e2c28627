/// Utility functions shared across the crate

/// Linear interpolation over equidistant samples.
///
/// `samples` are the values of a function tabulated at `samples.len()`
/// equidistant points spanning `[lo, hi]` inclusive. Returns the linearly
/// interpolated value at `x`; outside the tabulated range the first or last
/// sample is returned. Callers that require a strict domain check (as the
/// disintegration sampler does) perform it before calling.
pub fn interpolate_equidistant(x: f64, lo: f64, hi: f64, samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    if samples.len() == 1 || x <= lo {
        return samples[0];
    }
    if x >= hi {
        return samples[samples.len() - 1];
    }

    // Position on the fractional grid index axis
    let t = (x - lo) / (hi - lo) * (samples.len() - 1) as f64;
    let idx = (t.floor() as usize).min(samples.len() - 2);
    let frac = t - idx as f64;
    samples[idx] + frac * (samples[idx + 1] - samples[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_at_grid_points() {
        let y = [1.0, 2.0, 4.0, 8.0];
        assert_eq!(interpolate_equidistant(0.0, 0.0, 3.0, &y), 1.0);
        assert_eq!(interpolate_equidistant(2.0, 0.0, 3.0, &y), 4.0);
        assert_eq!(interpolate_equidistant(3.0, 0.0, 3.0, &y), 8.0);
    }

    #[test]
    fn test_interpolate_between_grid_points() {
        let y = [1.0, 2.0, 4.0, 8.0];
        assert_eq!(interpolate_equidistant(0.5, 0.0, 3.0, &y), 1.5);
        assert_eq!(interpolate_equidistant(2.5, 0.0, 3.0, &y), 6.0);
    }

    #[test]
    fn test_interpolate_clamps_outside_domain() {
        let y = [1.0, 2.0, 4.0];
        assert_eq!(interpolate_equidistant(-1.0, 0.0, 2.0, &y), 1.0);
        assert_eq!(interpolate_equidistant(9.0, 0.0, 2.0, &y), 4.0);
    }

    #[test]
    fn test_interpolate_flat_curve() {
        let y = vec![3.5; 200];
        for x in [6.0, 8.31, 10.0, 13.99] {
            assert!((interpolate_equidistant(x, 6.0, 14.0, &y) - 3.5).abs() < 1e-12);
        }
    }
}
