// Copyright @yucwang 2026

use super::constants::Float;

/// Cubic Bernstein basis B0..B3 at `u`.
///
/// Defined for every real `u`; values outside [0, 1] extrapolate the
/// polynomials instead of being clamped.
pub fn bernstein3(u: Float) -> [Float; 4] {
    let um = 1.0 - u;
    [
        um * um * um,
        3.0 * u * um * um,
        3.0 * u * u * um,
        u * u * u,
    ]
}

/// First derivatives dB0..dB3 of the cubic basis with respect to `u`.
pub fn bernstein3_derivative(u: Float) -> [Float; 4] {
    let um = 1.0 - u;
    [
        -3.0 * um * um,
        3.0 * um * um - 6.0 * u * um,
        6.0 * u * um - 3.0 * u * u,
        3.0 * u * u,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<Float> {
        (0..=64).map(|i| i as Float / 64.0).collect()
    }

    #[test]
    fn test_bernstein_partition_of_unity() {
        for u in samples() {
            let sum: Float = bernstein3(u).iter().sum();
            assert!((sum - 1.0).abs() < 1e-6, "sum {} at u = {}", sum, u);
        }
    }

    #[test]
    fn test_bernstein_derivative_sums_to_zero() {
        for u in samples() {
            let sum: Float = bernstein3_derivative(u).iter().sum();
            assert!(sum.abs() < 1e-5, "sum {} at u = {}", sum, u);
        }
    }

    #[test]
    fn test_bernstein_endpoints() {
        assert_eq!(bernstein3(0.0), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(bernstein3(1.0), [0.0, 0.0, 0.0, 1.0]);

        let d0 = bernstein3_derivative(0.0);
        assert_eq!(d0, [-3.0, 3.0, 0.0, 0.0]);
        let d1 = bernstein3_derivative(1.0);
        assert_eq!(d1, [0.0, 0.0, -3.0, 3.0]);
    }

    #[test]
    fn test_bernstein_derivative_matches_finite_difference() {
        let h = 1e-3;
        for &u in &[0.1, 0.35, 0.5, 0.8] {
            let lo = bernstein3(u - h);
            let hi = bernstein3(u + h);
            let d = bernstein3_derivative(u);
            for i in 0..4 {
                let fd = (hi[i] - lo[i]) / (2.0 * h);
                assert!((fd - d[i]).abs() < 1e-2, "basis {} at u = {}", i, u);
            }
        }
    }

    #[test]
    fn test_bernstein_extrapolates_outside_unit_interval() {
        let b = bernstein3(2.0);
        assert!((b[0] + 1.0).abs() < 1e-6);
        assert!((b[3] - 8.0).abs() < 1e-6);
        let sum: Float = b.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
    }
}
