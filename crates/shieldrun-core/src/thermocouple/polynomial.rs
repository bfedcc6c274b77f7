//! Power-series polynomial evaluation

/// Evaluate a polynomial at `x` given coefficients in ascending power order.
///
/// Computes `a0 + a1*x + a2*x^2 + ... + an*x^n` as a left-to-right sum of
/// explicit powers. Each power goes through `powf` rather than Horner's
/// scheme or `powi`, so the result is bit-identical to a direct power-series
/// evaluation.
///
/// An empty coefficient slice evaluates to `0.0`.
pub fn evaluate_poly(coeffs: &[f64], x: f64) -> f64 {
    coeffs
        .iter()
        .enumerate()
        .fold(0.0, |sum, (power, a)| sum + a * x.powf(power as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadratic() {
        assert_eq!(evaluate_poly(&[2.0, 3.0, 4.0], 2.0), 24.0);
    }

    #[test]
    fn test_constant_term_at_zero() {
        // x^0 is 1 even at x = 0
        assert_eq!(evaluate_poly(&[-131.8058, 48.30222], 0.0), -131.8058);
        assert_eq!(evaluate_poly(&[0.0, 25.08355, 0.07860106], 0.0), 0.0);
    }

    #[test]
    fn test_empty_coefficients() {
        assert_eq!(evaluate_poly(&[], 3.5), 0.0);
    }

    #[test]
    fn test_negative_argument() {
        // 1 - 2x + x^2 at x = -1
        assert_eq!(evaluate_poly(&[1.0, -2.0, 1.0], -1.0), 4.0);
    }
}
