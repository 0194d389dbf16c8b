// src/validation/mod.rs

//! Sanity checks on simulated states and probability read-outs.

use crate::core::{ClockError, StateVector};

// Default tolerance values (can be overridden by caller)
const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;
const DEFAULT_PROBABILITY_TOLERANCE: f64 = 1e-9;

/// Checks that the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to `1e-9`.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(ClockError::Incoherence)` otherwise.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<(), ClockError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq: f64 = state.vector().iter().map(|c| c.norm_sqr()).sum();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(ClockError::Incoherence {
            message: format!(
                "State vector normalization failed. Sum(|c_i|^2) = {} (Deviation > {})",
                norm_sq, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Checks that `probs` is a probability distribution: every entry in
/// `[0, 1]` and the entries summing to 1 within tolerance.
///
/// Noisy, clamped hue inputs are deliberately not renormalized and are not
/// expected to pass this check; it applies to raw simulator output.
pub fn check_distribution(probs: &[f64], tolerance: Option<f64>) -> Result<(), ClockError> {
    let tol = tolerance.unwrap_or(DEFAULT_PROBABILITY_TOLERANCE);
    if let Some(p) = probs.iter().find(|p| !p.is_finite() || **p < -tol || **p > 1.0 + tol) {
        return Err(ClockError::Incoherence {
            message: format!("Probability {} lies outside [0, 1]", p),
        });
    }
    let total: f64 = probs.iter().sum();
    if (total - 1.0).abs() > tol {
        return Err(ClockError::Incoherence {
            message: format!("Probabilities sum to {} instead of 1", total),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_normalized_state_passes() {
        let state = StateVector::new(vec![Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(0.0, FRAC_1_SQRT_2)]);
        assert!(check_normalization(&state, None).is_ok());
    }

    #[test]
    fn test_unnormalized_state_fails() {
        let state = StateVector::new(vec![Complex::new(1.0, 0.0), Complex::new(1.0, 0.0)]);
        match check_normalization(&state, None) {
            Err(ClockError::Incoherence { message }) => assert!(message.contains("normalization failed")),
            other => panic!("Expected Incoherence, got {:?}", other),
        }
        // A loose tolerance accepts it
        assert!(check_normalization(&state, Some(1.5)).is_ok());
    }

    #[test]
    fn test_check_distribution() {
        assert!(check_distribution(&[0.25, 0.75], None).is_ok());
        assert!(check_distribution(&[0.5, 0.6], None).is_err());
        assert!(check_distribution(&[1.2, -0.2], None).is_err());
        assert!(check_distribution(&[f64::NAN, 1.0], None).is_err());
    }
}
