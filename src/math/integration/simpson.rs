use crate::math::integration::integrationerror::IntegrationError;
use crate::math::integration::integrator::{
    IntegrationMethod,
    Integrator
};

// ─────────────────────────────────────────────────────────────────────────────
// Simpson's rule
// ─────────────────────────────────────────────────────────────────────────────
//
// 每三個相鄰點擬合一條拋物線後積分，npts - 1 個區間兩兩成對，
// 因此 npts 必須為奇數且 >= 3。逐點權重：
//
//   端點            dx/3
//   奇數索引內點    4·dx/3
//   偶數索引內點    2·dx/3

const MIN_NPTS: usize = 3;

fn is_valid_npts(npts: usize) -> bool {
    npts >= MIN_NPTS && npts % 2 == 1
}

fn weight(i: usize, last: usize, dx: f64) -> f64 {
    if i == 0 || i == last {
        dx / 3.0
    } else if i % 2 == 1 {
        dx * (4.0 / 3.0)
    } else {
        dx * (2.0 / 3.0)
    }
}

/// Integrates `fcn` over `[x_min, x_max]` with the composite Simpson rule
/// on `npts` evenly spaced points (`npts` odd and `>= 3`).
pub fn simpson<F>(fcn: F, npts: usize, x_min: f64, x_max: f64) -> Result<f64, IntegrationError>
    where F: Fn(f64) -> f64 {
    if !is_valid_npts(npts) {
        return Err(IntegrationError::invalid_parameter(
            IntegrationMethod::Simpson,
            npts,
            "number of points must be odd and at least 3"
        ));
    }

    let last = npts - 1;
    let dx = (x_max - x_min) / (last as f64);
    let mut sum = 0.0;
    for i in 0..npts {
        sum += weight(i, last, dx) * fcn(x_min + (i as f64) * dx);
    }
    Ok(sum)
}

pub struct SimpsonIntegrator;

impl SimpsonIntegrator {
    pub fn new() -> SimpsonIntegrator {
        SimpsonIntegrator
    }
}

impl Integrator for SimpsonIntegrator {
    fn method(&self) -> IntegrationMethod {
        IntegrationMethod::Simpson
    }

    fn is_valid_npts(&self, npts: usize) -> bool {
        is_valid_npts(npts)
    }

    fn integrate(&self,
                 fcn: &dyn Fn(f64) -> f64,
                 npts: usize,
                 x_min: f64,
                 x_max: f64) -> Result<f64, IntegrationError> {
        simpson(fcn, npts, x_min, x_max)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use approx::assert_relative_eq;

    use super::*;
    use crate::math::integration::trapezoid::trapezoid;

    #[test]
    fn test_cubic_is_exact() {
        // ∫₋₁² (x³ - 2x² + 1) dx = 15/4 - 6 + 3 = 0.75
        let result = simpson(|x| x * x * x - 2.0 * x * x + 1.0, 3, -1.0, 2.0).unwrap();
        assert_relative_eq!(result, 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_weights_sum_to_interval_length() {
        let last = 10;
        let dx = 0.25;
        let total: f64 = (0..=last).map(|i| weight(i, last, dx)).sum();
        assert_relative_eq!(total, dx * last as f64, epsilon = 1e-14);
    }

    #[test]
    fn test_exp_error_below_1e_8() {
        let exact = std::f64::consts::E - 1.0;
        let result = simpson(f64::exp, 101, 0.0, 1.0).unwrap();
        assert!((result - exact).abs() < 1e-8);
    }

    #[test]
    fn test_beats_trapezoid_on_smooth_integrand() {
        let exact = std::f64::consts::E - 1.0;
        for npts in (3..=51).step_by(2) {
            let simpson_error = (simpson(f64::exp, npts, 0.0, 1.0).unwrap() - exact).abs();
            let trapezoid_error = (trapezoid(f64::exp, npts, 0.0, 1.0).unwrap() - exact).abs();
            assert!(simpson_error < trapezoid_error, "npts = {}", npts);
        }
    }

    #[test]
    fn test_rejects_even_or_too_few_points_without_evaluating() {
        let calls = Cell::new(0);
        let fcn = |x: f64| {
            calls.set(calls.get() + 1);
            x
        };
        for npts in [0, 1, 2, 4, 100] {
            let result = simpson(fcn, npts, 0.0, 1.0);
            assert_eq!(
                result,
                Err(IntegrationError::InvalidParameter {
                    method: IntegrationMethod::Simpson,
                    npts,
                    requirement: "number of points must be odd and at least 3"
                })
            );
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_valid_npts() {
        let integrator = SimpsonIntegrator::new();
        assert_eq!(integrator.method(), IntegrationMethod::Simpson);
        assert!(integrator.is_valid_npts(3));
        assert!(integrator.is_valid_npts(159));
        assert!(!integrator.is_valid_npts(2));
        assert!(!integrator.is_valid_npts(160));
    }
}
