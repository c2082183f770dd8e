use crate::math::integration::integrationerror::IntegrationError;
use crate::math::integration::integrator::{
    IntegrationMethod,
    Integrator
};

// ─────────────────────────────────────────────────────────────────────────────
// Trapezoid rule
// ─────────────────────────────────────────────────────────────────────────────
//
// 複合梯形法改寫為單一加權和：
//
//   I ≈ Σ w_i·f(x_i),  x_i = x_min + i·dx,  dx = (x_max - x_min)/(npts - 1)
//
// 端點 w = dx/2，內點 w = dx。
// x_max < x_min 時 dx < 0，結果自然變號。

const MIN_NPTS: usize = 2;

fn is_valid_npts(npts: usize) -> bool {
    npts >= MIN_NPTS
}

/// Integrates `fcn` over `[x_min, x_max]` with the composite trapezoid rule
/// on `npts` evenly spaced points (`npts >= 2`).
pub fn trapezoid<F>(fcn: F, npts: usize, x_min: f64, x_max: f64) -> Result<f64, IntegrationError>
    where F: Fn(f64) -> f64 {
    if !is_valid_npts(npts) {
        return Err(IntegrationError::invalid_parameter(
            IntegrationMethod::Trapezoid,
            npts,
            "number of points must be at least 2"
        ));
    }

    let last = npts - 1;
    let dx = (x_max - x_min) / (last as f64);
    let sum: f64 = (0..npts)
        .map(|i| {
            let weight = if i == 0 || i == last { dx / 2.0 } else { dx };
            weight * fcn(x_min + (i as f64) * dx)
        })
        .sum();
    Ok(sum)
}

pub struct TrapezoidIntegrator;

impl TrapezoidIntegrator {
    pub fn new() -> TrapezoidIntegrator {
        TrapezoidIntegrator
    }
}

impl Integrator for TrapezoidIntegrator {
    fn method(&self) -> IntegrationMethod {
        IntegrationMethod::Trapezoid
    }

    fn is_valid_npts(&self, npts: usize) -> bool {
        is_valid_npts(npts)
    }

    fn integrate(&self,
                 fcn: &dyn Fn(f64) -> f64,
                 npts: usize,
                 x_min: f64,
                 x_max: f64) -> Result<f64, IntegrationError> {
        trapezoid(fcn, npts, x_min, x_max)
    }
}
