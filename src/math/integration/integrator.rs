use std::fmt;

use serde::Deserialize;

use crate::math::integration::integrationerror::IntegrationError;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum IntegrationMethod {
    Trapezoid,
    Simpson,
    GaussLegendre
}

impl fmt::Display for IntegrationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrationMethod::Trapezoid => write!(f, "trapezoid"),
            IntegrationMethod::Simpson => write!(f, "simpson"),
            IntegrationMethod::GaussLegendre => write!(f, "gauss-legendre")
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Integrator
// ─────────────────────────────────────────────────────────────────────────────

/// 一維定積分的共同介面。
///
/// `npts` 為被積函數的求值次數；各方法對 `npts` 的限制不同，
/// 不合法時回傳 `Err`，且不會呼叫 `fcn`。
///
/// 加入 `Send + Sync`，使 `dyn Integrator` 可放入 `Arc` 並跨執行緒共用。
pub trait Integrator: Send + Sync {
    fn method(&self) -> IntegrationMethod;

    fn is_valid_npts(&self, npts: usize) -> bool;

    fn integrate(&self,
                 fcn: &dyn Fn(f64) -> f64,
                 npts: usize,
                 x_min: f64,
                 x_max: f64) -> Result<f64, IntegrationError>;
}
