use std::path::Path;

use crate::math::integration::gausslegendre::quadraturetable::{
    QuadratureTable,
    QuadratureTableError
};
use crate::math::integration::integrationerror::IntegrationError;
use crate::math::integration::integrator::{
    IntegrationMethod,
    Integrator
};

// ─────────────────────────────────────────────────────────────────────────────
// GaussIntegrator - 固定階數 Gauss-Legendre 求積
// ─────────────────────────────────────────────────────────────────────────────
//
// 標準區間 [-1, 1] 的節點 ξ_j 經仿射映射到 [x_min, x_max]：
//
//   x_j = h·ξ_j + m,  h = (x_max - x_min)/2,  m = (x_max + x_min)/2
//
//   I ≈ h · Σ w_j·f(x_j)
//
// n 階公式對次數 ≤ 2n-1 的多項式為精確解。

pub struct GaussIntegrator {
    table: QuadratureTable
}

impl GaussIntegrator {
    /// Loads the quadrature table at `path`. A table that cannot be opened or
    /// parsed fails construction; there is no half-initialized integrator.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<GaussIntegrator, QuadratureTableError> {
        let table = QuadratureTable::from_path(path)?;
        Ok(GaussIntegrator::from_table(table))
    }

    pub fn from_table(table: QuadratureTable) -> GaussIntegrator {
        GaussIntegrator { table }
    }

    pub fn table(&self) -> &QuadratureTable {
        &self.table
    }

    pub fn max_order(&self) -> usize {
        self.table.max_order()
    }

    /// `npts` 即求積階數，須介於 1 與 `max_order()` 之間。
    pub fn integral<F>(&self, fcn: F, npts: usize, x_min: f64, x_max: f64) -> Result<f64, IntegrationError>
        where F: Fn(f64) -> f64 {
        let points = self.table.points(npts).ok_or(IntegrationError::UnsupportedOrder {
            order: npts,
            max_order: self.max_order()
        })?;

        let half_length = (x_max - x_min) / 2.0;
        let mid = (x_max + x_min) / 2.0;
        let sum: f64 = points
            .iter()
            .map(|pt| pt.weight() * fcn(pt.mapped_abscissa(half_length, mid)))
            .sum();
        Ok(half_length * sum)
    }
}

impl Integrator for GaussIntegrator {
    fn method(&self) -> IntegrationMethod {
        IntegrationMethod::GaussLegendre
    }

    fn is_valid_npts(&self, npts: usize) -> bool {
        npts >= 1 && npts <= self.max_order()
    }

    fn integrate(&self,
                 fcn: &dyn Fn(f64) -> f64,
                 npts: usize,
                 x_min: f64,
                 x_max: f64) -> Result<f64, IntegrationError> {
        self.integral(fcn, npts, x_min, x_max)
    }
}
