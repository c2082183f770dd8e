use thiserror::Error;

use crate::math::integration::integrator::IntegrationMethod;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IntegrationError {
    #[error("in <{method}>: invalid number of points {npts}, {requirement}")]
    InvalidParameter {
        method: IntegrationMethod,
        npts: usize,
        requirement: &'static str
    },

    #[error("unsupported gauss-legendre order {order}, loaded orders are 1 to {max_order}")]
    UnsupportedOrder {
        order: usize,
        max_order: usize
    }
}

impl IntegrationError {
    pub fn invalid_parameter(method: IntegrationMethod,
                             npts: usize,
                             requirement: &'static str) -> IntegrationError {
        IntegrationError::InvalidParameter { method, npts, requirement }
    }
}
