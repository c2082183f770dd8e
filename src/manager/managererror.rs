use serde::Deserialize;
use thiserror::Error;

use crate::math::integration::gausslegendre::quadraturetable::QuadratureTableError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFoundError(String),

    #[error("integrator '{name}' could not load its quadrature table")]
    QuadratureTableError {
        name: String,
        #[source]
        source: QuadratureTableError
    }
}

impl ManagerError {
    pub fn from_json_or_json_parse_error<T>(json_value: serde_json::Value) -> Result<T, Self>
        where T: for<'a> Deserialize<'a> {
        serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
    }

    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }
}
