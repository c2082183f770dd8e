use std::num::ParseFloatError;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseQuadraturePointError {
    #[error("missing {0} field")]
    MissingField(&'static str),

    #[error("cannot parse {field} '{token}': {source}")]
    Parse {
        field: &'static str,
        token: String,
        #[source]
        source: ParseFloatError
    },

    #[error("{field} must be finite, got {value}")]
    NonFinite {
        field: &'static str,
        value: f64
    },

    #[error("weight must be positive, got {0}")]
    NonPositiveWeight(f64)
}

/// 標準區間 [-1, 1] 上的一個求積節點與其權重。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraturePoint {
    abscissa: f64,
    weight: f64
}

impl QuadraturePoint {
    pub fn new(abscissa: f64, weight: f64) -> QuadraturePoint {
        QuadraturePoint { abscissa, weight }
    }

    pub fn abscissa(&self) -> f64 {
        self.abscissa
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// 將節點仿射映射到 [x_min, x_max]：x = half_length·ξ + mid
    pub fn mapped_abscissa(&self, half_length: f64, mid: f64) -> f64 {
        f64::mul_add(half_length, self.abscissa, mid)
    }
}

fn parse_field(token: Option<&str>, field: &'static str) -> Result<f64, ParseQuadraturePointError> {
    let token = token.ok_or(ParseQuadraturePointError::MissingField(field))?;
    let value = token.parse::<f64>().map_err(|source| ParseQuadraturePointError::Parse {
        field,
        token: token.to_owned(),
        source
    })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseQuadraturePointError::NonFinite { field, value })
    }
}

/// 解析 `<abscissa> <weight>`，以任意空白分隔，多餘欄位忽略。
impl FromStr for QuadraturePoint {
    type Err = ParseQuadraturePointError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let abscissa = parse_field(tokens.next(), "abscissa")?;
        let weight = parse_field(tokens.next(), "weight")?;
        if weight <= 0.0 {
            return Err(ParseQuadraturePointError::NonPositiveWeight(weight));
        }
        Ok(QuadraturePoint::new(abscissa, weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        let point: QuadraturePoint = "-0.5773502691896257 1.0000000000000002".parse().unwrap();
        assert_eq!(point.abscissa(), -0.5773502691896257);
        assert_eq!(point.weight(), 1.0000000000000002);
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_extra_fields() {
        let point: QuadraturePoint = "  \t0.0\t\t2.0   extra 42 ".parse().unwrap();
        assert_eq!(point, QuadraturePoint::new(0.0, 2.0));
    }

    #[test]
    fn test_parse_scientific_notation() {
        let point: QuadraturePoint = "1.5e-1 3.25E-2".parse().unwrap();
        assert_eq!(point, QuadraturePoint::new(0.15, 0.0325));
    }

    #[test]
    fn test_missing_weight() {
        let result = "0.5".parse::<QuadraturePoint>();
        assert_eq!(result, Err(ParseQuadraturePointError::MissingField("weight")));
    }

    #[test]
    fn test_bad_number() {
        let result = "0.5 abc".parse::<QuadraturePoint>();
        assert!(matches!(
            result,
            Err(ParseQuadraturePointError::Parse { field: "weight", ref token, .. }) if token == "abc"
        ));
    }

    #[test]
    fn test_rejects_non_finite_and_non_positive() {
        assert!(matches!(
            "NaN 1.0".parse::<QuadraturePoint>(),
            Err(ParseQuadraturePointError::NonFinite { field: "abscissa", .. })
        ));
        assert!(matches!(
            "0.0 inf".parse::<QuadraturePoint>(),
            Err(ParseQuadraturePointError::NonFinite { field: "weight", .. })
        ));
        assert_eq!(
            "0.0 -1.0".parse::<QuadraturePoint>(),
            Err(ParseQuadraturePointError::NonPositiveWeight(-1.0))
        );
    }

    #[test]
    fn test_mapped_abscissa() {
        let point = QuadraturePoint::new(-1.0, 1.0);
        // [-1, 1] → [2, 6]: half_length = 2, mid = 4
        assert_eq!(point.mapped_abscissa(2.0, 4.0), 2.0);
        assert_eq!(QuadraturePoint::new(1.0, 1.0).mapped_abscissa(2.0, 4.0), 6.0);
    }
}
