use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{multiply, Error};

/// Operands of one invocation together with their product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub a: i64,
    pub b: i64,
    pub product: i64,
}

impl Report {
    pub fn new(a: i64, b: i64) -> Self {
        let product = multiply(a, b);
        tracing::debug!(a, b, product, "multiplied operands");
        Self { a, b, product }
    }

    /// Single-line JSON rendering, e.g. `{"a":6,"b":7,"product":42}`.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The product is {}", self.product)
    }
}
