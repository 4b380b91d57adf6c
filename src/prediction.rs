use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::regression::FittedModel;

/// Annual fee accepted by the prediction form.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AnnualFee(f64);

impl AnnualFee {
    pub const MIN: f64 = 1.0;
    pub const MAX: f64 = 999_999.0;
    pub const STEP: f64 = 0.01;
    pub const DEFAULT: Self = Self(1500.0);

    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for AnnualFee {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("annual fee {0} is outside [{min}, {max}]", min = AnnualFee::MIN, max = AnnualFee::MAX)]
pub struct OutOfRange(pub f64);

impl TryFrom<f64> for AnnualFee {
    type Error = OutOfRange;

    fn try_from(value: f64) -> StdResult<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(OutOfRange(value))
        }
    }
}

impl From<AnnualFee> for f64 {
    fn from(annual_fee: AnnualFee) -> Self {
        annual_fee.0
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub annual_fee: AnnualFee,
    pub initial_cost: f64,
}

impl Prediction {
    #[must_use]
    pub fn new(model: &FittedModel, annual_fee: AnnualFee) -> Self {
        Self {
            annual_fee,
            initial_cost: model.predict(annual_fee.get()),
        }
    }
}
