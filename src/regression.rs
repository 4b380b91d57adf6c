//! Ordinary least squares fit of the initial cost against the annual fee.

use serde::Serialize;
use statrs::statistics::Statistics;

use crate::dataset::Observation;
use crate::prelude::*;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FitError {
    #[error("there are no observations to fit")]
    EmptyInput,

    #[error("all annual fees are identical, the slope is undefined")]
    DegenerateInput,
}

/// Fitted line: `initial_cost = slope × annual_fee + intercept`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct FittedModel {
    pub slope: f64,
    pub intercept: f64,
}

impl FittedModel {
    pub fn fit(observations: &[Observation]) -> StdResult<Self, FitError> {
        if observations.is_empty() {
            return Err(FitError::EmptyInput);
        }

        let x: Vec<f64> = observations.iter().map(|point| point.annual_fee).collect();
        let y: Vec<f64> = observations.iter().map(|point| point.initial_cost).collect();

        // Sample variance is NaN for a single observation.
        let variance = x.iter().variance();
        if variance.is_nan() || variance <= 0.0 {
            return Err(FitError::DegenerateInput);
        }

        let slope = x.iter().covariance(y.iter()) / variance;
        let intercept = y.iter().mean() - slope * x.iter().mean();
        debug!(slope, intercept);
        Ok(Self { slope, intercept })
    }

    #[must_use]
    pub fn predict(&self, annual_fee: f64) -> f64 {
        self.slope * annual_fee + self.intercept
    }

    /// Coefficient of determination on the given observations.
    #[must_use]
    pub fn r_squared(&self, observations: &[Observation]) -> f64 {
        let mean = observations.iter().map(|point| point.initial_cost).mean();
        let (residual_sum, total_sum) =
            observations
                .iter()
                .fold((0.0, 0.0), |(residual_sum, total_sum), point| {
                    let residual = point.initial_cost - self.predict(point.annual_fee);
                    let deviation = point.initial_cost - mean;
                    (residual_sum + residual * residual, total_sum + deviation * deviation)
                });
        if total_sum == 0.0 {
            // Constant target is fitted exactly by the flat line.
            1.0
        } else {
            1.0 - residual_sum / total_sum
        }
    }
}
