use serde::Deserialize;

use crate::prediction::{AnnualFee, Prediction};
use crate::session::Session;

#[derive(Deserialize)]
pub struct QueryParams {
    #[serde(default, rename = "annual-fee")]
    pub annual_fee: Option<AnnualFee>,
}

/// What the page shows below the input form.
#[derive(Debug, PartialEq)]
pub enum ShellState {
    Idle,
    PredictionShown(Prediction),
}

impl ShellState {
    /// Runs the prediction if the form has been submitted.
    pub fn new(session: &Session, params: &QueryParams) -> Self {
        match params.annual_fee {
            Some(annual_fee) => Self::PredictionShown(session.predict(annual_fee)),
            None => Self::Idle,
        }
    }

    /// Value to prefill the input with.
    pub fn annual_fee(&self) -> AnnualFee {
        match self {
            Self::Idle => AnnualFee::DEFAULT,
            Self::PredictionShown(prediction) => prediction.annual_fee,
        }
    }
}
