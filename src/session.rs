use crate::dataset::Dataset;
use crate::opts::DatasetOpts;
use crate::prediction::{AnnualFee, Prediction};
use crate::prelude::*;
use crate::regression::FittedModel;

/// Everything computed at startup. Read-only for the lifetime of the process.
pub struct Session {
    pub dataset: Dataset,
    pub model: FittedModel,
    pub r_squared: f64,
}

impl Session {
    #[instrument(skip_all)]
    pub fn start(opts: &DatasetOpts) -> Result<Self> {
        let start_instant = Instant::now();
        let dataset = Dataset::load(&opts.path, &opts.load_options())?;
        let session = Self::new(dataset)?;
        info!(
            slope = session.model.slope,
            intercept = session.model.intercept,
            r_squared = session.r_squared,
            elapsed = ?start_instant.elapsed(),
            "model fitted"
        );
        Ok(session)
    }

    pub fn new(dataset: Dataset) -> Result<Self> {
        let model = FittedModel::fit(dataset.observations()).context("failed to fit the model")?;
        let r_squared = model.r_squared(dataset.observations());
        Ok(Self {
            dataset,
            model,
            r_squared,
        })
    }

    #[must_use]
    pub fn predict(&self, annual_fee: AnnualFee) -> Prediction {
        Prediction::new(&self.model, annual_fee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Observation;
    use crate::regression::FitError;

    #[test]
    fn predict_ok() -> Result {
        let session = Session::new(Dataset::from(vec![
            Observation::new(1000.0, 300.0),
            Observation::new(2000.0, 600.0),
            Observation::new(3000.0, 900.0),
        ]))?;
        let prediction = session.predict(AnnualFee::try_from(4000.0)?);
        assert!((prediction.initial_cost - 1200.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn degenerate_dataset_error() {
        let result = Session::new(Dataset::from(vec![
            Observation::new(500.0, 100.0),
            Observation::new(500.0, 150.0),
        ]));
        let error = result.err().map(|error| error.downcast::<FitError>().ok());
        assert_eq!(error, Some(Some(FitError::DegenerateInput)));
    }

    #[test]
    fn missing_column_error() {
        let opts = DatasetOpts {
            path: concat!(env!("CARGO_MANIFEST_DIR"), "/data/slr12.csv").to_string(),
            delimiter: b';',
            fee_column: "AnnualFee".to_string(),
            cost_column: "CusInic".to_string(),
        };
        assert!(Session::start(&opts).is_err());
    }
}
