use poem::test::TestClient;
use poem::Endpoint;

use crate::dataset::{Dataset, LoadOptions, Observation};
use crate::prelude::*;
use crate::session::Session;
use crate::web::create_app;

/// Client for the app serving the bundled dataset.
pub fn create_test_client() -> Result<TestClient<impl Endpoint>> {
    let dataset = Dataset::load(
        concat!(env!("CARGO_MANIFEST_DIR"), "/data/slr12.csv"),
        &LoadOptions::default(),
    )?;
    create_client(dataset)
}

/// Client for the app serving `initial_cost = 0.3 × annual_fee`.
pub fn create_linear_test_client() -> Result<TestClient<impl Endpoint>> {
    create_client(Dataset::from(vec![
        Observation::new(1000.0, 300.0),
        Observation::new(2000.0, 600.0),
        Observation::new(3000.0, 900.0),
    ]))
}

fn create_client(dataset: Dataset) -> Result<TestClient<impl Endpoint>> {
    let session = Arc::new(Session::new(dataset)?);
    Ok(TestClient::new(create_app(session)?))
}
