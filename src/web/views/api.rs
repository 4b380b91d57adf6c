use poem::http::StatusCode;
use poem::web::{Data, Json, Query};
use poem::{handler, IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::prediction::{AnnualFee, Prediction};
use crate::prelude::*;
use crate::regression::FittedModel;
use crate::session::Session;

const CACHE_CONTROL: &str = "no-cache";

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get_health() -> Result<impl IntoResponse> {
    Ok(Response::from(StatusCode::NO_CONTENT).with_header("Cache-Control", CACHE_CONTROL))
}

#[derive(Serialize)]
pub struct ModelResponse {
    #[serde(flatten)]
    pub model: FittedModel,
    pub r_squared: f64,
    pub n_observations: usize,
}

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get_model(session: Data<&Arc<Session>>) -> Result<impl IntoResponse> {
    let response = ModelResponse {
        model: session.model,
        r_squared: session.r_squared,
        n_observations: session.dataset.len(),
    };
    Ok(Json(response).with_header("Cache-Control", CACHE_CONTROL))
}

#[derive(Deserialize)]
pub struct PredictionParams {
    #[serde(rename = "annual-fee")]
    pub annual_fee: AnnualFee,
}

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get_prediction(
    Query(params): Query<PredictionParams>,
    session: Data<&Arc<Session>>,
) -> Result<Json<Prediction>> {
    let prediction = session.predict(params.annual_fee);
    debug!(?prediction);
    Ok(Json(prediction))
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use serde_json::Value;

    use crate::prelude::*;
    use crate::web::test::{create_linear_test_client, create_test_client};

    #[tokio::test]
    async fn health_ok() -> Result {
        let client = create_test_client()?;
        client.get("/health").send().await.assert_status(StatusCode::NO_CONTENT);
        Ok(())
    }

    #[tokio::test]
    async fn model_ok() -> Result {
        let client = create_linear_test_client()?;
        let response = client.get("/api/model").send().await;
        response.assert_status_is_ok();
        let body: Value = serde_json::from_str(&response.0.into_body().into_string().await?)?;
        assert!((body["slope"].as_f64().unwrap() - 0.3).abs() < 1e-9);
        assert!(body["intercept"].as_f64().unwrap().abs() < 1e-6);
        assert!((body["r_squared"].as_f64().unwrap() - 1.0).abs() < 1e-9);
        assert_eq!(body["n_observations"], 3);
        assert_eq!(body.as_object().map(|object| object.len()), Some(4));
        Ok(())
    }

    #[tokio::test]
    async fn prediction_ok() -> Result {
        let client = create_linear_test_client()?;
        let response = client.get("/api/predict?annual-fee=4000").send().await;
        response.assert_status_is_ok();
        let body: Value = serde_json::from_str(&response.0.into_body().into_string().await?)?;
        assert_eq!(body["annual_fee"], 4000.0);
        assert!((body["initial_cost"].as_f64().unwrap() - 1200.0).abs() < 1e-9);
        Ok(())
    }

    #[tokio::test]
    async fn prediction_missing_fee_error() -> Result {
        let client = create_test_client()?;
        client.get("/api/predict").send().await.assert_status(StatusCode::BAD_REQUEST);
        client
            .get("/api/predict?annual-fee=-5")
            .send()
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn method_not_allowed_ok() -> Result {
        let client = create_test_client()?;
        client
            .post("/api/predict?annual-fee=4000")
            .send()
            .await
            .assert_status(StatusCode::METHOD_NOT_ALLOWED);
        Ok(())
    }
}
