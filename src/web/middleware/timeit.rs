use poem::http::Uri;
use poem::{Endpoint, Middleware, Request, Response, Result};

use crate::prelude::*;

/// Logs every request with the dashboard view it hit, its status and duration.
pub struct TimeItMiddleware;

impl<E: Endpoint<Output = Response>> Middleware<E> for TimeItMiddleware {
    type Output = TimeItMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        TimeItMiddlewareImpl { ep }
    }
}

pub struct TimeItMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint<Output = Response>> Endpoint for TimeItMiddlewareImpl<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let method = request.method().clone();
        let view = View::of(request.uri());
        let start_instant = Instant::now();
        let response = self.ep.call(request).await;
        let elapsed = start_instant.elapsed();
        match &response {
            Ok(response) if response.status().is_server_error() => {
                warn!(%method, ?view, status = %response.status(), ?elapsed, "failed");
            }
            Ok(response) => {
                info!(%method, ?view, status = %response.status(), ?elapsed, "served");
            }
            Err(error) => {
                warn!(%method, ?view, ?elapsed, "{:#}", error);
            }
        }
        response
    }
}

/// What the request was about, for logging.
#[derive(Debug, PartialEq, Eq)]
enum View {
    Dashboard { prediction: bool },
    Chart,
    Model,
    Prediction,
    Health,
    Asset,
}

impl View {
    fn of(uri: &Uri) -> Self {
        match uri.path() {
            "/" => Self::Dashboard {
                prediction: uri
                    .query()
                    .map_or(false, |query| query.split('&').any(|pair| pair.starts_with("annual-fee="))),
            },
            "/api/model" => Self::Model,
            "/api/predict" => Self::Prediction,
            "/health" => Self::Health,
            path if path.starts_with("/charts/") => Self::Chart,
            _ => Self::Asset,
        }
    }
}
