use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;

use poem::listener::TcpListener;
use poem::middleware::CatchPanic;
use poem::{get, Endpoint, EndpointExt, Route, Server};

use crate::opts::WebOpts;
use crate::prelude::*;
use crate::session::Session;
use crate::web::charts::Charts;
use crate::web::middleware::{ErrorMiddleware, SecurityHeaders, SentryMiddleware, TimeItMiddleware};

mod charts;
mod i18n;
mod middleware;
mod partials;
#[cfg(test)]
mod test;
mod views;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Serves the dashboard until interrupted.
pub async fn run(opts: &WebOpts, session: Arc<Session>) -> Result {
    let app = create_app(session)?;
    info!(host = %opts.host, port = opts.port, "listening…");
    Server::new(TcpListener::bind((IpAddr::from_str(&opts.host)?, opts.port)))
        .run_with_graceful_shutdown(
            app,
            async {
                if let Err(error) = tokio::signal::ctrl_c().await {
                    error!("failed to listen for the interrupt signal: {:#}", error);
                }
                info!("shutting down…");
            },
            Some(SHUTDOWN_TIMEOUT),
        )
        .await
        .context("the server has failed")
}

pub fn create_app(session: Arc<Session>) -> Result<impl Endpoint> {
    let i18n_resources = i18n::build_resources()?;
    let charts = Charts::render(&session, &i18n_resources)?;

    let app = Route::new()
        .at("/", get(views::dashboard::get))
        .at("/charts/:language", get(views::r#static::get_chart))
        .at("/api/model", get(views::api::get_model))
        .at("/api/predict", get(views::api::get_prediction))
        .at("/health", get(views::api::get_health))
        .at("/static/theme.css", get(views::r#static::get_theme_css))
        .at("/robots.txt", get(views::r#static::get_robots_txt))
        .data(session)
        .data(Arc::new(charts))
        .data(i18n_resources)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(SecurityHeaders)
        .with(TimeItMiddleware)
        .with(SentryMiddleware);
    Ok(app)
}
