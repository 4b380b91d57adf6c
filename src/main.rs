use clap::Parser;

use crate::opts::Opts;
use crate::prelude::*;
use crate::session::Session;

mod chart;
mod dataset;
mod logging;
mod opts;
mod prediction;
mod prelude;
mod regression;
mod session;
mod web;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = logging::init(opts.sentry_dsn.clone(), opts.traces_sample_rate)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting…");

    let session = Session::start(&opts.dataset).context("failed to start the session")?;
    let result = web::run(&opts.web, Arc::new(session)).await;

    if let Err(error) = &result {
        error!("fatal error: {:#}", error);
    }
    result
}
