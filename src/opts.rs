//! CLI options.

use clap::{crate_version, Args, Parser};

use crate::dataset::LoadOptions;

pub mod parsers;

#[derive(Parser)]
#[command(version = crate_version!(), about)]
pub struct Opts {
    /// Sentry DSN
    #[arg(short, long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance monitoring sample rate for Sentry
    #[arg(
        long,
        default_value = "0",
        env = "TRACES_SAMPLE_RATE",
        value_parser = parsers::sample_rate,
    )]
    pub traces_sample_rate: f32,

    #[command(flatten)]
    pub dataset: DatasetOpts,

    #[command(flatten)]
    pub web: WebOpts,
}

#[derive(Args)]
pub struct DatasetOpts {
    /// Delimited text file with the historical franchise data
    #[arg(long = "dataset", default_value = "slr12.csv", env = "FRANCHISE_DATASET")]
    pub path: String,

    /// Field delimiter: a single ASCII character or `tab`
    #[arg(
        long,
        default_value = ";",
        env = "FRANCHISE_DELIMITER",
        value_parser = parsers::delimiter,
    )]
    pub delimiter: u8,

    /// Name of the annual fee column
    #[arg(long, default_value = "FrqAnual")]
    pub fee_column: String,

    /// Name of the initial cost column
    #[arg(long, default_value = "CusInic")]
    pub cost_column: String,
}

impl DatasetOpts {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            delimiter: self.delimiter,
            fee_column: self.fee_column.clone(),
            cost_column: self.cost_column.clone(),
        }
    }
}

/// Web application options
#[derive(Args)]
pub struct WebOpts {
    /// Web application bind host
    #[arg(long, default_value = "::", env = "FRANCHISE_HOST")]
    pub host: String,

    /// Web application bind port
    #[arg(short, long, default_value = "8081", env = "FRANCHISE_PORT")]
    pub port: u16,
}
