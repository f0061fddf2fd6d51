// s3report: Reports object counts, sizes and owners for AWS S3 buckets.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
//! `s3report` scans every object in every selected S3 bucket and prints a
//! report per bucket as each scan finishes.
use anyhow::{
    Context,
    Result,
};
use tracing::{
    debug,
    error,
};
use tracing_subscriber::EnvFilter;

mod cli;
mod common;
mod report;
mod s3;

use common::Error;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout only carries reports.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = cli::parse_args();
    let config  = cli::report_config(&matches);

    debug!("Config: {:?}", config);

    let client = s3::Client::new(config.region.clone()).await;

    let buckets = report::list_buckets(&client, &config.include, &config.exclude)
        .await
        .context("Could not get buckets")?;

    if buckets.is_empty() {
        return Err(Error::NoBuckets.into());
    }

    // Reports are printed as they arrive, so a timeout still leaves the
    // buckets that finished in the output.
    report::analyze_buckets(&client, buckets, &config, |analysis| {
        match report::render(&analysis, config.output) {
            Ok(report) => println!("{}", report),
            Err(e)     => error!("{:#}", e),
        }
    })
    .await
    .context("Bucket analysis did not complete")?;

    Ok(())
}
