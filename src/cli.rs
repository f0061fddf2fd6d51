// Command line interface parsing
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use clap::{
    crate_description,
    crate_name,
    crate_version,
    value_parser,
    Arg,
    ArgAction,
    ArgMatches,
    Command,
};
use crate::common::{
    OutputFormat,
    Region,
    ReportConfig,
    DEFAULT_DISPLAY_COUNT,
    DEFAULT_TIMEOUT,
};
use std::time::Duration;
use tracing::debug;

// These should match DEFAULT_DISPLAY_COUNT and DEFAULT_TIMEOUT.
const DEFAULT_COUNT: &str = "-5";
const DEFAULT_TIMEOUT_SECS: &str = "600";

// Ensures that the concurrency we're passed is a positive number.
fn is_valid_concurrency(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0)  => Err("must be at least 1".into()),
        Ok(n)  => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

// Create clap app
fn create_app() -> Command {
    debug!("Creating CLI app");

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::new("COUNT")
                .env("S3REPORT_COUNT")
                .hide_env_values(true)
                .long("count")
                .short('c')
                .value_name("N")
                .help("Number of objects to show for each bucket. 5 shows \
                       the five newest, -5 the five oldest.")
                .allow_negative_numbers(true)
                .default_value(DEFAULT_COUNT)
                .value_parser(value_parser!(i64))
        )
        .arg(
            Arg::new("TIMEOUT")
                .env("S3REPORT_TIMEOUT")
                .hide_env_values(true)
                .long("timeout")
                .short('t')
                .value_name("SECONDS")
                .help("Number of seconds to wait for all buckets to be \
                       reported.")
                .default_value(DEFAULT_TIMEOUT_SECS)
                .value_parser(value_parser!(u64))
        )
        .arg(
            Arg::new("INCLUDE")
                .env("S3REPORT_INCLUDE")
                .hide_env_values(true)
                .long("include")
                .short('i')
                .value_name("SUBSTRING")
                .help("Only report buckets whose name includes this. Default \
                       is all buckets.")
        )
        .arg(
            Arg::new("EXCLUDE")
                .env("S3REPORT_EXCLUDE")
                .hide_env_values(true)
                .long("exclude")
                .short('e')
                .value_name("SUBSTRING")
                .help("Skip buckets whose name includes this. Default is no \
                       buckets.")
        )
        .arg(
            Arg::new("JSON")
                .env("S3REPORT_JSON")
                .hide_env_values(true)
                .long("json")
                .short('j')
                .help("Print each bucket report as a line of JSON.")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("REGION")
                .env("AWS_REGION")
                .hide_env_values(true)
                .long("region")
                .short('r')
                .value_name("REGION")
                .help("Set the AWS region to create the client in.")
        )
        .arg(
            Arg::new("ENDPOINT")
                .env("S3REPORT_ENDPOINT")
                .hide_env_values(true)
                .long("endpoint")
                .value_name("URL")
                .help("Use a custom endpoint for S3 compatible services.")
        )
        .arg(
            Arg::new("CONCURRENCY")
                .env("S3REPORT_CONCURRENCY")
                .hide_env_values(true)
                .long("concurrency")
                .value_name("N")
                .help("Maximum number of buckets to scan at once. Default is \
                       all of them.")
                .value_parser(is_valid_concurrency)
        )
}

/// Parse the command line.
pub fn parse_args() -> ArgMatches {
    debug!("Parsing command line arguments");

    create_app().get_matches()
}

/// Build a `ReportConfig` from parsed arguments.
pub fn report_config(matches: &ArgMatches) -> ReportConfig {
    // Defaults are set for these in create_app, they're always present.
    let display_count = matches.get_one::<i64>("COUNT")
        .copied()
        .unwrap_or(DEFAULT_DISPLAY_COUNT);

    let timeout = matches.get_one::<u64>("TIMEOUT")
        .map(|secs| Duration::from_secs(*secs))
        .unwrap_or(DEFAULT_TIMEOUT);

    let string = |id: &str| {
        matches.get_one::<String>(id)
            .cloned()
            .unwrap_or_default()
    };

    let mut region = Region::new();

    if let Some(name) = matches.get_one::<String>("REGION") {
        region = region.set_region(name);
    }

    if let Some(endpoint) = matches.get_one::<String>("ENDPOINT") {
        region = region.set_endpoint(endpoint);
    }

    ReportConfig {
        display_count: display_count,
        timeout:       timeout,
        include:       string("INCLUDE"),
        exclude:       string("EXCLUDE"),
        output:        OutputFormat::from(matches.get_flag("JSON")),
        region:        region,
        concurrency:   matches.get_one::<usize>("CONCURRENCY").copied(),
    }
}
