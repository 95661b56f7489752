//! Fetch, join, transform and export, in that order. The first failing
//! stage aborts the run with a message naming it.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::{
    configuration::Config,
    error::{Error, StageContext},
    handler::report::build_rows,
    helpers::{format_timestamp_in, parse_date_time, TimeWindow},
    provider::{export, read_label_map, HTTP},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub window: TimeWindow,
    pub rows: usize,
    pub output_file: PathBuf,
}

pub async fn run(config: &Config) -> Result<Report, Error> {
    run_at(config, Local::now().date_naive()).await
}

/// Runs the pipeline, dating the output file with `today`.
pub async fn run_at(config: &Config, today: NaiveDate) -> Result<Report, Error> {
    let start_time = parse_date_time(&config.start_datetime)
        .stage("error parsing start date and time")?;
    let end_time = parse_date_time(&config.end_datetime)
        .stage("error parsing end date and time")?;
    let window = TimeWindow {
        start_time,
        end_time,
    };

    println!("Start timestamp: {}", window.start_time);
    println!("End timestamp: {}", window.end_time);
    debug!(
        "Window {:?} .. {:?}",
        format_timestamp_in(window.start_time, &Local),
        format_timestamp_in(window.end_time, &Local)
    );

    let labels = read_label_map(&config.cluster_file)
        .stage("error reading cluster names")?;

    let http = HTTP::new(config.clone()).stage("error creating http client")?;
    let provers = http
        .get_prover_rank_list(&window)
        .await
        .stage("error fetching prover rank list")?;
    info!("Fetched {} provers", provers.len());

    let rows = build_rows(&provers, &labels);
    let output_file =
        export(&rows, &config.output_dir, today).stage("error saving file")?;

    Ok(Report {
        window,
        rows: rows.len(),
        output_file,
    })
}
