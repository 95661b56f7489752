//! Command-line interface for the prover report.
//!
//! Flag names keep their underscore spelling; kebab-case aliases and
//! `PROVER_REPORT_*` environment variables are accepted as well.

use std::path::PathBuf;

use clap::Parser;

use crate::{
    configuration::{set_configuration, Config, DEFAULT_API_URL},
    error::Error,
    pipeline,
};

/// Prover Rank List Fetcher
#[derive(Parser, Debug)]
#[command(name = "prover-report")]
#[command(about = "Fetch and process prover rank list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start date and time for the data fetch (YYYY-MM-DD HH:MM:SS)
    #[arg(
        long = "start_datetime",
        visible_alias = "start-datetime",
        env = "PROVER_REPORT_START_DATETIME"
    )]
    pub start_datetime: String,

    /// End date and time for the data fetch (YYYY-MM-DD HH:MM:SS)
    #[arg(
        long = "end_datetime",
        visible_alias = "end-datetime",
        env = "PROVER_REPORT_END_DATETIME"
    )]
    pub end_datetime: String,

    /// Path to the cluster-name file
    #[arg(
        long = "cluster_file",
        visible_alias = "cluster-file",
        env = "PROVER_REPORT_CLUSTER_FILE"
    )]
    pub cluster_file: PathBuf,

    /// API URL for fetching prover rank list
    #[arg(
        long = "api_url",
        visible_alias = "api-url",
        env = "PROVER_REPORT_API_URL",
        default_value = DEFAULT_API_URL
    )]
    pub api_url: String,

    /// Directory the spreadsheet is written to
    #[arg(
        long = "output_dir",
        visible_alias = "output-dir",
        env = "PROVER_REPORT_OUTPUT_DIR",
        default_value = "."
    )]
    pub output_dir: PathBuf,
}

/// Loads `.env`, then parses the process arguments.
pub fn parse_args() -> Result<Cli, Error> {
    set_configuration()?;
    Ok(Cli::parse())
}

/// Runs the report for parsed arguments and prints the result lines.
pub async fn run(cli: Cli) -> Result<(), Error> {
    let config = Config::try_from(cli)?;
    let report = pipeline::run(&config).await?;

    println!("数据已保存到 {}", report.output_file.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_underscore_flags() {
        let cli = Cli::try_parse_from([
            "prover-report",
            "--start_datetime",
            "2024-06-01 00:00:00",
            "--end_datetime",
            "2024-06-02 00:00:00",
            "--cluster_file",
            "clusters.csv",
        ])
        .unwrap();

        assert_eq!(cli.start_datetime, "2024-06-01 00:00:00");
        assert_eq!(cli.end_datetime, "2024-06-02 00:00:00");
        assert_eq!(cli.cluster_file, PathBuf::from("clusters.csv"));
        assert_eq!(cli.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_parse_kebab_aliases() {
        let cli = Cli::try_parse_from([
            "prover-report",
            "--start-datetime",
            "2024-06-01 00:00:00",
            "--end-datetime",
            "2024-06-02 00:00:00",
            "--cluster-file",
            "clusters.csv",
            "--api-url",
            "http://rank.example:9000/list",
            "--output-dir",
            "/tmp/reports",
        ])
        .unwrap();

        assert_eq!(cli.api_url, "http://rank.example:9000/list");
        assert_eq!(cli.output_dir, PathBuf::from("/tmp/reports"));
    }

    #[test]
    fn test_missing_required_flag() {
        let result = Cli::try_parse_from([
            "prover-report",
            "--start_datetime",
            "2024-06-01 00:00:00",
            "--cluster_file",
            "clusters.csv",
        ]);
        assert!(result.is_err());
    }
}
