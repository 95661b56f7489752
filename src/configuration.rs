use std::path::PathBuf;

use tracing::debug;
use url::Url;

use crate::{cli::Cli, error::Error};

pub const DEFAULT_API_URL: &str =
    "http://localhost:8088/api/v1/provers/prover_rank_list";

#[derive(Debug, Clone)]
pub struct Config {
    pub start_datetime: String,
    pub end_datetime: String,
    pub cluster_file: PathBuf,
    pub api_url: Url,
    pub output_dir: PathBuf,
}

impl Config {
    pub fn new(
        start_datetime: String,
        end_datetime: String,
        cluster_file: PathBuf,
        api_url: &str,
        output_dir: PathBuf,
    ) -> Result<Config, Error> {
        let api_url = parse_api_url(api_url)?;

        Ok(Config {
            start_datetime,
            end_datetime,
            cluster_file,
            api_url,
            output_dir,
        })
    }
}

impl TryFrom<Cli> for Config {
    type Error = Error;

    fn try_from(cli: Cli) -> Result<Config, Error> {
        Config::new(
            cli.start_datetime,
            cli.end_datetime,
            cli.cluster_file,
            &cli.api_url,
            cli.output_dir,
        )
    }
}

/// Loads `.env` from the working directory into the process
/// environment, if the file exists.
pub fn set_configuration() -> Result<(), Error> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!("Loaded environment from {}", path.display());
            Ok(())
        },
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(Error::ConfigurationError(e.to_string())),
    }
}

fn parse_api_url(value: &str) -> Result<Url, Error> {
    let url = Url::parse(value)?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::ConfigurationError(format!(
            "api url must use http or https, got {}",
            scheme
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_url: &str) -> Result<Config, Error> {
        Config::new(
            String::from("2024-06-01 00:00:00"),
            String::from("2024-06-02 00:00:00"),
            PathBuf::from("clusters.csv"),
            api_url,
            PathBuf::from("."),
        )
    }

    #[test]
    fn test_default_api_url_is_valid() {
        let config = config(DEFAULT_API_URL).unwrap();
        assert_eq!(config.api_url.port(), Some(8088));
        assert_eq!(config.api_url.path(), "/api/v1/provers/prover_rank_list");
    }

    #[test]
    fn test_rejects_unparsable_url() {
        assert!(matches!(config("not a url"), Err(Error::URL(_))));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        assert!(matches!(
            config("ftp://localhost/rank"),
            Err(Error::ConfigurationError(_))
        ));
    }
}
