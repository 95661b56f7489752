use std::io::Error as IO_ERROR;

use csv::Error as CSV_ERROR;
use reqwest::{Error as REQWEST_ERROR, StatusCode};
use rust_xlsxwriter::XlsxError as XLSX_ERROR;
use serde_json::Error as JSON_ERROR;
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError as TRACING_GLOBAL_DEFAULT_ERROR;
use url::ParseError as URL_ERROR;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] IO_ERROR),

    #[error("{0}")]
    URL(#[from] URL_ERROR),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("{0}")]
    JsonError(#[from] JSON_ERROR),

    #[error("{0}")]
    CsvError(#[from] CSV_ERROR),

    #[error("{0}")]
    XlsxError(#[from] XLSX_ERROR),

    #[error("{0}")]
    ReqwestError(#[from] REQWEST_ERROR),

    #[error("failed to get data: {status}")]
    HttpStatus { status: StatusCode },

    #[error("Tracing error: {0}")]
    SetGlobalDefaultError(#[from] TRACING_GLOBAL_DEFAULT_ERROR),

    #[error("Number conversion: {0}")]
    NumberConversion(String),

    #[error("Decode datetime: {0}")]
    DecodeDateTimeError(String),

    #[error("{stage}: {source}")]
    Stage {
        stage: &'static str,
        source: Box<Error>,
    },
}

impl Error {
    /// The innermost error, skipping any stage wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Error::Stage { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Attaches a stage description to a failed pipeline step.
pub trait StageContext<T> {
    fn stage(self, stage: &'static str) -> Result<T, Error>;
}

impl<T, E> StageContext<T> for Result<T, E>
where
    E: Into<Error>,
{
    fn stage(self, stage: &'static str) -> Result<T, Error> {
        self.map_err(|e| Error::Stage {
            stage,
            source: Box::new(e.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_message_wraps_source() {
        let result: Result<(), Error> =
            Err(Error::DecodeDateTimeError(String::from("bad input")));
        let err = result.stage("error parsing start date and time").unwrap_err();

        assert_eq!(
            err.to_string(),
            "error parsing start date and time: Decode datetime: bad input"
        );
        assert!(matches!(err.root(), Error::DecodeDateTimeError(_)));
    }

    #[test]
    fn test_http_status_message() {
        let err = Error::HttpStatus {
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "failed to get data: 404 Not Found");
    }
}
