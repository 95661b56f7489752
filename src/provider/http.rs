use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use tracing::{debug, info};

use crate::{
    configuration::Config,
    error::Error,
    helpers::TimeWindow,
    types::{Prover, ProverRankList},
};

#[derive(Debug)]
pub struct HTTP {
    pub config: Config,
    pub http: Client,
}

impl HTTP {
    pub fn new(config: Config) -> Result<HTTP, Error> {
        let http = match Client::builder()
            .user_agent(concat!("prover-report/", env!("CARGO_PKG_VERSION")))
            .build()
        {
            Ok(c) => c,
            Err(e) => {
                return Err(Error::ReqwestError(e));
            },
        };

        Ok(HTTP { config, http })
    }

    /// Posts the window to the rank API and returns the provers in the
    /// order the API ranked them. One request, no retry.
    pub async fn get_prover_rank_list(
        &self,
        window: &TimeWindow,
    ) -> Result<Vec<Prover>, Error> {
        let url = self.config.api_url.clone();
        let body = serde_json::to_vec(window)?;
        info!("{}", &url);

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::HttpStatus { status });
        }

        let bytes = response.bytes().await?;
        debug!("Received {} bytes", bytes.len());

        let json = serde_json::from_slice::<ProverRankList>(&bytes)?;
        Ok(json.data)
    }
}
