// HTTP implementation of the remote season/race API

use log::debug;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::errors::PodiumError;
use crate::remote::SeasonSource;
use crate::season::{Race, Season};

/// `SeasonSource` backed by the dashboard REST API. Endpoints return
/// camelCase JSON matching the model types directly.
#[derive(Clone, Debug)]
pub struct HttpSeasonSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSeasonSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: String) -> Result<T, PodiumError> {
        debug!("GET {endpoint}");
        let response = self
            .client
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| PodiumError::TransportError {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PodiumError::UnexpectedStatus {
                endpoint,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| PodiumError::TransportError {
                endpoint,
                source: e,
            })
    }
}

impl SeasonSource for HttpSeasonSource {
    async fn list_seasons(&self) -> Result<Vec<Season>, PodiumError> {
        self.get_json(self.endpoint("/seasons")).await
    }

    async fn get_season(&self, year: u16) -> Result<Season, PodiumError> {
        match self.get_json(self.endpoint(&format!("/seasons/{year}"))).await {
            Err(PodiumError::UnexpectedStatus { status, .. })
                if status == StatusCode::NOT_FOUND.as_u16() =>
            {
                Err(PodiumError::SeasonNotFound { year })
            }
            other => other,
        }
    }

    async fn list_races(&self, year: u16) -> Result<Vec<Race>, PodiumError> {
        self.get_json(self.endpoint(&format!("/races/season/{year}")))
            .await
    }
}
