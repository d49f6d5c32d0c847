//! ip-api.com geolocation client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::ports::{CountryCode, GeoClient};
use crate::error::GeoError;

/// Geolocation client backed by the ip-api.com JSON endpoint
pub struct IpApiGeoClient {
    http: Client,
    base_url: String,
}

impl IpApiGeoClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(rename = "countryCode")]
    country_code: Option<String>,
}

#[async_trait]
impl GeoClient for IpApiGeoClient {
    async fn lookup_country(&self, ip: &str) -> Result<Option<CountryCode>, GeoError> {
        let url = format!("{}/json/{}?fields=status,countryCode", self.base_url, ip);

        let resp = self.http.get(&url).send().await?;
        let body: IpApiResponse = resp
            .json()
            .await
            .map_err(|e| GeoError::Malformed(e.to_string()))?;

        if body.status != "success" {
            // The provider answers "fail" for private ranges and unknown
            // addresses; that is an empty result, not an error.
            return Ok(None);
        }

        Ok(body.country_code.map(CountryCode))
    }
}
