use reqwest::Client;
use thiserror::Error;

use crate::{config::Config, model::NowPlayingPayload};

/// Hardware address the now-playing service keys its sessions on. Fixed,
/// like the artwork dimensions below; the service ignores unknown devices.
pub const DEVICE_MAC: &str = "1E:9C:DE:1A:EF:CF";
pub const ARTWORK_WIDTH: u32 = 180;
pub const ARTWORK_HEIGHT: u32 = 180;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

pub struct ApiService {
    client: Client,
    host: String,
}

impl ApiService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            host: config.host.clone(),
        }
    }

    pub fn playing_url(host: &str) -> String {
        format!("{host}/playing?mac={DEVICE_MAC}&width={ARTWORK_WIDTH}&height={ARTWORK_HEIGHT}")
    }

    /// One GET against the now-playing endpoint. Non-2xx statuses are
    /// errors; the body is decoded separately so a transport failure and a
    /// malformed payload stay distinguishable.
    pub async fn fetch_playing(&self) -> Result<NowPlayingPayload, ApiError> {
        let body = self
            .client
            .get(Self::playing_url(&self.host))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playing_url_carries_device_and_artwork_size() {
        assert_eq!(
            ApiService::playing_url("http://10.0.0.5:8000"),
            "http://10.0.0.5:8000/playing?mac=1E:9C:DE:1A:EF:CF&width=180&height=180"
        );
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let err = serde_json::from_str::<NowPlayingPayload>("<html>oops</html>")
            .map_err(ApiError::from)
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
