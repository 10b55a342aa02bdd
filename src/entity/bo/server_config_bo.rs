//! control server address and shared secret

use reqwest::Url;

use crate::common::error::FetchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    base_url: Url,
    secret: String,
}

impl ServerConfig {
    /// validate the address, an address without scheme is treated as `http://<host>`
    pub fn new(base_address: &str, secret: &str) -> Result<Self, FetchError> {
        let trimmed = base_address.trim();
        if trimmed.is_empty() {
            return Err(FetchError::InvalidAddress("empty address".to_string()));
        }
        let with_scheme = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("http://{}", trimmed)
        };
        let base_url = Url::parse(with_scheme.as_str())
            .map_err(|e| FetchError::InvalidAddress(format!("{}: {}", trimmed, e)))?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(FetchError::InvalidAddress(format!("unsupported scheme {}", base_url.scheme())));
        }
        if base_url.host_str().is_none() {
            return Err(FetchError::InvalidAddress(format!("{}: no host", trimmed)));
        }
        Ok(ServerConfig {
            base_url,
            secret: secret.to_string(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn secret(&self) -> &str {
        self.secret.as_str()
    }

    /// base url with extra path segments appended, each segment is percent encoded
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // http(s) urls with a host can always be a base
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
