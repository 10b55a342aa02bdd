use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;

use super::protocol;
use super::traits::SwitchTransport;
use crate::common::error::{AppError, CommandError, FetchError};
use crate::common::http::{self, build_client_with_timeouts, classify_status, describe_transport_error};
use crate::common::setting::Http;
use crate::entity::bo::device_bo::DeviceSnapshot;
use crate::entity::bo::server_config_bo::ServerConfig;
use crate::entity::dto::device_dto::ListRequestDto;
use crate::{debug, error, info, warn};

const LOG_TAG: &str = "switch_client";

/// http client of the 433 MHz switch control server
#[derive(Clone)]
pub struct SwitchClient {
    http: reqwest::Client,
}

impl SwitchClient {
    pub fn new(http_setting: &Http) -> Result<Self, AppError> {
        Ok(SwitchClient {
            http: http::build_client(http_setting)?,
        })
    }

    pub fn with_timeouts(connect_timeout: Duration, request_timeout: Duration) -> Result<Self, AppError> {
        Ok(SwitchClient {
            http: build_client_with_timeouts(connect_timeout, request_timeout)?,
        })
    }

    /// check a candidate address and secret before they are saved
    /// - Ok(true): list call succeeded
    /// - Ok(false): server reachable but the secret was rejected
    pub async fn probe(&self, candidate_address: &str, secret: &str) -> Result<bool, FetchError> {
        let config = ServerConfig::new(candidate_address, secret)?;
        info!(LOG_TAG, "probing control server {}", config.base_url());
        match self.list_devices(&config).await {
            Ok(snapshot) => {
                info!(LOG_TAG, "probe ok, {} devices reported", snapshot.len());
                Ok(true)
            }
            Err(FetchError::Unauthorized) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl SwitchTransport for SwitchClient {
    async fn list_devices(&self, config: &ServerConfig) -> Result<DeviceSnapshot, FetchError> {
        let url = protocol::list_url(config);
        debug!(LOG_TAG, "list devices, url: {}", url);

        let resp = self
            .http
            .post(url)
            .header(ACCEPT, "application/json")
            .json(&ListRequestDto { secret: config.secret() })
            .send()
            .await
            .map_err(|e| {
                warn!(LOG_TAG, "list devices: no connection, {}", describe_transport_error(&e));
                FetchError::NoConnection
            })?;

        let status = resp.status();
        if let Some(e) = protocol::list_status_error(classify_status(status, true)) {
            error!(LOG_TAG, "list devices: control server returned {}, {}", status.as_u16(), e);
            return Err(e);
        }

        let body = resp.bytes().await.map_err(|e| {
            warn!(LOG_TAG, "list devices: reading body failed, {}", describe_transport_error(&e));
            FetchError::NoConnection
        })?;
        let snapshot = protocol::parse_device_list(&body).map_err(|e| {
            error!(LOG_TAG, "list devices: {}", e);
            e
        })?;
        debug!(LOG_TAG, "list devices: got {} devices", snapshot.len());
        Ok(snapshot)
    }

    async fn set_power(&self, config: &ServerConfig, device_id: &str, on: bool) -> Result<(), CommandError> {
        let url = protocol::power_url(config, device_id, on);
        info!(LOG_TAG, "turning {} {}", device_id, if on { "on" } else { "off" });

        let resp = self.http.get(url).send().await.map_err(|e| {
            warn!(LOG_TAG, "set power: no connection, {}", describe_transport_error(&e));
            CommandError::NoConnection
        })?;

        let status = resp.status();
        if let Some(e) = protocol::command_status_error(classify_status(status, false)) {
            error!(LOG_TAG, "set power {}: control server returned {}, {}", device_id, status.as_u16(), e);
            return Err(e);
        }

        // body is informational only
        match resp.text().await {
            Ok(text) => debug!(LOG_TAG, "set power {}: {}", device_id, text),
            Err(e) => debug!(LOG_TAG, "set power {}: cannot read response body, {}", device_id, e),
        }
        Ok(())
    }
}
