use std::{fmt::Display, time::Duration};

use log;
use reqwest::blocking::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

mod error;

pub use error::{MoonrakerError, Result};
pub use reqwest::StatusCode;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 7125;

/// Timeout applied to the liveness probe. Other requests wait indefinitely.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// [Endpoint] represents the Moonraker API paths used by this client.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /server/info`
    ServerInfo,
    /// `GET /printer/objects/query?motion_report`
    MotionReportQuery,
    /// `POST /printer/gcode/script`
    GcodeScript,
    /// `POST /printer/emergency_stop`
    EmergencyStop,
    /// `GET /machine/system_info`
    SystemInfo,
}

impl Endpoint {
    /// Returns the request path, including any fixed query string.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::ServerInfo => "/server/info",
            Endpoint::MotionReportQuery => "/printer/objects/query?motion_report",
            Endpoint::GcodeScript => "/printer/gcode/script",
            Endpoint::EmergencyStop => "/printer/emergency_stop",
            Endpoint::SystemInfo => "/machine/system_info",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// A [MoonrakerClient] issues single blocking requests against a Moonraker server.
///
/// The client holds no state besides the base URL and the HTTP connection settings. Every
/// call is one request and one response; nothing is retried.
#[derive(Clone, Debug)]
pub struct MoonrakerClient {
    base_url: String,
    http: Client,
}

impl MoonrakerClient {
    /// Build a client for `http://{host}:{port}`. This does not touch the network.
    pub fn new(host: &str, port: u16) -> Result<MoonrakerClient> {
        let http = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(MoonrakerError::ClientBuild)?;

        Ok(MoonrakerClient {
            base_url: format!("http://{}:{}", host, port),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the absolute URL for an endpoint.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Issue a GET and only check that the server answered with a 2xx status.
    /// The body is discarded.
    pub fn probe(&self, endpoint: Endpoint, timeout: Duration) -> Result<StatusCode> {
        let url = self.url(endpoint);
        log::debug!("GET {} (timeout {:?})", url, timeout);
        let (status, _) = self.send(self.http.get(&url).timeout(timeout), &url)?;
        Ok(status)
    }

    /// Issue a GET and decode the body as JSON. An empty body decodes to [Value::Null].
    pub fn get(&self, endpoint: Endpoint) -> Result<Value> {
        let url = self.url(endpoint);
        log::debug!("GET {}", url);
        let (_, body) = self.send(self.http.get(&url), &url)?;
        decode_body(&url, &body)
    }

    /// Issue a POST with a JSON body.
    ///
    /// Only the status decides success. A body that is not JSON is returned as [Value::Null].
    pub fn post_json<B: Serialize + ?Sized>(&self, endpoint: Endpoint, body: &B) -> Result<Value> {
        let url = self.url(endpoint);
        log::debug!("POST {}", url);
        let (_, text) = self.send(self.http.post(&url).json(body), &url)?;
        Ok(decode_body(&url, &text).unwrap_or(Value::Null))
    }

    /// Issue a POST without a body. See [MoonrakerClient::post_json].
    pub fn post_empty(&self, endpoint: Endpoint) -> Result<Value> {
        let url = self.url(endpoint);
        log::debug!("POST {}", url);
        let (_, text) = self.send(self.http.post(&url), &url)?;
        Ok(decode_body(&url, &text).unwrap_or(Value::Null))
    }

    fn send(&self, request: RequestBuilder, url: &str) -> Result<(StatusCode, String)> {
        let response = request.send().map_err(|source| MoonrakerError::Request {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("{} answered {}", url, status);
            return Err(MoonrakerError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().map_err(|e| MoonrakerError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        log::trace!("{} answered {}: {}", url, status, body);

        Ok((status, body))
    }
}

fn decode_body(url: &str, body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| MoonrakerError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
