//! Blocking executor for `HttpRequest` values.
//!
//! # Design
//! A `Transport` wraps one `ureq::Agent`, which owns the connection pool.
//! The agent is built once and every request issued through the same
//! `Transport` (or any clone of it) reuses it. Status-code-as-error is
//! switched off so 4xx/5xx come back as data for the client to classify.
//! ureq's default 10 MiB body cap is lifted unless the config sets one.

use tracing::debug;
use ureq::{Agent, RequestBuilder};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

#[derive(Clone)]
pub struct Transport {
    agent: Agent,
    max_body_bytes: u64,
}

impl Transport {
    pub fn new(config: &ClientConfig) -> Self {
        let mut builder = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout);
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        Self {
            agent: builder.build().new_agent(),
            max_body_bytes: config.max_body_bytes.unwrap_or(u64::MAX),
        }
    }

    /// Send `request` and read the whole response body into memory.
    pub fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let sent = match (request.method, &request.body) {
            (HttpMethod::Get, _) => decorate(self.agent.get(request.url.as_str()), &request).call(),
            (HttpMethod::Delete, _) => decorate(self.agent.delete(request.url.as_str()), &request).call(),
            (HttpMethod::Post, Some(body)) => {
                decorate(self.agent.post(request.url.as_str()), &request).send(body.as_slice())
            }
            (HttpMethod::Post, None) => decorate(self.agent.post(request.url.as_str()), &request).send_empty(),
        };
        let mut response = sent.map_err(ClientError::Network)?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .with_config()
            .limit(self.max_body_bytes)
            .read_to_vec()
            .map_err(|e| match e {
                ureq::Error::BodyExceedsLimit(limit) => ClientError::BodyTooLarge { limit },
                other => ClientError::Network(other),
            })?;
        debug!(status, bytes = body.len(), "received response");

        Ok(HttpResponse { status, body })
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

fn decorate<B>(mut builder: RequestBuilder<B>, request: &HttpRequest) -> RequestBuilder<B> {
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    for (key, value) in &request.query {
        builder = builder.query(key.as_str(), value.as_str());
    }
    builder
}
