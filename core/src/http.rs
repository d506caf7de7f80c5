//! HTTP request/response values passed between the client and `Transport`.
//!
//! # Design
//! Requests and responses are plain data. `AccountClient::build_*` produces
//! an `HttpRequest` without touching the network and `parse_*` consumes an
//! `HttpResponse`, so both halves are testable without a server. `Transport`
//! is the only piece that performs I/O.

use std::collections::BTreeMap;
use std::fmt;

use ureq::http::{StatusCode, Uri};

use crate::error::{ClientError, Result};

/// Query string parameters. Keys are unique; order carries no meaning.
pub type QueryParams = BTreeMap<String, String>;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: QueryParams,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Build a request for `url`, rejecting anything that is not an absolute
    /// URI with a scheme and an authority.
    pub fn build(method: HttpMethod, url: &str, body: Option<Vec<u8>>) -> Result<Self> {
        let uri: Uri = url
            .parse()
            .map_err(|e| ClientError::RequestConstruction(format!("invalid url {url:?}: {e}")))?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(ClientError::RequestConstruction(format!(
                "invalid url {url:?}: expected scheme and host"
            )));
        }
        Ok(Self {
            method,
            url: url.to_string(),
            headers: Vec::new(),
            query: QueryParams::new(),
            body,
        })
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Add every pair in `params` to the query string. A key that is already
    /// present takes the new value.
    pub fn apply_query_params(&mut self, params: &QueryParams) {
        for (key, value) in params {
            self.query.insert(key.clone(), value.clone());
        }
    }
}

/// An HTTP response reduced to what the client classifies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Canonical reason phrase for `status`, or `""` for unregistered codes.
    pub fn status_text(&self) -> &'static str {
        StatusCode::from_u16(self.status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or("")
    }
}
