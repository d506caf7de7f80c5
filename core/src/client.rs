//! Account operations: fetch, create and delete.
//!
//! # Design
//! Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that classifies an `HttpResponse`.
//! Neither half touches the network; `fetch`, `create` and `delete` glue
//! them together through the owned `Transport`. The client carries no
//! per-call state, so one instance can serve many threads at once.

use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, QueryParams};
use crate::transport::Transport;
use crate::types::{Account, Envelope};

/// Content type the API requires on write requests.
pub const ACCOUNT_CONTENT_TYPE: &str = "application/vnd.api+json";

/// Blocking client for the accounts resource.
#[derive(Clone, Default)]
pub struct AccountClient {
    transport: Transport,
}

impl AccountClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    pub fn fetch(&self, base_url: &str, account_id: &str) -> Result<Account> {
        let request = self.build_fetch(base_url, account_id)?;
        self.parse_fetch(self.transport.execute(request)?)
    }

    pub fn create(&self, base_url: &str, account: &Account) -> Result<Account> {
        let request = self.build_create(base_url, account)?;
        self.parse_create(self.transport.execute(request)?)
    }

    /// Delete an account. `Ok(true)` means the server answered 204; any
    /// other status is an `Api` error. `Ok(false)` is never returned.
    pub fn delete(&self, base_url: &str, account_id: &str, params: &QueryParams) -> Result<bool> {
        let request = self.build_delete(base_url, account_id, params)?;
        self.parse_delete(self.transport.execute(request)?)
    }

    pub fn build_fetch(&self, base_url: &str, account_id: &str) -> Result<HttpRequest> {
        HttpRequest::build(HttpMethod::Get, &resource_url(base_url, account_id)?, None)
    }

    pub fn build_create(&self, base_url: &str, account: &Account) -> Result<HttpRequest> {
        let body = serde_json::to_vec(&Envelope { data: account })
            .map_err(|e| ClientError::RequestConstruction(e.to_string()))?;
        Ok(HttpRequest::build(HttpMethod::Post, collection_url(base_url), Some(body))?
            .with_header("Content-Type", ACCOUNT_CONTENT_TYPE))
    }

    pub fn build_delete(
        &self,
        base_url: &str,
        account_id: &str,
        params: &QueryParams,
    ) -> Result<HttpRequest> {
        let mut request =
            HttpRequest::build(HttpMethod::Delete, &resource_url(base_url, account_id)?, None)?;
        request.apply_query_params(params);
        Ok(request)
    }

    pub fn parse_fetch(&self, response: HttpResponse) -> Result<Account> {
        check_status(&response, &[200])?;
        decode_account(&response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Account> {
        check_status(&response, &[200, 201])?;
        decode_account(&response)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<bool> {
        check_status(&response, &[204])?;
        Ok(true)
    }
}

fn collection_url(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

/// Append `account_id` to the collection path as one percent-encoded segment,
/// so `/`, `?` and spaces in an id cannot change the path or query.
fn resource_url(base_url: &str, account_id: &str) -> Result<String> {
    let base = collection_url(base_url);
    let mut url = Url::parse(base)
        .map_err(|e| ClientError::RequestConstruction(format!("invalid url {base:?}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| ClientError::RequestConstruction(format!("invalid url {base:?}: cannot hold a path")))?
        .pop_if_empty()
        .push(account_id);
    Ok(url.into())
}

/// Map any status outside `expected` to `ClientError::Api`.
fn check_status(response: &HttpResponse, expected: &[u16]) -> Result<()> {
    if expected.contains(&response.status) {
        return Ok(());
    }
    Err(ClientError::Api {
        status: response.status,
        status_text: response.status_text().to_string(),
    })
}

fn decode_account(response: &HttpResponse) -> Result<Account> {
    let envelope: Envelope<Account> = serde_json::from_slice(&response.body)?;
    Ok(envelope.data)
}
