//! Domain DTOs for the accounts API.
//!
//! # Design
//! These types mirror the ledger's JSON schema but are defined independently
//! from the mock-server crate. Ids stay as `String`: the server is the only
//! validator of their UUID shape.

use serde::{Deserialize, Serialize};

use crate::http::QueryParams;

/// Value of the `type` field on every account.
pub const ACCOUNT_TYPE: &str = "accounts";

/// Top-level `{"data": ...}` wrapper required by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Envelope<T> {
    pub data: T,
}

/// A bank account record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub organisation_id: String,
    /// Assigned by the server; absent on create requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(default)]
    pub attributes: AccountAttributes,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountAttributes {
    /// Account holder name, one entry per line.
    #[serde(default)]
    pub name: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default)]
    pub base_currency: String,
    #[serde(default)]
    pub bank_id: String,
    #[serde(default)]
    pub bank_id_code: String,
    #[serde(default)]
    pub bic: String,
}

impl Account {
    pub fn new(
        id: impl Into<String>,
        organisation_id: impl Into<String>,
        attributes: AccountAttributes,
    ) -> Self {
        Self {
            kind: ACCOUNT_TYPE.to_string(),
            id: id.into(),
            organisation_id: organisation_id.into(),
            version: None,
            attributes,
        }
    }

    /// Query parameters that pin a delete to this account's version, or
    /// `None` for an account the server has not versioned yet.
    pub fn version_params(&self) -> Option<QueryParams> {
        self.version
            .map(|version| QueryParams::from([("version".to_string(), version.to_string())]))
    }
}
