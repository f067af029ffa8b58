//! Signed request descriptor handed back to the caller.

use crate::models::Params;
use crate::utils::percent_encode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP method a request is signed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully signed request: where to send it, how, and with which parameters
///
/// The URL is stored in normalized form without a query string; any query
/// parameters the caller put on the URL live in `parameters` alongside the
/// `oauth_*` fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedRequest {
    method: HttpMethod,
    url: String,
    parameters: Params,
}

impl SignedRequest {
    pub(crate) fn new(method: HttpMethod, url: String, parameters: Params) -> Self {
        Self {
            method,
            url,
            parameters,
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn parameters(&self) -> &Params {
        &self.parameters
    }

    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    pub fn signature(&self) -> Option<&str> {
        self.parameter("oauth_signature")
    }

    pub fn nonce(&self) -> Option<&str> {
        self.parameter("oauth_nonce")
    }

    pub fn timestamp(&self) -> Option<i64> {
        self.parameter("oauth_timestamp")
            .and_then(|t| t.parse().ok())
    }

    /// Last path segment of the URL, e.g. `QueryPaymentStatus`
    pub fn path_name(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or_default()
    }

    /// Form-encoded parameters, suitable as a query string or POST body
    pub fn to_postdata(&self) -> String {
        self.parameters
            .iter()
            .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// The URL with every signed parameter in its query string
    pub fn to_url(&self) -> String {
        format!("{}?{}", self.url, self.to_postdata())
    }

    /// `Authorization` header value carrying only the `oauth_*` parameters
    pub fn to_header(&self, realm: &str) -> String {
        let mut header = format!("OAuth realm=\"{realm}\"");
        for (k, v) in self
            .parameters
            .iter()
            .filter(|(k, _)| k.starts_with("oauth_"))
        {
            header.push_str(&format!(", {}=\"{}\"", k, percent_encode(v)));
        }
        header
    }
}
