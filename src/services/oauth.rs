//! OAuth 1.0a request signing.
//!
//! This module implements the consumer side of OAuth 1.0a as used by the
//! Pesapal API:
//! - Protocol parameter generation (nonce, timestamp, version)
//! - Parameter normalization and the signature base string
//! - HMAC-SHA1 and PLAINTEXT signature methods
//! - Verification of a signed request against known credentials

use crate::error::{PesapalError, Result};
use crate::models::{HttpMethod, Params, SignedRequest};
use crate::utils::{hmac, percent_encode};
use chrono::Utc;
use std::fmt;
use tracing::debug;
use url::Url;
use uuid::Uuid;

pub const OAUTH_VERSION: &str = "1.0";

/// Consumer credentials issued by the gateway
#[derive(Clone, PartialEq, Eq)]
pub struct Consumer {
    key: String,
    secret: String,
}

impl Consumer {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Both halves must be present before anything is signed
    pub fn validate(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(PesapalError::InvalidCredentials(
                "consumer key is empty".to_string(),
            ));
        }
        if self.secret.is_empty() {
            return Err(PesapalError::InvalidCredentials(
                "consumer secret is empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for Consumer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consumer")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Access token supplied per call
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    key: String,
    secret: String,
}

impl Token {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Supported `oauth_signature_method` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureMethod {
    #[default]
    HmacSha1,
    Plaintext,
}

impl SignatureMethod {
    pub fn name(&self) -> &'static str {
        match self {
            SignatureMethod::HmacSha1 => "HMAC-SHA1",
            SignatureMethod::Plaintext => "PLAINTEXT",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "HMAC-SHA1" => Some(SignatureMethod::HmacSha1),
            "PLAINTEXT" => Some(SignatureMethod::Plaintext),
            _ => None,
        }
    }

    fn sign(&self, key: &str, base_string: &str) -> Result<String> {
        match self {
            SignatureMethod::HmacSha1 => {
                hmac::generate_signature(key, base_string).map_err(PesapalError::Signature)
            }
            SignatureMethod::Plaintext => Ok(key.to_string()),
        }
    }

    fn verify(&self, key: &str, base_string: &str, signature: &str) -> Result<bool> {
        match self {
            SignatureMethod::HmacSha1 => hmac::validate_signature(key, base_string, signature)
                .map_err(PesapalError::Signature),
            SignatureMethod::Plaintext => {
                Ok(hmac::constant_time_eq(key.as_bytes(), signature.as_bytes()))
            }
        }
    }
}

/// Signs requests on behalf of a single consumer
#[derive(Debug, Clone)]
pub struct OAuthSigner {
    consumer: Consumer,
    signature_method: SignatureMethod,
}

impl OAuthSigner {
    pub fn new(consumer: Consumer) -> Self {
        Self {
            consumer,
            signature_method: SignatureMethod::default(),
        }
    }

    pub fn with_signature_method(mut self, signature_method: SignatureMethod) -> Self {
        self.signature_method = signature_method;
        self
    }

    pub fn consumer(&self) -> &Consumer {
        &self.consumer
    }

    pub fn signature_method(&self) -> SignatureMethod {
        self.signature_method
    }

    /// Sign with a fresh nonce and the current Unix time
    pub fn sign(
        &self,
        token: Option<&Token>,
        method: HttpMethod,
        url: &str,
        params: &Params,
    ) -> Result<SignedRequest> {
        let nonce = generate_nonce();
        let timestamp = Utc::now().timestamp();
        self.sign_with(token, method, url, params, &nonce, timestamp)
    }

    /// Sign with a caller-supplied nonce and timestamp
    ///
    /// Identical inputs always yield an identical `oauth_signature`.
    pub fn sign_with(
        &self,
        token: Option<&Token>,
        method: HttpMethod,
        url: &str,
        params: &Params,
        nonce: &str,
        timestamp: i64,
    ) -> Result<SignedRequest> {
        self.consumer.validate()?;

        let parsed = Url::parse(url)?;
        let normalized_url = normalize_url(&parsed)?;

        // Query string first so explicit parameters override it
        let mut parameters = query_parameters(&parsed)?;
        parameters.extend(params.iter().map(|(k, v)| (k.clone(), v.clone())));
        parameters.remove("oauth_signature");

        parameters.insert("oauth_consumer_key".to_string(), self.consumer.key.clone());
        parameters.insert("oauth_nonce".to_string(), nonce.to_string());
        parameters.insert(
            "oauth_signature_method".to_string(),
            self.signature_method.name().to_string(),
        );
        parameters.insert("oauth_timestamp".to_string(), timestamp.to_string());
        parameters.insert("oauth_version".to_string(), OAUTH_VERSION.to_string());
        match token {
            Some(token) => {
                parameters.insert("oauth_token".to_string(), token.key.clone());
            }
            None => {
                parameters.remove("oauth_token");
            }
        }

        let base_string = signature_base_string(method, &normalized_url, &parameters);
        let key = signing_key(&self.consumer.secret, token.map(Token::secret));
        let signature = self.signature_method.sign(&key, &base_string)?;

        debug!(
            method = %method,
            url = %normalized_url,
            signature_method = self.signature_method.name(),
            parameter_count = parameters.len(),
            has_token = token.is_some(),
            "Signed OAuth request"
        );

        parameters.insert("oauth_signature".to_string(), signature);
        Ok(SignedRequest::new(method, normalized_url, parameters))
    }
}

/// Sign a single request with HMAC-SHA1
pub fn sign(
    consumer: &Consumer,
    token: Option<&Token>,
    method: HttpMethod,
    url: &str,
    params: &Params,
) -> Result<SignedRequest> {
    OAuthSigner::new(consumer.clone()).sign(token, method, url, params)
}

/// Fresh nonce: 32 hex characters drawn from the OS random source
pub fn generate_nonce() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Query pairs from the URL; a key may only appear once
pub fn query_parameters(url: &Url) -> Result<Params> {
    let mut parameters = Params::new();
    for (key, value) in url.query_pairs().into_owned() {
        if parameters.contains_key(&key) {
            return Err(PesapalError::DuplicateParameter(key));
        }
        parameters.insert(key, value);
    }
    Ok(parameters)
}

/// Scheme and host lowercased, default port dropped, query and fragment removed
pub fn normalize_url(url: &Url) -> Result<String> {
    let host = url
        .host_str()
        .ok_or(PesapalError::InvalidUrl(url::ParseError::EmptyHost))?;

    // `Url::port` is None for the scheme's default port
    let port = url.port().map(|p| format!(":{p}")).unwrap_or_default();

    Ok(format!(
        "{}://{}{}{}",
        url.scheme(),
        host.to_lowercase(),
        port,
        url.path()
    ))
}

/// Encoded `k=v` pairs sorted by key then value, joined with `&`
///
/// `oauth_signature` is never part of its own input.
pub fn normalized_parameters(params: &Params) -> String {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .filter(|(k, _)| k.as_str() != "oauth_signature")
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    pairs.sort();

    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// `METHOD&enc(url)&enc(normalized parameters)`
pub fn signature_base_string(method: HttpMethod, normalized_url: &str, params: &Params) -> String {
    format!(
        "{}&{}&{}",
        method.as_str(),
        percent_encode(normalized_url),
        percent_encode(&normalized_parameters(params))
    )
}

/// `enc(consumer_secret)&enc(token_secret)`, with an empty token secret when absent
pub fn signing_key(consumer_secret: &str, token_secret: Option<&str>) -> String {
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret.unwrap_or_default())
    )
}

impl SignedRequest {
    /// Base string this request's signature was computed over
    pub fn signature_base_string(&self) -> String {
        signature_base_string(self.method(), self.url(), self.parameters())
    }

    /// Recompute the signature from the request's own nonce and timestamp
    ///
    /// Returns false when the consumer or token keys do not match the signed
    /// parameters, the signature method is unknown, or the signature differs.
    pub fn verify(&self, consumer: &Consumer, token: Option<&Token>) -> bool {
        if self.parameter("oauth_consumer_key") != Some(consumer.key()) {
            return false;
        }
        if self.parameter("oauth_token") != token.map(Token::key) {
            return false;
        }

        let Some(signature) = self.signature() else {
            return false;
        };
        let Some(method) = self
            .parameter("oauth_signature_method")
            .and_then(SignatureMethod::from_name)
        else {
            return false;
        };

        let key = signing_key(consumer.secret(), token.map(Token::secret));
        method
            .verify(&key, &self.signature_base_string(), signature)
            .unwrap_or(false)
    }
}
