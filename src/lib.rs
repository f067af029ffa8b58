//! Pesapal - signed request builder for the Pesapal payment gateway
//!
//! This crate turns caller-supplied parameters into OAuth 1.0a signed
//! requests for the Pesapal REST API. It does not perform any network I/O:
//! each operation returns a [`SignedRequest`] carrying the target URL, the
//! HTTP method and every signed parameter, ready to hand to an HTTP client.
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `config/` - Environment selection and credential loading
//! - `models/` - Parameter mappings, orders and the signed request descriptor
//! - `services/` - OAuth signing, option whitelists, order XML and the client
//! - `utils/` - Percent-encoding, escaping and HMAC helpers
//! - `error` - The crate error type
//!
//! ## Quick Start
//!
//! ```no_run
//! use pesapal::{Environment, PesapalClient};
//!
//! fn main() -> pesapal::Result<()> {
//!     let client = PesapalClient::new("consumer-key", "consumer-secret", Environment::Sandbox);
//!     let request = client.query_payment_status_by_merchant_ref([
//!         ("pesapal_merchant_reference", "ORD-1"),
//!     ])?;
//!     println!("GET {}", request.to_url());
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types and functions for convenience
pub use config::{Environment, PesapalConfig};
pub use error::{PesapalError, Result};
pub use models::{DirectOrder, HttpMethod, LineItem, Params, SignedRequest, to_params};
pub use services::{
    Consumer, Endpoint, OAuthSigner, OptionDefaults, PesapalClient, SignatureMethod, Token, sign,
};
