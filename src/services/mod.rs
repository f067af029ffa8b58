//! Request signing and gateway services.
//!
//! This module contains the OAuth 1.0a signer, the per-endpoint option
//! tables, the order XML serializer and the gateway client built on them.

pub mod endpoint;
pub mod gateway;
pub mod oauth;
pub mod options;
pub mod order_xml;

pub use endpoint::Endpoint;
pub use gateway::PesapalClient;
pub use oauth::{Consumer, OAuthSigner, SignatureMethod, Token, sign};
pub use options::OptionDefaults;
