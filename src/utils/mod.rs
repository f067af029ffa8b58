//! Utility functions and helper modules.
//!
//! This module contains the percent-encoding and escaping helpers and the
//! HMAC-SHA1 primitives used by the signer.

pub mod encoding;
pub mod hmac;

pub use encoding::*;
