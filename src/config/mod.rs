//! Configuration structures and loading utilities.
//!
//! This module contains the gateway environment selection and the client
//! credential configuration, including environment variable loading.

pub mod client;
pub mod environment;

pub use client::*;
pub use environment::*;
