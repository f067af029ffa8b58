//! Data structures for gateway requests.
//!
//! This module contains the parameter mapping, the direct order models and
//! the signed request descriptor returned to callers.

pub mod order;
pub mod params;
pub mod request;

pub use order::*;
pub use params::*;
pub use request::*;
