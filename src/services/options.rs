//! Per-operation option whitelists and default merging.

use crate::error::{PesapalError, Result};
use crate::models::Params;

/// Immutable table of recognized option keys and their default values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDefaults {
    entries: &'static [(&'static str, &'static str)],
}

/// Order fields accepted inside the direct-order XML document
pub const ORDER_FIELDS: OptionDefaults = OptionDefaults::new(&[
    ("Amount", ""),
    ("Description", ""),
    ("Type", "MERCHANT"),
    ("Reference", ""),
    ("Email", ""),
    ("PhoneNumber", ""),
    ("Currency", ""),
    ("FirstName", ""),
    ("LastName", ""),
]);

/// Request options for `PostPesapalDirectOrderV4`
///
/// `pesapal_request_data` defaults to the serialized order at call time.
pub const DIRECT_ORDER_OPTIONS: OptionDefaults = OptionDefaults::new(&[
    ("oauth_callback", ""),
    ("pesapal_request_data", ""),
]);

pub const QUERY_STATUS_OPTIONS: OptionDefaults = OptionDefaults::new(&[
    ("pesapal_merchant_reference", ""),
    ("pesapal_transaction_tracking_id", ""),
]);

pub const QUERY_BY_MERCHANT_REF_OPTIONS: OptionDefaults =
    OptionDefaults::new(&[("pesapal_merchant_reference", "")]);

impl OptionDefaults {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys().any(|k| k == key)
    }

    pub fn default_value(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    /// Recognized keys, sorted
    pub fn allowed_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.keys().map(str::to_string).collect();
        keys.sort();
        keys
    }

    /// Fail on the first key (in sorted order) that is not recognized
    pub fn validate(&self, options: &Params) -> Result<()> {
        match options.keys().find(|key| !self.contains(key)) {
            Some(key) => Err(PesapalError::InvalidOption {
                key: key.clone(),
                allowed: self.allowed_keys(),
            }),
            None => Ok(()),
        }
    }

    /// The defaults as a fresh mapping
    pub fn to_params(&self) -> Params {
        self.entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Validate `options`, then lay them over the defaults
    pub fn merge(&self, options: Params) -> Result<Params> {
        self.validate(&options)?;
        Ok(merge_params(self.to_params(), options))
    }
}

/// New mapping holding `defaults` with every entry of `overrides` applied on top
pub fn merge_params(defaults: Params, overrides: Params) -> Params {
    let mut merged = defaults;
    merged.extend(overrides);
    merged
}
