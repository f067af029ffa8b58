//! Request parameter mapping.

use std::collections::BTreeMap;

/// String-keyed request parameters, kept sorted by key
pub type Params = BTreeMap<String, String>;

/// Collect key/value pairs into a [`Params`] mapping
///
/// Later pairs win when a key repeats.
pub fn to_params<I, K, V>(pairs: I) -> Params
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_params_from_str_pairs() {
        let params = to_params([("b", "2"), ("a", "1"), ("b", "3")]);
        assert_eq!(params.len(), 2);
        assert_eq!(params["b"], "3");
        assert_eq!(params.keys().next().map(String::as_str), Some("a"));
    }
}
