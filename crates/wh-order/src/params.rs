//! String-keyed parameters attached to a screen transition.

use std::collections::BTreeMap;

/// Key holding the cart as a JSON array
pub const CART_KEY: &str = "cart";
/// Key holding the total as a two-decimal string
pub const TOTAL_KEY: &str = "total";
/// Key holding the payment method's wire string
pub const PAYMENT_METHOD_KEY: &str = "payment_method";

/// The values every screen transition carries. Unversioned; consumers must
/// tolerate missing or malformed keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionParams(BTreeMap<String, String>);

impl TransitionParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<String, String>> for TransitionParams {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TransitionParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
