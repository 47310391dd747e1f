use std::collections::BTreeMap;

use super::Object;

/// Key/value data carried by one request channel (query, form body, or
/// uploaded-file metadata).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpData {
    values: BTreeMap<String, String>,
}

impl HttpData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self { values: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Per-request container for the GET, POST, and FILES data bags.
///
/// Populated once by whatever front controller parses the incoming request,
/// then handed read-only to application components.
#[derive(Debug, Clone, Default)]
pub struct RequestData {
    get: HttpData,
    post: HttpData,
    files: HttpData,
}

impl RequestData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_get(&mut self, data: HttpData) {
        self.get = data;
    }

    pub fn get(&self) -> &HttpData {
        &self.get
    }

    pub fn set_post(&mut self, data: HttpData) {
        self.post = data;
    }

    pub fn post(&self) -> &HttpData {
        &self.post
    }

    pub fn set_files(&mut self, data: HttpData) {
        self.files = data;
    }

    pub fn files(&self) -> &HttpData {
        &self.files
    }
}

impl Object for RequestData {}
