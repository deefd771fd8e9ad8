use http::{HeaderMap, Method};
use serde_json::Value;

use super::headers::HeaderMapExt;
use crate::{Credentials, Result};

/// A single call against Thunder, independent of how it is sent.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub credentials: Credentials,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    headers: HeaderMap,
}

impl Request {
    pub fn new<U: Into<String>>(method: Method, url: U, credentials: Credentials) -> Self {
        Self {
            method,
            url: url.into(),
            credentials,
            query: Vec::new(),
            body: None,
            headers: HeaderMap::new(),
        }
    }

    pub fn with_query<K: AsRef<str>, V: AsRef<str>>(mut self, params: &[(K, V)]) -> Self {
        self.query.extend(
            params
                .iter()
                .map(|(key, value)| (key.as_ref().to_string(), value.as_ref().to_string())),
        );
        self
    }

    pub fn with_headers<K: AsRef<str>, V: AsRef<str>>(
        mut self,
        headers: &[(K, V)],
    ) -> Result<Self> {
        for (key, value) in headers {
            self.insert_header(key, value)?;
        }
        Ok(self)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

impl HeaderMapExt for Request {
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}
