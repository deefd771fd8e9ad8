use http::{header::AsHeaderName, HeaderMap, HeaderName, HeaderValue};

use crate::Result;

pub trait HeaderMapExt {
    fn headers(&self) -> &HeaderMap;

    fn headers_mut(&mut self) -> &mut HeaderMap;

    fn header<K: AsHeaderName>(&self, key: K) -> Option<&HeaderValue> {
        self.headers().get(key)
    }

    /// Inserts a header, rejecting names and values that are not valid HTTP.
    fn insert_header<K: AsRef<str>, V: AsRef<str>>(&mut self, key: K, value: V) -> Result<()> {
        let name = HeaderName::from_bytes(key.as_ref().as_bytes())?;
        let value = HeaderValue::from_str(value.as_ref())?;
        self.headers_mut().insert(name, value);
        Ok(())
    }
}
