use crate::helpers;
use bytes::Bytes;
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

/// A single `key="value"` parameter of a header value.
///
/// The value is kept as raw bytes: with percent-encoding disabled it is
/// whatever the caller supplied, which need not be UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Param {
    key: Cow<'static, str>,
    value: Bytes,
}

impl Param {
    /// Creates a parameter from a key and a value.
    pub fn new<K, V>(key: K, value: V) -> Param
    where
        K: Into<Cow<'static, str>>,
        V: Into<Bytes>,
    {
        Param {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Returns the value as text, if it is valid UTF-8.
    pub fn value_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.value).ok()
    }

    pub(crate) fn write_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.key.as_bytes());
        buf.push(b'=');
        helpers::push_quoted(buf, &self.value);
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::with_capacity(self.key.len() + self.value.len() + 3);
        self.write_to(&mut buf);
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}
