use std::fmt::{self, Debug, Display, Formatter};

use derive_more::Display;

/// A set of errors that can occur while building or rendering a
/// `Content-Disposition` value.
#[derive(Display, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The value has no percent-encoded representation under the path segment
    /// rules, i.e. it is not valid UTF-8 text.
    ///
    /// Holds the original, unmodified bytes.
    #[display(fmt = "failed to percent-encode value: {:?}", "String::from_utf8_lossy(value)")]
    EncodingFailed { value: Vec<u8> },

    /// The rendered disposition contains bytes that are not allowed in an
    /// HTTP header value. Only possible when percent-encoding was disabled.
    #[display(
        fmt = "disposition is not a valid header value: {:?}",
        "String::from_utf8_lossy(value)"
    )]
    InvalidHeaderValue { value: Vec<u8> },
}

impl Error {
    /// The offending bytes carried by this error.
    pub fn value(&self) -> &[u8] {
        match self {
            Error::EncodingFailed { value } | Error::InvalidHeaderValue { value } => value,
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl std::error::Error for Error {}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EncodingFailed {
            value: b"bad name".to_vec(),
        };
        assert_eq!(err.to_string(), "failed to percent-encode value: \"bad name\"");
        assert_eq!(err.value(), b"bad name");

        let err = Error::InvalidHeaderValue {
            value: b"form-data; name=\"a\r\nb\"".to_vec(),
        };
        assert!(err.to_string().starts_with("disposition is not a valid header value"));
    }

    #[test]
    fn test_error_eq() {
        let a = Error::EncodingFailed { value: b"\xfe".to_vec() };
        let b = Error::EncodingFailed { value: b"\xfe".to_vec() };
        let c = Error::InvalidHeaderValue { value: b"\xfe".to_vec() };
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_error_eq_compares_exact_bytes() {
        // Both render as U+FFFD, but carry different bytes.
        let fe = Error::EncodingFailed { value: b"\xfe".to_vec() };
        let ff = Error::EncodingFailed { value: b"\xff".to_vec() };
        assert_eq!(fe.to_string(), ff.to_string());
        assert_ne!(fe, ff);

        let a = Error::InvalidHeaderValue { value: b"na\xffme".to_vec() };
        let b = Error::InvalidHeaderValue { value: b"na\xc0me".to_vec() };
        assert_ne!(a, b);
    }
}
