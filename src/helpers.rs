use crate::constants::PATH_SEGMENT_ENCODE_SET;
use bytes::Bytes;
use percent_encoding::utf8_percent_encode;
use std::borrow::Cow;

/// Percent-encodes `raw` with the path segment rules.
///
/// Fails only when `raw` is not UTF-8 text.
pub(crate) fn percent_encode_param(raw: &[u8]) -> crate::Result<Bytes> {
    let text = std::str::from_utf8(raw).map_err(|_| crate::Error::EncodingFailed { value: raw.to_vec() })?;

    let encoded = match Cow::<str>::from(utf8_percent_encode(text, PATH_SEGMENT_ENCODE_SET)) {
        Cow::Borrowed(s) => Bytes::copy_from_slice(s.as_bytes()),
        Cow::Owned(s) => Bytes::from(s),
    };

    Ok(encoded)
}

/// Appends `value` as an HTTP quoted-string, escaping `"` and `\`.
pub(crate) fn push_quoted(buf: &mut Vec<u8>, value: &[u8]) {
    buf.push(b'"');
    for &b in value {
        if b == b'"' || b == b'\\' {
            buf.push(b'\\');
        }
        buf.push(b);
    }
    buf.push(b'"');
}
