use percent_encoding::{AsciiSet, CONTROLS};

/// The disposition type of every part in a `multipart/form-data` body.
pub const FORM_DATA: &str = "form-data";

pub(crate) const NAME_PARAM: &str = "name";
pub(crate) const FILE_NAME_PARAM: &str = "filename";

pub(crate) const PARAM_SEP: &str = "; ";

/// Bytes escaped in a URL path segment. Letters, digits and
/// `-._~/!$&'()*+,:=@` pass through, non-ASCII bytes are always escaped.
pub(crate) const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b';')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::utf8_percent_encode;

    fn encode_byte(b: u8) -> String {
        utf8_percent_encode(&(b as char).to_string(), PATH_SEGMENT_ENCODE_SET).to_string()
    }

    #[test]
    fn test_path_segment_encode_set() {
        for &b in b"abcXYZ0189-._~/!$&'()*+,:=@".iter() {
            assert_eq!(encode_byte(b), (b as char).to_string(), "{:?} should pass through", b as char);
        }

        for &b in b" \"#%;<>?[\\]^`{|}\r\n\t\x00\x7f".iter() {
            assert_eq!(encode_byte(b), format!("%{:02X}", b), "{:?} should be escaped", b as char);
        }
    }
}
