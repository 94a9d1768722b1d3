use crate::constants::{self, FORM_DATA};
use crate::helpers;
use crate::Param;
use bytes::Bytes;
use http::header::{self, HeaderMap, HeaderValue};
use std::fmt::{self, Display, Formatter};

/// The `Content-Disposition` value of one `multipart/form-data` part.
///
/// The disposition type is always [`FORM_DATA`](crate::FORM_DATA). The
/// parameters start with `name`, followed by `filename` when one was given.
///
/// # Examples
///
/// ```
/// use form_disposition::ContentDisposition;
///
/// # fn run() -> form_disposition::Result<()> {
/// let disposition = ContentDisposition::build("field", Some("my file.txt"), true)?;
///
/// assert_eq!(disposition.name(), b"field");
/// assert_eq!(disposition.file_name(), Some(&b"my%20file.txt"[..]));
/// assert_eq!(
///     disposition.to_string(),
///     r#"form-data; name="field"; filename="my%20file.txt""#
/// );
/// # Ok(())
/// # }
/// # run().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDisposition {
    params: Vec<Param>,
}

impl ContentDisposition {
    /// Builds the disposition for a field `name` and an optional `file_name`.
    ///
    /// With `encode_parameters` set, both values are percent-encoded with the
    /// URL path segment rules and an [`Error::EncodingFailed`](crate::Error::EncodingFailed)
    /// carrying the original value is returned if either one is not UTF-8
    /// text. The name is tried first, so a bad name is reported even when the
    /// file name is bad too.
    ///
    /// Without it, the values are used verbatim and this never fails; the
    /// caller is then responsible for their safety.
    pub fn build<N, F>(name: N, file_name: Option<F>, encode_parameters: bool) -> crate::Result<ContentDisposition>
    where
        N: AsRef<[u8]>,
        F: AsRef<[u8]>,
    {
        let name = name.as_ref();
        let file_name: Option<&[u8]> = file_name.as_ref().map(|f| f.as_ref());

        let (name, file_name) = if encode_parameters {
            let name = helpers::percent_encode_param(name).map_err(log_failure)?;
            let file_name = match file_name {
                Some(f) => Some(helpers::percent_encode_param(f).map_err(log_failure)?),
                None => None,
            };
            (name, file_name)
        } else {
            (Bytes::copy_from_slice(name), file_name.map(Bytes::copy_from_slice))
        };

        let mut params = Vec::with_capacity(2);
        params.push(Param::new(constants::NAME_PARAM, name));
        if let Some(file_name) = file_name {
            params.push(Param::new(constants::FILE_NAME_PARAM, file_name));
        }

        let disposition = ContentDisposition { params };

        #[cfg(feature = "log")]
        log::trace!("built content disposition: {}", disposition);

        Ok(disposition)
    }

    /// Builds the disposition from string literals.
    ///
    /// Equivalent to [`build`](ContentDisposition::build) with the same
    /// arguments. A `&str` always has a percent-encoded form, so this cannot
    /// fail in practice.
    ///
    /// # Panics
    ///
    /// Panics if [`build`](ContentDisposition::build) returns an error, which
    /// would be a bug in this crate.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_disposition::ContentDisposition;
    ///
    /// let disposition = ContentDisposition::from_static("avatar", Some("me.png"), true);
    /// assert_eq!(disposition.to_string(), r#"form-data; name="avatar"; filename="me.png""#);
    /// ```
    pub fn from_static(
        name: &'static str,
        file_name: Option<&'static str>,
        encode_parameters: bool,
    ) -> ContentDisposition {
        match ContentDisposition::build(name, file_name, encode_parameters) {
            Ok(disposition) => disposition,
            Err(err) => panic!("string literal could not be percent-encoded: {}", err),
        }
    }

    /// The disposition type, always `form-data`.
    pub fn disposition_type(&self) -> &'static str {
        FORM_DATA
    }

    /// The (possibly encoded) `name` parameter value.
    pub fn name(&self) -> &[u8] {
        self.params
            .iter()
            .find(|p| p.key() == constants::NAME_PARAM)
            .map(|p| p.value())
            .unwrap_or_default()
    }

    /// The (possibly encoded) `filename` parameter value.
    pub fn file_name(&self) -> Option<&[u8]> {
        self.params
            .iter()
            .find(|p| p.key() == constants::FILE_NAME_PARAM)
            .map(|p| p.value())
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Mutable access to the parameter list, e.g. to append extra parameters.
    pub fn params_mut(&mut self) -> &mut Vec<Param> {
        &mut self.params
    }

    /// Renders the value as `form-data; key="value"; ...`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let capacity = self.params.iter().map(|p| p.key().len() + p.value().len() + 5).sum::<usize>();
        let mut buf = Vec::with_capacity(FORM_DATA.len() + capacity);

        buf.extend_from_slice(FORM_DATA.as_bytes());
        for param in &self.params {
            buf.extend_from_slice(constants::PARAM_SEP.as_bytes());
            param.write_to(&mut buf);
        }

        buf
    }

    /// Renders the value as an [`HeaderValue`].
    ///
    /// Only fails for unencoded values containing bytes HTTP forbids in a
    /// header, such as CR or LF.
    pub fn to_header_value(&self) -> crate::Result<HeaderValue> {
        let bytes = self.to_bytes();

        HeaderValue::from_bytes(&bytes).map_err(|_| crate::Error::InvalidHeaderValue { value: bytes })
    }

    /// Sets the `Content-Disposition` header in `headers`, replacing any
    /// existing one.
    pub fn insert_into(&self, headers: &mut HeaderMap) -> crate::Result<()> {
        let value = self.to_header_value()?;
        headers.insert(header::CONTENT_DISPOSITION, value);
        Ok(())
    }
}

impl Display for ContentDisposition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_bytes()))
    }
}

fn log_failure(err: crate::Error) -> crate::Error {
    #[cfg(feature = "log")]
    log::debug!("{}", err);

    err
}
