//! Builds the `Content-Disposition` value of a `multipart/form-data` part.
//!
//! A part is described by a field name and, for file uploads, a file name.
//! Both are percent-encoded with the URL path segment rules by default, so the
//! rendered header can't be broken by spaces, quotes, semicolons or line
//! breaks in user supplied values.
//!
//! # Examples
//!
//! ```
//! use form_disposition::ContentDisposition;
//!
//! # fn run() -> form_disposition::Result<()> {
//! let disposition = ContentDisposition::build("my field", Some("hello world.txt"), true)?;
//!
//! assert_eq!(
//!     disposition.to_string(),
//!     r#"form-data; name="my%20field"; filename="hello%20world.txt""#
//! );
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
//!
//! # Optional
//!
//! The `log` feature emits `trace` records for every built value and `debug`
//! records for encoding failures via the [`log`](https://docs.rs/log) crate.

pub use constants::FORM_DATA;
pub use content_disposition::ContentDisposition;
pub use error::Error;
pub use param::Param;

mod constants;
mod content_disposition;
mod error;
mod helpers;
mod param;

/// A Result type often returned from methods that can have `form-disposition` errors.
pub type Result<T> = std::result::Result<T, Error>;
