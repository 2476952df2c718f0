//! Validated single-shot HTTP requests over a libcurl easy handle.
//!
//! [`CurlRemote`] owns one transfer handle, keeps a validated base URL, method
//! and user agent, and sends one blocking GET or POST per call to
//! [`CurlRemote::send`], returning the response body as text.

pub mod config;
pub mod error;
pub mod logging;
pub mod method;
pub mod remote;
pub mod url_model;

pub use error::{RemoteError, Result};
pub use method::Method;
pub use remote::{CurlRemote, RemoteOptions, DEFAULT_USER_AGENT};
