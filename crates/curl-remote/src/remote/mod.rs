//! The request wrapper: one libcurl easy handle plus validated configuration.
//!
//! The handle is created when the remote is constructed and released when it
//! is dropped. Every setter validates first and only then touches state, so a
//! rejected value leaves the previous configuration in place.

mod options;
mod send;


pub use options::RemoteOptions;

use std::fmt;

use crate::error::{RemoteError, Result};
use crate::method::Method;
use crate::url_model;

/// User agent sent when none is supplied: Sleipnir 2.9.9, an obscure Japanese browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.0; Trident/4.0; SLCC1; .NET CLR 2.0.50727; Media Center PC 5.0; .NET CLR 3.5.30729; .NET CLR 3.0.30618; .NET4.0C; .NET4.0E; Sleipnir/2.9.9)";

/// Single-shot GET/POST client bound to one base URL.
///
/// Not `Sync`: the transfer handle is mutable state owned by this value and
/// every operation that touches it takes `&mut self`.
pub struct CurlRemote {
    url: String,
    method: Method,
    user_agent: String,
    handle: curl::easy::Easy,
}

impl CurlRemote {
    /// Creates a remote for `url` with default handle options.
    ///
    /// `user_agent` of `None` or `Some("")` selects [`DEFAULT_USER_AGENT`].
    pub fn new(url: &str, user_agent: Option<&str>) -> Result<Self> {
        Self::with_options(url, user_agent, &RemoteOptions::default())
    }

    /// Creates a remote and applies `options` to the transfer handle.
    pub fn with_options(
        url: &str,
        user_agent: Option<&str>,
        options: &RemoteOptions,
    ) -> Result<Self> {
        ensure_valid_url(url)?;

        let mut handle = curl::easy::Easy::new();
        options.apply(&mut handle)?;
        handle.get(true)?;

        let mut remote = Self {
            url: url.to_string(),
            method: Method::Get,
            user_agent: String::new(),
            handle,
        };
        let agent = user_agent
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_USER_AGENT);
        remote.set_user_agent(agent)?;

        tracing::debug!(url = %remote.url, ?options, "transfer handle initialized");
        Ok(remote)
    }

    /// Replaces the base URL. Returns the accepted URL.
    pub fn set_url(&mut self, url: &str) -> Result<&str> {
        ensure_valid_url(url)?;
        self.url = url.to_string();
        Ok(&self.url)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sets the transfer method from a case-insensitive name and returns the
    /// normalized value.
    pub fn set_method(&mut self, method: &str) -> Result<Method> {
        let method: Method = method.parse()?;
        // HTTPGET and POST each reset the other on the handle.
        match method {
            Method::Get => self.handle.get(true)?,
            Method::Post => self.handle.post(true)?,
        }
        self.method = method;
        Ok(method)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// Replaces the user agent. Returns the accepted agent.
    pub fn set_user_agent(&mut self, agent: &str) -> Result<&str> {
        if !url_model::is_sanitized_user_agent(agent) {
            return Err(RemoteError::InvalidUserAgent(agent.to_string()));
        }
        self.handle.useragent(agent)?;
        self.user_agent = agent.to_string();
        Ok(&self.user_agent)
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl fmt::Debug for CurlRemote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurlRemote")
            .field("url", &self.url)
            .field("method", &self.method)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl Drop for CurlRemote {
    fn drop(&mut self) {
        tracing::trace!(url = %self.url, "releasing transfer handle");
    }
}

/// Maps a failed [`url_model::is_valid_url`] check to [`RemoteError::InvalidUrl`].
pub(crate) fn ensure_valid_url(url: &str) -> Result<()> {
    if url_model::is_valid_url(url) {
        Ok(())
    } else {
        Err(RemoteError::InvalidUrl(url.to_string()))
    }
}
