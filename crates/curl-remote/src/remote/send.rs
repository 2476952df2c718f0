//! One blocking round trip per `send`.

use crate::error::Result;
use crate::method::Method;
use crate::url_model::{build_form_body, build_query};

use super::{ensure_valid_url, CurlRemote};

impl CurlRemote {
    /// Sends `data` to the base URL and returns the response body.
    ///
    /// GET appends the pairs verbatim as a query string to a per-call copy of
    /// the base URL; the stored URL is not modified. POST sends them as a
    /// form-encoded body. The body is returned for any HTTP status; only
    /// transport failures produce [`RemoteError::Transfer`].
    ///
    /// [`RemoteError::Transfer`]: crate::RemoteError::Transfer
    pub fn send<I, K, V>(&mut self, data: I, method: &str) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let method = self.set_method(method)?;

        let request_url = match method {
            Method::Get => self.request_url(data)?,
            Method::Post => {
                let body = build_form_body(data);
                self.handle.post_fields_copy(body.as_bytes())?;
                self.url.clone()
            }
        };
        self.handle.url(&request_url)?;

        tracing::debug!(%method, url = %request_url, "sending request");
        self.perform().map_err(|e| {
            tracing::warn!(%method, url = %request_url, "request failed: {}", e);
            e
        })
    }

    /// `send(data, "get")`.
    pub fn get<I, K, V>(&mut self, data: I) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.send(data, Method::Get.as_str())
    }

    /// `send(data, "post")`.
    pub fn post<I, K, V>(&mut self, data: I) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.send(data, Method::Post.as_str())
    }

    /// URL a GET with `data` would request: `base?k=v&...`, or the base URL
    /// itself when `data` is empty. Fails with `InvalidUrl` if the derived URL
    /// does not validate.
    pub fn request_url<I, K, V>(&self, data: I) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let query = build_query(data);
        if query.is_empty() {
            return Ok(self.url.clone());
        }
        let derived = format!("{}?{}", self.url, query);
        ensure_valid_url(&derived)?;
        Ok(derived)
    }

    fn perform(&mut self) -> Result<String> {
        let mut body = Vec::new();
        {
            let mut transfer = self.handle.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        if let Ok(code) = self.handle.response_code() {
            tracing::debug!(code, bytes = body.len(), "response received");
        }
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
