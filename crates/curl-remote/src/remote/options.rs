//! Handle options applied once at construction.

use std::time::Duration;

use crate::error::Result;

/// Optional transfer-handle settings. The default applies none of them:
/// no timeouts, system DNS resolution and proxies taken from
/// the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteOptions {
    /// Limit on the connect phase.
    pub connect_timeout: Option<Duration>,
    /// Limit on the whole round trip.
    pub timeout: Option<Duration>,
    /// `HOST:PORT:ADDRESS` entries pinning name resolution (curl `--resolve`).
    pub resolve: Vec<String>,
    /// Hosts that bypass any proxy from the environment (`"*"` for all).
    pub no_proxy: Option<String>,
}

impl RemoteOptions {
    pub(super) fn apply(&self, handle: &mut curl::easy::Easy) -> Result<()> {
        if let Some(t) = self.connect_timeout {
            handle.connect_timeout(t)?;
        }
        if let Some(t) = self.timeout {
            handle.timeout(t)?;
        }
        if !self.resolve.is_empty() {
            let mut list = curl::easy::List::new();
            for entry in &self.resolve {
                list.append(entry)?;
            }
            handle.resolve(list)?;
        }
        if let Some(hosts) = &self.no_proxy {
            handle.noproxy(hosts)?;
        }
        Ok(())
    }
}
