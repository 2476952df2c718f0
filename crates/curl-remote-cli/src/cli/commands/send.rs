//! `curl-remote send <url>`: one request, body to stdout.

use anyhow::{Context, Result};
use curl_remote::config::RemoteConfig;
use curl_remote::CurlRemote;

/// Build a remote from config plus flags, send `data`, print the body.
pub fn run_send(
    cfg: &RemoteConfig,
    url: &str,
    method: &str,
    user_agent: Option<&str>,
    data: &[(String, String)],
) -> Result<()> {
    let agent = user_agent.or(cfg.user_agent.as_deref());
    let mut remote = CurlRemote::with_options(url, agent, &cfg.options())?;
    let body = remote
        .send(data.iter().map(|(k, v)| (k, v)), method)
        .with_context(|| format!("{} {}", method.to_ascii_uppercase(), url))?;
    print!("{body}");
    Ok(())
}
