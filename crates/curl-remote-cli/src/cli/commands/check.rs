//! `curl-remote check <url>`: report whether a URL validates.

use anyhow::{bail, Result};
use curl_remote::url_model;

pub fn run_check(url: &str) -> Result<()> {
    if !url_model::is_sanitized_url(url) {
        bail!("{url}: contains characters outside the URL-safe set");
    }
    if !url_model::matches_url_grammar(url) {
        bail!("{url}: not an absolute http/https/ftp URL with a public host");
    }
    println!("{url}: valid");
    Ok(())
}
