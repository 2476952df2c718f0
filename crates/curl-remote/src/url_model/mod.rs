//! URL and user-agent validation, plus request payload encoding.
//!
//! A URL is accepted only when it survives the URL-safe character check
//! unchanged and matches the strict absolute-URL grammar: `http`, `https` or
//! `ftp` scheme, optional userinfo, a public IPv4 or domain host, optional
//! port and an optional path/query/fragment.

mod host;
mod query;
mod sanitize;

pub use host::{is_public_ipv4, is_valid_domain};
pub use query::{build_form_body, build_query};
pub use sanitize::{is_sanitized_url, is_sanitized_user_agent};

const SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// Returns true if `url` passes both the character check and the grammar.
pub fn is_valid_url(url: &str) -> bool {
    is_sanitized_url(url) && matches_url_grammar(url)
}

/// Grammar half of [`is_valid_url`]. Matching is case-insensitive.
pub fn matches_url_grammar(url: &str) -> bool {
    let rest = match strip_scheme(url) {
        Some(r) => r,
        None => return false,
    };

    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let (authority, remainder) = rest.split_at(authority_end);
    if remainder.chars().any(char::is_whitespace) {
        return false;
    }

    let host_port = match authority.rsplit_once('@') {
        Some((userinfo, hp)) => {
            if userinfo.is_empty() || userinfo.chars().any(char::is_whitespace) {
                return false;
            }
            hp
        }
        None => authority,
    };

    let host = match host_port.split_once(':') {
        Some((h, port)) => {
            if !is_valid_port(port) {
                return false;
            }
            h
        }
        None => host_port,
    };

    is_public_ipv4(host) || is_valid_domain(host)
}

/// Strips `scheme://` for an accepted scheme, returning the remainder.
fn strip_scheme(url: &str) -> Option<&str> {
    let (scheme, rest) = url.split_once("://")?;
    SCHEMES
        .iter()
        .any(|s| s.eq_ignore_ascii_case(scheme))
        .then_some(rest)
}

/// 2 to 5 ASCII digits.
fn is_valid_port(port: &str) -> bool {
    (2..=5).contains(&port.len()) && port.bytes().all(|b| b.is_ascii_digit())
}
