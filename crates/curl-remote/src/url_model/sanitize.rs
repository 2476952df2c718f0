//! Character checks: a value is valid only if filtering would leave it unchanged.

/// Punctuation kept by the URL filter in addition to ASCII letters and digits.
const URL_SAFE_PUNCT: &str = "$-_.+!*'(),{}|\\^~[]`<>#%\";/?:@&=";

/// Characters stripped or rewritten by the user-agent filter.
const USER_AGENT_REJECTED: [char; 4] = ['<', '>', '"', '\''];

/// True if every character of `url` survives URL sanitization.
pub fn is_sanitized_url(url: &str) -> bool {
    url.chars()
        .all(|c| c.is_ascii_alphanumeric() || URL_SAFE_PUNCT.contains(c))
}

/// True if `agent` contains no markup delimiters, quotes or control characters.
pub fn is_sanitized_user_agent(agent: &str) -> bool {
    !agent
        .chars()
        .any(|c| c.is_control() || USER_AGENT_REJECTED.contains(&c))
}
