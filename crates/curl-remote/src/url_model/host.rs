//! Host checks: public IPv4 literals and domain names.

/// True for a dotted-quad literal outside the private, loopback and
/// link-local ranges.
///
/// First octet 1..=223, middle octets 0..=255, last octet 1..=254. Octets
/// may not carry leading zeros.
pub fn is_public_ipv4(host: &str) -> bool {
    let mut octets = [0u16; 4];
    let mut count = 0;
    for part in host.split('.') {
        if count == 4 {
            return false;
        }
        match parse_octet(part) {
            Some(n) => octets[count] = n,
            None => return false,
        }
        count += 1;
    }
    if count != 4 {
        return false;
    }

    let [a, b, c, d] = octets;
    let reserved = a == 10
        || a == 127
        || (a == 169 && b == 254)
        || (a == 192 && b == 168)
        || (a == 172 && (16..=31).contains(&b));
    !reserved && (1..=223).contains(&a) && b <= 255 && c <= 255 && (1..=254).contains(&d)
}

fn parse_octet(s: &str) -> Option<u16> {
    if s.is_empty() || s.len() > 3 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse().ok()
}

/// True for `label(.label)*.tld` with a letters-only TLD of two or more characters.
pub fn is_valid_domain(host: &str) -> bool {
    let labels: Vec<&str> = host.split('.').collect();
    let (tld, rest) = match labels.split_last() {
        Some(split) => split,
        None => return false,
    };
    !rest.is_empty() && rest.iter().all(|l| is_valid_label(l)) && is_valid_tld(tld)
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('\u{a1}'..='\u{ffff}').contains(&c)
}

/// Alphanumeric runs joined by single hyphens.
fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label
            .split('-')
            .all(|run| !run.is_empty() && run.chars().all(is_label_char))
}

fn is_valid_tld(tld: &str) -> bool {
    tld.chars().count() >= 2
        && tld
            .chars()
            .all(|c| c.is_ascii_alphabetic() || ('\u{a1}'..='\u{ffff}').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_ranges() {
        assert!(is_public_ipv4("8.8.8.8"));
        assert!(is_public_ipv4("1.0.0.1"));
        assert!(is_public_ipv4("223.255.255.254"));
        assert!(!is_public_ipv4("224.0.0.1"));
        assert!(!is_public_ipv4("0.1.2.3"));
        assert!(!is_public_ipv4("8.8.8.0"));
        assert!(!is_public_ipv4("8.8.8.255"));
        assert!(!is_public_ipv4("8.256.8.8"));
    }

    #[test]
    fn ipv4_private_ranges_rejected() {
        assert!(!is_public_ipv4("10.1.2.3"));
        assert!(!is_public_ipv4("127.0.0.1"));
        assert!(!is_public_ipv4("169.254.0.1"));
        assert!(!is_public_ipv4("192.168.0.1"));
        assert!(!is_public_ipv4("172.16.0.1"));
        assert!(!is_public_ipv4("172.31.0.1"));
        assert!(is_public_ipv4("169.253.0.1"));
        assert!(is_public_ipv4("192.169.0.1"));
    }

    #[test]
    fn ipv4_shape() {
        assert!(!is_public_ipv4("8.8.8"));
        assert!(!is_public_ipv4("8.8.8.8.8"));
        assert!(!is_public_ipv4("08.8.8.8"));
        assert!(!is_public_ipv4("8..8.8"));
        assert!(!is_public_ipv4("8.8.8.8."));
    }

    #[test]
    fn domains() {
        assert!(is_valid_domain("httpbin.org"));
        assert!(is_valid_domain("a.b.c.example.com"));
        assert!(is_valid_domain("my-host.io"));
        assert!(is_valid_domain("echo.test"));
        assert!(!is_valid_domain("localhost"));
        assert!(!is_valid_domain("example.c"));
        assert!(!is_valid_domain("example.c0m"));
        assert!(!is_valid_domain("-bad.com"));
        assert!(!is_valid_domain("bad-.com"));
        assert!(!is_valid_domain("bad--host.com"));
        assert!(!is_valid_domain("a..com"));
        assert!(!is_valid_domain("example.com."));
        assert!(!is_valid_domain("exa_mple.com"));
        assert!(!is_valid_domain(""));
    }

    #[test]
    fn numeric_hosts_are_not_domains() {
        assert!(!is_valid_domain("192.168.1.1"));
        assert!(!is_valid_domain("127.0.0.1"));
    }
}
