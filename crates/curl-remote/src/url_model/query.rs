//! Request payload encoding for GET query strings and POST bodies.

/// Joins `key=value` pairs with `&`. Keys and values are inserted verbatim,
/// without percent-encoding.
pub fn build_query<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut query = String::new();
    for (k, v) in pairs {
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(k.as_ref());
        query.push('=');
        query.push_str(v.as_ref());
    }
    query
}

/// Encodes pairs as an `application/x-www-form-urlencoded` body.
pub fn build_form_body<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut body = url::form_urlencoded::Serializer::new(String::new());
    for (k, v) in pairs {
        body.append_pair(k.as_ref(), v.as_ref());
    }
    body.finish()
}
