//! HTTP method accepted by the wrapper.

use std::fmt;
use std::str::FromStr;

use crate::error::RemoteError;

/// Transfer method. Only GET and POST are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl Method {
    /// Lowercase name, as accepted by [`Method::from_str`].
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
        }
    }
}

impl FromStr for Method {
    type Err = RemoteError;

    /// Case-insensitive: `"GET"`, `"get"` and `"Get"` all parse to [`Method::Get`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("get") {
            Ok(Method::Get)
        } else if s.eq_ignore_ascii_case("post") {
            Ok(Method::Post)
        } else {
            Err(RemoteError::InvalidMethod(s.to_string()))
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
