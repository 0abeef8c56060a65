use std::fmt;
use std::io;

pub const BEARER_PREFIX: &str = "Bearer ";

/// Placeholder used when no real token has been configured.
pub const PLACEHOLDER_TOKEN: &str = "xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx";

/// Value sent verbatim in the `Authorization` header of every messaging call.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Credential(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(<{} chars>)", self.0.len())
    }
}

/// Picks the hard-coded token, or asks `prompt` for a raw token and adds the bearer scheme.
/// The token is not validated; a bad one only shows up when the first API call is rejected.
pub fn resolve<F>(prefer_hard_coded: bool, hard_coded: &str, prompt: F) -> io::Result<Credential>
    where F: FnOnce() -> io::Result<String>
{
    if prefer_hard_coded {
        return Ok(Credential::new(hard_coded));
    }
    let raw = prompt()?;
    Ok(Credential::new(format!("{}{}", BEARER_PREFIX, raw)))
}
