use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::{Error, Result};

/// A `principal:secret` pair used to authenticate against Thunder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub principal: String,
    pub secret: String,
}

impl Credentials {
    pub fn new<P: Into<String>, S: Into<String>>(principal: P, secret: S) -> Self {
        Self {
            principal: principal.into(),
            secret: secret.into(),
        }
    }

    /// Value of the `Authorization` header for basic authentication.
    pub fn basic_authorization(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.principal, self.secret));
        format!("Basic {encoded}")
    }
}

impl FromStr for Credentials {
    type Err = Error;

    /// Splits on `:`. Only the first two fields are used, anything after a
    /// second colon is dropped.
    fn from_str(value: &str) -> Result<Self> {
        let mut parts = value.split(':');
        let principal = parts.next().unwrap_or_default();
        let secret = parts.next().ok_or_else(|| {
            Error::credentials(format!("expected principal:secret, got '{value}'"))
        })?;
        Ok(Self::new(principal, secret))
    }
}
