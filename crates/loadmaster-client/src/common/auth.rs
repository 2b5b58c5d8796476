//! Credential handling for the accessv2 endpoint
//!
//! The appliance authenticates every command from fields inside the JSON
//! body, so credentials are resolved per request and merged into the payload.

use crate::error::{LoadMasterError, Result};
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

const REDACTED: &str = "[redacted]";

/// Credentials used to authenticate commands
///
/// Username/password takes precedence over the API key when both are set.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Credential fields resolved for a single request
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Auth<'a> {
    /// `apiuser` / `apipass`
    UserPassword { user: &'a str, pass: &'a str },
    /// `apikey`
    ApiKey(&'a str),
}

impl Credentials {
    /// API key authentication
    pub fn api_key(key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
            ..Default::default()
        }
    }

    /// Username and password authentication
    pub fn username_password(user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            username: Some(user.into()),
            password: Some(pass.into()),
            ..Default::default()
        }
    }

    /// Pick the credential fields to send
    ///
    /// Fails with [`LoadMasterError::MissingAuthentication`] when neither a
    /// complete username/password pair nor an API key is available.
    pub fn resolve(&self) -> Result<Auth<'_>> {
        fn non_empty(v: &Option<String>) -> Option<&str> {
            v.as_deref().filter(|s| !s.is_empty())
        }

        if let (Some(user), Some(pass)) = (non_empty(&self.username), non_empty(&self.password)) {
            debug!("Using username and password authentication");
            return Ok(Auth::UserPassword { user, pass });
        }

        if let Some(key) = non_empty(&self.api_key) {
            debug!("Using API key authentication");
            return Ok(Auth::ApiKey(key));
        }

        Err(LoadMasterError::MissingAuthentication)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |v: &Option<String>| v.as_ref().map(|_| REDACTED);
        f.debug_struct("Credentials")
            .field("api_key", &mask(&self.api_key))
            .field("username", &self.username)
            .field("password", &mask(&self.password))
            .finish()
    }
}

impl Auth<'_> {
    /// Write the credential fields into a command body, replacing any
    /// same-named fields already present
    pub(crate) fn inject(&self, body: &mut Map<String, Value>) {
        match self {
            Auth::UserPassword { user, pass } => {
                body.insert("apiuser".to_string(), Value::from(*user));
                body.insert("apipass".to_string(), Value::from(*pass));
            }
            Auth::ApiKey(key) => {
                body.insert("apikey".to_string(), Value::from(*key));
            }
        }
    }
}

impl fmt::Debug for Auth<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Auth::UserPassword { user, .. } => f
                .debug_struct("UserPassword")
                .field("user", user)
                .field("pass", &REDACTED)
                .finish(),
            Auth::ApiKey(_) => f.debug_tuple("ApiKey").field(&REDACTED).finish(),
        }
    }
}
