//! Command payload builder
//!
//! Every accessv2 call is a flat JSON object: the `cmd` name, the command's
//! arguments and the credential fields. Parameter structs are flattened into
//! the same object.

use crate::error::{LoadMasterError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// A single accessv2 command and its arguments
#[derive(Clone)]
pub struct Command {
    name: &'static str,
    args: Map<String, Value>,
}

impl Command {
    /// Start a command with no arguments
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            args: Map::new(),
        }
    }

    /// Command name sent as `cmd`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Arguments collected so far
    pub fn args(&self) -> &Map<String, Value> {
        &self.args
    }

    /// Set an argument, replacing an earlier value with the same key
    pub fn arg(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.args.insert(key.to_string(), value.into());
        self
    }

    /// Set an argument only when a value is present
    pub fn opt_arg<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.arg(key, v),
            None => self,
        }
    }

    /// Merge the fields of a serializable parameter struct into the command
    ///
    /// The struct must serialize to a JSON object. Fields already set on the
    /// command win over same-named fields of the struct.
    pub fn params<P: Serialize + ?Sized>(mut self, params: &P) -> Result<Self> {
        match serde_json::to_value(params)? {
            Value::Object(fields) => {
                for (key, value) in fields {
                    self.args.entry(key).or_insert(value);
                }
                Ok(self)
            }
            Value::Null => Ok(self),
            other => Err(LoadMasterError::InvalidConfig(format!(
                "command {} parameters must be a JSON object, got {}",
                self.name, other
            ))),
        }
    }

    /// Render the JSON body without credentials
    pub(crate) fn into_body(self) -> Map<String, Value> {
        let mut body = self.args;
        body.insert("cmd".to_string(), Value::from(self.name));
        body
    }
}

impl fmt::Debug for Command {
    // Argument values may carry certificates, keys or passwords
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("cmd", &self.name)
            .field("args", &self.args.keys().collect::<Vec<_>>())
            .finish()
    }
}
