//! Dependency variables

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DepsrcError;

/// A variable passed to a dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyVar {
    pub name: String,
    pub value: String,
}

impl DependencyVar {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl FromStr for DependencyVar {
    type Err = DepsrcError;

    /// Parse `NAME=VALUE`; the value may itself contain `=`
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => {
                Ok(Self::new(name.trim(), value))
            }
            _ => Err(DepsrcError::InvalidVariable {
                input: input.to_string(),
            }),
        }
    }
}
