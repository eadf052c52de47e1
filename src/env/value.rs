// ABOUTME: Resolved environment value type
// ABOUTME: Distinguishes single-valued from multi-valued variables for shells and templates

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EnvValue {
    Scalar(String),
    List(Vec<String>),
}

impl EnvValue {
    /// Build a value from every occurrence of a key, in order of appearance
    pub fn from_values(mut values: Vec<String>) -> Option<Self> {
        match values.len() {
            0 => None,
            1 => values.pop().map(EnvValue::Scalar),
            _ => Some(EnvValue::List(values)),
        }
    }

    pub fn values(&self) -> Vec<&str> {
        match self {
            EnvValue::Scalar(value) => vec![value.as_str()],
            EnvValue::List(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// Lists print bracketed and space separated: `[a b]`
impl fmt::Display for EnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvValue::Scalar(value) => write!(f, "{}", value),
            EnvValue::List(_) => write!(f, "[{}]", self.values().join(" ")),
        }
    }
}

impl From<&str> for EnvValue {
    fn from(value: &str) -> Self {
        EnvValue::Scalar(value.to_string())
    }
}

impl From<Vec<&str>> for EnvValue {
    fn from(values: Vec<&str>) -> Self {
        EnvValue::List(values.into_iter().map(str::to_string).collect())
    }
}
