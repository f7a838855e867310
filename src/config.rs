use crate::printer::OutputFormat;
use std::env;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub color: bool,
    pub verbose: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup, so tests don't have to touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            format: lookup("SORTER_FORMAT")
                .and_then(|v| OutputFormat::from_name(&v))
                .unwrap_or_default(),
            color: lookup("SORTER_COLOR").map(|v| is_truthy(&v)).unwrap_or(false),
            verbose: lookup("SORTER_VERBOSE")
                .map(|v| is_truthy(&v))
                .unwrap_or(false),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    value == "1" || value == "true" || value == "yes"
}
