use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("config.missing: {0} must be set")]
    Missing(&'static str),
    #[error("config.invalid: {key}={value}")]
    Invalid { key: &'static str, value: String },
}

/// Reads `key` through `lookup` and parses it, falling back to `default`
/// when the variable is unset.
pub fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
