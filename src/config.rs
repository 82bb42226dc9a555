//! Runtime configuration from environment variables.
//!
//! Everything falls back to a default when its variable is unset or empty.

pub const PROGRAM_ENV: &str = "MEMBRAIN_BIN";
pub const DEFAULT_PROGRAM: &str = "membrain";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Segmentation executable, looked up on `PATH` unless it is a path.
    pub program: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
        }
    }
}

impl LaunchConfig {
    /// Reads the config from the process environment. Override the program
    /// with `MEMBRAIN_BIN`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let program = lookup(PROGRAM_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

        Self { program }
    }
}
