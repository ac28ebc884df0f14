//! Error taxonomy for fatal failures.
//!
//! Only conditions that abort a run before a `ValidationResult` exists
//! live here. Per-file and per-rule failures are recorded as
//! violations instead so the rest of the run can finish.

#[derive(Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// Two rules registered under the same identifier.
    DuplicateRule(String),
    /// enable/disable called with an id that was never registered.
    UnknownRule(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::DuplicateRule(id) => {
                write!(f, "duplicate rule id: {id}")
            }
            RegistryError::UnknownRule(id) => {
                write!(f, "unknown rule id: {id}")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
    /// A custom pattern declared in config has an invalid regex.
    InvalidPattern { name: String, reason: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config read error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::InvalidPattern { name, reason } => {
                write!(f, "invalid regex for custom pattern '{name}': {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
