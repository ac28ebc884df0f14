use serde::Deserialize;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::error::ConfigError;
use crate::types::Severity;

pub const CONFIG_FILE_NAME: &str = ".astlintrc.toml";

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    #[serde(skip)]
    pub format: OutputFormat,
    pub include: Vec<String>,
    pub ignore: Vec<String>,
    pub ignore_files: Vec<String>,
    /// Lowest severity that fails the run. Default `info`: any
    /// violation fails.
    pub fail_on: Severity,
    pub rules: RulesConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    pub unwrap_used: UnwrapUsedConfig,
    pub wildcard_import: BasicRuleConfig,
    pub banned_call: BannedCallConfig,
    pub max_nesting: MaxNestingConfig,
    pub function_length: FunctionLengthConfig,
    pub custom_patterns: Vec<CustomPattern>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UnwrapUsedConfig {
    pub enabled: bool,
    pub severity: Severity,
    /// Root-relative path globs exempt from this rule (typically
    /// test code).
    pub allow: Vec<String>,
}

impl Default for UnwrapUsedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: Severity::Warning,
            allow: vec!["tests/**".into()],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BasicRuleConfig {
    pub enabled: bool,
    pub severity: Severity,
}

impl Default for BasicRuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: Severity::Warning,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BannedCallConfig {
    pub enabled: bool,
    pub severity: Severity,
    pub functions: Vec<String>,
}

impl Default for BannedCallConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: Severity::Error,
            functions: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MaxNestingConfig {
    pub enabled: bool,
    pub severity: Severity,
    pub max_depth: usize,
}

impl Default for MaxNestingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: Severity::Warning,
            max_depth: 5,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FunctionLengthConfig {
    pub enabled: bool,
    pub severity: Severity,
    pub max_lines: usize,
}

impl Default for FunctionLengthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: Severity::Warning,
            max_lines: 100,
        }
    }
}

fn default_severity() -> Severity {
    Severity::Warning
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomPattern {
    pub name: String,
    pub pattern: String,
    #[serde(default = "default_severity")]
    pub severity: Severity,
    pub message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            include: vec!["**/*.rs".into()],
            ignore: vec!["target".into(), ".git".into(), "node_modules".into()],
            ignore_files: Vec::new(),
            fail_on: Severity::Info,
            rules: RulesConfig::default(),
        }
    }
}

impl Config {
    pub fn load(config_path: Option<&Path>, project_root: &Path) -> Result<Self, ConfigError> {
        let path = config_path.map(Path::to_path_buf).or_else(|| {
            let default = project_root.join(CONFIG_FILE_NAME);
            default.exists().then_some(default)
        });

        match path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Config::default()),
        }
    }

    pub const fn default_toml() -> &'static str {
        r#"# astlint configuration

# Which files to validate (glob patterns)
include = ["**/*.rs"]

# Directories to ignore when scanning
ignore = ["target", ".git", "node_modules"]

# Individual files to skip entirely (supports glob patterns)
# ignore_files = ["src/generated.rs"]

# Lowest severity that fails the run: "info", "warning", or "error".
# The default fails on any violation.
fail_on = "info"

[rules.unwrap_used]
enabled = true
severity = "warning"
allow = ["tests/**"]

[rules.wildcard_import]
enabled = true
severity = "warning"

[rules.banned_call]
enabled = true
severity = "error"
# functions = ["std::process::exit", "leak"]

[rules.max_nesting]
enabled = true
severity = "warning"
max_depth = 5

[rules.function_length]
enabled = true
severity = "warning"
max_lines = 100

# Custom regex rules, each reported as custom:<name>:
# [[rules.custom_patterns]]
# name = "todo-comment"
# pattern = "(?i)\\bTODO\\b"
# severity = "info"
# message = "TODO comment found"
"#
    }
}
