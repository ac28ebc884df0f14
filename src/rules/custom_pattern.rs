use regex::Regex;

use crate::config::CustomPattern;
use crate::emit;
use crate::error::ConfigError;
use crate::parser::SyntaxTree;
use crate::types::{Severity, Violation};

use super::Rule;

/// One user-declared regex pattern from config, registered as its own
/// rule instance so two differently configured patterns coexist and
/// report under their own ids. Matches raw source lines, not tree
/// structure.
#[derive(Debug)]
pub struct CustomPatternRule {
    id: String,
    regex: Regex,
    severity: Severity,
    message: String,
    description: String,
}

impl CustomPatternRule {
    pub fn from_config(config: &CustomPattern) -> Result<Self, ConfigError> {
        let regex = Regex::new(&config.pattern).map_err(|e| ConfigError::InvalidPattern {
            name: config.name.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            id: format!("custom:{}", config.name),
            regex,
            severity: config.severity,
            message: config.message.clone(),
            description: format!("Custom pattern `{}`", config.pattern),
        })
    }
}

impl Rule for CustomPatternRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, tree: &SyntaxTree) -> Vec<Violation> {
        let mut out = Vec::new();
        for (i, line) in tree.raw_lines().iter().enumerate() {
            if let Some(m) = self.regex.find(line) {
                emit!(
                    out,
                    self.id,
                    tree,
                    i + 1,
                    m.start() + 1,
                    self.severity,
                    "{}",
                    self.message
                );
            }
        }
        out
    }
}
