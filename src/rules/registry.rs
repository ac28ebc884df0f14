use std::collections::HashMap;

use super::Rule;
use crate::error::RegistryError;

struct Entry {
    rule: Box<dyn Rule>,
    enabled: bool,
}

/// Ordered rule collection. Identifiers are unique; insertion order is
/// evaluation and report order. Read-only during a validation run —
/// enable/disable happen between runs, never concurrently with one.
#[derive(Default)]
pub struct RuleRegistry {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.index.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, rule: Box<dyn Rule>) -> Result<(), RegistryError> {
        let id = rule.id().to_string();
        if self.index.contains_key(&id) {
            return Err(RegistryError::DuplicateRule(id));
        }
        self.index.insert(id, self.entries.len());
        self.entries.push(Entry {
            rule,
            enabled: true,
        });
        Ok(())
    }

    /// Registers a rule and immediately disables it. Disabled rules
    /// stay listed so "why wasn't this caught" stays answerable.
    pub fn register_disabled(&mut self, rule: Box<dyn Rule>) -> Result<(), RegistryError> {
        let id = rule.id().to_string();
        self.register(rule)?;
        self.disable(&id)
    }

    pub fn enable(&mut self, id: &str) -> Result<(), RegistryError> {
        self.set_enabled(id, true)
    }

    pub fn disable(&mut self, id: &str) -> Result<(), RegistryError> {
        self.set_enabled(id, false)
    }

    fn set_enabled(&mut self, id: &str, enabled: bool) -> Result<(), RegistryError> {
        match self.index.get(id) {
            Some(&i) => {
                self.entries[i].enabled = enabled;
                Ok(())
            }
            None => Err(RegistryError::UnknownRule(id.to_string())),
        }
    }

    pub fn get(&self, id: &str) -> Option<&dyn Rule> {
        self.index.get(id).map(|&i| self.entries[i].rule.as_ref())
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.index
            .get(id)
            .is_some_and(|&i| self.entries[i].enabled)
    }

    /// All rules in insertion order, with their enabled state.
    pub fn list(&self) -> impl Iterator<Item = (&dyn Rule, bool)> {
        self.entries.iter().map(|e| (e.rule.as_ref(), e.enabled))
    }

    /// Enabled rules in insertion order.
    pub fn enabled_rules(&self) -> Vec<&dyn Rule> {
        self.entries
            .iter()
            .filter(|e| e.enabled)
            .map(|e| e.rule.as_ref())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SyntaxTree;
    use crate::types::{Severity, Violation};

    struct Dummy(&'static str);

    impl Rule for Dummy {
        fn id(&self) -> &str {
            self.0
        }
        fn description(&self) -> &str {
            "dummy"
        }
        fn severity(&self) -> Severity {
            Severity::Warning
        }
        fn evaluate(&self, _tree: &SyntaxTree) -> Vec<Violation> {
            Vec::new()
        }
    }

    #[test]
    fn test_register_and_list_order() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(Dummy("b"))).unwrap();
        registry.register(Box::new(Dummy("a"))).unwrap();
        let ids: Vec<_> = registry.list().map(|(r, _)| r.id().to_string()).collect();
        assert_eq!(ids, vec!["b", "a"], "insertion order, not alphabetical");
    }

    #[test]
    fn test_duplicate_rule_rejected() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(Dummy("x"))).unwrap();
        let err = registry.register(Box::new(Dummy("x"))).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateRule("x".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_disable_keeps_rule_listed() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(Dummy("x"))).unwrap();
        registry.disable("x").unwrap();
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_enabled("x"));
        assert!(registry.get("x").is_some());
        assert!(registry.enabled_rules().is_empty());
    }

    #[test]
    fn test_enable_after_disable() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(Dummy("x"))).unwrap();
        registry.disable("x").unwrap();
        registry.enable("x").unwrap();
        assert!(registry.is_enabled("x"));
        assert_eq!(registry.enabled_rules().len(), 1);
    }

    #[test]
    fn test_toggle_unknown_rule() {
        let mut registry = RuleRegistry::new();
        let err = registry.disable("nope").unwrap_err();
        assert_eq!(err, RegistryError::UnknownRule("nope".to_string()));
    }

    #[test]
    fn test_register_disabled() {
        let mut registry = RuleRegistry::new();
        registry.register_disabled(Box::new(Dummy("x"))).unwrap();
        assert!(!registry.is_enabled("x"));
        assert!(registry.get("x").is_some());
    }
}
