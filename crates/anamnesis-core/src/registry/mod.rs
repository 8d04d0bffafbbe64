//! Patient case registry.
//!
//! An immutable, ordered mapping from a human-readable case label to the
//! persona instruction block handed to the LLM. The instruction text is
//! opaque payload: the behavioral rules it encodes (never volunteer a
//! diagnosis, answer only the first of stacked questions, bracketed
//! non-verbal cues) are interpreted by the model, not by this code.

mod builtin;

use anamnesis_types::error::RegistryError;

pub use builtin::builtin_cases;

/// One patient case: display label, short summary, and the full persona
/// instruction block. Constructed once at startup; never mutated.
#[derive(Debug, Clone)]
pub struct CaseEntry {
    pub label: String,
    pub summary: String,
    pub instruction: String,
}

/// Immutable registry of patient cases, in stable presentation order.
#[derive(Debug)]
pub struct CaseRegistry {
    entries: Vec<CaseEntry>,
}

impl CaseRegistry {
    /// Build a registry from an ordered list of cases.
    pub fn new(entries: Vec<CaseEntry>) -> Self {
        Self { entries }
    }

    /// The built-in case set shipped with the simulator.
    pub fn builtin() -> Self {
        Self::new(builtin_cases())
    }

    /// Look up a case by its exact label.
    pub fn get(&self, label: &str) -> Result<&CaseEntry, RegistryError> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .ok_or_else(|| RegistryError::NotFound(label.to_string()))
    }

    /// Look up a case by its position in presentation order (0-based).
    pub fn by_index(&self, index: usize) -> Result<&CaseEntry, RegistryError> {
        self.entries
            .get(index)
            .ok_or_else(|| RegistryError::NotFound(format!("#{}", index + 1)))
    }

    /// Case labels in stable presentation order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// All entries in presentation order.
    pub fn entries(&self) -> &[CaseEntry] {
        &self.entries
    }

    /// Number of registered cases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_three_cases_in_level_order() {
        let registry = CaseRegistry::builtin();
        let labels: Vec<&str> = registry.labels().collect();
        assert_eq!(labels.len(), 3);
        assert!(labels[0].starts_with("Level 1"));
        assert!(labels[1].starts_with("Level 2"));
        assert!(labels[2].starts_with("Level 3"));
    }

    #[test]
    fn test_labels_order_is_stable() {
        let a: Vec<String> = CaseRegistry::builtin()
            .labels()
            .map(String::from)
            .collect();
        let b: Vec<String> = CaseRegistry::builtin()
            .labels()
            .map(String::from)
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_get_known_label() {
        let registry = CaseRegistry::builtin();
        let label = registry.labels().next().unwrap().to_string();
        let entry = registry.get(&label).unwrap();
        assert_eq!(entry.label, label);
        assert!(!entry.instruction.is_empty());
    }

    #[test]
    fn test_get_unknown_label_fails_loudly() {
        let registry = CaseRegistry::builtin();
        let err = registry.get("Level 9: Nobody").unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(_)));
        assert!(err.to_string().contains("Level 9: Nobody"));
    }

    #[test]
    fn test_by_index_in_bounds_and_out() {
        let registry = CaseRegistry::builtin();
        assert!(registry.by_index(0).is_ok());
        assert!(registry.by_index(2).is_ok());
        assert!(registry.by_index(3).is_err());
    }

    #[test]
    fn test_instructions_carry_global_rules() {
        // Every case embeds the shared behavioral layer verbatim.
        let registry = CaseRegistry::builtin();
        for entry in registry.entries() {
            assert!(entry.instruction.contains("You are a patient"));
            assert!(entry.instruction.contains("Never suggest a diagnosis"));
        }
    }
}
