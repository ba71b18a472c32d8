//! Untyped hook configuration as handed over by the orchestrator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single option value, before any validation.
///
/// Variant order matters for `untagged` deserialization: booleans and
/// integers must be tried before floats and strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<ConfigValue>),
    Table(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Name of the value's type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Table(_) => "table",
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

/// Option name → value mapping scoped to one build hook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HookConfig(BTreeMap<String, ConfigValue>);

impl HookConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    /// Builder-style insert, mainly for orchestrators assembling overrides.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Overlay `other` on top of `self`, key by key.
    pub fn merge(&mut self, other: HookConfig) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ConfigValue)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for HookConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_mixed_types() {
        let config: HookConfig =
            serde_json::from_str(r#"{"path": "a.py", "pattern": true, "n": 9000, "x": 1.5}"#)
                .unwrap();

        assert_eq!(config.get("path").and_then(ConfigValue::as_str), Some("a.py"));
        assert_eq!(config.get("pattern").and_then(ConfigValue::as_bool), Some(true));
        assert_eq!(config.get("n"), Some(&ConfigValue::Integer(9000)));
        assert_eq!(config.get("x").map(ConfigValue::type_name), Some("float"));
    }

    #[test]
    fn merge_overrides_by_key() {
        let mut base = HookConfig::new().with("path", "a.py").with("pattern", true);
        base.merge(HookConfig::new().with("path", "b.py"));

        assert_eq!(base.get("path").and_then(ConfigValue::as_str), Some("b.py"));
        assert_eq!(base.get("pattern").and_then(ConfigValue::as_bool), Some(true));
        assert_eq!(base.len(), 2);
    }
}
