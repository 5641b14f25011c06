use std::fmt;

use harvest_core::Environment;

use crate::error::RegistryError;

/// Dedup key scope: `{environment}:{source_group}`.
///
/// Identical bytes collected for two different source groups (or the same
/// group in two environments) must never collide, so every registry key is
/// prefixed with this scope. The environment side is a closed enum; the
/// source group is validated here because a stray `:` would make keys
/// ambiguous for other tooling that parses them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    environment: Environment,
    source_group: String,
}

impl Namespace {
    pub fn new(environment: Environment, source_group: &str) -> Result<Self, RegistryError> {
        if source_group.is_empty() {
            return Err(RegistryError::InvalidNamespace(
                "source group must not be empty".to_string(),
            ));
        }
        if source_group.contains(':') {
            return Err(RegistryError::InvalidNamespace(format!(
                "source group '{source_group}' must not contain ':'"
            )));
        }
        Ok(Self {
            environment,
            source_group: source_group.to_string(),
        })
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn source_group(&self) -> &str {
        &self.source_group
    }

    /// Key scope `{environment}:{source_group}`.
    pub fn scope(&self) -> String {
        format!("{}:{}", self.environment.as_str(), self.source_group)
    }

    /// Full registry key `{environment}:{source_group}:{fingerprint}`.
    pub fn record_key(&self, fingerprint: &str) -> String {
        format!("{}:{}", self.scope(), fingerprint)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.environment.as_str(), self.source_group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_and_record_key_format() {
        let ns = Namespace::new(Environment::Prod, "miso_fuel_mix").unwrap();
        assert_eq!(ns.scope(), "prod:miso_fuel_mix");
        assert_eq!(ns.record_key("abc123"), "prod:miso_fuel_mix:abc123");
    }

    #[test]
    fn rejects_empty_source_group() {
        assert!(Namespace::new(Environment::Dev, "").is_err());
    }

    #[test]
    fn rejects_colon_in_source_group() {
        assert!(Namespace::new(Environment::Dev, "a:b").is_err());
    }
}
