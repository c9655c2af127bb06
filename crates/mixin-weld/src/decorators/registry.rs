//! Decorator inventory and identifier resolution

use crate::decorators::StepDecorator;
use crate::error::GenerateError;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Distributed slice collecting built-in decorators at compile time
#[linkme::distributed_slice]
pub static STEP_DECORATORS: [fn() -> Arc<dyn StepDecorator>];

/// Instantiate every decorator registered in the distributed slice
pub fn collect_decorators() -> Vec<Arc<dyn StepDecorator>> {
    STEP_DECORATORS.iter().map(|f| f()).collect()
}

/// Register a decorator in the distributed slice
#[macro_export]
macro_rules! register_decorator {
    ($decorator:expr) => {
        #[linkme::distributed_slice($crate::decorators::STEP_DECORATORS)]
        static _STEP_DECORATOR: fn() -> std::sync::Arc<dyn $crate::decorators::StepDecorator> =
            || -> std::sync::Arc<dyn $crate::decorators::StepDecorator> {
                std::sync::Arc::new($decorator)
            };
    };
}

/// Identifier -> decorator table
#[derive(Clone, Default)]
pub struct DecoratorRegistry {
    decorators: IndexMap<String, Arc<dyn StepDecorator>>,
}

impl DecoratorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in decorators
    pub fn from_inventory() -> Self {
        let mut registry = Self::new();
        for decorator in collect_decorators() {
            registry.register_arc(decorator);
        }
        registry
    }

    /// Register a decorator under its identifier
    pub fn register<D: StepDecorator + 'static>(&mut self, decorator: D) {
        self.register_arc(Arc::new(decorator));
    }

    /// Register a shared decorator under its identifier
    pub fn register_arc(&mut self, decorator: Arc<dyn StepDecorator>) {
        self.decorators
            .insert(normalize_id(decorator.id()).to_string(), decorator);
    }

    /// Look up a decorator by identifier
    pub fn get(&self, id: &str) -> Option<&Arc<dyn StepDecorator>> {
        self.decorators.get(normalize_id(id))
    }

    /// Registered identifiers
    pub fn ids(&self) -> Vec<&str> {
        self.decorators.keys().map(|s| s.as_str()).collect()
    }

    /// Resolve configured identifiers into decorators.
    ///
    /// Duplicates are dropped (first occurrence wins); an identifier that is
    /// not a registered decorator is a configuration error.
    pub fn resolve(&self, ids: &[String]) -> Result<Vec<Arc<dyn StepDecorator>>, GenerateError> {
        let mut resolved: IndexMap<&str, Arc<dyn StepDecorator>> = IndexMap::new();

        for id in ids {
            let key = normalize_id(id);
            if resolved.contains_key(key) {
                continue;
            }
            let decorator = self
                .get(key)
                .ok_or_else(|| GenerateError::Configuration(id.clone()))?;
            resolved.insert(key, Arc::clone(decorator));
        }

        Ok(resolved.into_values().collect())
    }
}

impl fmt::Debug for DecoratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoratorRegistry")
            .field("decorators", &self.ids())
            .finish()
    }
}

fn normalize_id(id: &str) -> &str {
    id.trim().trim_start_matches('\\')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::Template;

    struct Echo;

    impl StepDecorator for Echo {
        fn id(&self) -> &str {
            "App\\Step\\Echo"
        }

        fn template(&self, template: Template) -> Option<Template> {
            Some(template)
        }
    }

    #[test]
    fn test_builtins_are_collected() {
        let registry = DecoratorRegistry::from_inventory();
        assert!(registry.get("Codeception\\Step\\ConditionalAssertion").is_some());
        assert!(registry.get("\\Codeception\\Step\\TryTo").is_some());
        assert!(registry.get("Codeception\\Step\\Retry").is_some());
    }

    #[test]
    fn test_resolve_dedups_in_order() {
        let mut registry = DecoratorRegistry::from_inventory();
        registry.register(Echo);

        let resolved = registry
            .resolve(&[
                "App\\Step\\Echo".to_string(),
                "Codeception\\Step\\TryTo".to_string(),
                "\\App\\Step\\Echo".to_string(),
            ])
            .unwrap();
        let ids: Vec<_> = resolved.iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec!["App\\Step\\Echo", "Codeception\\Step\\TryTo"]);
    }

    #[test]
    fn test_unknown_decorator_is_configuration_error() {
        let registry = DecoratorRegistry::from_inventory();
        let err = registry
            .resolve(&["App\\NotADecorator".to_string()])
            .err()
            .unwrap();
        assert_eq!(err, GenerateError::Configuration("App\\NotADecorator".to_string()));
        assert!(err.to_string().contains("App\\NotADecorator"));
    }
}
