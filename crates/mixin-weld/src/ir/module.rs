//! Module metadata and the action surface
//!
//! A module is a named capability provider backed by a class. Its actions are
//! the public, non-static methods of that class (and its ancestors) whose names
//! do not start with `_`, optionally narrowed by `only` / `except` lists.

use crate::error::GenerateError;
use crate::ir::{ClassInfo, ClassRegistry};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An instantiated module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    /// Module name as used in suite configuration (e.g., "WebDriver")
    pub name: String,
    /// Fully qualified class backing the module
    pub class: String,
    /// Restrict exposed actions to these names
    #[serde(default)]
    pub only: Vec<String>,
    /// Hide these actions
    #[serde(default)]
    pub except: Vec<String>,
}

impl ModuleInfo {
    /// Create a new module
    pub fn new(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: class.into().trim_start_matches('\\').to_string(),
            only: Vec::new(),
            except: Vec::new(),
        }
    }

    /// Expose only the given actions
    pub fn only(mut self, actions: &[&str]) -> Self {
        self.only = actions.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Hide the given actions
    pub fn except(mut self, actions: &[&str]) -> Self {
        self.except = actions.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Whether a public method name is exposed as an action
    fn exposes(&self, action: &str) -> bool {
        if action.starts_with('_') {
            return false;
        }
        if !self.only.is_empty() && !self.only.iter().any(|a| a == action) {
            return false;
        }
        !self.except.iter().any(|a| a == action)
    }
}

/// Ordered mapping of action name to the module that provides it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionSurface {
    actions: IndexMap<String, String>,
}

impl ActionSurface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer an action. Returns `false` if an earlier module already provides it.
    pub fn offer(&mut self, action: impl Into<String>, module: impl Into<String>) -> bool {
        let action = action.into();
        if self.actions.contains_key(&action) {
            return false;
        }
        self.actions.insert(action, module.into());
        true
    }

    /// Module that provides an action
    pub fn module_for(&self, action: &str) -> Option<&str> {
        self.actions.get(action).map(|s| s.as_str())
    }

    /// Iterate (action, module) pairs in processing order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.actions.iter().map(|(a, m)| (a.as_str(), m.as_str()))
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Container of instantiated modules and the class metadata behind them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleContainer {
    registry: ClassRegistry,
    modules: IndexMap<String, ModuleInfo>,
}

impl ModuleContainer {
    /// Create a container over a class registry
    pub fn new(registry: ClassRegistry) -> Self {
        Self {
            registry,
            modules: IndexMap::new(),
        }
    }

    /// Add a module
    pub fn with_module(mut self, module: ModuleInfo) -> Self {
        self.add_module(module);
        self
    }

    /// Add a module, replacing one of the same name
    pub fn add_module(&mut self, module: ModuleInfo) {
        self.modules.insert(module.name.clone(), module);
    }

    /// Class metadata
    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    /// Look up a module by name
    pub fn module(&self, name: &str) -> Option<&ModuleInfo> {
        self.modules.get(name)
    }

    /// Look up a module, failing if it is not in the container
    pub fn require_module(&self, name: &str) -> Result<&ModuleInfo, GenerateError> {
        self.module(name)
            .ok_or_else(|| GenerateError::UnknownModule(name.to_string()))
    }

    /// Class backing a module
    pub fn module_class(&self, name: &str) -> Result<&ClassInfo, GenerateError> {
        let module = self.require_module(name)?;
        self.registry.require(&module.class)
    }

    /// All modules in insertion order
    pub fn modules(&self) -> impl Iterator<Item = &ModuleInfo> {
        self.modules.values()
    }

    /// Actions exposed by one module, in the order its class lists them
    pub fn actions_for(&self, name: &str) -> Result<Vec<String>, GenerateError> {
        let module = self.require_module(name)?;
        let mut actions = Vec::new();

        for method_name in self.registry.public_methods(&module.class)? {
            if !module.exposes(&method_name) {
                continue;
            }
            let is_static = self
                .registry
                .find_method(&module.class, &method_name)?
                .map(|(_, m)| m.is_static)
                .unwrap_or(false);
            if !is_static {
                actions.push(method_name);
            }
        }

        Ok(actions)
    }

    /// Build the action surface for the given modules in configured order.
    ///
    /// The first module offering an action owns it; later offers are dropped.
    pub fn action_surface(&self, enabled: &[String]) -> Result<ActionSurface, GenerateError> {
        let mut surface = ActionSurface::new();

        for module_name in enabled {
            for action in self.actions_for(module_name)? {
                if !surface.offer(action.clone(), module_name.clone()) {
                    debug!(
                        action = %action,
                        module = %module_name,
                        owner = surface.module_for(&action).unwrap_or_default(),
                        "Action already provided by an earlier module, skipping"
                    );
                }
            }
        }

        Ok(surface)
    }

    /// Every public method name of each configured module's class, keyed by module.
    ///
    /// Unlike [`Self::action_surface`], nothing is filtered or deduplicated.
    pub fn inventory(
        &self,
        enabled: &[String],
    ) -> Result<IndexMap<String, Vec<String>>, GenerateError> {
        let mut inventory = IndexMap::new();
        for module_name in enabled {
            let module = self.require_module(module_name)?;
            inventory.insert(
                module_name.clone(),
                self.registry.public_methods(&module.class)?,
            );
        }
        Ok(inventory)
    }

    /// Check that every module class and every referenced ancestor/interface is known
    pub fn validate(&self) -> Result<(), GenerateError> {
        for module in self.modules.values() {
            self.registry.interfaces_of(&module.class)?;
        }
        for class in self.registry.classes() {
            self.registry.interfaces_of(&class.name)?;
        }
        Ok(())
    }
}

/// Serialized form of a container, as produced by metadata extraction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub classes: Vec<ClassInfo>,
    #[serde(default)]
    pub modules: Vec<ModuleInfo>,
}

impl Manifest {
    /// Build a validated container
    pub fn into_container(self) -> Result<ModuleContainer, GenerateError> {
        let mut container = ModuleContainer::new(ClassRegistry::from_classes(self.classes));
        for module in self.modules {
            container.add_module(module);
        }
        container.validate()?;
        Ok(container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::MethodInfo;

    fn container() -> ModuleContainer {
        let registry = ClassRegistry::from_classes([
            ClassInfo::new("Codeception\\Module")
                .method(MethodInfo::new("_before"))
                .method(MethodInfo::new("_getConfig")),
            ClassInfo::new("Codeception\\Module\\Asserts")
                .extends("Codeception\\Module")
                .method(MethodInfo::new("assertEquals"))
                .method(MethodInfo::new("seeElement"))
                .method(MethodInfo::new("build").static_method()),
            ClassInfo::new("Codeception\\Module\\WebDriver")
                .extends("Codeception\\Module")
                .method(MethodInfo::new("amOnPage"))
                .method(MethodInfo::new("seeElement"))
                .method(MethodInfo::new("click")),
        ]);

        ModuleContainer::new(registry)
            .with_module(ModuleInfo::new("Asserts", "Codeception\\Module\\Asserts"))
            .with_module(ModuleInfo::new("WebDriver", "\\Codeception\\Module\\WebDriver"))
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_actions_skip_hooks_and_statics() {
        let container = container();
        assert_eq!(
            container.actions_for("Asserts").unwrap(),
            names(&["assertEquals", "seeElement"])
        );
    }

    #[test]
    fn test_first_module_wins() {
        let container = container();

        let surface = container
            .action_surface(&names(&["Asserts", "WebDriver"]))
            .unwrap();
        assert_eq!(surface.len(), 4);
        assert_eq!(surface.module_for("seeElement"), Some("Asserts"));

        let surface = container
            .action_surface(&names(&["WebDriver", "Asserts"]))
            .unwrap();
        assert_eq!(surface.module_for("seeElement"), Some("WebDriver"));

        let order: Vec<_> = surface.iter().map(|(a, _)| a).collect();
        assert_eq!(order, vec!["amOnPage", "seeElement", "click", "assertEquals"]);
    }

    #[test]
    fn test_partial_module() {
        let container = container().with_module(
            ModuleInfo::new("WebDriver", "Codeception\\Module\\WebDriver").only(&["click", "amOnPage"]),
        );
        assert_eq!(
            container.actions_for("WebDriver").unwrap(),
            names(&["amOnPage", "click"])
        );

        let container = container.with_module(
            ModuleInfo::new("WebDriver", "Codeception\\Module\\WebDriver").except(&["click"]),
        );
        assert_eq!(
            container.actions_for("WebDriver").unwrap(),
            names(&["amOnPage", "seeElement"])
        );
    }

    #[test]
    fn test_inventory_is_unfiltered() {
        let container = container();
        let inventory = container.inventory(&names(&["Asserts"])).unwrap();
        assert_eq!(
            inventory["Asserts"],
            names(&["assertEquals", "seeElement", "build", "_before", "_getConfig"])
        );
    }

    #[test]
    fn test_unknown_module() {
        let container = container();
        assert_eq!(
            container.action_surface(&names(&["REST"])).unwrap_err(),
            GenerateError::UnknownModule("REST".to_string())
        );
    }

    #[test]
    fn test_manifest_validation() {
        let manifest = Manifest {
            classes: vec![ClassInfo::new("Helper").implements("Missing")],
            modules: vec![ModuleInfo::new("Helper", "Helper")],
        };
        assert_eq!(
            manifest.into_container().unwrap_err(),
            GenerateError::UnknownClass("Missing".to_string())
        );
    }
}
