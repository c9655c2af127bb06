//! Actions mixin assembly
//!
//! Drives the whole pipeline: builds the action surface from the configured
//! modules, synthesizes one wrapper per action (plus decorator variants),
//! stamps the result with the fingerprint and renders the trait.

use crate::codegen::fingerprint::{fingerprint, is_up_to_date};
use crate::codegen::method::MethodSynthesizer;
use crate::codegen::template::Template;
use crate::decorators::{DecoratorRegistry, StepDecorator};
use crate::error::GenerateError;
use crate::ir::{MethodDescriptor, ModuleContainer};
use crate::settings::GeneratorSettings;
use std::sync::Arc;
use tracing::{debug, info};

/// Template for the generated file
pub const MIXIN_TEMPLATE: &str = r#"<?php  //[STAMP] {{hash}}
namespace {{namespace}}_generated;

// This class was automatically generated by build task
// You should not change it manually as it will be overwritten on next build
// @codingStandardsIgnoreFile

trait {{name}}Actions
{
    /**
     * @return \Codeception\Scenario
     */
    abstract protected function getScenario();

    {{methods}}
}
"#;

/// Generator for an actor's `{Actor}Actions` trait
pub struct ActionsGenerator<'a> {
    container: &'a ModuleContainer,
    settings: &'a GeneratorSettings,
    decorators: Vec<Arc<dyn StepDecorator>>,
    num_methods: usize,
}

impl<'a> ActionsGenerator<'a> {
    /// Create a generator using the built-in decorators.
    ///
    /// Fails if a configured decorator is unknown.
    pub fn new(
        container: &'a ModuleContainer,
        settings: &'a GeneratorSettings,
    ) -> Result<Self, GenerateError> {
        Self::with_registry(container, settings, &DecoratorRegistry::from_inventory())
    }

    /// Create a generator resolving decorators from a custom registry
    pub fn with_registry(
        container: &'a ModuleContainer,
        settings: &'a GeneratorSettings,
        registry: &DecoratorRegistry,
    ) -> Result<Self, GenerateError> {
        let decorators = registry.resolve(&settings.step_decorators)?;
        Ok(Self {
            container,
            settings,
            decorators,
            num_methods: 0,
        })
    }

    /// Number of primary wrappers produced by the last [`Self::produce`] call
    pub fn num_methods(&self) -> usize {
        self.num_methods
    }

    /// Resolve descriptors for every action on the surface, in processing order
    pub fn descriptors(&self) -> Result<Vec<MethodDescriptor>, GenerateError> {
        let synthesizer = self.synthesizer();
        let surface = self
            .container
            .action_surface(&self.settings.modules.enabled)?;

        surface
            .iter()
            .map(|(action, module_name)| {
                let module = self.container.require_module(module_name)?;
                synthesizer.describe(&module.class, action)
            })
            .collect()
    }

    /// Fingerprint of the current module inventory and configuration
    pub fn fingerprint(&self) -> Result<String, GenerateError> {
        let inventory = self.container.inventory(&self.settings.modules.enabled)?;
        fingerprint(
            &inventory,
            &self.settings.modules,
            &self.settings.step_decorators,
        )
    }

    /// Whether an existing generated file is still current
    pub fn is_up_to_date(&self, existing: &str) -> Result<bool, GenerateError> {
        Ok(is_up_to_date(existing, &self.fingerprint()?))
    }

    /// Generate the full trait source
    pub fn produce(&mut self) -> Result<String, GenerateError> {
        let descriptors = self.descriptors()?;
        let synthesizer = self.synthesizer();

        let code: Vec<String> = descriptors
            .iter()
            .map(|method| {
                debug!(
                    action = %method.name,
                    module = %method.declaring_class,
                    step = %method.kind,
                    "Synthesizing action wrapper"
                );
                synthesizer.synthesize(method)
            })
            .collect();
        self.num_methods = code.len();

        let namespace = self.settings.namespace.trim_end_matches('\\');
        let namespace = if namespace.is_empty() {
            String::new()
        } else {
            format!("{}\\", namespace)
        };

        let source = Template::new(MIXIN_TEMPLATE)
            .place("namespace", namespace)
            .place("hash", self.fingerprint()?)
            .place("name", self.settings.actor.as_str())
            .place("methods", code.join("\n\n "))
            .produce();

        info!(
            actor = %self.settings.actor,
            methods = self.num_methods,
            decorators = self.decorators.len(),
            "Generated {}",
            self.settings.trait_name()
        );

        Ok(source)
    }

    fn synthesizer(&self) -> MethodSynthesizer<'_> {
        MethodSynthesizer::new(self.container.registry(), &self.decorators)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{ClassInfo, ClassRegistry, MethodInfo, ModuleInfo};
    use pretty_assertions::assert_eq;

    fn container() -> ModuleContainer {
        ModuleContainer::new(ClassRegistry::from_classes([ClassInfo::new(
            "Codeception\\Module\\Asserts",
        )
        .method(MethodInfo::new("seeElement").with_doc("/** Checks */"))]))
        .with_module(ModuleInfo::new("Asserts", "Codeception\\Module\\Asserts"))
    }

    #[test]
    fn test_empty_module_set() {
        let container = ModuleContainer::default();
        let settings = GeneratorSettings::new("Unit");
        let mut generator = ActionsGenerator::new(&container, &settings).unwrap();
        let source = generator.produce().unwrap();

        assert_eq!(generator.num_methods(), 0);
        let hash = generator.fingerprint().unwrap();
        let expected = [
            format!("<?php  //[STAMP] {}", hash).as_str(),
            "namespace _generated;",
            "",
            "// This class was automatically generated by build task",
            "// You should not change it manually as it will be overwritten on next build",
            "// @codingStandardsIgnoreFile",
            "",
            "trait UnitActions",
            "{",
            "    /**",
            "     * @return \\Codeception\\Scenario",
            "     */",
            "    abstract protected function getScenario();",
            "",
            "    ",
            "}",
            "",
        ]
        .join("\n");
        assert_eq!(source, expected);
    }

    #[test]
    fn test_namespace_is_trimmed() {
        let container = container();
        let settings = GeneratorSettings::new("Acceptance")
            .namespace("Tests\\Support\\")
            .modules(&["Asserts"]);
        let mut generator = ActionsGenerator::new(&container, &settings).unwrap();
        let source = generator.produce().unwrap();

        assert!(source.contains("namespace Tests\\Support\\_generated;"));
        assert!(source.contains("trait AcceptanceActions"));
        assert!(source.contains("public function seeElement() {"));
        assert_eq!(generator.num_methods(), 1);
    }

    #[test]
    fn test_unknown_decorator_fails_at_construction() {
        let container = container();
        let settings = GeneratorSettings::new("Unit").step_decorators(&["Codeception\\Step\\Nope"]);
        let err = ActionsGenerator::new(&container, &settings).err().unwrap();
        assert_eq!(
            err,
            GenerateError::Configuration("Codeception\\Step\\Nope".to_string())
        );
    }

    #[test]
    fn test_stamp_round_trip() {
        let container = container();
        let settings = GeneratorSettings::new("Unit").modules(&["Asserts"]);
        let mut generator = ActionsGenerator::new(&container, &settings).unwrap();
        let source = generator.produce().unwrap();
        assert!(generator.is_up_to_date(&source).unwrap());
        assert!(!generator.is_up_to_date("<?php  //[STAMP] 00").unwrap());
    }
}
