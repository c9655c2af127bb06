//! Wrapper method synthesis
//!
//! Each action becomes a public method on the mixin that forwards its call
//! arguments to a scenario step:
//!
//! ```php
//! /**
//!  * [!] Method is generated. Documentation taken from corresponding module.
//!  *
//!  * Opens the page for the given relative URI.
//!  * @see \Codeception\Module\WebDriver::amOnPage()
//!  */
//! public function amOnPage($page): void {
//!     $this->getScenario()->runStep(new \Codeception\Step\Condition('amOnPage', func_get_args()));
//! }
//! ```
//!
//! Configured step decorators may append further wrappers for the same action.

use crate::codegen::doc::{clean_doc, DocResolver};
use crate::codegen::literal::default_literal;
use crate::codegen::template::Template;
use crate::codegen::types::TypeStringifier;
use crate::decorators::StepDecorator;
use crate::error::GenerateError;
use crate::ir::{ClassRegistry, MethodDescriptor, ParameterDescriptor, StepKind};
use std::sync::Arc;

/// Template for a primary wrapper method
pub const METHOD_TEMPLATE: &str = r#"
    /**
     * [!] Method is generated. Documentation taken from corresponding module.
     *
     {{doc}}
     * @see \{{module}}::{{method}}()
     */
    public function {{action}}({{params}}){{return_type}} {
        {{return}}$this->getScenario()->runStep(new \Codeception\Step\{{step}}('{{method}}', func_get_args()));
    }"#;

/// Synthesizes wrapper bodies for module actions
pub struct MethodSynthesizer<'a> {
    registry: &'a ClassRegistry,
    decorators: &'a [Arc<dyn StepDecorator>],
}

impl<'a> MethodSynthesizer<'a> {
    /// Create a synthesizer; decorators run in slice order
    pub fn new(registry: &'a ClassRegistry, decorators: &'a [Arc<dyn StepDecorator>]) -> Self {
        Self {
            registry,
            decorators,
        }
    }

    /// Resolve the metadata for `action` as exposed by `module_class`
    pub fn describe(
        &self,
        module_class: &str,
        action: &str,
    ) -> Result<MethodDescriptor, GenerateError> {
        let (declaring, method) = self
            .registry
            .find_method(module_class, action)?
            .ok_or_else(|| GenerateError::MissingMethod {
                class: module_class.to_string(),
                method: action.to_string(),
            })?;

        let types = TypeStringifier::new(declaring);

        let params = method
            .params
            .iter()
            .map(|p| {
                Ok(ParameterDescriptor {
                    name: p.name.clone(),
                    ty: types.stringify(&p.ty)?,
                    default: default_literal(p, declaring),
                })
            })
            .collect::<Result<Vec<_>, GenerateError>>()?;

        let return_type = Some(types.stringify(&method.return_type)?).filter(|t| !t.is_empty());
        let doc = DocResolver::new(self.registry).resolve(declaring, &method.name)?;

        Ok(MethodDescriptor {
            declaring_class: declaring.name.clone(),
            name: method.name.clone(),
            params,
            return_type,
            doc,
            kind: StepKind::classify(&method.name),
        })
    }

    /// The filled primary template for a method.
    ///
    /// This is also the template handed to every decorator.
    pub fn template(&self, method: &MethodDescriptor) -> Template {
        Template::new(METHOD_TEMPLATE)
            .place("module", method.declaring_class.as_str())
            .place("method", method.name.as_str())
            .place("return_type", method.return_type_hint())
            .place("return", if method.returns_value() { "return " } else { "" })
            .place("params", method.params_string())
            .place("doc", clean_doc(method.doc.as_deref()))
            .place("action", method.name.as_str())
            .place("step", method.kind.step_class())
    }

    /// Render the primary body followed by every decorator contribution
    pub fn synthesize(&self, method: &MethodDescriptor) -> String {
        let template = self.template(method);
        let mut body = template.produce();

        for decorator in self.decorators {
            if let Some(extra) = decorator.template(template.clone()) {
                body.push_str(&extra.produce());
            }
        }

        body
    }
}
