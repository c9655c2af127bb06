//! `canSee*` / `cantSee*` variants of assertions that do not stop the test

use crate::codegen::Template;
use crate::decorators::{ucfirst, StepDecorator};

/// Adds a non-fatal variant of every `see*` and `dontSee*` assertion
#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionalAssertion;

impl StepDecorator for ConditionalAssertion {
    fn id(&self) -> &str {
        "Codeception\\Step\\ConditionalAssertion"
    }

    fn template(&self, template: Template) -> Option<Template> {
        let action = template.var("action")?.to_string();

        let renamed = if let Some(rest) = action.strip_prefix("dont") {
            if !rest.starts_with("See") {
                return None;
            }
            format!("cant{}", rest)
        } else if action.starts_with("see") {
            format!("can{}", ucfirst(&action))
        } else {
            return None;
        };

        let doc = format!(
            "* [!] Conditional Assertion: Test won't be stopped on fail\n     {}",
            template.var("doc").unwrap_or("*")
        );

        Some(
            template
                .place("doc", doc)
                .place("action", renamed)
                .place("step", "ConditionalAssertion"),
        )
    }
}

crate::register_decorator!(ConditionalAssertion);
