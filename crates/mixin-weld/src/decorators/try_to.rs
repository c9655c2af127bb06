//! `tryTo*` variants that report failure as `false`

use crate::codegen::Template;
use crate::decorators::{is_setup_or_query, ucfirst, StepDecorator};

/// Adds a `tryTo{Action}` wrapper returning whether the action succeeded
#[derive(Debug, Clone, Copy, Default)]
pub struct TryTo;

impl StepDecorator for TryTo {
    fn id(&self) -> &str {
        "Codeception\\Step\\TryTo"
    }

    fn template(&self, template: Template) -> Option<Template> {
        let action = template.var("action")?.to_string();
        if is_setup_or_query(&action) {
            return None;
        }

        let doc = format!(
            "* [!] Test won't be stopped on fail. Error won't be logged \n     {}",
            template.var("doc").unwrap_or("*")
        );

        Some(
            template
                .place("doc", doc)
                .place("action", format!("tryTo{}", ucfirst(&action)))
                .place("step", "TryTo")
                .place("return_type", ": bool")
                .place("return", "return "),
        )
    }
}

crate::register_decorator!(TryTo);
