//! `retry*` variants that re-run a failing step

use crate::codegen::Template;
use crate::decorators::{is_setup_or_query, ucfirst, StepDecorator};

/// Wrapper body for retried steps. The retry count and interval are read from
/// the actor, where `$I->retry()` stores them.
pub const RETRY_TEMPLATE: &str = r#"
    /**
     * [!] Method is generated.
     *
     {{doc}}
     *
     * Retry number and interval set by $I->retry();
     *
     * @see \{{module}}::{{method}}()
     */
    public function {{action}}({{params}}) {
        $retryNum = isset($this->retryNum) ? $this->retryNum : 1;
        $retryInterval = isset($this->retryInterval) ? $this->retryInterval : 200;
        return $this->getScenario()->runStep(new \Codeception\Step\Retry('{{method}}', func_get_args(), $retryNum, $retryInterval));
    }"#;

/// Adds a `retry{Action}` wrapper
#[derive(Debug, Clone, Copy, Default)]
pub struct Retry;

impl StepDecorator for Retry {
    fn id(&self) -> &str {
        "Codeception\\Step\\Retry"
    }

    fn template(&self, template: Template) -> Option<Template> {
        let action = template.var("action")?;
        if is_setup_or_query(action) {
            return None;
        }

        let doc = format!(
            "* [!] Test won't be stopped on fail. Error won't be logged \n     {}",
            template.var("doc").unwrap_or("*")
        );

        Some(
            Template::new(RETRY_TEMPLATE)
                .place("module", template.var("module").unwrap_or_default())
                .place("method", template.var("method").unwrap_or_default())
                .place("params", template.var("params").unwrap_or_default())
                .place("doc", doc)
                .place("action", format!("retry{}", ucfirst(action))),
        )
    }
}

crate::register_decorator!(Retry);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_body() {
        let template = Template::new("")
            .place("module", "Codeception\\Module\\WebDriver")
            .place("method", "click")
            .place("action", "click")
            .place("params", "$link, $context = NULL")
            .place("doc", "* Clicks");

        let out = Retry.template(template).unwrap().produce();
        assert!(out.contains("public function retryClick($link, $context = NULL) {"));
        assert!(out.contains("new \\Codeception\\Step\\Retry('click', func_get_args(), $retryNum, $retryInterval)"));
        assert!(out.contains("@see \\Codeception\\Module\\WebDriver::click()"));
        assert!(out.contains("     * Clicks"));
    }

    #[test]
    fn test_skips_waiters() {
        let template = Template::new("").place("action", "waitForElement");
        assert!(Retry.template(template).is_none());
    }
}
