//! `{{key}}` placeholder templates
//!
//! Placeholders whose key was never placed are left in the output untouched.

use indexmap::IndexMap;

/// Text template with named placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    vars: IndexMap<String, String>,
}

impl Template {
    /// Create a template from source text
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            vars: IndexMap::new(),
        }
    }

    /// Set a placeholder value
    pub fn place(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Get a placed value
    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|s| s.as_str())
    }

    /// All placed values in placement order
    pub fn vars(&self) -> &IndexMap<String, String> {
        &self.vars
    }

    /// Render the template
    pub fn produce(&self) -> String {
        let mut output = String::with_capacity(self.source.len());
        let mut rest = self.source.as_str();

        while let Some(start) = rest.find("{{") {
            output.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let placeholder = after.find("}}").map(|end| &after[..end]).filter(|key| {
                !key.is_empty()
                    && key
                        .chars()
                        .all(|c| c.is_alphanumeric() || c == '_' || c == '.')
            });

            match placeholder.and_then(|key| self.vars.get(key).map(|value| (key, value))) {
                Some((key, value)) => {
                    output.push_str(value);
                    rest = &after[key.len() + 2..];
                }
                None => {
                    output.push_str("{{");
                    rest = after;
                }
            }
        }

        output.push_str(rest);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_produce() {
        let out = Template::new("trait {{name}}Actions { {{methods}} }")
            .place("name", "Acceptance")
            .place("methods", "")
            .produce();
        assert_eq!(out, "trait AcceptanceActions {  }");
    }

    #[test]
    fn test_unknown_placeholders_are_kept() {
        let out = Template::new("{{known}} {{unknown}} {{ spaced }}")
            .place("known", "yes")
            .produce();
        assert_eq!(out, "yes {{unknown}} {{ spaced }}");
    }

    #[test]
    fn test_values_are_not_reexpanded() {
        let out = Template::new("{{a}}{{b}}")
            .place("a", "{{b}}")
            .place("b", "x")
            .produce();
        assert_eq!(out, "{{b}}x");
    }

    #[test]
    fn test_escaped_brace_before_placeholder() {
        let out = Template::new(r"@see \{{module}}::{{method}}()")
            .place("module", "Codeception\\Module\\WebDriver")
            .place("method", "click")
            .produce();
        assert_eq!(out, r"@see \Codeception\Module\WebDriver::click()");
    }

    #[test]
    fn test_replacing_a_value() {
        let template = Template::new("{{action}}").place("action", "see");
        let renamed = template.clone().place("action", "canSee");
        assert_eq!(template.produce(), "see");
        assert_eq!(renamed.produce(), "canSee");
        assert_eq!(renamed.var("action"), Some("canSee"));
    }
}
