//! Suite settings for actions generation
//!
//! Mirrors the suite configuration file:
//!
//! ```toml
//! actor = "Acceptance"
//! namespace = "Tests\\Support"
//! step_decorators = ["Codeception\\Step\\ConditionalAssertion", "Codeception\\Step\\TryTo"]
//!
//! [modules]
//! enabled = ["WebDriver", "Asserts"]
//!
//! [modules.config.WebDriver]
//! url = "http://localhost"
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Decorator enabled when a suite does not configure any
pub const DEFAULT_STEP_DECORATOR: &str = "Codeception\\Step\\ConditionalAssertion";

/// Enabled modules and their configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModulesConfig {
    /// Module names in priority order
    #[serde(default)]
    pub enabled: Vec<String>,
    /// Per-module configuration; only used for fingerprinting
    #[serde(default)]
    pub config: IndexMap<String, serde_json::Value>,
    /// Any other `[modules]` keys (`depends`, ...); fingerprinted as-is
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl ModulesConfig {
    /// Enable the given modules in order
    pub fn new(enabled: &[&str]) -> Self {
        Self {
            enabled: enabled.iter().map(|s| s.to_string()).collect(),
            config: IndexMap::new(),
            extra: IndexMap::new(),
        }
    }
}

/// Settings for one actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Actor name; the trait is named `{actor}Actions`
    pub actor: String,
    /// Namespace of the generated trait (without `_generated`)
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub modules: ModulesConfig,
    /// Decorator identifiers, in invocation order
    #[serde(
        default = "default_step_decorators",
        deserialize_with = "string_or_list"
    )]
    pub step_decorators: Vec<String>,
    /// Support directory the `_generated` folder is written into
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl GeneratorSettings {
    /// Create settings for an actor with no modules and no decorators
    pub fn new(actor: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            namespace: String::new(),
            modules: ModulesConfig::default(),
            step_decorators: Vec::new(),
            path: default_path(),
        }
    }

    /// Set the namespace
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the enabled modules
    pub fn modules(mut self, enabled: &[&str]) -> Self {
        self.modules.enabled = enabled.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the step decorators
    pub fn step_decorators(mut self, decorators: &[&str]) -> Self {
        self.step_decorators = decorators.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the support directory
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Name of the generated trait
    pub fn trait_name(&self) -> String {
        format!("{}Actions", self.actor)
    }

    /// File name of the generated trait
    pub fn file_name(&self) -> String {
        format!("{}.php", self.trait_name())
    }
}

fn default_step_decorators() -> Vec<String> {
    vec![DEFAULT_STEP_DECORATOR.to_string()]
}

fn default_path() -> PathBuf {
    PathBuf::from("tests/_support")
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        One(String),
        Many(Vec<String>),
    }

    Ok(match StringOrList::deserialize(deserializer)? {
        StringOrList::One(s) if s.trim().is_empty() => Vec::new(),
        StringOrList::One(s) => vec![s],
        StringOrList::Many(list) => list,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings: GeneratorSettings = toml::from_str(r#"actor = "Unit""#).unwrap();
        assert_eq!(settings.actor, "Unit");
        assert_eq!(settings.namespace, "");
        assert!(settings.modules.enabled.is_empty());
        assert_eq!(settings.step_decorators, vec![DEFAULT_STEP_DECORATOR]);
        assert_eq!(settings.path, PathBuf::from("tests/_support"));
        assert_eq!(settings.file_name(), "UnitActions.php");
    }

    #[test]
    fn test_full_suite_config() {
        let settings: GeneratorSettings = toml::from_str(
            r#"
actor = "Acceptance"
namespace = 'Tests\Support'
step_decorators = 'Codeception\Step\TryTo'
unknown_key = true

[modules]
enabled = ["WebDriver", "Asserts"]

[modules.config.WebDriver]
url = "http://localhost"
browser = "chrome"
"#,
        )
        .unwrap();

        assert_eq!(settings.namespace, "Tests\\Support");
        assert_eq!(settings.step_decorators, vec!["Codeception\\Step\\TryTo"]);
        assert_eq!(settings.modules.enabled, vec!["WebDriver", "Asserts"]);
        assert_eq!(
            settings.modules.config["WebDriver"]["browser"],
            serde_json::json!("chrome")
        );
    }

    #[test]
    fn test_other_module_keys_are_kept() {
        let settings: GeneratorSettings = toml::from_str(
            r#"
actor = "Functional"

[modules]
enabled = ["Symfony", "Doctrine"]
depends = { Doctrine = "Symfony" }
"#,
        )
        .unwrap();

        assert!(settings.modules.config.is_empty());
        assert_eq!(
            settings.modules.extra["depends"],
            serde_json::json!({ "Doctrine": "Symfony" })
        );
    }

    #[test]
    fn test_empty_decorators() {
        let settings: GeneratorSettings =
            toml::from_str("actor = \"Unit\"\nstep_decorators = []").unwrap();
        assert!(settings.step_decorators.is_empty());

        let settings: GeneratorSettings =
            toml::from_str("actor = \"Unit\"\nstep_decorators = \"\"").unwrap();
        assert!(settings.step_decorators.is_empty());
    }
}
