//! Rendered method metadata
//!
//! A [`MethodDescriptor`] is the fully resolved view of one action: every type
//! is already stringified and every default already rendered as a literal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Step category a wrapper runs its action as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    Action,
    Condition,
    Assertion,
}

impl StepKind {
    /// Classify an action by its name prefix.
    ///
    /// `see*` is an assertion, `am*` a condition, anything else an action.
    /// There is no word-boundary check: `seeing` is still an assertion.
    pub fn classify(action: &str) -> Self {
        if action.starts_with("see") {
            StepKind::Assertion
        } else if action.starts_with("am") {
            StepKind::Condition
        } else {
            StepKind::Action
        }
    }

    /// Short class name of the step under `\Codeception\Step\`
    pub fn step_class(&self) -> &'static str {
        match self {
            StepKind::Action => "Action",
            StepKind::Condition => "Condition",
            StepKind::Assertion => "Assertion",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.step_class())
    }
}

/// Rendered formal parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    /// Type text; empty when untyped
    pub ty: String,
    /// Default literal; present only for optional parameters
    pub default: Option<String>,
}

impl ParameterDescriptor {
    /// Render as `[type ]$name[ = default]`
    pub fn render(&self) -> String {
        let mut out = String::new();
        if !self.ty.is_empty() {
            out.push_str(&self.ty);
            out.push(' ');
        }
        out.push('$');
        out.push_str(&self.name);
        if let Some(ref default) = self.default {
            out.push_str(" = ");
            out.push_str(default);
        }
        out
    }

    pub fn is_optional(&self) -> bool {
        self.default.is_some()
    }
}

/// Resolved metadata for one action wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Class that declares the method
    pub declaring_class: String,
    /// Method (and action) name
    pub name: String,
    pub params: Vec<ParameterDescriptor>,
    /// Return type text; `None` when undeclared
    pub return_type: Option<String>,
    /// Resolved raw doc comment
    pub doc: Option<String>,
    pub kind: StepKind,
}

impl MethodDescriptor {
    /// Comma-joined parameter list
    pub fn params_string(&self) -> String {
        self.params
            .iter()
            .map(|p| p.render())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Return type hint including the `: ` prefix, or empty
    pub fn return_type_hint(&self) -> String {
        match self.return_type {
            Some(ref ty) => format!(": {}", ty),
            None => String::new(),
        }
    }

    /// Whether the wrapper should return the step result
    pub fn returns_value(&self) -> bool {
        self.return_type.as_deref() != Some("void")
    }
}
