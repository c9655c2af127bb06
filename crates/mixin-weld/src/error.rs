//! Errors raised while generating an actions mixin

use thiserror::Error;

/// Errors that can occur while building the action surface or synthesizing methods
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A configured step decorator is not a registered `StepDecorator`
    #[error("Wrong configuration for generated steps. {0} doesn't implement StepDecorator")]
    Configuration(String),

    /// A configured module is not present in the container
    #[error("Module not found: {0}")]
    UnknownModule(String),

    /// A class referenced by a module, parent or interface is not registered
    #[error("Class not found: {0}")]
    UnknownClass(String),

    /// An action has no method on its module class
    #[error("Method {class}::{method}() does not exist")]
    MissingMethod { class: String, method: String },

    /// `parent` was used in a class without a superclass
    #[error("Cannot resolve \"parent\" type: class {0} has no parent")]
    MissingParent(String),

    /// The fingerprint payload could not be serialized
    #[error("Failed to serialize fingerprint input: {0}")]
    Fingerprint(String),
}
