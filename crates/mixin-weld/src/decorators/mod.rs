//! Step decorators
//!
//! A step decorator receives the filled template of every primary wrapper and
//! may return a second template rendering an additional wrapper, for example
//! `canSeeElement` next to `seeElement`.
//!
//! Built-in decorators register themselves in [`STEP_DECORATORS`] at compile
//! time; a [`DecoratorRegistry`] maps configured identifiers onto them.

mod conditional;
mod registry;
mod retry;
mod try_to;

pub use conditional::ConditionalAssertion;
pub use registry::*;
pub use retry::Retry;
pub use try_to::TryTo;

use crate::codegen::Template;

/// Extension point contributing extra wrapper methods per action
pub trait StepDecorator: Send + Sync {
    /// Identifier used in suite configuration
    fn id(&self) -> &str;

    /// Derive an extra wrapper from the primary template, or `None` to skip
    /// this action
    fn template(&self, template: Template) -> Option<Template>;
}

/// Uppercase the first character of an action name
pub(crate) fn ucfirst(action: &str) -> String {
    let mut chars = action.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Actions that should not get a non-failing variant: conditions, waiters, grabbers
pub(crate) fn is_setup_or_query(action: &str) -> bool {
    ["have", "am", "wait", "grab"]
        .iter()
        .any(|prefix| action.starts_with(prefix))
}
