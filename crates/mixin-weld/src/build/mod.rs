//! Build utilities for actions mixins
//!
//! Writes the generated trait into the suite's support directory and skips
//! the write when the file on disk already carries the current stamp.

pub mod actions;

pub use actions::{ActionsBuilder, BuildError, BuildOutcome};
