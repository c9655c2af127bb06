//! Intermediate Representation (IR) for action mixin generation
//!
//! This module provides the class hierarchy metadata, type descriptors,
//! module container and rendered method descriptors the generator works on.

pub mod class;
pub mod descriptor;
pub mod module;
pub mod types;

pub use class::*;
pub use descriptor::*;
pub use module::*;
pub use types::*;
