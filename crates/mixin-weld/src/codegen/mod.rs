//! Code generation for actions mixins
//!
//! This module provides:
//! - `{{key}}` templates (template.rs)
//! - Type signature stringification (types.rs)
//! - Default value literals (literal.rs)
//! - Doc comment resolution (doc.rs)
//! - Wrapper method synthesis (method.rs)
//! - Change-detection fingerprints (fingerprint.rs)
//! - Final trait assembly (mixin.rs)

pub mod doc;
pub mod fingerprint;
pub mod literal;
pub mod method;
pub mod mixin;
pub mod template;
pub mod types;

pub use doc::{clean_doc, DocResolver};
pub use fingerprint::{fingerprint, is_up_to_date, read_stamp, GENERATOR_VERSION};
pub use literal::default_literal;
pub use method::{MethodSynthesizer, METHOD_TEMPLATE};
pub use mixin::{ActionsGenerator, MIXIN_TEMPLATE};
pub use template::Template;
pub use types::TypeStringifier;
