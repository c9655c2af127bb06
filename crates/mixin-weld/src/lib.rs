//! Mixin-Weld: action mixin generation from module metadata
//!
//! Given an ordered set of modules (capability providers described by class
//! metadata), this crate produces one PHP trait, `{Actor}Actions`, that exposes
//! a wrapper method per module action. Every wrapper delegates to a scenario
//! step of the category its name implies.
//!
//! # Architecture
//!
//! - `ir`: Class hierarchy metadata, type descriptors, modules and the action surface
//! - `codegen`: Type stringification, doc resolution, method synthesis, fingerprinting
//!   and final mixin assembly
//! - `decorators`: Step decorators that contribute extra wrapper methods per action
//! - `build`: Writes the generated file and skips the write when its stamp is current
//!
//! # Usage
//!
//! ```rust,ignore
//! use mixin_weld::{ActionsGenerator, GeneratorSettings, ModuleContainer};
//!
//! let container: ModuleContainer = manifest.into_container()?;
//! let settings = GeneratorSettings::new("Acceptance").modules(&["WebDriver", "Asserts"]);
//! let mut generator = ActionsGenerator::new(&container, &settings)?;
//! let source = generator.produce()?;
//! println!("{} methods added", generator.num_methods());
//! ```

pub mod build;
pub mod codegen;
pub mod decorators;
pub mod error;
pub mod ir;
pub mod settings;

// Re-export commonly used types
pub use build::{ActionsBuilder, BuildError, BuildOutcome};
pub use codegen::{
    clean_doc, fingerprint, is_up_to_date, read_stamp, ActionsGenerator, DocResolver,
    MethodSynthesizer, Template, TypeStringifier, GENERATOR_VERSION,
};
pub use decorators::{collect_decorators, DecoratorRegistry, StepDecorator, STEP_DECORATORS};
pub use error::GenerateError;
pub use ir::{
    ActionSurface, ClassInfo, ClassRegistry, CompositeOp, DefaultValue, Manifest, MethodDescriptor,
    MethodInfo, ModuleContainer, ModuleInfo, NamedType, ParamInfo, ParameterDescriptor, StepKind,
    TypeDescriptor, Visibility,
};
pub use settings::{GeneratorSettings, ModulesConfig};

// Re-export linkme for decorator registration
pub use linkme;
