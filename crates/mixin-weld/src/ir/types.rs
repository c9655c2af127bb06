//! Type descriptors for reflected signatures
//!
//! A parameter or return type is either absent, a single named type, or a
//! flat composite of named types. Composites never nest.
//!
//! # Rendering Overview
//!
//! | Descriptor | Rendered | Notes |
//! |------------|----------|-------|
//! | `None` | _(empty)_ | Annotation omitted |
//! | `int` | `int` | Builtins render bare |
//! | `Foo\Bar` | `\Foo\Bar` | Class-like names get a leading `\` |
//! | nullable `Foo\Bar` | `?\Foo\Bar` | Except `mixed` |
//! | `self` in `App\Module` | `\App\Module` | Declaring class |
//! | `parent` in `App\Module` | `\App\Base` | Declaring class's superclass |
//! | `int \| string` | `int\|string` | Union, member order kept |
//! | `A & B` | `\A&\B` | Intersection |
//!
//! Rendering itself lives in [`crate::codegen::TypeStringifier`] because
//! `self` and `parent` depend on the declaring class.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Names that render without the `\` qualifier
pub const BUILTIN_TYPES: &[&str] = &[
    "int", "float", "string", "bool", "array", "callable", "iterable", "object", "mixed",
    "void", "null", "never", "false", "true", "static",
];

/// Check if a type name is a language builtin
pub fn is_builtin_name(name: &str) -> bool {
    BUILTIN_TYPES.contains(&name.to_ascii_lowercase().as_str())
}

/// A single named type, builtin or class-like
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedType {
    /// Type name as declared (`int`, `self`, `App\User`)
    pub name: String,
    /// Whether the name is a builtin type
    #[serde(default)]
    pub builtin: bool,
    /// Whether the declaration accepts null
    #[serde(default)]
    pub nullable: bool,
}

impl NamedType {
    /// Create a named type, detecting builtins from the name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let builtin = is_builtin_name(&name);
        Self {
            name,
            builtin,
            nullable: false,
        }
    }

    /// Create a builtin type
    pub fn builtin(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            builtin: true,
            nullable: false,
        }
    }

    /// Create a class-like type
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            builtin: false,
            nullable: false,
        }
    }

    /// Mark as nullable
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Whether this is the unconstrained `mixed` type
    pub fn is_mixed(&self) -> bool {
        self.name.eq_ignore_ascii_case("mixed")
    }
}

/// Operator joining the members of a composite type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompositeOp {
    /// `A|B`
    Union,
    /// `A&B`
    Intersection,
}

impl CompositeOp {
    /// Separator placed between member types
    pub fn separator(&self) -> &'static str {
        match self {
            CompositeOp::Union => "|",
            CompositeOp::Intersection => "&",
        }
    }
}

impl fmt::Display for CompositeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.separator())
    }
}

/// Declared type of a parameter or return value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TypeDescriptor {
    /// No declared type
    #[default]
    None,

    /// A single named type
    Named(NamedType),

    /// Union or intersection of named types
    Composite {
        op: CompositeOp,
        members: Vec<NamedType>,
    },
}

impl TypeDescriptor {
    /// Create a builtin type
    pub fn builtin(name: impl Into<String>) -> Self {
        TypeDescriptor::Named(NamedType::builtin(name))
    }

    /// Create a class-like type
    pub fn class(name: impl Into<String>) -> Self {
        TypeDescriptor::Named(NamedType::class(name))
    }

    /// Create a named type, detecting builtins from the name
    pub fn named(name: impl Into<String>) -> Self {
        TypeDescriptor::Named(NamedType::new(name))
    }

    /// Create a `void` type
    pub fn void() -> Self {
        Self::builtin("void")
    }

    /// Create a `self` type
    pub fn self_type() -> Self {
        Self::class("self")
    }

    /// Create a `parent` type
    pub fn parent_type() -> Self {
        Self::class("parent")
    }

    /// Create a union type
    pub fn union(members: Vec<NamedType>) -> Self {
        TypeDescriptor::Composite {
            op: CompositeOp::Union,
            members,
        }
    }

    /// Create an intersection type
    pub fn intersection(members: Vec<NamedType>) -> Self {
        TypeDescriptor::Composite {
            op: CompositeOp::Intersection,
            members,
        }
    }

    /// Mark a named type as nullable. Composites are left untouched.
    pub fn nullable(self) -> Self {
        match self {
            TypeDescriptor::Named(named) => TypeDescriptor::Named(named.nullable()),
            other => other,
        }
    }

    /// Check if no type is declared
    pub fn is_none(&self) -> bool {
        matches!(self, TypeDescriptor::None)
    }

    /// Whether the declared type accepts null
    pub fn allows_null(&self) -> bool {
        match self {
            TypeDescriptor::None => true,
            TypeDescriptor::Named(named) => named.nullable || named.is_mixed(),
            TypeDescriptor::Composite { members, .. } => members
                .iter()
                .any(|m| m.nullable || m.name.eq_ignore_ascii_case("null")),
        }
    }

    /// Get the single named type, if any
    pub fn as_named(&self) -> Option<&NamedType> {
        match self {
            TypeDescriptor::Named(named) => Some(named),
            _ => None,
        }
    }
}
