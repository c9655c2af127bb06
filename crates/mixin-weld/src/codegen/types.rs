//! Type signature stringification
//!
//! Turns a [`TypeDescriptor`] back into declaration text, resolving `self`
//! and `parent` against the class that declares the method.

use crate::error::GenerateError;
use crate::ir::{ClassInfo, NamedType, TypeDescriptor};

/// Renders type descriptors relative to a declaring class
pub struct TypeStringifier<'a> {
    declaring: &'a ClassInfo,
}

impl<'a> TypeStringifier<'a> {
    /// Create a stringifier for methods declared in `declaring`
    pub fn new(declaring: &'a ClassInfo) -> Self {
        Self { declaring }
    }

    /// Render a type; an undeclared type renders as empty text
    pub fn stringify(&self, ty: &TypeDescriptor) -> Result<String, GenerateError> {
        match ty {
            TypeDescriptor::None => Ok(String::new()),

            TypeDescriptor::Named(named) => {
                let nullable_prefix = if named.nullable && !named.is_mixed() {
                    "?"
                } else {
                    ""
                };
                Ok(format!("{}{}", nullable_prefix, self.stringify_named(named)?))
            }

            // Composites carry nullability as an explicit `null` member
            TypeDescriptor::Composite { op, members } => {
                let rendered = members
                    .iter()
                    .map(|m| self.stringify_named(m))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(rendered.join(op.separator()))
            }
        }
    }

    /// Render a single named type without any nullability marker
    fn stringify_named(&self, ty: &NamedType) -> Result<String, GenerateError> {
        let name = if ty.name.eq_ignore_ascii_case("self") {
            self.declaring.name.as_str()
        } else if ty.name.eq_ignore_ascii_case("parent") {
            self.declaring
                .parent
                .as_deref()
                .ok_or_else(|| GenerateError::MissingParent(self.declaring.name.clone()))?
        } else {
            ty.name.trim_start_matches('\\')
        };

        if ty.builtin {
            Ok(name.to_string())
        } else {
            Ok(format!("\\{}", name))
        }
    }
}
