//! Doc comment resolution
//!
//! A wrapper documents itself with the most specific doc block available:
//!
//! 1. the method's own doc on its declaring class,
//! 2. the doc of the first implemented interface that declares the method
//!    (the search stops at that interface even when its doc is empty),
//! 3. the doc of the superclass' declaration of the method, returned as-is,
//!    even when empty. The lookup does not climb any further.

use crate::error::GenerateError;
use crate::ir::{ClassInfo, ClassRegistry};

/// Resolves doc comments through interfaces and the direct superclass
pub struct DocResolver<'a> {
    registry: &'a ClassRegistry,
}

impl<'a> DocResolver<'a> {
    /// Create a resolver over a class registry
    pub fn new(registry: &'a ClassRegistry) -> Self {
        Self { registry }
    }

    /// Resolve the raw doc comment of `method` as declared by `declaring`
    pub fn resolve(
        &self,
        declaring: &ClassInfo,
        method: &str,
    ) -> Result<Option<String>, GenerateError> {
        let mut doc = declaring
            .own_method(method)
            .and_then(|m| m.doc_text())
            .map(str::to_string);

        if doc.is_none() {
            for interface in self.registry.interfaces_of(&declaring.name)? {
                if let Some(found) = interface.own_method(method) {
                    doc = found.doc_text().map(str::to_string);
                    break;
                }
            }
        }

        if doc.is_none() {
            if let Some(ref parent) = declaring.parent {
                if let Some((_, found)) = self.registry.find_method(parent, method)? {
                    return Ok(found.doc.clone());
                }
            }
        }

        Ok(doc)
    }
}

/// Strip comment markers from a doc block.
///
/// An empty result becomes `*` so the generated doc block always has a line.
pub fn clean_doc(doc: Option<&str>) -> String {
    let cleaned = doc
        .unwrap_or_default()
        .replace("/**", "")
        .replace("*/", "");
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        "*".to_string()
    } else {
        cleaned.to_string()
    }
}
