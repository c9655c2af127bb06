//! Class hierarchy metadata
//!
//! Module classes, their ancestors and the interfaces they implement are
//! described up front as plain data. All hierarchy walks (method lookup,
//! interface collection, public method listing) run over a [`ClassRegistry`].

use crate::error::GenerateError;
use crate::ir::TypeDescriptor;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Method visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// Key of a default array entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrayKey {
    Int(i64),
    String(String),
}

/// Default value of an optional parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DefaultValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Ordered array entries
    Array(Vec<(ArrayKey, DefaultValue)>),
    /// Constant reference such as `self::LIMIT` or `PHP_EOL`
    Constant(String),
    /// The parameter is optional but its default cannot be read
    Unavailable,
}

impl DefaultValue {
    /// Create a sequential array (keys 0..n)
    pub fn list(values: Vec<DefaultValue>) -> Self {
        DefaultValue::Array(
            values
                .into_iter()
                .enumerate()
                .map(|(i, v)| (ArrayKey::Int(i as i64), v))
                .collect(),
        )
    }

    /// Create a string default
    pub fn string(value: impl Into<String>) -> Self {
        DefaultValue::String(value.into())
    }
}

/// Formal parameter of a method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamInfo {
    /// Parameter name without the `$` sigil
    pub name: String,
    /// Declared type
    #[serde(default, rename = "type")]
    pub ty: TypeDescriptor,
    /// Default value; present only for optional parameters
    #[serde(default)]
    pub default: Option<DefaultValue>,
}

impl ParamInfo {
    /// Create an untyped required parameter
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: TypeDescriptor::None,
            default: None,
        }
    }

    /// Create a typed required parameter
    pub fn typed(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self::new(name).with_type(ty)
    }

    /// Set the declared type
    pub fn with_type(mut self, ty: TypeDescriptor) -> Self {
        self.ty = ty;
        self
    }

    /// Make optional with the given default
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Whether the parameter may be omitted
    pub fn is_optional(&self) -> bool {
        self.default.is_some()
    }
}

/// Method declared on a class or interface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodInfo {
    pub name: String,
    /// Raw doc comment, including `/**` and `*/`
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub params: Vec<ParamInfo>,
    #[serde(default)]
    pub return_type: TypeDescriptor,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

impl MethodInfo {
    /// Create a public instance method with no parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            params: Vec::new(),
            return_type: TypeDescriptor::None,
            visibility: Visibility::Public,
            is_static: false,
        }
    }

    /// Add a parameter
    pub fn param(mut self, param: ParamInfo) -> Self {
        self.params.push(param);
        self
    }

    /// Set return type
    pub fn returns(mut self, ty: TypeDescriptor) -> Self {
        self.return_type = ty;
        self
    }

    /// Set doc comment
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Set visibility
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Mark as static
    pub fn static_method(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// Doc comment, treating an empty string as absent
    pub fn doc_text(&self) -> Option<&str> {
        self.doc.as_deref().filter(|d| !d.is_empty())
    }
}

/// Class or interface metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassInfo {
    /// Fully qualified name without a leading `\`
    pub name: String,
    /// Superclass name
    #[serde(default)]
    pub parent: Option<String>,
    /// Directly implemented interfaces (extended interfaces, for an interface)
    #[serde(default)]
    pub interfaces: Vec<String>,
    /// Methods declared by this class itself
    #[serde(default)]
    pub methods: Vec<MethodInfo>,
    #[serde(default, rename = "interface")]
    pub is_interface: bool,
}

impl ClassInfo {
    /// Create a class
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim_start_matches('\\').to_string(),
            parent: None,
            interfaces: Vec::new(),
            methods: Vec::new(),
            is_interface: false,
        }
    }

    /// Create an interface
    pub fn interface(name: impl Into<String>) -> Self {
        let mut class = Self::new(name);
        class.is_interface = true;
        class
    }

    /// Set the superclass
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into().trim_start_matches('\\').to_string());
        self
    }

    /// Add an implemented interface
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces
            .push(interface.into().trim_start_matches('\\').to_string());
        self
    }

    /// Add a method
    pub fn method(mut self, method: MethodInfo) -> Self {
        self.methods.push(method);
        self
    }

    /// Look up a method declared by this class (not inherited)
    pub fn own_method(&self, name: &str) -> Option<&MethodInfo> {
        self.methods
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
    }
}

/// Table of known classes and interfaces
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassRegistry {
    classes: IndexMap<String, ClassInfo>,
}

impl ClassRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a list of classes
    pub fn from_classes(classes: impl IntoIterator<Item = ClassInfo>) -> Self {
        let mut registry = Self::new();
        for class in classes {
            registry.register(class);
        }
        registry
    }

    /// Register a class, replacing any earlier class of the same name
    pub fn register(&mut self, class: ClassInfo) {
        self.classes.insert(class.name.clone(), class);
    }

    /// Look up a class by name
    pub fn get(&self, name: &str) -> Option<&ClassInfo> {
        self.classes.get(name.trim_start_matches('\\'))
    }

    /// Look up a class, failing if it is not registered
    pub fn require(&self, name: &str) -> Result<&ClassInfo, GenerateError> {
        self.get(name)
            .ok_or_else(|| GenerateError::UnknownClass(name.to_string()))
    }

    /// All registered classes in registration order
    pub fn classes(&self) -> impl Iterator<Item = &ClassInfo> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The class followed by its ancestors, nearest first
    pub fn lineage<'a>(&'a self, name: &str) -> Result<Vec<&'a ClassInfo>, GenerateError> {
        let mut chain = Vec::new();
        let mut seen = IndexSet::new();
        let mut current = Some(name.to_string());

        while let Some(class_name) = current {
            let class = self.require(&class_name)?;
            if !seen.insert(class.name.as_str()) {
                break;
            }
            chain.push(class);
            current = class.parent.clone();
        }

        Ok(chain)
    }

    /// Find a method on a class or its nearest ancestor declaring it.
    ///
    /// Returns the declaring class alongside the method.
    pub fn find_method<'a>(
        &'a self,
        class: &str,
        method: &str,
    ) -> Result<Option<(&'a ClassInfo, &'a MethodInfo)>, GenerateError> {
        for ancestor in self.lineage(class)? {
            if let Some(found) = ancestor.own_method(method) {
                return Ok(Some((ancestor, found)));
            }
        }
        Ok(None)
    }

    /// Every interface a class implements, including interfaces inherited from
    /// ancestors and interfaces extended by other interfaces.
    ///
    /// Inherited interfaces come first, root ancestor outward, then the
    /// class's own declarations; each interface is followed by the interfaces
    /// it extends.
    pub fn interfaces_of<'a>(&'a self, class: &str) -> Result<Vec<&'a ClassInfo>, GenerateError> {
        let mut seen = IndexSet::new();
        let mut result = Vec::new();

        for ancestor in self.lineage(class)?.into_iter().rev() {
            for interface in &ancestor.interfaces {
                self.collect_interface(interface, &mut seen, &mut result)?;
            }
        }

        Ok(result)
    }

    fn collect_interface<'a>(
        &'a self,
        name: &str,
        seen: &mut IndexSet<String>,
        out: &mut Vec<&'a ClassInfo>,
    ) -> Result<(), GenerateError> {
        let interface = self.require(name)?;
        if !seen.insert(interface.name.clone()) {
            return Ok(());
        }
        out.push(interface);
        for extended in &interface.interfaces {
            self.collect_interface(extended, seen, out)?;
        }
        Ok(())
    }

    /// Names of all public methods callable on a class, own methods first.
    ///
    /// An overriding method hides the inherited one; private and protected
    /// declarations are skipped.
    pub fn public_methods(&self, class: &str) -> Result<Vec<String>, GenerateError> {
        let mut names: IndexSet<String> = IndexSet::new();
        let mut hidden: IndexSet<String> = IndexSet::new();

        for ancestor in self.lineage(class)? {
            for method in &ancestor.methods {
                let key = method.name.to_ascii_lowercase();
                if hidden.contains(&key) {
                    continue;
                }
                hidden.insert(key);
                if method.is_public() {
                    names.insert(method.name.clone());
                }
            }
        }

        Ok(names.into_iter().collect())
    }
}
