//! Generation-target metamodel.
//!
//! A [`ClassMeta`] is everything an emitter needs to render one class: its
//! package, name, documentation, fields and methods. Method bodies are kept as
//! a small statement model ([`Statement`], [`Expr`]) rather than source text,
//! so emitters for different languages can render them.

use serde::Serialize;
use std::hash::{Hash, Hasher};

/// Member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Protected,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A class field, or a method parameter declaration.
///
/// Equality and hashing consider the `name` only: two fields with the same
/// name are the same field for lookup purposes even if their types differ.
#[derive(Debug, Clone, Serialize)]
pub struct FieldMeta {
    /// Identifier-safe field name.
    pub name: String,

    /// Resolved target type name.
    #[serde(rename = "type")]
    pub ty: String,

    pub visibility: Visibility,

    /// Whether the field holds a collection of `ty` elements.
    pub collection: bool,

    /// Name used on the wire when it differs from `name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serialized_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldMeta {
    /// Create a private, non-collection field.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            visibility: Visibility::Private,
            collection: false,
            serialized_name: None,
            description: None,
        }
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn with_collection(mut self, collection: bool) -> Self {
        self.collection = collection;
        self
    }

    /// Record the wire name, unless it is identical to the field name.
    #[must_use]
    pub fn with_serialized_name(mut self, serialized_name: impl Into<String>) -> Self {
        let serialized_name = serialized_name.into();
        self.serialized_name = (serialized_name != self.name).then_some(serialized_name);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Name of this field on the wire.
    pub fn wire_name(&self) -> &str {
        self.serialized_name.as_deref().unwrap_or(&self.name)
    }
}

impl PartialEq for FieldMeta {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FieldMeta {}

impl Hash for FieldMeta {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Insertion-ordered set of fields, unique by name.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FieldSet {
    fields: Vec<FieldMeta>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field. Returns `false` and keeps the existing field when one
    /// with the same name is already present.
    pub fn insert(&mut self, field: FieldMeta) -> bool {
        if self.fields.contains(&field) {
            return false;
        }
        self.fields.push(field);
        true
    }

    pub fn get(&self, name: &str) -> Option<&FieldMeta> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldMeta> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a FieldMeta;
    type IntoIter = std::slice::Iter<'a, FieldMeta>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// An expression inside a generated method body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    /// The owning instance.
    This,

    /// The absent value.
    Null,

    /// A field of the owning instance.
    Field { name: String },

    /// A method parameter or local.
    Variable { name: String },

    /// A call on a class, e.g. `ApiMapService.instance()`.
    StaticCall {
        class: String,
        method: String,
        args: Vec<Expr>,
    },

    /// A call on the value of another expression.
    Call {
        receiver: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn field(name: impl Into<String>) -> Self {
        Expr::Field { name: name.into() }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable { name: name.into() }
    }

    pub fn static_call(class: impl Into<String>, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::StaticCall {
            class: class.into(),
            method: method.into(),
            args,
        }
    }

    /// Append a call to this expression, extending a fluent chain.
    #[must_use]
    pub fn call(self, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            receiver: Box::new(self),
            method: method.into(),
            args,
        }
    }

    /// Method names of a call chain, outermost receiver first.
    pub fn call_names(&self) -> Vec<&str> {
        let mut names = match self {
            Expr::Call { receiver, .. } => receiver.call_names(),
            _ => Vec::new(),
        };
        match self {
            Expr::Call { method, .. } | Expr::StaticCall { method, .. } => names.push(method),
            _ => {}
        }
        names
    }
}

/// One step of a generated method body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    /// `this.<field> = <value>`
    Assign { field: String, value: Expr },

    /// `return <value>`
    Return(Expr),
}

/// A generated method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodMeta {
    pub name: String,

    /// Declared return type; `None` for methods returning nothing.
    pub return_type: Option<String>,

    pub visibility: Visibility,

    pub parameters: Vec<FieldMeta>,

    pub body: Vec<Statement>,
}

impl MethodMeta {
    /// Create a public method with no return type, parameters or body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            visibility: Visibility::Public,
            parameters: Vec::new(),
            body: Vec::new(),
        }
    }

    #[must_use]
    pub fn returning(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn with_parameter(mut self, parameter: FieldMeta) -> Self {
        self.parameters.push(parameter);
        self
    }

    #[must_use]
    pub fn with_statement(mut self, statement: Statement) -> Self {
        self.body.push(statement);
        self
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// One generated class.
///
/// Created empty by a builder, filled while parsing, then handed read-only to
/// a [`CodeEmitter`](crate::CodeEmitter).
#[derive(Debug, Clone, Serialize)]
pub struct ClassMeta {
    package_name: String,
    class_name: String,
    documentation: String,
    fields: FieldSet,
    methods: Vec<MethodMeta>,
    interfaces: Vec<String>,
}

impl ClassMeta {
    pub fn new(package_name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            class_name: class_name.into(),
            documentation: String::new(),
            fields: FieldSet::new(),
            methods: Vec::new(),
            interfaces: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = documentation.into();
        self
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn documentation(&self) -> &str {
        &self.documentation
    }

    /// Package-qualified class name, the identity used for duplicate detection.
    pub fn canonical_class_name(&self) -> String {
        format!("{}.{}", self.package_name, self.class_name)
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn methods(&self) -> &[MethodMeta] {
        &self.methods
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    /// Add a field; see [`FieldSet::insert`].
    pub fn add_field(&mut self, field: FieldMeta) -> bool {
        self.fields.insert(field)
    }

    pub fn add_method(&mut self, method: MethodMeta) {
        self.methods.push(method);
    }

    pub fn add_interface(&mut self, interface: impl Into<String>) {
        self.interfaces.push(interface.into());
    }

    /// Look a field up by name.
    pub fn find_field(&self, name: &str) -> Option<&FieldMeta> {
        self.fields.get(name)
    }

    /// All methods with the given name, in declaration order.
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodMeta> {
        self.methods.iter().filter(move |m| m.name == name)
    }
}

#[cfg(test)]
#[path = "meta/meta_tests.rs"]
mod meta_tests;
