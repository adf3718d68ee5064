//! Class builders.
//!
//! A builder turns one schema fragment into one [`ClassMeta`] in two steps:
//! [`ClassBuilder::parse`] fills the metamodel and registers the class with
//! the session, [`ClassBuilder::build`] hands it to a [`CodeEmitter`].
//!
//! - [`ModelBuilder`]: resource property map → data class
//! - [`ParametersBuilder`]: GET query parameters → parameter holder class

mod model;
mod parameters;

pub use model::ModelBuilder;
pub use parameters::ParametersBuilder;

use crate::naming::{builder_name, getter_name, setter_name};
use crate::{
    ClassMeta, CodeEmitter, Expr, FieldMeta, GenError, GenResult, GenerationSession, MethodMeta,
    Statement,
};

/// Parse-then-build contract shared by every builder.
pub trait ClassBuilder: Sized {
    /// Schema fragment this builder reads.
    type Resource: ?Sized;

    /// Build the class metamodel for `resource` under `package`.
    ///
    /// Fails without registering anything when the class was already
    /// generated in this session or the resource cannot produce a class.
    fn parse(
        session: &mut GenerationSession<'_>,
        package: &str,
        entity: &str,
        resource: &Self::Resource,
    ) -> GenResult<Self>;

    fn class_meta(&self) -> &ClassMeta;

    fn into_class_meta(self) -> ClassMeta;

    /// Hand the finished class to `emitter`.
    ///
    /// Emitter failures are reported as [`GenError::Emission`] and not retried.
    fn build(self, emitter: &mut dyn CodeEmitter) -> GenResult<Self> {
        let class = self.class_meta();
        emitter.emit(class).map_err(|source| GenError::Emission {
            class: class.canonical_class_name(),
            source,
        })?;
        tracing::debug!("Emitted {}", class.canonical_class_name());
        Ok(self)
    }
}

/// Parameter declaration carrying a field's value into a setter.
fn value_parameter(field: &FieldMeta) -> FieldMeta {
    FieldMeta::new(field.name.clone(), field.ty.clone()).with_collection(field.collection)
}

/// `public T getX() { return this.x; }`
pub fn getter_method(field: &FieldMeta) -> MethodMeta {
    MethodMeta::new(getter_name(&field.name))
        .returning(field.ty.clone())
        .with_statement(Statement::Return(Expr::field(field.name.clone())))
}

/// `public void setX(T x) { this.x = x; }`
pub fn setter_method(field: &FieldMeta) -> MethodMeta {
    MethodMeta::new(setter_name(&field.name))
        .with_parameter(value_parameter(field))
        .with_statement(Statement::Assign {
            field: field.name.clone(),
            value: Expr::variable(field.name.clone()),
        })
}

/// `public C withX(T x) { this.x = x; return this; }`
pub fn fluent_method(class_name: &str, field: &FieldMeta) -> MethodMeta {
    MethodMeta::new(builder_name(&field.name))
        .returning(class_name)
        .with_parameter(value_parameter(field))
        .with_statement(Statement::Assign {
            field: field.name.clone(),
            value: Expr::variable(field.name.clone()),
        })
        .with_statement(Statement::Return(Expr::This))
}

#[cfg(test)]
#[path = "builder/builder_tests.rs"]
mod builder_tests;
