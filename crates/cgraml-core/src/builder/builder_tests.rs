#![allow(non_snake_case)]

use super::*;
use crate::{EmitError, GeneratorConfig, GenStage, ServiceMeta};
use serde_json::json;

struct FailingEmitter;

impl CodeEmitter for FailingEmitter {
    fn emit(&mut self, _class: &ClassMeta) -> Result<(), EmitError> {
        Err(EmitError::Render("disk full".into()))
    }
}

#[test]
fn getter_method___returns_field() {
    let field = FieldMeta::new("name", "String");

    let method = getter_method(&field);

    assert_eq!(method.name, "getName");
    assert_eq!(method.return_type.as_deref(), Some("String"));
    assert_eq!(method.arity(), 0);
    assert_eq!(method.body, vec![Statement::Return(Expr::field("name"))]);
}

#[test]
fn setter_method___assigns_parameter_and_returns_nothing() {
    let field = FieldMeta::new("name", "String");

    let method = setter_method(&field);

    assert_eq!(method.name, "setName");
    assert_eq!(method.return_type, None);
    assert_eq!(method.parameters[0].name, "name");
    assert_eq!(method.parameters[0].ty, "String");
    assert_eq!(
        method.body,
        vec![Statement::Assign {
            field: "name".into(),
            value: Expr::variable("name"),
        }]
    );
}

#[test]
fn fluent_method___returns_owning_instance() {
    let field = FieldMeta::new("tags", "java.util.List<String>").with_collection(true);

    let method = fluent_method("User", &field);

    assert_eq!(method.name, "withTags");
    assert_eq!(method.return_type.as_deref(), Some("User"));
    assert!(method.parameters[0].collection);
    assert_eq!(method.body.last(), Some(&Statement::Return(Expr::This)));
}

#[test]
fn ClassBuilder___build_with_failing_emitter___reports_build_stage_error() {
    let services: Vec<ServiceMeta> = Vec::new();
    let mut session = GenerationSession::new(GeneratorConfig::default(), &services);
    let schema = json!({ "properties": { "id": { "type": "string" } } });
    let builder = ModelBuilder::parse(&mut session, "com.acme", "user", &schema).unwrap();

    let err = builder.build(&mut FailingEmitter).unwrap_err();

    assert_eq!(err.stage(), GenStage::Build);
    assert!(matches!(err, GenError::Emission { ref class, .. } if class == "com.acme.model.User"));
}

#[test]
fn ClassBuilder___build___hands_class_to_emitter() {
    let services: Vec<ServiceMeta> = Vec::new();
    let mut session = GenerationSession::new(GeneratorConfig::default(), &services);
    let schema = json!({ "properties": { "id": { "type": "string" } } });
    let mut emitter = crate::CollectingEmitter::new();

    let builder = ModelBuilder::parse(&mut session, "com.acme", "user", &schema)
        .unwrap()
        .build(&mut emitter)
        .unwrap();

    assert_eq!(emitter.classes().len(), 1);
    assert_eq!(
        emitter.classes()[0].canonical_class_name(),
        builder.class_meta().canonical_class_name()
    );
}
