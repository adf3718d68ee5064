#![allow(non_snake_case)]

use crate::prelude::*;
use serde_json::json;

#[test]
fn prelude___model_then_parameters___share_one_registry() {
    let services = vec![ServiceMeta::new("/users").with_action(
        ActionMeta::new(HttpMethod::Get).with_parameter(FieldMeta::new("page", "Integer")),
    )];
    let mut session = GenerationSession::new(GeneratorConfig::default(), &services);
    let mut emitter = CollectingEmitter::new();

    ModelBuilder::parse(&mut session, "com.acme", "user", &json!({ "properties": {} }))
        .and_then(|b| b.build(&mut emitter))
        .unwrap();
    ParametersBuilder::parse(&mut session, "com.acme", "users", &services[0])
        .and_then(|b| b.build(&mut emitter))
        .unwrap();

    let registered: Vec<&str> = session.registry().iter().collect();
    assert_eq!(
        registered,
        vec!["com.acme.model.User", "com.acme.parameters.UsersParameters"]
    );
    assert_eq!(emitter.classes().len(), 2);
}

#[test]
fn package_segments___match_generated_packages() {
    assert_eq!(crate::MODEL_PACKAGE, "model");
    assert_eq!(crate::PARAMETERS_PACKAGE, "parameters");
    assert_eq!(crate::SERVICE_PACKAGE, "service");
}
