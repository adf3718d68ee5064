#![allow(non_snake_case)]

use super::*;
use std::error::Error as _;
use test_case::test_case;

fn all_errors() -> Vec<GenError> {
    vec![
        GenError::DuplicateClass { class: "a.B".into() },
        GenError::MalformedLinkedData {
            class: "a.B".into(),
            relation: "orders".into(),
        },
        GenError::MissingGetAction {
            class: "a.B".into(),
            service: "/b".into(),
        },
        GenError::EmptyParameters {
            class: "a.B".into(),
            service: "/b".into(),
        },
        GenError::InvalidSchema {
            entity: "b".into(),
            reason: "not an object".into(),
        },
        GenError::Emission {
            class: "a.B".into(),
            source: EmitError::Render("boom".into()),
        },
    ]
}

#[test]
fn GenError___duplicate_class___displays_class_name() {
    let err = GenError::DuplicateClass {
        class: "com.acme.model.User".into(),
    };

    assert_eq!(
        err.to_string(),
        "class com.acme.model.User was already generated before"
    );
}

#[test]
fn GenError___malformed_linked_data___names_relation() {
    let err = GenError::MalformedLinkedData {
        class: "com.acme.model.Customer".into(),
        relation: "orders".into(),
    };

    let msg = err.to_string();

    assert!(msg.contains("malformed $linkedData schema"));
    assert!(msg.contains("com.acme.model.Customer"));
    assert!(msg.contains("'orders'"));
}

#[test]
fn GenError___emission___exposes_source() {
    let err = GenError::Emission {
        class: "com.acme.model.User".into(),
        source: EmitError::Render("unsupported".into()),
    };

    assert!(err.source().is_some());
    assert!(err.to_string().contains("unsupported"));
}

#[test_case(GenError::DuplicateClass { class: "x".into() }, GenStage::Parse)]
#[test_case(GenError::MissingGetAction { class: "x".into(), service: "/x".into() }, GenStage::Parse)]
#[test_case(GenError::EmptyParameters { class: "x".into(), service: "/x".into() }, GenStage::Parse)]
#[test_case(GenError::MalformedLinkedData { class: "x".into(), relation: "r".into() }, GenStage::Parse)]
#[test_case(GenError::Emission { class: "x".into(), source: EmitError::Render("r".into()) }, GenStage::Build)]
fn GenError___variant___reports_stage(error: GenError, expected: GenStage) {
    assert_eq!(error.stage(), expected);
}

#[test]
fn GenError___all_variants___have_unique_codes() {
    let codes: Vec<u32> = all_errors().iter().map(|e| e.error_code()).collect();
    let unique: std::collections::HashSet<u32> = codes.iter().copied().collect();

    assert_eq!(codes.len(), unique.len(), "All error codes should be unique");
}

#[test]
fn GenError___subject___names_class_or_entity() {
    let subjects: Vec<String> = all_errors().iter().map(|e| e.subject().to_string()).collect();

    assert_eq!(subjects, vec!["a.B", "a.B", "a.B", "a.B", "b", "a.B"]);
}
