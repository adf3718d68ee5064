#![allow(non_snake_case)]

use super::*;

#[test]
fn FieldMeta___same_name_different_type___are_equal() {
    let a = FieldMeta::new("id", "String");
    let b = FieldMeta::new("id", "Integer");

    assert_eq!(a, b);
}

#[test]
fn FieldMeta___with_serialized_name___identical_name_is_dropped() {
    let field = FieldMeta::new("name", "String").with_serialized_name("name");

    assert_eq!(field.serialized_name, None);
    assert_eq!(field.wire_name(), "name");
}

#[test]
fn FieldMeta___with_serialized_name___different_name_is_kept() {
    let field = FieldMeta::new("createdAt", "String").with_serialized_name("created_at");

    assert_eq!(field.serialized_name.as_deref(), Some("created_at"));
    assert_eq!(field.wire_name(), "created_at");
}

#[test]
fn FieldSet___insert_duplicate_name___keeps_first_field() {
    let mut set = FieldSet::new();

    assert!(set.insert(FieldMeta::new("id", "String")));
    assert!(!set.insert(FieldMeta::new("id", "Integer")));

    assert_eq!(set.len(), 1);
    assert_eq!(set.get("id").map(|f| f.ty.as_str()), Some("String"));
}

#[test]
fn FieldSet___iter___preserves_insertion_order() {
    let mut set = FieldSet::new();
    set.insert(FieldMeta::new("zeta", "String"));
    set.insert(FieldMeta::new("alpha", "String"));

    let names: Vec<&str> = set.iter().map(|f| f.name.as_str()).collect();

    assert_eq!(names, vec!["zeta", "alpha"]);
}

#[test]
fn ClassMeta___canonical_class_name___joins_package_and_class() {
    let class = ClassMeta::new("com.acme.model", "User");

    assert_eq!(class.canonical_class_name(), "com.acme.model.User");
}

#[test]
fn ClassMeta___find_field___returns_same_logical_field_for_equal_names() {
    let mut class = ClassMeta::new("com.acme.model", "User");
    class.add_field(FieldMeta::new("id", "String"));
    class.add_field(FieldMeta::new("id", "Long"));

    let found = class.find_field("id").unwrap();

    assert_eq!(found.ty, "String");
    assert_eq!(class.fields().len(), 1);
}

#[test]
fn ClassMeta___find_field___missing_returns_none() {
    let class = ClassMeta::new("com.acme.model", "User");

    assert!(class.find_field("id").is_none());
}

#[test]
fn ClassMeta___methods_named___returns_overloads_in_order() {
    let mut class = ClassMeta::new("com.acme.model", "User");
    class.add_method(MethodMeta::new("getOrders"));
    class.add_method(MethodMeta::new("getId"));
    class.add_method(MethodMeta::new("getOrders").with_parameter(FieldMeta::new("p", "P")));

    let arities: Vec<usize> = class.methods_named("getOrders").map(|m| m.arity()).collect();

    assert_eq!(arities, vec![0, 1]);
}

#[test]
fn MethodMeta___clone___diverges_independently() {
    let original = MethodMeta::new("getOrders").returning("Order");
    let mut copy = original.clone();

    copy.parameters.push(FieldMeta::new("orders", "OrdersParameters"));
    copy.body.push(Statement::Return(Expr::Null));

    assert_eq!(original.arity(), 0);
    assert!(original.body.is_empty());
    assert_eq!(copy.arity(), 1);
}

#[test]
fn Expr___call_names___lists_chain_from_root() {
    let chain = Expr::static_call("Api", "instance", vec![])
        .call("customers", vec![])
        .call("httpGet", vec![]);

    assert_eq!(chain.call_names(), vec!["instance", "customers", "httpGet"]);
}

#[test]
fn Visibility___display___lowercase_keyword() {
    assert_eq!(Visibility::Private.to_string(), "private");
    assert_eq!(Visibility::default(), Visibility::Public);
}
