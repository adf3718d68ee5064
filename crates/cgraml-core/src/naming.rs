//! Naming convention utilities for code generation.
//!
//! Resource URIs, path segments, property names and relation names arrive in
//! whatever shape the API document uses. These helpers turn them into
//! identifier-safe class, field and accessor names.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `word` | [`capitalize`] | `Word` |
//! | `Word` | [`decapitalize`] | `word` |
//! | `/orders/{orderId}` | [`sanitize_type_name`] | `OrdersOrderId` |
//! | `created-at` | [`to_field_name`] | `createdAt` |

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use cgraml_core::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first letter of a string.
///
/// # Examples
///
/// ```
/// use cgraml_core::naming::decapitalize;
///
/// assert_eq!(decapitalize("OrdersOrderId"), "ordersOrderId");
/// ```
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Turn a resource URI or linked-data path segment into a type name.
///
/// Every run of letters and digits becomes a capitalized word; everything
/// else (slashes, braces, dashes, dots) is dropped.
///
/// # Examples
///
/// ```
/// use cgraml_core::naming::sanitize_type_name;
///
/// assert_eq!(sanitize_type_name("/customers"), "Customers");
/// assert_eq!(sanitize_type_name("Orders/{orderId}"), "OrdersOrderId");
/// assert_eq!(sanitize_type_name("/line-items"), "LineItems");
/// ```
pub fn sanitize_type_name(uri: &str) -> String {
    uri.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}

/// Turn a property or query-parameter name into a field identifier.
///
/// # Examples
///
/// ```
/// use cgraml_core::naming::to_field_name;
///
/// assert_eq!(to_field_name("created_at"), "createdAt");
/// assert_eq!(to_field_name("Page-Size"), "pageSize");
/// assert_eq!(to_field_name("2fa"), "_2fa");
/// ```
pub fn to_field_name(raw: &str) -> String {
    let words: Vec<&str> = raw
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect();

    let mut name = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            name.push_str(&decapitalize(word));
        } else {
            name.push_str(&capitalize(word));
        }
    }

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

/// Whether a path segment carries a brace-delimited placeholder such as `{orderId}`.
pub fn has_placeholder(segment: &str) -> bool {
    segment
        .find('{')
        .is_some_and(|open| segment[open..].contains('}'))
}

pub fn getter_name(field: &str) -> String {
    format!("get{}", capitalize(field))
}

pub fn setter_name(field: &str) -> String {
    format!("set{}", capitalize(field))
}

/// Name of the fluent method that sets a field and returns the instance.
pub fn builder_name(field: &str) -> String {
    format!("with{}", capitalize(field))
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use test_case::test_case;

    #[test]
    fn capitalize___preserves_rest_of_string() {
        assert_eq!(capitalize("helloWorld"), "HelloWorld");
        assert_eq!(capitalize("ALLCAPS"), "ALLCAPS");
    }

    #[test]
    fn decapitalize___handles_empty_and_single() {
        assert_eq!(decapitalize(""), "");
        assert_eq!(decapitalize("A"), "a");
    }

    #[test_case("/customers", "Customers")]
    #[test_case("customers", "Customers")]
    #[test_case("Orders/{orderId}", "OrdersOrderId")]
    #[test_case("/customers/{customerId}/orders", "CustomersCustomerIdOrders")]
    #[test_case("/line-items", "LineItems")]
    #[test_case("/v1.2/status", "V12Status")]
    #[test_case("", "")]
    fn sanitize_type_name___converts(input: &str, expected: &str) {
        assert_eq!(sanitize_type_name(input), expected);
    }

    #[test_case("id", "id")]
    #[test_case("created_at", "createdAt")]
    #[test_case("page-size", "pageSize")]
    #[test_case("Name", "name")]
    #[test_case("customerOrder", "customerOrder")]
    #[test_case("2fa", "_2fa")]
    fn to_field_name___converts(input: &str, expected: &str) {
        assert_eq!(to_field_name(input), expected);
    }

    #[test_case("Orders/{orderId}", true)]
    #[test_case("{id}", true)]
    #[test_case("Orders", false)]
    #[test_case("Orders/{", false)]
    #[test_case("Orders}/{", false)]
    fn has_placeholder___detects_braces(segment: &str, expected: bool) {
        assert_eq!(has_placeholder(segment), expected);
    }

    #[test]
    fn accessor_names___prefix_capitalized_field() {
        assert_eq!(getter_name("name"), "getName");
        assert_eq!(setter_name("name"), "setName");
        assert_eq!(builder_name("name"), "withName");
    }
}
