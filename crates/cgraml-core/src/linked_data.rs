//! Linked-data navigation method synthesis.
//!
//! A `$linkedData` relation names a traversal path through other services,
//! e.g. `"orders": ["Customers", "Orders/{orderId}", "Items"]`. For each
//! relation two overloads of `get<Relation>` are produced:
//!
//! ```text
//! Item getOrders() {
//!     return <pkg>.service.ApiMapService.instance()
//!         .customers()
//!         .ordersOrderId(this.orderId.toString())
//!         .items()
//!         .httpGet();
//! }
//!
//! Item getOrders(<pkg>.parameters.ItemsParameters items) {
//!     return <pkg>.service.ApiMapService.instance()
//!         .customers()
//!         .ordersOrderId(this.orderId.toString())
//!         .items()
//!         .withParameters(items)
//!         .httpGet();
//! }
//! ```
//!
//! Both bodies are built from the same call-chain fragments; the first one
//! simply never appends the parameters call.
//!
//! # Parameter inference
//!
//! A segment with a `{placeholder}` takes its argument from a field of the
//! owning class: every field whose capitalized name is a suffix of the
//! segment's sanitized type name matches, and the longest name wins (the
//! first one declared among equally long names). Without a match the
//! argument is `null`. Segments without a placeholder take no argument.

use crate::naming::{capitalize, decapitalize, has_placeholder, sanitize_type_name, to_field_name};
use crate::{
    ClassMeta, Expr, FieldMeta, GenError, GenResult, GenerationSession, MethodMeta,
    PARAMETERS_PACKAGE, ResponseType, SERVICE_PACKAGE, Statement,
};

/// The two overloads produced for one relation.
#[derive(Debug, Clone)]
pub struct LinkedDataMethods {
    /// Zero-argument form; parameters derive from the owning instance only.
    pub derived: MethodMeta,
    /// One-argument form taking the trailing parameters object from the caller.
    pub explicit: MethodMeta,
}

impl LinkedDataMethods {
    pub fn into_pair(self) -> [MethodMeta; 2] {
        [self.derived, self.explicit]
    }
}

/// Derives navigation methods for one class.
pub struct LinkedDataSynthesizer<'a, 's> {
    session: &'a GenerationSession<'s>,
    class: &'a ClassMeta,
    base_package: &'a str,
}

impl<'a, 's> LinkedDataSynthesizer<'a, 's> {
    /// `class` supplies the fields parameters are inferred from; `base_package`
    /// locates the service and parameters packages.
    pub fn new(
        session: &'a GenerationSession<'s>,
        class: &'a ClassMeta,
        base_package: &'a str,
    ) -> Self {
        Self {
            session,
            class,
            base_package,
        }
    }

    /// Build both overloads for `relation` over the traversal path `services`.
    pub fn synthesize(&self, relation: &str, services: &[String]) -> GenResult<LinkedDataMethods> {
        let last = services.last().ok_or_else(|| GenError::MalformedLinkedData {
            class: self.class.canonical_class_name(),
            relation: relation.to_string(),
        })?;

        let config = self.session.config();
        let name = format!("get{}", capitalize(&to_field_name(relation)));
        let return_type = self.return_type(services);
        let chain = self.call_chain(services);

        let parameter = self.parameters_argument(last);
        let explicit_chain = chain
            .clone()
            .call(
                config.parameters_method.clone(),
                vec![Expr::variable(parameter.name.clone())],
            )
            .call(config.invoke_method.clone(), Vec::new());
        let derived_chain = chain.call(config.invoke_method.clone(), Vec::new());

        let derived = MethodMeta::new(name)
            .returning(return_type)
            .with_statement(Statement::Return(derived_chain));

        let mut explicit = derived.clone();
        explicit.parameters.push(parameter);
        explicit.body = vec![Statement::Return(explicit_chain)];

        tracing::debug!(
            "Synthesized {}.{} over {} services",
            self.class.class_name(),
            derived.name,
            services.len()
        );

        Ok(LinkedDataMethods { derived, explicit })
    }

    /// Element or scalar type of the final service's GET response.
    pub fn return_type(&self, services: &[String]) -> String {
        let types = self.session.types();
        match self.session.loader().response_type(services) {
            Some(ResponseType::Scalar(schema)) | Some(ResponseType::Collection(schema)) => {
                types.resolve(&schema)
            }
            None => {
                tracing::debug!(
                    "No response type declared for {:?}; using {}",
                    services.last(),
                    types.fallback()
                );
                types.fallback().to_string()
            }
        }
    }

    /// `ApiMapService.instance()` followed by one call per service.
    fn call_chain(&self, services: &[String]) -> Expr {
        let config = self.session.config();
        let root = Expr::static_call(
            format!("{}.{SERVICE_PACKAGE}.{}", self.base_package, config.api_map_class),
            config.api_map_accessor.clone(),
            Vec::new(),
        );

        services.iter().fold(root, |chain, service| {
            let method = decapitalize(&sanitize_type_name(service));
            let args = self.segment_argument(service).into_iter().collect();
            chain.call(method, args)
        })
    }

    /// Argument of one service call; `None` when the segment takes no argument.
    pub fn segment_argument(&self, segment: &str) -> Option<Expr> {
        if !has_placeholder(segment) {
            return None;
        }

        let type_name = sanitize_type_name(segment);
        let argument = match longest_suffix_field(self.class.fields(), &type_name) {
            Some(field) => Expr::field(field.name.clone()).call("toString", Vec::new()),
            None => Expr::Null,
        };
        Some(argument)
    }

    /// Parameter declaration of the explicit overload.
    fn parameters_argument(&self, last: &str) -> FieldMeta {
        let service_type = sanitize_type_name(last);
        FieldMeta::new(
            decapitalize(&service_type),
            format!(
                "{}.{PARAMETERS_PACKAGE}.{service_type}Parameters",
                self.base_package
            ),
        )
    }
}

/// Longest-named field whose capitalized name ends `type_name`.
///
/// Ties go to the field declared first.
pub fn longest_suffix_field<'f>(
    fields: impl IntoIterator<Item = &'f FieldMeta>,
    type_name: &str,
) -> Option<&'f FieldMeta> {
    fields
        .into_iter()
        .filter(|field| type_name.ends_with(&capitalize(&field.name)))
        .fold(None::<&'f FieldMeta>, |best, field| match best {
            Some(current) if current.name.len() >= field.name.len() => Some(current),
            _ => Some(field),
        })
}
