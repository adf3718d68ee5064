//! Parameters class builder.
//!
//! Turns the query parameters of a service's GET action into
//! `<package>.parameters.<ServiceType>Parameters`: one private field per
//! parameter with a getter and a fluent builder method. There are no setters;
//! a parameters object is assembled once through its fluent methods.

use super::{ClassBuilder, fluent_method, getter_method};
use crate::naming::sanitize_type_name;
use crate::{
    ClassMeta, GenError, GenResult, GenerationSession, HttpMethod, PARAMETERS_PACKAGE,
    ServiceMeta, Visibility,
};

/// Builds parameter holder classes from GET actions.
#[derive(Debug)]
pub struct ParametersBuilder {
    class: ClassMeta,
}

impl ClassBuilder for ParametersBuilder {
    type Resource = ServiceMeta;

    /// The class name comes from the service URI; `entity` is only used for logging.
    fn parse(
        session: &mut GenerationSession<'_>,
        package: &str,
        entity: &str,
        service: &ServiceMeta,
    ) -> GenResult<Self> {
        let mut class = ClassMeta::new(
            format!("{package}.{PARAMETERS_PACKAGE}"),
            format!("{}Parameters", sanitize_type_name(&service.uri)),
        )
        .with_documentation(session.config().doc_header.clone());
        for interface in &session.config().parameters_interfaces {
            class.add_interface(interface.clone());
        }

        let canonical = class.canonical_class_name();
        session.ensure_not_generated(&canonical)?;

        let action = service
            .action(HttpMethod::Get)
            .ok_or_else(|| GenError::MissingGetAction {
                class: canonical.clone(),
                service: service.uri.clone(),
            })?;
        if action.parameters.is_empty() {
            return Err(GenError::EmptyParameters {
                class: canonical,
                service: service.uri.clone(),
            });
        }

        for parameter in &action.parameters {
            let field = parameter.clone().with_visibility(Visibility::Private);
            if !class.add_field(field) {
                tracing::warn!(
                    "Duplicate parameter '{}' on GET {}; keeping the first",
                    parameter.name,
                    service.uri
                );
            }
        }

        let accessors: Vec<_> = class
            .fields()
            .iter()
            .flat_map(|field| [getter_method(field), fluent_method(class.class_name(), field)])
            .collect();
        for method in accessors {
            class.add_method(method);
        }

        session.registry_mut().register(canonical.clone())?;
        tracing::info!(
            "Parsed parameters class {} for {} ({} parameters)",
            canonical,
            entity,
            class.fields().len()
        );

        Ok(Self { class })
    }

    fn class_meta(&self) -> &ClassMeta {
        &self.class
    }

    fn into_class_meta(self) -> ClassMeta {
        self.class
    }
}
