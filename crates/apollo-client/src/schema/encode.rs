//! Encodes an introspection result as SDL.

use apollo_encoder::{
    Argument, Directive, DirectiveDefinition, Document as SDL, EnumDefinition, EnumValue as SdlEnumValue,
    FieldDefinition, InputField, InputObjectDefinition, InputValueDefinition, InterfaceDefinition,
    ObjectDefinition, ScalarDefinition, SchemaDefinition, Type_, UnionDefinition, Value,
};

use super::introspection::{DirectiveType, Field, FullType, InputValue, IntrospectionSchema, TypeKind, TypeRef};
use crate::ApolloClientError;

// Types every GraphQL schema has implicitly.
const BUILT_IN_TYPES: [&str; 13] = [
    "__Schema",
    "__Type",
    "__TypeKind",
    "__Field",
    "__InputValue",
    "__EnumValue",
    "__DirectiveLocation",
    "__Directive",
    "Boolean",
    "Float",
    "String",
    "Int",
    "ID",
];

// Directives every GraphQL schema has implicitly.
const SPECIFIED_DIRECTIVES: [&str; 4] = ["skip", "include", "deprecated", "specifiedBy"];

impl IntrospectionSchema {
    /// Encode the schema into SDL.
    pub fn encode(self) -> Result<String, ApolloClientError> {
        let mut sdl = SDL::new();

        let query_name = self.query_type.map(|t| t.name);
        let needs_schema_definition = self.mutation_type.is_some()
            || self.subscription_type.is_some()
            || query_name.as_deref().is_some_and(|name| name != "Query");
        if needs_schema_definition {
            let mut schema_def = SchemaDefinition::new();
            if let Some(name) = query_name {
                schema_def.query(name);
            }
            if let Some(mutation_type) = self.mutation_type {
                schema_def.mutation(mutation_type.name);
            }
            if let Some(subscription_type) = self.subscription_type {
                schema_def.subscription(subscription_type.name);
            }
            sdl.schema(schema_def);
        }

        for directive in self.directives {
            if !SPECIFIED_DIRECTIVES.contains(&directive.name.as_str()) {
                sdl.directive(encode_directive(directive)?);
            }
        }

        for type_ in self.types {
            match type_.name.as_deref() {
                Some(name) if !BUILT_IN_TYPES.contains(&name) => encode_full_type(type_, &mut sdl)?,
                _ => {}
            }
        }

        Ok(sdl.to_string())
    }
}

fn encode_directive(directive: DirectiveType) -> Result<DirectiveDefinition, ApolloClientError> {
    let mut directive_ = DirectiveDefinition::new(directive.name);
    if let Some(desc) = directive.description {
        directive_.description(desc);
    }
    for arg in directive.args {
        directive_.arg(encode_arg(arg)?);
    }
    if directive.is_repeatable {
        directive_.repeatable();
    }
    for location in directive.locations {
        directive_.location(location);
    }
    Ok(directive_)
}

fn encode_full_type(type_: FullType, sdl: &mut SDL) -> Result<(), ApolloClientError> {
    let name = type_.name.unwrap_or_default();
    match type_.kind {
        TypeKind::Object => {
            let mut object_def = ObjectDefinition::new(name);
            if let Some(desc) = type_.description {
                object_def.description(desc);
            }
            for interface in type_.interfaces.unwrap_or_default() {
                object_def.interface(interface.name.unwrap_or_default());
            }
            for field in type_.fields.unwrap_or_default() {
                object_def.field(encode_field(field)?);
            }
            sdl.object(object_def);
        }
        TypeKind::InputObject => {
            let mut input_def = InputObjectDefinition::new(name);
            if let Some(desc) = type_.description {
                input_def.description(desc);
            }
            for field in type_.input_fields.unwrap_or_default() {
                input_def.field(encode_input_field(field)?);
            }
            sdl.input_object(input_def);
        }
        TypeKind::Interface => {
            let mut interface_def = InterfaceDefinition::new(name);
            if let Some(desc) = type_.description {
                interface_def.description(desc);
            }
            for interface in type_.interfaces.unwrap_or_default() {
                interface_def.interface(interface.name.unwrap_or_default());
            }
            for field in type_.fields.unwrap_or_default() {
                interface_def.field(encode_field(field)?);
            }
            sdl.interface(interface_def);
        }
        TypeKind::Scalar => {
            let mut scalar_def = ScalarDefinition::new(name);
            if let Some(desc) = type_.description {
                scalar_def.description(desc);
            }
            sdl.scalar(scalar_def);
        }
        TypeKind::Union => {
            let mut union_def = UnionDefinition::new(name);
            if let Some(desc) = type_.description {
                union_def.description(desc);
            }
            for possible_type in type_.possible_types.unwrap_or_default() {
                union_def.member(possible_type.name.unwrap_or_default());
            }
            sdl.union(union_def);
        }
        TypeKind::Enum => {
            let mut enum_def = EnumDefinition::new(name);
            if let Some(desc) = type_.description {
                enum_def.description(desc);
            }
            for value in type_.enum_values.unwrap_or_default() {
                let mut enum_value = SdlEnumValue::new(value.name);
                if let Some(desc) = value.description {
                    enum_value.description(desc);
                }
                if value.is_deprecated {
                    enum_value.directive(deprecated_directive(value.deprecation_reason));
                }
                enum_def.value(enum_value);
            }
            sdl.enum_(enum_def);
        }
        TypeKind::List | TypeKind::NonNull => {
            return Err(ApolloClientError::InvalidIntrospection {
                msg: format!("'{name}' is declared as a wrapping type"),
            });
        }
    }
    Ok(())
}

fn encode_field(field: Field) -> Result<FieldDefinition, ApolloClientError> {
    let mut field_def = FieldDefinition::new(field.name, encode_type(field.type_)?);
    for arg in field.args {
        field_def.arg(encode_arg(arg)?);
    }
    if field.is_deprecated {
        field_def.directive(deprecated_directive(field.deprecation_reason));
    }
    if let Some(desc) = field.description {
        field_def.description(desc);
    }
    Ok(field_def)
}

fn encode_input_field(field: InputValue) -> Result<InputField, ApolloClientError> {
    let mut field_def = InputField::new(field.name, encode_type(field.type_)?);
    if let Some(default_value) = field.default_value {
        field_def.default_value(default_value);
    }
    if let Some(desc) = field.description {
        field_def.description(desc);
    }
    if field.is_deprecated {
        field_def.directive(deprecated_directive(field.deprecation_reason));
    }
    Ok(field_def)
}

fn encode_arg(value: InputValue) -> Result<InputValueDefinition, ApolloClientError> {
    let mut value_def = InputValueDefinition::new(value.name, encode_type(value.type_)?);
    if let Some(default_value) = value.default_value {
        value_def.default_value(default_value);
    }
    if let Some(desc) = value.description {
        value_def.description(desc);
    }
    if value.is_deprecated {
        value_def.directive(deprecated_directive(value.deprecation_reason));
    }
    Ok(value_def)
}

fn encode_type(ty: TypeRef) -> Result<Type_, ApolloClientError> {
    match ty.kind {
        TypeKind::NonNull | TypeKind::List => {
            let inner = ty.of_type.ok_or_else(|| ApolloClientError::InvalidIntrospection {
                msg: "a wrapping type reference is missing `ofType`".to_string(),
            })?;
            let inner = Box::new(encode_type(*inner)?);
            Ok(if ty.kind == TypeKind::NonNull {
                Type_::NonNull { ty: inner }
            } else {
                Type_::List { ty: inner }
            })
        }
        _ => ty
            .name
            .map(|name| Type_::NamedType { name })
            .ok_or_else(|| ApolloClientError::InvalidIntrospection {
                msg: "a named type reference is missing its name".to_string(),
            }),
    }
}

fn deprecated_directive(reason: Option<String>) -> Directive {
    let mut directive = Directive::new(String::from("deprecated"));
    if let Some(reason) = reason {
        directive.arg(Argument::new(String::from("reason"), Value::String(reason)));
    }
    directive
}
