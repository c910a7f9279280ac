mod client_schema;
mod encode;
mod fetcher;
mod introspection;

pub use client_schema::ClientSchema;
pub use fetcher::SchemaFetcher;
pub use introspection::{
    DirectiveType, EnumValue, Field, FullType, InputValue, IntrospectionResult,
    IntrospectionSchema, NamedType, TypeKind, TypeRef,
};
