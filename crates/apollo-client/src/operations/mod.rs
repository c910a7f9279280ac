/// standard introspection of a running server
pub mod introspect;

/// published schemas from the engine registry
pub mod fetch_schema;

/// operation compatibility checks against a published schema
pub mod check_operations;
