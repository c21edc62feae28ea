//! JSON schema generation for tool parameters.

use rmcp::model::JsonObject;
use rmcp::schemars::{self, JsonSchema, generate::SchemaSettings};
use std::sync::Arc;

/// Generate an inline JSON schema for an MCP tool's parameters.
///
/// Sets `inline_subschemas` so enums such as the detail level and facet are
/// emitted inline rather than as `$ref`s, which MCP clients render as
/// dropdowns.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let schema = settings.into_generator().into_root_schema_for::<T>();
    let object = serde_json::to_value(schema).expect("failed to serialize schema");

    match object {
        serde_json::Value::Object(object) => Arc::new(object),
        _ => panic!("Schema serialization produced non-object value"),
    }
}
